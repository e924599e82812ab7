use crate::api::Api;
use crate::variables;

const MUTATION: &str = r#"
    mutation UpdateItemField($projectId: ID!, $itemId: ID!, $fieldId: ID!, $value: String!) {
        updateProjectNextItemField(input: {
            projectId: $projectId,
            itemId: $itemId,
            fieldId: $fieldId,
            value: $value
        }) {
            projectNextItem {
                id
            }
        }
    }
"#;

/// Set a field on a project item to the given value (for single-select
/// fields like Status, the value is the option's ID). Returns the updated
/// item's node ID.
pub async fn run(api: &Api, project_id: &str, item_id: &str, field_id: &str, value: &str) -> Result<String, anyhow::Error> {
    #[derive(serde::Deserialize)]
    struct QueryResult {
        #[serde(rename = "updateProjectNextItemField")]
        update: Update,
    }

    #[derive(serde::Deserialize)]
    struct Update {
        #[serde(rename = "projectNextItem")]
        project_next_item: Item,
    }

    #[derive(serde::Deserialize)]
    struct Item {
        id: String,
    }

    let res: QueryResult = api.query(MUTATION, variables!{
        "projectId": project_id,
        "itemId": item_id,
        "fieldId": field_id,
        "value": value
    }).await?;

    Ok(res.update.project_next_item.id)
}
