use crate::api::Api;
use crate::error::Error;
use crate::variables;

const FIELDS_QUERY: &str = r#"
    query ProjectFieldsQuery($projectId: ID!) {
        node(id: $projectId) {
            ... on ProjectNext {
                fields(first: 20) {
                    nodes {
                        id
                        name
                        settings
                    }
                }
            }
        }
    }
"#;

/// A field definition on a project board. `settings` is a JSON-encoded
/// string (null for fields with nothing to configure); decoding it is the
/// caller's problem.
#[derive(Debug, serde::Deserialize)]
pub struct ProjectField {
    pub id: String,
    pub name: String,
    pub settings: Option<String>,
}

/// Fetch the first 20 field definitions for the given project node ID.
pub async fn run(api: &Api, project_id: &str) -> Result<Vec<ProjectField>, anyhow::Error> {
    #[derive(serde::Deserialize)]
    struct QueryResult {
        node: Option<Node>,
    }

    #[derive(serde::Deserialize)]
    struct Node {
        fields: Fields,
    }

    #[derive(serde::Deserialize)]
    struct Fields {
        nodes: Vec<ProjectField>,
    }

    let res: QueryResult = api.query(FIELDS_QUERY, variables!(
        "projectId": project_id
    )).await?;

    // A null node means the ID didn't point at anything we can see.
    let node = res.node.ok_or_else(|| Error::ProjectNodeNotFound(project_id.to_string()))?;

    Ok(node.fields.nodes)
}
