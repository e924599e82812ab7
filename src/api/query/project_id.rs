use crate::api::Api;
use crate::error::Error;
use crate::project_url::{OwnerType, ProjectRef};
use crate::variables;

/// Resolve a [`ProjectRef`] into the project's opaque node ID.
///
/// Projects hang off a different root query field depending on who owns
/// them, so the query text is assembled around the ref's owner type rather
/// than being a single const.
pub async fn run(api: &Api, project: &ProjectRef) -> Result<String, anyhow::Error> {
    // Only the ref's owner type picks the root field; everything else is a
    // proper GraphQL variable.
    let root_field = project.owner_type.root_query_field();
    let query = format!(r#"
        query ProjectIdQuery($ownerName: String!, $projectNumber: Int!) {{
            {root_field}(login: $ownerName) {{
                projectNext(number: $projectNumber) {{
                    id
                }}
            }}
        }}
    "#);

    // Both possible root keys; whichever the owner type selected will be
    // populated (or null if the project doesn't exist).
    #[derive(serde::Deserialize)]
    struct QueryResult {
        organization: Option<Owner>,
        user: Option<Owner>,
    }

    #[derive(serde::Deserialize)]
    struct Owner {
        #[serde(rename = "projectNext")]
        project_next: Option<ProjectNext>,
    }

    #[derive(serde::Deserialize)]
    struct ProjectNext {
        id: String,
    }

    let res: QueryResult = api.query(&query, variables!(
        "ownerName": &project.owner_name,
        "projectNumber": project.project_number
    )).await?;

    let owner = match project.owner_type {
        OwnerType::Organization => res.organization,
        OwnerType::User => res.user,
    };

    let id = owner
        .and_then(|o| o.project_next)
        .map(|p| p.id)
        .ok_or_else(|| Error::ProjectNotFound {
            owner: project.owner_name.clone(),
            number: project.project_number,
        })?;

    Ok(id)
}
