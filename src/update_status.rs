use crate::api::{mutation, query, Api};
use crate::error::Error;
use crate::project_url::parse_project_url;
use crate::status_field::{find_status_field, status_column_id_from_settings};
use tracing::debug;

/// Options for `update_item_status`.
pub struct UpdateStatusOpts<'a> {
    /// Github access token.
    pub token: &'a str,
    /// URL of the project board the item lives on.
    pub project_url: &'a str,
    /// Node ID of the project item to update.
    pub item_id: &'a str,
    /// Name of the status to move the item to, eg "In Progress".
    pub status: &'a str,
}

/// Move a project item into the given status. Resolves the project URL to a
/// node ID, finds the board's Status field and the option matching `status`,
/// and applies it to the item. Returns the updated item's node ID.
///
/// Every step depends on the last, so a failure anywhere aborts the lot.
pub async fn update_item_status(opts: UpdateStatusOpts<'_>) -> Result<String, anyhow::Error> {
    let UpdateStatusOpts {
        token,
        project_url,
        item_id,
        status,
    } = opts;

    // Check the inputs before we spend any network calls on them.
    if token.is_empty() {
        return Err(Error::MissingToken.into());
    }
    if item_id.is_empty() {
        return Err(Error::MissingItemId.into());
    }
    if status.is_empty() {
        return Err(Error::MissingStatus.into());
    }

    debug!("Project URL: {project_url}");

    let project = parse_project_url(project_url)?;

    debug!("Owner name: {}", project.owner_name);
    debug!("Project number: {}", project.project_number);
    debug!("Owner type: {}", project.owner_type.root_query_field());
    debug!("Item ID: {item_id}");
    debug!("Status: {status}");

    let api = Api::new(token.to_string());

    let project_id = query::project_id::run(&api, &project).await?;
    debug!("Project ID: {project_id}");

    let fields = query::project_fields::run(&api, &project_id).await?;
    let status_field = find_status_field(&fields)?;
    let settings = status_field.settings.as_deref().ok_or(Error::NoOptionsFound)?;
    let status_column_id = status_column_id_from_settings(settings, status)?;

    debug!("Status field ID: {}", status_field.id);
    debug!("Status column ID: {status_column_id}");

    let updated_item_id = mutation::update_item_field::run(
        &api,
        &project_id,
        item_id,
        &status_field.id,
        &status_column_id,
    ).await?;

    debug!("Updated item ID: {updated_item_id}");

    Ok(updated_item_id)
}
