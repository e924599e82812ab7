/// Everything that can go wrong while resolving and applying a status
/// update, aside from transport failures (those surface through
/// [`crate::api::ApiError`] unmodified).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("A github token is required")]
    MissingToken,
    #[error("An item ID is required")]
    MissingItemId,
    #[error("A status is required")]
    MissingStatus,
    #[error("Invalid project URL: {0}. Project URL should match the format https://github.com/<orgs-or-users>/<ownerName>/projects/<projectNumber>")]
    InvalidUrl(String),
    #[error("Unsupported owner type: {0}. Must be one of 'orgs' or 'users'")]
    UnsupportedOwnerType(String),
    #[error("Could not find project number {number} belonging to '{owner}'")]
    ProjectNotFound { owner: String, number: usize },
    #[error("Project node '{0}' could not be found")]
    ProjectNodeNotFound(String),
    #[error("No field named 'Status' found on the project board")]
    StatusFieldNotFound,
    #[error("Could not parse the Status field settings as JSON: {0}")]
    SettingsParse(#[source] serde_json::Error),
    #[error("No options found in the Status field settings")]
    NoOptionsFound,
    #[error("Status option '{status}' not found in settings: {settings}")]
    StatusOptionNotFound { status: String, settings: String },
}
