use crate::api::query::project_fields::ProjectField;
use crate::error::Error;

/// The shape that a single-select field's `settings` string decodes to.
/// It arrives JSON-encoded inside the field query response, so it needs a
/// second parse step of its own.
#[derive(Debug, serde::Deserialize)]
pub struct StatusSettings {
    pub options: Option<Vec<StatusOption>>,
}

#[derive(Debug, serde::Deserialize)]
pub struct StatusOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_html: Option<String>,
}

/// Pick the "Status" field out of a project's field list.
pub fn find_status_field(fields: &[ProjectField]) -> Result<&ProjectField, Error> {
    fields
        .iter()
        .find(|field| field.name == "Status")
        .ok_or(Error::StatusFieldNotFound)
}

/// Decode a Status field's settings and find the option (column) whose name
/// matches `status` exactly. First match wins.
pub fn status_column_id_from_settings(settings: &str, status: &str) -> Result<String, Error> {
    let parsed: StatusSettings = serde_json::from_str(settings).map_err(Error::SettingsParse)?;
    let options = parsed.options.ok_or(Error::NoOptionsFound)?;

    options
        .into_iter()
        .find(|option| option.name == status)
        .map(|option| option.id)
        .ok_or_else(|| Error::StatusOptionNotFound {
            status: status.to_string(),
            settings: settings.to_string(),
        })
}

#[cfg(test)]
mod test {
    use super::*;

    fn field(name: &str) -> ProjectField {
        ProjectField {
            id: format!("FIELD_{name}"),
            name: name.to_string(),
            settings: None,
        }
    }

    #[test]
    fn finds_status_field_regardless_of_position() {
        let fields = vec![field("Title"), field("Assignees"), field("Status"), field("Labels")];
        let status = find_status_field(&fields).unwrap();
        assert_eq!(status.id, "FIELD_Status");
    }

    #[test]
    fn errors_when_no_status_field() {
        let fields = vec![field("Title"), field("Labels")];
        let err = find_status_field(&fields).unwrap_err();
        assert!(matches!(err, Error::StatusFieldNotFound));
    }

    #[test]
    fn status_lookup_is_case_sensitive_exact_match() {
        let settings = r#"{"options":[{"id":"A","name":"Todo","name_html":"Todo"},{"id":"B","name":"Done","name_html":"Done"}]}"#;
        assert_eq!(status_column_id_from_settings(settings, "Done").unwrap(), "B");

        let err = status_column_id_from_settings(settings, "done").unwrap_err();
        assert!(matches!(err, Error::StatusOptionNotFound { .. }));
    }

    #[test]
    fn missing_option_error_includes_raw_settings() {
        let settings = r#"{"options":[{"id":"A","name":"Todo"}]}"#;
        let err = status_column_id_from_settings(settings, "Blocked").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Blocked"));
        assert!(msg.contains(settings));
    }

    #[test]
    fn invalid_json_settings() {
        let err = status_column_id_from_settings("not json at all", "Done").unwrap_err();
        assert!(matches!(err, Error::SettingsParse(_)));
    }

    #[test]
    fn settings_without_options_list() {
        let err = status_column_id_from_settings(r#"{"width":120}"#, "Done").unwrap_err();
        assert!(matches!(err, Error::NoOptionsFound));
    }

    #[test]
    fn first_matching_option_wins() {
        let settings = r#"{"options":[{"id":"X","name":"Done"},{"id":"Y","name":"Done"}]}"#;
        assert_eq!(status_column_id_from_settings(settings, "Done").unwrap(), "X");
    }
}
