pub mod project_id;
pub mod project_fields;
