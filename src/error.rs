use thiserror::Error;

/// Failure to turn input text into a [`crate::schema::SchemaDocument`]
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),

    #[error("Entry '{key}' must be an object of columns or null, found {found}")]
    InvalidEntry { key: String, found: &'static str },

    #[error("Column '{column}' in entry '{key}' must be a string spec, found {found}")]
    InvalidColumn {
        key: String,
        column: String,
        found: &'static str,
    },
}
