use thiserror::Error;

/// Errors that can occur while extracting wiki tables
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No table matched the configured selector
    #[error("No {table} table matched selector `{selector}`")]
    TableNotFound {
        table: &'static str,
        selector: String,
    },

    /// The table does not have the shape the extractor expects
    #[error("Unexpected table structure in {context}: {detail}")]
    StructureMismatch { context: String, detail: String },

    /// An element exists but lacks a required attribute
    #[error("Missing attribute `{attribute}` in {context}")]
    MissingAttribute {
        context: String,
        attribute: &'static str,
    },

    /// A numeric cell could not be read as an integer (strict mode only)
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    /// A configured CSS selector failed to parse
    #[error("Invalid selector `{0}`")]
    InvalidSelector(String),

    /// An image source could not be resolved into a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Failed to serialize extracted records
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to read the input document
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}

impl ExtractError {
    pub(crate) fn structure(context: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::StructureMismatch {
            context: context.into(),
            detail: detail.into(),
        }
    }
}
