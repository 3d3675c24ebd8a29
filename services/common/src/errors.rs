//! Common error types for dataset generation and aggregation

use thiserror::Error;

/// Dataset error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Input is not the expected container kind, or its elements are not
    /// the expected record shape
    #[error("Invalid type: {0}")]
    InvalidType(String),

    /// Input container has zero elements
    #[error("Empty input: at least one record is required")]
    EmptyInput,

    /// Generator argument outside its accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration failed to load or validate
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used across the library crates
pub type DatasetResult<T> = Result<T, DatasetError>;

impl DatasetError {
    /// Shorthand for an [`DatasetError::InvalidType`] with a formatted reason
    pub fn invalid_type(reason: impl Into<String>) -> Self {
        Self::InvalidType(reason.into())
    }
}

impl From<config::ConfigError> for DatasetError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
