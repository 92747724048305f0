//! Error types for named vector configuration.

use thiserror::Error;

/// Errors raised while building, validating or (de)serializing configurations.
#[derive(Debug, Error)]
pub enum NamedVectorError {
    /// A field failed validation: missing when required, empty when it must
    /// hold at least one element, of the wrong type, or otherwise malformed.
    #[error("invalid value for `{field}`: {reason}")]
    Validation {
        /// Name of the offending field.
        field: String,
        /// Description of the violated constraint.
        reason: String,
    },

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NamedVectorError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        NamedVectorError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::validation(field, "field required")
    }

    pub fn empty_list(field: impl Into<String>) -> Self {
        Self::validation(field, "list should have at least 1 item")
    }

    /// The offending field, if this is a validation error.
    pub fn field(&self) -> Option<&str> {
        match self {
            NamedVectorError::Validation { field, .. } => Some(field),
            NamedVectorError::Serialization(_) => None,
        }
    }

    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, NamedVectorError::Validation { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NamedVectorError>;
