use thiserror::Error;

/// Construction-time model failures.
///
/// Every variant is raised synchronously from a builder's `build()` call and
/// identifies the offending element by name. There is no warning-only mode:
/// a failing structural check always fails the whole `build()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Missing required element: '{field}'")]
    MissingRequiredField { field: String },

    #[error("Invalid type: {actual} for choice element: '{field}' must be one of: {allowed:?}")]
    InvalidChoiceType {
        field: String,
        actual: String,
        allowed: Vec<String>,
    },

    #[error("Repeating element: '{field}' has an invalid entry at index {index}: {reason}")]
    InvalidListElement {
        field: String,
        index: usize,
        reason: String,
    },

    #[error("Resource type found in reference value: '{found}' for element: '{field}' must be one of: {allowed:?}")]
    InvalidReferenceTarget {
        field: String,
        found: String,
        allowed: Vec<String>,
    },

    #[error("ele-1: all FHIR elements must have a @value or children: '{type_name}'")]
    EmptyElement { type_name: &'static str },

    #[error("Invalid value for element '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Element: '{field}' is prohibited")]
    ProhibitedField { field: String },
}

impl ModelError {
    pub fn missing_required(field: impl Into<String>) -> Self {
        ModelError::MissingRequiredField {
            field: field.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
