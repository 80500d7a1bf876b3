use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single schema violation: where it happened, what went wrong, and a
/// stable machine-readable code the caller can branch on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dot-separated path into the document, e.g. `sections[2].order`.
    pub path: String,
    pub message: String,
    /// One of: `required`, `invalid_type`, `invalid_enum`, `duplicate_id`,
    /// `invalid_version`, `deserialize`.
    pub code: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>, code: &str) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            code: code.to_string(),
        }
    }
}

/// Compiler-level error type.
///
/// Validation and migration failures propagate unchanged to the facade's
/// caller; no stage below the facade catches or reinterprets them, and there
/// is no partial AST on error. Unrecognized enum values are NOT errors;
/// they resolve to documented fallbacks inside the resolver/layout/placer.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid DSL document: {} field error(s)", errors.len())]
    InvalidDsl { errors: Vec<FieldError> },

    #[error("No migration path from version {from} to {to}")]
    UnsupportedMigration { from: String, to: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Provider error: {0}")]
    Provider(#[from] anyhow::Error),
}

impl ThemeError {
    /// The structured field errors, when this is a validation failure.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ThemeError::InvalidDsl { errors } => errors,
            _ => &[],
        }
    }
}
