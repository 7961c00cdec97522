//! Core error types for formforge.
//!
//! This module provides the crate-wide error enum [`FormForgeError`] covering
//! identity, lookup, payload, publish-precondition, attribute-validation,
//! serialization, and storage failures, along with the compound
//! [`ValidationError`] used by properties-editor commits.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Represents an attribute-validation error with optional per-attribute errors.
///
/// Validation errors can be either simple (a single message) or compound
/// (containing per-attribute error lists), so a properties-editor commit can
/// report every failing attribute at once.
///
/// # Examples
///
/// ```
/// use formforge_core::error::ValidationError;
///
/// // Simple validation error
/// let err = ValidationError::new("Label must be at least 2 characters.", "min_length");
///
/// // Per-attribute validation errors
/// let mut attr_errors = std::collections::HashMap::new();
/// attr_errors.insert(
///     "label".to_string(),
///     vec![ValidationError::new("Label must be at least 2 characters.", "min_length")],
/// );
/// let err = ValidationError::with_attribute_errors(attr_errors);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The primary error message.
    pub message: String,
    /// A short code identifying the type of failure (e.g. "required", "max_length").
    pub code: String,
    /// Per-attribute validation errors, keyed by attribute name.
    pub attribute_errors: HashMap<String, Vec<Self>>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            attribute_errors: HashMap::new(),
        }
    }

    /// Creates a `ValidationError` containing per-attribute errors.
    pub fn with_attribute_errors(attribute_errors: HashMap<String, Vec<Self>>) -> Self {
        Self {
            message: String::new(),
            code: String::new(),
            attribute_errors,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            write!(f, "{}", self.message)?;
        } else if !self.attribute_errors.is_empty() {
            let mut first = true;
            for (attr, errors) in &self.attribute_errors {
                for error in errors {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{attr}: {error}")?;
                    first = false;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for formforge.
///
/// Each variant maps to an appropriate HTTP status code via
/// [`FormForgeError::status_code`], so a web layer sitting on top of this
/// core can translate failures uniformly.
#[derive(Error, Debug)]
pub enum FormForgeError {
    /// No identity could be resolved for the caller. All owner-scoped
    /// operations fail this way uniformly, so "not logged in" can never be
    /// mistaken for "no data".
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The request payload failed schema-level validation before reaching
    /// the store.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The requested form (or its content) is absent or not owned by the
    /// caller. The two cases are indistinguishable by design.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A form may not be published while its content is empty.
    #[error("Publish precondition failed: {0}")]
    PublishPrecondition(String),

    /// One or more element attributes failed validation.
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// An error occurred during serialization or deserialization of form
    /// content or submissions.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A storage-layer error.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FormForgeError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// - `BadRequest`, `Validation`, `PublishPrecondition` -> 400
    /// - `Unauthorized` -> 401
    /// - `NotFound` -> 404
    /// - `Serialization`, `Storage` -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) | Self::Validation(_) | Self::PublishPrecondition(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            Self::Serialization(_) | Self::Storage(_) => 500,
        }
    }
}

impl From<serde_json::Error> for FormForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// A convenience type alias for `Result<T, FormForgeError>`.
pub type FormForgeResult<T> = Result<T, FormForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_simple() {
        let err = ValidationError::new("Label is required.", "required");
        assert_eq!(err.to_string(), "Label is required.");
    }

    #[test]
    fn test_validation_error_display_attribute_errors() {
        let mut attr_errors = HashMap::new();
        attr_errors.insert(
            "label".to_string(),
            vec![ValidationError::new("Too short.", "min_length")],
        );
        let err = ValidationError::with_attribute_errors(attr_errors);
        assert!(err.to_string().contains("label: Too short."));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(FormForgeError::BadRequest("x".into()).status_code(), 400);
        assert_eq!(FormForgeError::Unauthorized("x".into()).status_code(), 401);
        assert_eq!(FormForgeError::NotFound("x".into()).status_code(), 404);
        assert_eq!(
            FormForgeError::PublishPrecondition("x".into()).status_code(),
            400
        );
        assert_eq!(
            FormForgeError::Validation(ValidationError::new("x", "y")).status_code(),
            400
        );
        assert_eq!(FormForgeError::Serialization("x".into()).status_code(), 500);
        assert_eq!(FormForgeError::Storage("x".into()).status_code(), 500);
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: FormForgeError = json_err.into();
        assert_eq!(err.status_code(), 500);
    }
}
