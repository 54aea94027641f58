//! Domain error model.

use thiserror::Error;

/// Result type used across the admin layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Model factories only ever raise [`DomainError::MissingArgument`]; the other
/// variants cover input parsing and lookups at the HTTP boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required argument was not supplied.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn missing(argument: &'static str) -> Self {
        Self::MissingArgument(argument)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

/// Unwrap a required argument or fail with [`DomainError::MissingArgument`].
pub fn require<T>(value: Option<T>, argument: &'static str) -> DomainResult<T> {
    value.ok_or(DomainError::MissingArgument(argument))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_passes_present_values_through() {
        assert_eq!(require(Some(3), "model"), Ok(3));
    }

    #[test]
    fn require_names_the_missing_argument() {
        let err = require::<u8>(None, "searchModel").unwrap_err();
        assert_eq!(err, DomainError::MissingArgument("searchModel"));
        assert_eq!(err.to_string(), "missing required argument: searchModel");
    }
}
