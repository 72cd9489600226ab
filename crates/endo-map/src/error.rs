//! Error types for mapping operations.

use endo_model::FieldName;
use thiserror::Error;

/// Errors from mapping manifest fields to attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A date-bearing field does not match its required format or names a
    /// day that does not exist.
    #[error("malformed date in field {field}: '{value}' does not match {expected}")]
    MalformedDate {
        field: FieldName,
        value: String,
        expected: &'static str,
    },
}

/// Result type alias for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;

impl MappingError {
    pub(crate) fn malformed_date(
        field: FieldName,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::MalformedDate {
            field,
            value: value.into(),
            expected,
        }
    }
}
