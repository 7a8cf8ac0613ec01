//! Typed error handling for entity construction
//!
//! Every rejection raised by a factory or a builder is a [`ValidationError`]
//! naming the entity, the offending field and the failure kind, so callers
//! can tell a missing value apart from a malformed or out-of-range one.
//!
//! # Error Categories
//!
//! - [`ErrorKind::MissingField`]: a required string is blank or a required
//!   reference is absent
//! - [`ErrorKind::InvalidFormat`]: malformed email, unparsable date
//! - [`ErrorKind::OutOfRange`]: numeric bound violation (postal code, amount)
//! - [`ErrorKind::IdentifierGenerationFailure`]: the id sequence is exhausted
//!
//! # Example
//!
//! ```rust
//! use candle_store::prelude::*;
//!
//! let factory = Factory::default();
//! match factory.create_invoice("not-a-date", 100.0) {
//!     Ok(invoice) => println!("Created: {:?}", invoice),
//!     Err(err) if err.kind() == ErrorKind::InvalidFormat => {
//!         println!("Bad format for {}", err.field());
//!     }
//!     Err(err) => eprintln!("Other error: {}", err),
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result alias used throughout construction
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The failure taxonomy shared by every validation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    MissingField,
    InvalidFormat,
    OutOfRange,
    IdentifierGenerationFailure,
}

impl ErrorKind {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            ErrorKind::MissingField => "MISSING_FIELD",
            ErrorKind::InvalidFormat => "INVALID_FORMAT",
            ErrorKind::OutOfRange => "OUT_OF_RANGE",
            ErrorKind::IdentifierGenerationFailure => "IDENTIFIER_GENERATION_FAILURE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_code())
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A rejected construction attempt
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required string is blank or a required value was never supplied
    #[error("{entity}: required field '{field}' is missing")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A value does not match its expected shape
    #[error("{entity}: field '{field}' has an invalid format: {reason}")]
    InvalidFormat {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },

    /// A numeric value lies outside its permitted bounds
    #[error("{entity}: field '{field}' is out of range: {reason}")]
    OutOfRange {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },

    /// No identifier could be allocated
    #[error("{entity}: could not generate '{field}': {reason}")]
    IdentifierGenerationFailure {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        ValidationError::MissingField { entity, field }
    }

    pub fn invalid_format(
        entity: &'static str,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidFormat {
            entity,
            field,
            reason: reason.into(),
        }
    }

    pub fn out_of_range(
        entity: &'static str,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError::OutOfRange {
            entity,
            field,
            reason: reason.into(),
        }
    }

    pub fn identifier(
        entity: &'static str,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError::IdentifierGenerationFailure {
            entity,
            field,
            reason: reason.into(),
        }
    }

    /// The taxonomy kind of this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingField { .. } => ErrorKind::MissingField,
            ValidationError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            ValidationError::OutOfRange { .. } => ErrorKind::OutOfRange,
            ValidationError::IdentifierGenerationFailure { .. } => {
                ErrorKind::IdentifierGenerationFailure
            }
        }
    }

    /// The entity whose construction was rejected (e.g. "invoice")
    pub fn entity(&self) -> &'static str {
        match self {
            ValidationError::MissingField { entity, .. }
            | ValidationError::InvalidFormat { entity, .. }
            | ValidationError::OutOfRange { entity, .. }
            | ValidationError::IdentifierGenerationFailure { entity, .. } => entity,
        }
    }

    /// The offending field name
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::IdentifierGenerationFailure { field, .. } => field,
        }
    }

    pub fn error_code(&self) -> &'static str {
        self.kind().error_code()
    }

    /// Convert to a response a presentation layer can serialize as-is
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: Some(self.details()),
        }
    }

    fn details(&self) -> serde_json::Value {
        let mut details = serde_json::json!({
            "entity": self.entity(),
            "field": self.field(),
        });

        if let ValidationError::InvalidFormat { reason, .. }
        | ValidationError::OutOfRange { reason, .. }
        | ValidationError::IdentifierGenerationFailure { reason, .. } = self
        {
            details["reason"] = serde_json::Value::String(reason.clone());
        }

        details
    }
}

/// Error response structure for callers that surface failures to users
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            ValidationError::missing("invoice", "invoice_date").kind(),
            ErrorKind::MissingField
        );
        assert_eq!(
            ValidationError::invalid_format("invoice", "invoice_date", "x").kind(),
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            ValidationError::out_of_range("invoice", "total_amount", "x").kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            ValidationError::identifier("delivery", "delivery_number", "x").kind(),
            ErrorKind::IdentifierGenerationFailure
        );
    }

    #[test]
    fn test_display_names_entity_and_field() {
        let err = ValidationError::missing("retail_store", "store_name");
        assert_eq!(
            err.to_string(),
            "retail_store: required field 'store_name' is missing"
        );
    }

    #[test]
    fn test_response_for_missing_field_has_no_reason() {
        let response = ValidationError::missing("manufacture", "inventory_stock").to_response();
        let details = response.details.expect("details are always set");

        assert_eq!(response.code, "MISSING_FIELD");
        assert_eq!(details["field"], "inventory_stock");
        assert!(details.get("reason").is_none());
    }

    #[test]
    fn test_response_carries_reason() {
        let response =
            ValidationError::out_of_range("address", "postal_code", "999 is below 1000")
                .to_response();
        let details = response.details.expect("details are always set");

        assert_eq!(response.code, "OUT_OF_RANGE");
        assert_eq!(details["entity"], "address");
        assert_eq!(details["reason"], "999 is below 1000");
    }

    #[test]
    fn test_kind_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorKind::IdentifierGenerationFailure).unwrap();
        assert_eq!(json, "\"IDENTIFIER_GENERATION_FAILURE\"");
    }
}
