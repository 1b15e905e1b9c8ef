//! # Error Types
//!
//! Domain-specific error types for points-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  points-core errors (this file)                                        │
//! │  ├── ValidationError   - Input rejected at ingestion                   │
//! │  └── ComputationError  - Validated data the scorer cannot interpret    │
//! │                                                                         │
//! │  points-store errors (separate crate)                                  │
//! │  └── StoreError        - Lookup / insert failures                      │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError          - What clients see (serialized)                 │
//! │                                                                         │
//! │  Flow: ValidationError / ComputationError → ServiceError → ApiError    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while a receipt is being ingested. Any one of these rejects the
/// whole receipt; nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field or collection is empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value does not match its lexical format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A numeric component of a field is outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u32, max: u32 },
}

impl ValidationError {
    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

// =============================================================================
// Computation Error
// =============================================================================

/// Scoring-time failures.
///
/// ## When This Occurs
/// Only when a stored receipt holds a value the scorer cannot interpret.
/// Every receipt that passed validation is scorable, so this means the data
/// did not come through the validator or the two disagree about the
/// contract. It is reported as an inconsistency and never as zero points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputationError {
    /// A decimal amount could not be parsed into cents.
    #[error("{field} is not a valid amount: '{value}'")]
    InvalidAmount { field: String, value: String },

    /// The day of month could not be read from the purchase date.
    #[error("purchaseDate has no readable day: '{0}'")]
    InvalidDate(String),

    /// Hours and minutes could not be read from the purchase time.
    #[error("purchaseTime is not a readable time: '{0}'")]
    InvalidTime(String),

    /// The point total does not fit in a u64.
    #[error("Point total overflowed")]
    Overflow,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "items".to_string(),
        };
        assert_eq!(err.to_string(), "items is required");

        let err = ValidationError::OutOfRange {
            field: "purchaseTime".to_string(),
            min: 0,
            max: 23,
        };
        assert_eq!(err.to_string(), "purchaseTime must be between 0 and 23");
    }

    #[test]
    fn test_validation_error_field() {
        let err = ValidationError::invalid_format("items[1].price", "expected digits");
        assert_eq!(err.field(), "items[1].price");
    }

    #[test]
    fn test_computation_error_messages() {
        let err = ComputationError::InvalidAmount {
            field: "total".to_string(),
            value: "1e3".to_string(),
        };
        assert_eq!(err.to_string(), "total is not a valid amount: '1e3'");
    }
}
