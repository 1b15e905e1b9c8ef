//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ServiceError (points-api) ← NotFound kept distinct from the rest      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError ← 404 for NotFound, 500 otherwise                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Receipt store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No receipt has this id.
    #[error("Receipt not found: {id}")]
    NotFound { id: String },

    /// The id generator produced an id that is already taken.
    ///
    /// ## When This Occurs
    /// Never with the UUID v4 generator in practice. A custom generator that
    /// repeats itself hits this instead of silently replacing a receipt.
    #[error("Receipt id already assigned: {id}")]
    DuplicateId { id: String },

    /// A thread panicked while holding the store lock.
    #[error("Receipt store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Creates a NotFound error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::not_found("abc").to_string(),
            "Receipt not found: abc"
        );
        assert_eq!(
            StoreError::LockPoisoned.to_string(),
            "Receipt store lock poisoned"
        );
    }
}
