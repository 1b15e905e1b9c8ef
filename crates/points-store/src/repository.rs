//! # Repository Module
//!
//! The contract every receipt store implements.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  ReceiptService                                                        │
//! │       │                                                                 │
//! │       │  store.insert(validated)   store.get("7fb1...")                │
//! │       ▼                                                                 │
//! │  ReceiptRepository (trait)                                             │
//! │  ├── insert(&self, receipt) -> ReceiptId                               │
//! │  ├── get(&self, id)         -> Arc<StoredReceipt>                      │
//! │  └── len(&self)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryReceiptStore                                                  │
//! │                                                                         │
//! │  There is deliberately no update or delete: receipts are append-only.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use points_core::{Receipt, ReceiptId, ValidatedReceipt};

use crate::error::StoreResult;

// =============================================================================
// Stored Receipt
// =============================================================================

/// A receipt as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    /// Assigned once at insert; never changes.
    pub id: ReceiptId,

    /// The receipt exactly as validated.
    pub receipt: Receipt,

    /// When the store accepted the receipt. Not used for scoring.
    pub received_at: DateTime<Utc>,
}

impl StoredReceipt {
    /// Wraps a validated receipt under a freshly assigned id.
    pub fn new(id: ReceiptId, receipt: ValidatedReceipt) -> Self {
        StoredReceipt {
            id,
            receipt: receipt.into_inner(),
            received_at: Utc::now(),
        }
    }
}

// =============================================================================
// Repository Trait
// =============================================================================

/// Append-only receipt storage.
///
/// ## Consistency
/// Implementations must be linearizable: once `insert` returns an id, a
/// `get` for that id from any thread sees the receipt.
pub trait ReceiptRepository: Send + Sync {
    /// Assigns a fresh id, stores the receipt under it and returns the id.
    fn insert(&self, receipt: ValidatedReceipt) -> StoreResult<ReceiptId>;

    /// Looks up a receipt by id.
    ///
    /// Returns [`crate::StoreError::NotFound`] for unknown ids.
    fn get(&self, id: &str) -> StoreResult<Arc<StoredReceipt>>;

    /// Number of stored receipts.
    fn len(&self) -> StoreResult<usize>;

    /// True when nothing has been stored yet.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl<R: ReceiptRepository + ?Sized> ReceiptRepository for Arc<R> {
    fn insert(&self, receipt: ValidatedReceipt) -> StoreResult<ReceiptId> {
        (**self).insert(receipt)
    }

    fn get(&self, id: &str) -> StoreResult<Arc<StoredReceipt>> {
        (**self).get(id)
    }

    fn len(&self) -> StoreResult<usize> {
        (**self).len()
    }
}
