//! # In-Memory Receipt Store
//!
//! ## Thread Safety
//! The map is wrapped in a `RwLock` because:
//! 1. Many requests read receipts concurrently (shared lock)
//! 2. Inserts must never interleave with each other (exclusive lock)
//! 3. The lock is never held across an `.await` or while scoring
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  insert(receipt)                                                       │
//! │     ├── id = generator.new_id()        (outside the lock)              │
//! │     ├── write lock                                                     │
//! │     ├── id taken? → DuplicateId        (nothing overwritten)           │
//! │     └── map.insert(id, Arc<StoredReceipt>)                             │
//! │                                                                         │
//! │  get(id)                                                               │
//! │     ├── read lock                                                      │
//! │     └── clone the Arc, release the lock                                │
//! │                                                                         │
//! │  Capacity is unbounded; there is no eviction.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use points_core::{ReceiptId, ValidatedReceipt};
use tracing::{debug, error};

use crate::error::{StoreError, StoreResult};
use crate::id::{IdGenerator, UuidGenerator};
use crate::repository::{ReceiptRepository, StoredReceipt};

/// Lock-guarded, process-lifetime receipt store.
pub struct InMemoryReceiptStore<G = UuidGenerator> {
    receipts: RwLock<HashMap<ReceiptId, Arc<StoredReceipt>>>,
    id_generator: G,
}

impl InMemoryReceiptStore<UuidGenerator> {
    /// Creates an empty store that hands out UUID v4 ids.
    pub fn new() -> Self {
        InMemoryReceiptStore::with_id_generator(UuidGenerator)
    }
}

impl Default for InMemoryReceiptStore<UuidGenerator> {
    fn default() -> Self {
        InMemoryReceiptStore::new()
    }
}

impl<G: IdGenerator> InMemoryReceiptStore<G> {
    /// Creates an empty store with a custom id generator.
    pub fn with_id_generator(id_generator: G) -> Self {
        InMemoryReceiptStore {
            receipts: RwLock::new(HashMap::new()),
            id_generator,
        }
    }
}

impl<G: IdGenerator> ReceiptRepository for InMemoryReceiptStore<G> {
    fn insert(&self, receipt: ValidatedReceipt) -> StoreResult<ReceiptId> {
        let id = self.id_generator.new_id();
        let stored = Arc::new(StoredReceipt::new(id.clone(), receipt));

        let mut receipts = self.receipts.write().map_err(|_| {
            error!("Receipt store lock poisoned on insert");
            StoreError::LockPoisoned
        })?;

        if receipts.contains_key(&id) {
            error!(id = %id, "Id generator returned an id that is already assigned");
            return Err(StoreError::DuplicateId { id: id.to_string() });
        }

        receipts.insert(id.clone(), stored);
        debug!(id = %id, count = receipts.len(), "Receipt stored");

        Ok(id)
    }

    fn get(&self, id: &str) -> StoreResult<Arc<StoredReceipt>> {
        let receipts = self.receipts.read().map_err(|_| {
            error!("Receipt store lock poisoned on read");
            StoreError::LockPoisoned
        })?;

        receipts
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn len(&self) -> StoreResult<usize> {
        self.receipts
            .read()
            .map(|receipts| receipts.len())
            .map_err(|_| StoreError::LockPoisoned)
    }
}

impl<G> std::fmt::Debug for InMemoryReceiptStore<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.receipts.read().map(|r| r.len()).ok();
        f.debug_struct("InMemoryReceiptStore")
            .field("receipts", &count)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
