//! # Receipt Service
//!
//! Ties the receipt store and the scoring rules together.
//!
//! ```text
//! submit(receipt)
//!     ├── validate_receipt      → ServiceError::Validation
//!     └── store.insert          → ReceiptId
//!
//! query_points(id)
//!     ├── store.get             → ServiceError::NotFound
//!     └── score_breakdown       → ServiceError::Computation
//! ```
//!
//! Every call is synchronous and holds no lock while scoring.

use std::sync::Arc;

use points_core::scoring;
use points_core::validation::validate_receipt;
use points_core::{ComputationError, Receipt, ReceiptId, ValidationError};
use points_store::{ReceiptRepository, StoreError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Outcomes of the ingestion and query paths.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Receipt failed a field check; nothing was stored.
    #[error("Invalid receipt: {0}")]
    Validation(#[from] ValidationError),

    /// No receipt is stored under the id.
    #[error("No receipt found for id {id}")]
    NotFound { id: String },

    /// A stored receipt could not be scored.
    #[error("Could not score receipt {id}: {source}")]
    Computation {
        id: String,
        #[source]
        source: ComputationError,
    },

    /// Store failure other than a missing id.
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ServiceError::NotFound { id },
            other => ServiceError::Store(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Receipt ingestion and points lookup over any [`ReceiptRepository`].
///
/// `R` may be unsized, so the service also runs over `dyn ReceiptRepository`.
pub struct ReceiptService<R: ?Sized> {
    store: Arc<R>,
}

impl<R: ?Sized> Clone for ReceiptService<R> {
    fn clone(&self) -> Self {
        ReceiptService {
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: ReceiptRepository + ?Sized> ReceiptService<R> {
    pub fn new(store: Arc<R>) -> Self {
        ReceiptService { store }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Validates a receipt and stores it under a fresh id.
    pub fn submit(&self, receipt: Receipt) -> ServiceResult<ReceiptId> {
        let validated = validate_receipt(receipt).map_err(|e| {
            warn!(field = %e.field(), error = %e, "Receipt rejected");
            e
        })?;

        let item_count = validated.items.len();
        let id = self.store.insert(validated)?;

        info!(id = %id, items = item_count, "Receipt accepted");
        Ok(id)
    }

    /// Scores the receipt stored under `id`.
    pub fn query_points(&self, id: &str) -> ServiceResult<u64> {
        let stored = self.store.get(id)?;

        let computation_error = |source: ComputationError| {
            warn!(id = %id, error = %source, "Stored receipt could not be scored");
            ServiceError::Computation {
                id: id.to_string(),
                source,
            }
        };

        let breakdown = scoring::score_breakdown(&stored.receipt).map_err(computation_error)?;
        let points = breakdown.total().map_err(computation_error)?;

        debug!(
            id = %id,
            points,
            received_at = %stored.received_at,
            breakdown = ?breakdown,
            "Points computed"
        );

        Ok(points)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use points_core::{Item, ValidatedReceipt};
    use points_store::{InMemoryReceiptStore, StoreResult, StoredReceipt};
    use std::thread;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        }
    }

    fn service() -> ReceiptService<InMemoryReceiptStore> {
        ReceiptService::new(Arc::new(InMemoryReceiptStore::new()))
    }

    #[test]
    fn test_submit_then_query() {
        let service = service();
        let id = service.submit(target_receipt()).unwrap();

        assert_eq!(service.query_points(id.as_str()).unwrap(), 28);
        // Repeated queries give the same answer.
        assert_eq!(service.query_points(id.as_str()).unwrap(), 28);
    }

    #[test]
    fn test_invalid_receipt_is_not_stored() {
        let service = service();
        let mut receipt = target_receipt();
        receipt.total = "18.7".to_string();

        let err = service.submit(receipt).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(service.store().is_empty().unwrap());
    }

    #[test]
    fn test_unknown_id() {
        let service = service();
        match service.query_points("does-not-exist").unwrap_err() {
            ServiceError::NotFound { id } => assert_eq!(id, "does-not-exist"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    /// Serves a single receipt that never went through the validator.
    struct UnvalidatedStore(Arc<StoredReceipt>);

    impl UnvalidatedStore {
        fn with_receipt(id: &str, receipt: Receipt) -> Self {
            UnvalidatedStore(Arc::new(StoredReceipt {
                id: ReceiptId::new(id),
                receipt,
                received_at: Utc::now(),
            }))
        }
    }

    impl ReceiptRepository for UnvalidatedStore {
        fn insert(&self, _receipt: ValidatedReceipt) -> StoreResult<ReceiptId> {
            Ok(self.0.id.clone())
        }

        fn get(&self, id: &str) -> StoreResult<Arc<StoredReceipt>> {
            if self.0.id.as_str() == id {
                Ok(Arc::clone(&self.0))
            } else {
                Err(StoreError::not_found(id))
            }
        }

        fn len(&self) -> StoreResult<usize> {
            Ok(1)
        }
    }

    fn soda_receipt(total: &str) -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "10:00".to_string(),
            items: vec![item("Soda", "1.01")],
            total: total.to_string(),
        }
    }

    #[test]
    fn test_largest_accepted_total_scores() {
        let service = service();
        let id = service.submit(soda_receipt("1000000000000.00")).unwrap();

        // 6 retailer + 50 round dollar + 25 quarter
        assert_eq!(service.query_points(id.as_str()).unwrap(), 81);
    }

    #[test]
    fn test_total_beyond_digit_cap_is_rejected() {
        let service = service();

        let err = service.submit(soda_receipt("100000000000000000.00")).unwrap_err();
        match err {
            ServiceError::Validation(e) => assert_eq!(e.field(), "total"),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(service.store().is_empty().unwrap());
    }

    #[test]
    fn test_unscorable_stored_receipt_is_computation_error() {
        let mut receipt = target_receipt();
        receipt.items[0].price = "1,00".to_string();
        let service = ReceiptService::new(Arc::new(UnvalidatedStore::with_receipt("bad", receipt)));

        match service.query_points("bad").unwrap_err() {
            ServiceError::Computation { id, source } => {
                assert_eq!(id, "bad");
                assert_eq!(
                    source,
                    ComputationError::InvalidAmount {
                        field: "items[0].price".to_string(),
                        value: "1,00".to_string(),
                    }
                );
            }
            other => panic!("expected Computation, got {other:?}"),
        }
    }

    #[test]
    fn test_works_over_trait_object() {
        let store: Arc<dyn ReceiptRepository> = Arc::new(InMemoryReceiptStore::new());
        let service = ReceiptService::new(store);

        let id = service.submit(target_receipt()).unwrap();
        assert_eq!(service.query_points(id.as_str()).unwrap(), 28);
    }

    #[test]
    fn test_duplicate_id_maps_to_store_error() {
        let store = InMemoryReceiptStore::with_id_generator(|| ReceiptId::new("same"));
        let service = ReceiptService::new(Arc::new(store));

        service.submit(target_receipt()).unwrap();
        let err = service.submit(target_receipt()).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Store(StoreError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_concurrent_submit_and_query() {
        let service = service();

        thread::scope(|scope| {
            for _ in 0..8 {
                let service = service.clone();
                scope.spawn(move || {
                    for _ in 0..50 {
                        let id = service.submit(target_receipt()).unwrap();
                        assert_eq!(service.query_points(id.as_str()).unwrap(), 28);
                    }
                });
            }
        });

        assert_eq!(service.store().len().unwrap(), 400);
    }
}
