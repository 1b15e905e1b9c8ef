//! # Identifier Generation
//!
//! The store never invents ids itself; it asks an injected [`IdGenerator`].
//! Production uses random UUID v4 strings. Tests plug in deterministic
//! generators.

use points_core::ReceiptId;
use uuid::Uuid;

/// Source of fresh receipt identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns an identifier that has not been handed out before.
    fn new_id(&self) -> ReceiptId;
}

/// UUID v4 generator. Ids are opaque to clients and carry no ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> ReceiptId {
        ReceiptId::new(Uuid::new_v4().to_string())
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> ReceiptId + Send + Sync,
{
    fn new_id(&self) -> ReceiptId {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn test_uuid_generator_produces_parseable_unique_ids() {
        let generator = UuidGenerator;
        let ids: HashSet<ReceiptId> = (0..100).map(|_| generator.new_id()).collect();

        assert_eq!(ids.len(), 100);
        for id in &ids {
            assert!(Uuid::parse_str(id.as_str()).is_ok());
        }
    }

    #[test]
    fn test_closure_generator() {
        let counter = AtomicU64::new(0);
        let generator = move || {
            ReceiptId::new(format!("receipt-{}", counter.fetch_add(1, Ordering::SeqCst)))
        };

        assert_eq!(generator.new_id().as_str(), "receipt-0");
        assert_eq!(generator.new_id().as_str(), "receipt-1");
    }
}
