//! # points-store: Receipt Store for Receipt Points
//!
//! Process-lifetime, append-only storage for validated receipts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Data Flow                           │
//! │                                                                         │
//! │  ReceiptService::submit / query_points                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   points-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐   ┌───────────┐  │   │
//! │  │   │  IdGenerator  │    │ ReceiptRepository  │   │ StoreError│  │   │
//! │  │   │   (id.rs)     │───►│ InMemoryReceipt-   │   │ (error.rs)│  │   │
//! │  │   │ UuidGenerator │    │ Store (memory.rs)  │   │           │  │   │
//! │  │   └───────────────┘    └────────────────────┘   └───────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RwLock<HashMap<ReceiptId, Arc<StoredReceipt>>>  (gone at exit)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`id`] - Identifier generation
//! - [`repository`] - The store contract and the stored record
//! - [`memory`] - Lock-guarded in-memory implementation
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use points_core::{validation, Item, Receipt};
//! use points_store::{InMemoryReceiptStore, ReceiptRepository};
//!
//! let store = InMemoryReceiptStore::new();
//! let receipt = validation::validate_receipt(Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item {
//!         short_description: "Mountain Dew 12PK".to_string(),
//!         price: "6.49".to_string(),
//!     }],
//!     total: "6.49".to_string(),
//! })
//! .unwrap();
//!
//! let id = store.insert(receipt).unwrap();
//! assert_eq!(store.get(id.as_str()).unwrap().receipt.retailer, "Target");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod memory;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, UuidGenerator};
pub use memory::InMemoryReceiptStore;
pub use repository::{ReceiptRepository, StoredReceipt};
