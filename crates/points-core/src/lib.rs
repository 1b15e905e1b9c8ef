//! # points-core: Pure Business Logic for Receipt Points
//!
//! This crate holds the rules that turn a purchase receipt into reward
//! points, plus the validation contract that guards them. Everything here is
//! a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    points-api (HTTP)                            │   │
//! │  │    POST /receipts/process ──► GET /receipts/{id}/points         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ points-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │  scoring  │  │   │
//! │  │   │  Receipt  │  │   Money   │  │  formats  │  │  R1..R7   │  │   │
//! │  │   │   Item    │  │  parsing  │  │  checks   │  │ breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    points-store (Receipt Store)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, ReceiptId)
//! - [`money`] - Integer-cents amounts parsed from decimal strings
//! - [`error`] - Validation and computation errors
//! - [`validation`] - Field format contracts
//! - [`scoring`] - The points rules
//!
//! ## Two-Phase Numeric Contract
//!
//! Amounts arrive as strings. [`validation`] checks them lexically at
//! ingestion; [`scoring`] parses them into [`Money`] only when points are
//! computed. A parse failure at scoring time is a [`ComputationError`], which
//! signals a mismatch between the two layers rather than bad user input.
//!
//! ## Example Usage
//!
//! ```rust
//! use points_core::{scoring, validation, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item {
//!         short_description: "Mountain Dew 12PK".to_string(),
//!         price: "6.49".to_string(),
//!     }],
//!     total: "6.49".to_string(),
//! };
//!
//! let validated = validation::validate_receipt(receipt).unwrap();
//! // 6 (retailer) + 6 (odd day)
//! assert_eq!(scoring::score(&validated).unwrap(), 12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ComputationError, ValidationError};
pub use money::Money;
pub use scoring::PointsBreakdown;
pub use types::*;
