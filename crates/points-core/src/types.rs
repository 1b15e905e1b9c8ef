//! # Domain Types
//!
//! Core domain types used throughout Receipt Points.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │      Item       │   │   ReceiptId     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │   │  description    │   │  opaque string  │       │
//! │  │  purchase_date  │──►│  price (text)   │   │  assigned by    │       │
//! │  │  purchase_time  │   └─────────────────┘   │  the store      │       │
//! │  │  items          │                         └─────────────────┘       │
//! │  │  total (text)   │                                                    │
//! │  └────────┬────────┘                                                    │
//! │           │ validate_receipt()                                          │
//! │           ▼                                                             │
//! │  ┌─────────────────┐                                                    │
//! │  │ValidatedReceipt │  Only the validator can build one; the store only  │
//! │  │                 │  accepts this type.                                │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Amounts Stay Text
//! `price` and `total` are kept exactly as submitted. They are checked
//! lexically by [`crate::validation`] and only turned into numbers by
//! [`crate::scoring`].

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

// =============================================================================
// Item
// =============================================================================

/// One line entry on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description: letters, digits, whitespace and hyphens.
    pub short_description: String,

    /// Decimal string with exactly two fractional digits, e.g. `"6.49"`.
    pub price: String,
}

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt as submitted by a client.
///
/// Every field is required on the wire; a payload missing any of them fails
/// to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name, without whitespace.
    pub retailer: String,

    /// `YYYY-MM-DD`.
    pub purchase_date: String,

    /// `HH:MM`, 24-hour clock.
    pub purchase_time: String,

    /// Line items in submission order.
    pub items: Vec<Item>,

    /// Decimal string with exactly two fractional digits.
    pub total: String,
}

// =============================================================================
// Validated Receipt
// =============================================================================

/// A receipt that passed [`crate::validation::validate_receipt`].
///
/// The constructor is crate-private, so holding one is proof that every
/// field met its format contract at ingestion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedReceipt(Receipt);

impl ValidatedReceipt {
    pub(crate) fn new_unchecked(receipt: Receipt) -> Self {
        ValidatedReceipt(receipt)
    }

    /// Returns the underlying receipt.
    pub fn into_inner(self) -> Receipt {
        self.0
    }
}

impl Deref for ValidatedReceipt {
    type Target = Receipt;

    fn deref(&self) -> &Receipt {
        &self.0
    }
}

impl AsRef<Receipt> for ValidatedReceipt {
    fn as_ref(&self) -> &Receipt {
        &self.0
    }
}

// =============================================================================
// Receipt Id
// =============================================================================

/// Opaque identifier handed back at ingestion.
///
/// The core never looks inside it; the store's id generator decides the
/// format (UUID v4 by default).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        ReceiptId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        ReceiptId(id)
    }
}

impl From<&str> for ReceiptId {
    fn from(id: &str) -> Self {
        ReceiptId(id.to_string())
    }
}

impl std::borrow::Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_deserializes_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"}
            ],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_receipt_missing_field_fails() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": []
        }"#;

        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }

    #[test]
    fn test_receipt_numeric_total_fails() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [],
            "total": 6.49
        }"#;

        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }

    #[test]
    fn test_receipt_id_serializes_as_plain_string() {
        let id = ReceiptId::new("7fb1377b-b223-49d9-a31a-5a02701dd310");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"7fb1377b-b223-49d9-a31a-5a02701dd310\""
        );
        assert_eq!(id.to_string(), id.as_str());
    }
}
