//! # Validation Module
//!
//! Format contracts for every receipt field.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP (points-api)                                            │
//! │  ├── JSON decoding (serde)                                             │
//! │  └── Missing fields / wrong JSON types → invalid receipt               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (lexical contracts)                              │
//! │  ├── retailer, purchaseDate, purchaseTime                              │
//! │  ├── total and item prices: \d+\.\d{2}                                 │
//! │  └── item descriptions, non-empty item list                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Scoring (numeric interpretation)                             │
//! │  └── Parse failure here is a ComputationError, not bad input           │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All checks are byte-level and ASCII-only. Ranges are lexical: a date of
//! `2022-02-30` is accepted because day `30` is within `01..31`.
//!
//! ## Usage
//! ```rust
//! use points_core::validation::{validate_amount, validate_purchase_time};
//!
//! assert!(validate_amount("total", "18.74").is_ok());
//! assert!(validate_amount("total", "18.7").is_err());
//! assert!(validate_purchase_time("24:00").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Item, Receipt, ValidatedReceipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates every field of a receipt.
///
/// Stops at the first violation; on success the receipt is wrapped in
/// [`ValidatedReceipt`] and is ready for the store.
///
/// ## Check Order
/// ```text
/// retailer → purchaseDate → purchaseTime → items (each) → total
/// ```
pub fn validate_receipt(receipt: Receipt) -> ValidationResult<ValidatedReceipt> {
    validate_retailer(&receipt.retailer)?;
    validate_purchase_date(&receipt.purchase_date)?;
    validate_purchase_time(&receipt.purchase_time)?;
    validate_items(&receipt.items)?;
    validate_amount("total", &receipt.total)?;

    Ok(ValidatedReceipt::new_unchecked(receipt))
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates the retailer name.
///
/// ## Rules
/// - Must not be empty
/// - Must not contain any whitespace
///
/// Punctuation is allowed here; scoring simply ignores it.
///
/// ## Example
/// ```rust
/// use points_core::validation::validate_retailer;
///
/// assert!(validate_retailer("M&M-Corner-Market").is_ok());
/// assert!(validate_retailer("M&M Corner Market").is_err());
/// assert!(validate_retailer("").is_err());
/// ```
pub fn validate_retailer(retailer: &str) -> ValidationResult<()> {
    if retailer.is_empty() {
        return Err(ValidationError::Required {
            field: "retailer".to_string(),
        });
    }

    if retailer.chars().any(char::is_whitespace) {
        return Err(ValidationError::invalid_format(
            "retailer",
            "must not contain whitespace",
        ));
    }

    Ok(())
}

/// Validates an item description.
///
/// ## Rules
/// - Must not be empty
/// - Only ASCII letters, digits, whitespace and hyphens
///
/// A description made only of spaces passes; see the scoring module for how
/// it is counted.
pub fn validate_short_description(field: &str, description: &str) -> ValidationResult<()> {
    if description.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if !description
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b.is_ascii_whitespace() || b == b'-')
    {
        return Err(ValidationError::invalid_format(
            field,
            "must contain only letters, digits, whitespace, and hyphens",
        ));
    }

    Ok(())
}

// =============================================================================
// Date & Time Validators
// =============================================================================

/// Validates a purchase date.
///
/// ## Rules
/// - Shape `YYYY-MM-DD`
/// - Year `2000..=2099`
/// - Month `01..=12`, day `01..=31`
///
/// ## Example
/// ```rust
/// use points_core::validation::validate_purchase_date;
///
/// assert!(validate_purchase_date("2022-01-01").is_ok());
/// assert!(validate_purchase_date("2022-02-30").is_ok()); // lexical only
/// assert!(validate_purchase_date("1999-12-31").is_err());
/// assert!(validate_purchase_date("2022-13-01").is_err());
/// ```
pub fn validate_purchase_date(date: &str) -> ValidationResult<()> {
    const FIELD: &str = "purchaseDate";

    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(ValidationError::invalid_format(FIELD, "expected YYYY-MM-DD"));
    }

    let (Some(century), Some(_), Some(month), Some(day)) = (
        two_digits(&bytes[0..2]),
        two_digits(&bytes[2..4]),
        two_digits(&bytes[5..7]),
        two_digits(&bytes[8..10]),
    ) else {
        return Err(ValidationError::invalid_format(FIELD, "expected YYYY-MM-DD"));
    };

    if century != 20 {
        return Err(ValidationError::OutOfRange {
            field: FIELD.to_string(),
            min: 2000,
            max: 2099,
        });
    }
    check_range(FIELD, month, 1, 12)?;
    check_range(FIELD, day, 1, 31)?;

    Ok(())
}

/// Validates a purchase time.
///
/// ## Rules
/// - Shape `HH:MM`
/// - Hour `00..=23`, minute `00..=59`
///
/// ## Example
/// ```rust
/// use points_core::validation::validate_purchase_time;
///
/// assert!(validate_purchase_time("00:00").is_ok());
/// assert!(validate_purchase_time("23:59").is_ok());
/// assert!(validate_purchase_time("24:00").is_err());
/// assert!(validate_purchase_time("9:30").is_err());
/// ```
pub fn validate_purchase_time(time: &str) -> ValidationResult<()> {
    const FIELD: &str = "purchaseTime";

    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(ValidationError::invalid_format(FIELD, "expected HH:MM"));
    }

    let (Some(hour), Some(minute)) = (two_digits(&bytes[0..2]), two_digits(&bytes[3..5])) else {
        return Err(ValidationError::invalid_format(FIELD, "expected HH:MM"));
    };

    check_range(FIELD, hour, 0, 23)?;
    check_range(FIELD, minute, 0, 59)?;

    Ok(())
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Largest number of digits allowed before the decimal point of an amount.
///
/// 13 digits is just under ten trillion dollars, about 10^15 cents.
pub const MAX_AMOUNT_WHOLE_DIGITS: usize = 13;

/// Validates a decimal amount string.
///
/// ## Rules
/// - One to [`MAX_AMOUNT_WHOLE_DIGITS`] ASCII digits, a dot, exactly two ASCII digits
/// - No sign, no exponent, no surrounding whitespace
///
/// The digit cap keeps every accepted amount, and the points derived from
/// it, within integer range when the receipt is scored.
///
/// ## Example
/// ```rust
/// use points_core::validation::validate_amount;
///
/// assert!(validate_amount("total", "0.00").is_ok());
/// assert!(validate_amount("total", "1234.56").is_ok());
/// assert!(validate_amount("total", "18.7").is_err());
/// assert!(validate_amount("total", "-1.00").is_err());
/// assert!(validate_amount("total", ".50").is_err());
/// assert!(validate_amount("total", "100000000000000000.00").is_err());
/// ```
pub fn validate_amount(field: &str, amount: &str) -> ValidationResult<()> {
    let well_formed = match amount.split_once('.') {
        Some((whole, fraction)) => {
            !whole.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && fraction.len() == 2
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    };

    if !well_formed {
        return Err(ValidationError::invalid_format(
            field,
            "expected digits with exactly two decimal places",
        ));
    }

    let whole_digits = amount.len() - 3;
    if whole_digits > MAX_AMOUNT_WHOLE_DIGITS {
        return Err(ValidationError::invalid_format(
            field,
            format!("at most {MAX_AMOUNT_WHOLE_DIGITS} digits before the decimal point"),
        ));
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the item list.
///
/// ## Rules
/// - At least one item
/// - Every description and price meets its own contract
///
/// Field names in errors carry the item index, e.g. `items[2].price`.
pub fn validate_items(items: &[Item]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    for (index, item) in items.iter().enumerate() {
        validate_short_description(
            &format!("items[{index}].shortDescription"),
            &item.short_description,
        )?;
        validate_amount(&format!("items[{index}].price"), &item.price)?;
    }

    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

/// Reads exactly two ASCII digits.
fn two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}

fn check_range(field: &str, value: u32, min: u32, max: u32) -> ValidationResult<()> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

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
            ],
            total: "18.74".to_string(),
        }
    }

    #[test]
    fn test_validate_receipt_accepts_well_formed() {
        let validated = validate_receipt(target_receipt()).unwrap();
        assert_eq!(validated.retailer, "Target");
        assert_eq!(validated.into_inner(), target_receipt());
    }

    #[test]
    fn test_validate_receipt_rejects_one_decimal_total() {
        let mut receipt = target_receipt();
        receipt.total = "18.7".to_string();

        let err = validate_receipt(receipt).unwrap_err();
        assert_eq!(err.field(), "total");
    }

    #[test]
    fn test_validate_receipt_rejects_empty_items() {
        let mut receipt = target_receipt();
        receipt.items.clear();

        assert_eq!(
            validate_receipt(receipt).unwrap_err(),
            ValidationError::Required {
                field: "items".to_string()
            }
        );
    }

    #[test]
    fn test_validate_receipt_reports_item_index() {
        let mut receipt = target_receipt();
        receipt.items.push(item("Doritos", "3.5"));

        let err = validate_receipt(receipt).unwrap_err();
        assert_eq!(err.field(), "items[2].price");

        let mut receipt = target_receipt();
        receipt.items[1].short_description = "Pizza!".to_string();
        let err = validate_receipt(receipt).unwrap_err();
        assert_eq!(err.field(), "items[1].shortDescription");
    }

    #[test]
    fn test_validate_retailer() {
        assert!(validate_retailer("Target").is_ok());
        assert!(validate_retailer("M&M-Corner-Market").is_ok());

        assert!(validate_retailer("").is_err());
        assert!(validate_retailer("Target Store").is_err());
        assert!(validate_retailer("Target\t").is_err());
        assert!(validate_retailer("Target\u{00A0}").is_err());
    }

    #[test]
    fn test_validate_short_description() {
        assert!(validate_short_description("d", "Mountain Dew 12PK").is_ok());
        assert!(validate_short_description("d", "Klarbrunn 12-PK 12 FL OZ").is_ok());
        assert!(validate_short_description("d", "   ").is_ok());

        assert!(validate_short_description("d", "").is_err());
        assert!(validate_short_description("d", "Pizza!").is_err());
        assert!(validate_short_description("d", "Fromage_Blanc").is_err());
        assert!(validate_short_description("d", "Crème").is_err());
    }

    #[test]
    fn test_validate_purchase_date() {
        assert!(validate_purchase_date("2022-01-01").is_ok());
        assert!(validate_purchase_date("2000-12-31").is_ok());
        assert!(validate_purchase_date("2099-02-30").is_ok());

        assert!(validate_purchase_date("1999-01-01").is_err());
        assert!(validate_purchase_date("2100-01-01").is_err());
        assert!(validate_purchase_date("2022-00-10").is_err());
        assert!(validate_purchase_date("2022-13-01").is_err());
        assert!(validate_purchase_date("2022-01-00").is_err());
        assert!(validate_purchase_date("2022-01-32").is_err());
        assert!(validate_purchase_date("2022-1-01").is_err());
        assert!(validate_purchase_date("2022/01/01").is_err());
        assert!(validate_purchase_date("2022-01-01T").is_err());
    }

    #[test]
    fn test_validate_purchase_date_error_kinds() {
        assert!(matches!(
            validate_purchase_date("2022-13-01"),
            Err(ValidationError::OutOfRange { min: 1, max: 12, .. })
        ));
        assert!(matches!(
            validate_purchase_date("22-01-01"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_purchase_time() {
        assert!(validate_purchase_time("00:00").is_ok());
        assert!(validate_purchase_time("14:00").is_ok());
        assert!(validate_purchase_time("23:59").is_ok());

        assert!(validate_purchase_time("24:00").is_err());
        assert!(validate_purchase_time("12:60").is_err());
        assert!(validate_purchase_time("1:30").is_err());
        assert!(validate_purchase_time("13-01").is_err());
        assert!(validate_purchase_time("13:01:00").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("total", "0.00").is_ok());
        assert!(validate_amount("total", "9.00").is_ok());
        assert!(validate_amount("total", "123456789.99").is_ok());

        assert!(validate_amount("total", "").is_err());
        assert!(validate_amount("total", "18").is_err());
        assert!(validate_amount("total", "18.7").is_err());
        assert!(validate_amount("total", "18.745").is_err());
        assert!(validate_amount("total", ".74").is_err());
        assert!(validate_amount("total", "-1.00").is_err());
        assert!(validate_amount("total", "+1.00").is_err());
        assert!(validate_amount("total", " 1.00").is_err());
        assert!(validate_amount("total", "1.0.0").is_err());
        assert!(validate_amount("total", "１.00").is_err());
    }

    #[test]
    fn test_validate_amount_digit_cap() {
        assert!(validate_amount("total", "9999999999999.99").is_ok());
        assert!(validate_amount("items[0].price", "0000000000001.00").is_ok());

        let err = validate_amount("total", "10000000000000.00").unwrap_err();
        assert_eq!(err.field(), "total");
        assert_eq!(
            err.to_string(),
            "total has invalid format: at most 13 digits before the decimal point"
        );

        // Would overflow i64 cents if it got through.
        assert!(validate_amount("total", "100000000000000000.00").is_err());
    }

    #[test]
    fn test_largest_accepted_amount_is_scorable() {
        let largest = "9999999999999.99";
        assert!(validate_amount("total", largest).is_ok());

        let money: crate::Money = largest.parse().unwrap();
        assert_eq!(money.cents(), 999_999_999_999_999);
    }
}
