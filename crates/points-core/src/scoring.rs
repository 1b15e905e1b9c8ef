//! # Scoring Module
//!
//! Turns a receipt into reward points.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Points Rules                                    │
//! │                                                                         │
//! │  R1  retailer name     1 per ASCII letter or digit                      │
//! │  R2  round dollar      +50 if total has no cents                        │
//! │  R3  quarter total     +25 if total is a multiple of 0.25               │
//! │  R4  item pairs        +5 per two items                                 │
//! │  R5  odd day           +6 if day of month is odd                        │
//! │  R6  afternoon         +10 if 14:00 < time < 16:00                      │
//! │  R7  descriptions      per item: trimmed length % 3 == 0                │
//! │                          → ceil(price * 0.2)                            │
//! │                                                                         │
//! │  Points = R1 + R2 + R3 + R4 + R5 + R6 + R7   (never negative)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule is a pure function of the receipt. There is no clock, no
//! randomness and no shared state, so the same receipt always scores the
//! same.
//!
//! ## Open Questions Kept As-Is
//! - R7 counts a description that trims to nothing as length 0, which is a
//!   multiple of 3, so an all-whitespace description earns the bonus.
//! - R5 reads the day as a number. Checking only the last character of the
//!   date would give the same answer for `DD` days, but only by coincidence.


use crate::error::ComputationError;
use crate::money::Money;
use crate::types::{Item, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

/// R2: total has zero cents.
pub const ROUND_DOLLAR_BONUS: u64 = 50;

/// R3: total is a multiple of [`QUARTER`].
pub const QUARTER_BONUS: u64 = 25;

/// R4: awarded once per full pair of items.
pub const ITEM_PAIR_BONUS: u64 = 5;

/// R5: day of month is odd.
pub const ODD_DAY_BONUS: u64 = 6;

/// R6: purchase falls strictly inside the afternoon window.
pub const AFTERNOON_BONUS: u64 = 10;

/// R7: share of an eligible item's price awarded as points, rounded up.
pub const DESCRIPTION_PRICE_PERCENT: u32 = 20;

/// R3 step.
pub const QUARTER: Money = Money::from_cents(25);

/// R6 window, in minutes after midnight, exclusive at both ends.
const AFTERNOON_START_MINUTES: u32 = 14 * 60;
const AFTERNOON_END_MINUTES: u32 = 16 * 60;

// =============================================================================
// Points Breakdown
// =============================================================================

/// Points earned by each rule for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_total: u64,
    pub item_pairs: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
    pub item_descriptions: u64,
}

impl PointsBreakdown {
    /// Sum of all rules.
    ///
    /// Fails with [`ComputationError::Overflow`] instead of wrapping.
    pub fn total(&self) -> Result<u64, ComputationError> {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_total,
            self.item_pairs,
            self.odd_purchase_day,
            self.afternoon_purchase,
            self.item_descriptions,
        ]
        .into_iter()
        .try_fold(0u64, u64::checked_add)
        .ok_or(ComputationError::Overflow)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Computes the points for a receipt.
///
/// ## Example
/// ```rust
/// use points_core::{scoring, Item, Receipt};
///
/// let receipt = Receipt {
///     retailer: "Walgreens".to_string(),
///     purchase_date: "2022-01-02".to_string(),
///     purchase_time: "08:13".to_string(),
///     items: vec![
///         Item { short_description: "Pepsi 12-PK".to_string(), price: "1.25".to_string() },
///         Item { short_description: "Dasani".to_string(), price: "1.40".to_string() },
///     ],
///     total: "2.65".to_string(),
/// };
///
/// // 9 (retailer) + 5 (one pair) + 1 ("Dasani": ceil(0.28))
/// assert_eq!(scoring::score(&receipt).unwrap(), 15);
/// ```
///
/// ## Errors
/// [`ComputationError`] if an amount, the date or the time cannot be read.
/// For receipts that went through the validator this indicates the two
/// layers disagree; it is never papered over with zero points.
pub fn score(receipt: &Receipt) -> Result<u64, ComputationError> {
    score_breakdown(receipt)?.total()
}

/// Computes each rule's contribution separately.
pub fn score_breakdown(receipt: &Receipt) -> Result<PointsBreakdown, ComputationError> {
    let total = parse_amount("total", &receipt.total)?;

    Ok(PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar_total: round_dollar_points(total),
        quarter_total: quarter_points(total),
        item_pairs: item_pair_points(receipt.items.len()),
        odd_purchase_day: odd_day_points(&receipt.purchase_date)?,
        afternoon_purchase: afternoon_points(&receipt.purchase_time)?,
        item_descriptions: item_description_points(&receipt.items)?,
    })
}

// =============================================================================
// Rules
// =============================================================================

/// R1: one point per ASCII letter or digit.
///
/// Punctuation and whitespace are filtered out, not rejected.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// R2
pub fn round_dollar_points(total: Money) -> u64 {
    if total.is_round_dollar() {
        ROUND_DOLLAR_BONUS
    } else {
        0
    }
}

/// R3
pub fn quarter_points(total: Money) -> u64 {
    if total.is_multiple_of(QUARTER) {
        QUARTER_BONUS
    } else {
        0
    }
}

/// R4: `floor(count / 2) * 5`.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_BONUS
}

/// R5: bonus when the numeric day of month is odd.
pub fn odd_day_points(purchase_date: &str) -> Result<u64, ComputationError> {
    let day = purchase_day(purchase_date)?;
    Ok(if day % 2 == 1 { ODD_DAY_BONUS } else { 0 })
}

/// R6: bonus when the time is strictly between 14:00 and 16:00.
///
/// ```text
/// 13:59  14:00 │ 14:01 ... 15:59 │ 16:00  16:01
///   0      0   │  10        10   │   0      0
/// ```
pub fn afternoon_points(purchase_time: &str) -> Result<u64, ComputationError> {
    let minutes = minutes_after_midnight(purchase_time)?;
    let in_window = minutes > AFTERNOON_START_MINUTES && minutes < AFTERNOON_END_MINUTES;
    Ok(if in_window { AFTERNOON_BONUS } else { 0 })
}

/// R7, summed over all items.
///
/// Every price is parsed, even for items whose description length does not
/// qualify, so an unreadable price is always reported.
pub fn item_description_points(items: &[Item]) -> Result<u64, ComputationError> {
    items
        .iter()
        .enumerate()
        .try_fold(0u64, |points, (index, item)| -> Result<u64, ComputationError> {
            let price = parse_amount(&format!("items[{index}].price"), &item.price)?;
            let trimmed_len = item.short_description.trim().chars().count();

            if trimmed_len % 3 != 0 {
                return Ok(points);
            }

            points
                .checked_add(price.percent_ceil(DESCRIPTION_PRICE_PERCENT))
                .ok_or(ComputationError::Overflow)
        })
}

// =============================================================================
// Field Interpretation
// =============================================================================

fn parse_amount(field: &str, value: &str) -> Result<Money, ComputationError> {
    value
        .parse::<Money>()
        .map_err(|_| ComputationError::InvalidAmount {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Day of month from `YYYY-MM-DD`.
fn purchase_day(purchase_date: &str) -> Result<u32, ComputationError> {
    purchase_date
        .splitn(3, '-')
        .nth(2)
        .filter(|day| !day.is_empty() && day.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|day| day.parse::<u32>().ok())
        .ok_or_else(|| ComputationError::InvalidDate(purchase_date.to_string()))
}

/// Minutes after midnight from `HH:MM`.
fn minutes_after_midnight(purchase_time: &str) -> Result<u32, ComputationError> {
    let invalid = || ComputationError::InvalidTime(purchase_time.to_string());

    let (hour, minute) = purchase_time.split_once(':').ok_or_else(invalid)?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hour) || !all_digits(minute) {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok(hour * 60 + minute)
}

// =============================================================================
// Unit Tests
// =============================================================================
