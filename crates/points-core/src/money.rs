//! # Money Module
//!
//! Provides the `Money` type for reading receipt amounts without floats.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2   = 0.30000000000000004                                    │
//! │    9.10 % 0.25 = 0.09999999999999964  → "is it a quarter?" gets fuzzy   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "12.25" → 1225 cents                                                 │
//! │    1225 % 25 == 0      exact quarter check                              │
//! │    ceil(1225 / 500)    exact "20% rounded up" in whole points           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::money::Money;
//!
//! let total: Money = "18.74".parse().unwrap();
//! assert_eq!(total.cents(), 1874);
//! assert_eq!(total.cents_part(), 74);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative amount in cents.
///
/// Receipt amounts are never negative (the validator only admits digits), so
/// unlike a ledger type this carries no sign handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns true if the amount has no cents.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// assert!(Money::from_cents(900).is_round_dollar());
    /// assert!(!Money::from_cents(910).is_round_dollar());
    /// ```
    #[inline]
    pub const fn is_round_dollar(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Returns true if the amount is an exact multiple of `step`.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(975).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(910).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }

    /// Returns `ceil(amount * percent / 100)` in whole currency units.
    ///
    /// Computed in cents with i128 intermediates so large amounts cannot
    /// overflow and no float rounding is involved.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// // 20% of $12.25 = 2.45 → 3
    /// assert_eq!(Money::from_cents(1225).percent_ceil(20), 3);
    /// // 20% of $5.00 = 1.00 → 1
    /// assert_eq!(Money::from_cents(500).percent_ceil(20), 1);
    /// ```
    pub fn percent_ceil(&self, percent: u32) -> u64 {
        if self.0 <= 0 {
            return 0;
        }
        // cents * percent / (100 cents * 100 percent), rounded up
        let numerator = self.0 as i128 * percent as i128;
        let denominator: i128 = 100 * 100;
        ((numerator + denominator - 1) / denominator) as u64
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Why an amount string could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("amount contains a non-digit character")]
    InvalidDigit,

    #[error("amount has more than two fractional digits")]
    TooPrecise,

    #[error("amount is too large")]
    Overflow,
}

/// Parses `"<digits>[.<up to two digits>]"` into cents.
///
/// Accepts a slightly wider grammar than the ingestion validator (a missing
/// or one-digit fraction is fine here) because this is the numeric
/// interpretation step, not the format contract.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        if whole.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise);
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidDigit);
        }

        let mut cents: i64 = 0;
        for b in whole.bytes() {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(i64::from(b - b'0')))
                .ok_or(MoneyParseError::Overflow)?;
        }
        cents = cents.checked_mul(100).ok_or(MoneyParseError::Overflow)?;

        let mut fraction_cents: i64 = 0;
        for (i, b) in fraction.bytes().enumerate() {
            let scale = if i == 0 { 10 } else { 1 };
            fraction_cents += i64::from(b - b'0') * scale;
        }

        cents
            .checked_add(fraction_cents)
            .map(Money)
            .ok_or(MoneyParseError::Overflow)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
