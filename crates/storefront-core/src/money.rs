//! # Money Module
//!
//! Provides the `Money` type and price normalization.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Catalog prices arrive as JSON numbers or formatted strings:            │
//! │    2499.9   "1,000"   "12 990.50"                                       │
//! │                                                                         │
//! │  Summing floats drifts:  0.1 + 0.2 = 0.30000000000000004  ❌           │
//! │                                                                         │
//! │  OUR SOLUTION: normalize ONCE at ingestion into integer minor units     │
//! │    "1,000"  → 100000                                                    │
//! │    2499.9   → 249990                                                    │
//! │  and do all cart math on i64.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::parse_price("1,000").unwrap();
//! assert_eq!(price.cents(), 100_000);
//!
//! let line = price * 2;
//! assert_eq!(line.to_string(), "2000.00 ₽");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::error::ValidationError;

/// Minor units per major unit (kopecks per ruble).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Characters stripped from price strings before parsing.
///
/// Comma and the various spaces are used as thousands separators by the
/// catalog backend ("1,000", "12 990").
const THOUSANDS_SEPARATORS: [char; 5] = [',', ' ', '\u{00A0}', '\u{202F}', '\''];

/// Largest major-unit value accepted from a JSON number.
const MAX_MAJOR_FROM_NUMBER: f64 = 90_000_000_000_000.0;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor units (kopecks).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays closed under subtraction
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No float constructor for arithmetic**: floats only enter through
///   [`Money::from_major_f64`] at the ingestion boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Converts a JSON number price (major units) into Money.
    ///
    /// Returns `None` for NaN, infinities, negative values and values too
    /// large to represent. Rounds half away from zero to the nearest kopeck.
    pub fn from_major_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 || value > MAX_MAJOR_FROM_NUMBER {
            return None;
        }
        Some(Money((value * MINOR_PER_MAJOR as f64).round() as i64))
    }

    /// Parses a price string, tolerating thousands separators.
    ///
    /// ## Accepted Forms
    /// ```text
    /// "1000"        → 1000.00
    /// "1,000"       → 1000.00
    /// "12 990.5"    → 12990.50
    /// "0.125"       → 0.13   (half-up on the third fraction digit)
    /// ```
    ///
    /// ## Rejected Forms
    /// Empty strings, negative values, more than one decimal point and any
    /// non-digit character left after separator removal.
    pub fn parse_price(input: &str) -> Result<Self, ValidationError> {
        let cleaned: String = input
            .trim()
            .chars()
            .filter(|c| !THOUSANDS_SEPARATORS.contains(c))
            .collect();

        if cleaned.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        if cleaned.starts_with('-') {
            return Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }

        let (whole, fraction) = match cleaned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (cleaned.as_str(), ""),
        };

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid_price(input));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid_price(input))?
        };

        let digits: Vec<i64> = fraction
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(i64::from)
            .collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|d| *d >= 5);

        whole
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|v| v.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .map(Money)
            .ok_or_else(|| invalid_price(input))
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_cents(897)));
    /// ```
    #[inline]
    pub fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two values, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

fn invalid_price(input: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: format!("'{}' is not a number", input.trim()),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount the way the storefront renders totals: `"1020.00 ₽"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02} ₽", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}
