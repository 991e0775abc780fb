//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices are parsed from the cashier's text straight into cents.      │
//! │    "3.50" → 350. No float is ever created on the money path.           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let price = Money::parse("3.50").unwrap();
//! assert_eq!(price.cents(), 350);
//!
//! let line_total = price.checked_mul_quantity(2).unwrap();
//! assert_eq!(line_total.to_string(), "7.00");
//! assert_eq!(Money::from_cents(123_456_789).format_grouped(), "1,234,567.89");
//! ```
//!
//! ## Overflow
//! Every operation that can leave the `i64` range is checked and returns
//! `None` instead of wrapping. A price of 100,000,000.00 times a quantity of
//! a billion is valid input, and the cart has to refuse it rather than panic.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::types::Percent;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a discount above 100% can drive the total below zero,
///   and that has to stay representable
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// LineItem.unit_price ──► LineItem.line_total ──► Cart.subtotal
///                                                      │
///                        Cart.discount_amount ◄────────┤
///                        Cart.tax_amount ◄─────────────┤
///                        Cart.total_due ◄──────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount typed by the cashier.
    ///
    /// ## Accepted Forms
    /// `"3"`, `"3.5"`, `"3.50"`, `".5"`, `"-2.25"`, with surrounding whitespace.
    /// Digits past the second decimal place round half-up: `"0.005"` is one
    /// cent.
    ///
    /// ## Rejected Forms
    /// Empty input, `"abc"`, `"1e3"`, `"1,000"`, `"inf"`, `"nan"`.
    ///
    /// Negative amounts parse successfully; whether they are allowed is a
    /// business rule (see [`crate::validation::validate_price`]).
    pub fn parse(input: &str) -> Result<Money, ValidationError> {
        parse_hundredths(input, "amount").map(Money)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts. `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Subtracts `other`. `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies money by a quantity. `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_cents(897)));
    /// assert_eq!(unit_price.checked_mul_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns `rate` percent of this amount, rounded half away from zero to
    /// the nearest cent. `None` if the result does not fit in an `i64`, which
    /// can happen for rates above 100%.
    ///
    /// Used for both the discount (percent of the subtotal) and the tax
    /// (percent of the discounted base).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Money, Percent};
    ///
    /// let base = Money::from_cents(9000); // 90.00
    /// let tax = base.percent_of(Percent::from_bps(500)).unwrap(); // 5%
    /// assert_eq!(tax.cents(), 450);
    ///
    /// // 10.00 × 8.25% = 0.825 → 0.83
    /// let tax = Money::from_cents(1000).percent_of(Percent::from_bps(825)).unwrap();
    /// assert_eq!(tax.cents(), 83);
    /// ```
    pub fn percent_of(&self, rate: Percent) -> Option<Money> {
        // i128: amount × bps always fits, only the narrowing can fail
        let scaled = i128::from(self.0) * i128::from(rate.bps());
        let rounded = if scaled < 0 {
            (scaled - 5000) / 10000
        } else {
            (scaled + 5000) / 10000
        };
        i64::try_from(rounded).ok().map(Money)
    }

    /// Formats with thousands separators and exactly two decimals, e.g.
    /// `"1,234.50"`. Used for on-screen output.
    pub fn format_grouped(&self) -> String {
        let digits = self.dollars().unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, grouped, self.cents_part())
    }
}

// =============================================================================
// Decimal Parsing
// =============================================================================

/// Parses decimal text into an integer count of hundredths.
///
/// Shared by [`Money`] (hundredths of a unit = cents) and [`Percent`]
/// (hundredths of a percent = basis points).
pub(crate) fn parse_hundredths(input: &str, field: &str) -> Result<i64, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let text = input.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("expected a number"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected a number"));
    }

    let too_large = || invalid("number is too large");

    let mut value: i64 = 0;
    for b in whole.bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(b - b'0')))
            .ok_or_else(too_large)?;
    }

    let mut frac_digits = frac.bytes().map(|b| i64::from(b - b'0'));
    let tenths = frac_digits.next().unwrap_or(0);
    let hundredths = frac_digits.next().unwrap_or(0);
    // Half-up: only the first dropped digit decides
    let carry = i64::from(frac_digits.next().is_some_and(|d| d >= 5));

    value = value
        .checked_mul(100)
        .and_then(|v| v.checked_add(tenths * 10 + hundredths + carry))
        .ok_or_else(too_large)?;

    Ok(if negative { -value } else { value })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering without grouping, e.g. `"1234.50"`.
///
/// This is the export format. For the screen use [`Money::format_grouped`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.dollars().unsigned_abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display_is_plain() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_cents(123_456_789).to_string(), "1234567.89");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(Money::from_cents(0).format_grouped(), "0.00");
        assert_eq!(Money::from_cents(99_999).format_grouped(), "999.99");
        assert_eq!(Money::from_cents(100_000).format_grouped(), "1,000.00");
        assert_eq!(Money::from_cents(123_456_789).format_grouped(), "1,234,567.89");
        assert_eq!(Money::from_cents(-123_450).format_grouped(), "-1,234.50");
        assert_eq!(
            Money::from_cents(i64::MIN).format_grouped(),
            "-92,233,720,368,547,758.08"
        );
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(Money::parse("3.50").unwrap().cents(), 350);
        assert_eq!(Money::parse("3.5").unwrap().cents(), 350);
        assert_eq!(Money::parse("  12 ").unwrap().cents(), 1200);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("5.").unwrap().cents(), 500);
        assert_eq!(Money::parse("+1.25").unwrap().cents(), 125);
        assert_eq!(Money::parse("-2.25").unwrap().cents(), -225);
        assert_eq!(Money::parse("0").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rounds_half_up() {
        assert_eq!(Money::parse("0.005").unwrap().cents(), 1);
        assert_eq!(Money::parse("0.0049").unwrap().cents(), 0);
        assert_eq!(Money::parse("1.999").unwrap().cents(), 200);
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "   ", ".", "-", "abc", "1e3", "1,000", "inf", "nan", "1.2.3", "--1"] {
            let err = Money::parse(input).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { .. }),
                "{input:?} should be an invalid format"
            );
        }
    }

    #[test]
    fn test_parse_too_large() {
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_percent_of() {
        let subtotal = Money::from_cents(10_000);
        assert_eq!(subtotal.percent_of(Percent::from_bps(1000)), Some(Money::from_cents(1000)));
        assert_eq!(subtotal.percent_of(Percent::zero()), Some(Money::zero()));
        // 10.00 × 8.25% = 0.825 → 0.83
        assert_eq!(
            Money::from_cents(1000).percent_of(Percent::from_bps(825)),
            Some(Money::from_cents(83))
        );
        // Negative bases round away from zero too
        assert_eq!(
            Money::from_cents(-1000).percent_of(Percent::from_bps(825)),
            Some(Money::from_cents(-83))
        );
    }

    #[test]
    fn test_percent_of_out_of_range() {
        // 200% of a value near the top of the range does not fit
        let huge = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!(huge.percent_of(Percent::from_bps(20_000)), None);
        assert_eq!(
            Money::from_cents(i64::MAX).percent_of(Percent::from_bps(10_000)),
            Some(Money::from_cents(i64::MAX))
        );
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(a.checked_sub(b), Some(Money::from_cents(500)));
        assert_eq!(a.checked_mul_quantity(3), Some(Money::from_cents(3000)));

        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
        // 100,000,000.00 × 1,000,000,000
        let price = Money::parse("100000000").unwrap();
        assert_eq!(price.checked_mul_quantity(1_000_000_000), None);
    }
}
