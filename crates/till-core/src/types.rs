//! # Domain Types
//!
//! Rates applied to a cart. Both the discount and the tax are a [`Percent`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::parse_hundredths;

// =============================================================================
// Percent
// =============================================================================

/// A non-negative percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 825 bps = 8.25%
///
/// Being unsigned, a `Percent` can never be negative. There is no upper
/// bound: a discount above 100% is accepted and yields a negative total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Percent(u32);

impl Percent {
    /// Creates a percent from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percent(bps)
    }

    /// Parses a percentage typed by the cashier, e.g. `"10"` or `"8.25"`.
    ///
    /// Digits past the second decimal place round half-up to the nearest
    /// basis point.
    ///
    /// ## Errors
    /// - `InvalidFormat` if the text is not a decimal number
    /// - `MustBeNonNegative` if the number is below zero
    /// - `OutOfRange` if it does not fit in basis points
    ///
    /// ## Example
    /// ```rust
    /// use till_core::Percent;
    ///
    /// assert_eq!(Percent::parse("8.25").unwrap().bps(), 825);
    /// assert!(Percent::parse("-1").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Percent, ValidationError> {
        let hundredths = parse_hundredths(input, "percent")?;
        if hundredths < 0 {
            return Err(ValidationError::MustBeNonNegative {
                field: "percent".to_string(),
            });
        }

        u32::try_from(hundredths)
            .map(Percent)
            .map_err(|_| ValidationError::OutOfRange {
                field: "percent".to_string(),
                min: 0,
                max: i64::from(u32::MAX) / 100,
            })
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats to one decimal place the way `%.1f` prints the rate as a
    /// float: 825 bps → `"8.2"`, 875 bps → `"8.8"`.
    ///
    /// Exact ties round to even. A rate like 0.15% is stored in binary just
    /// below the tie and rounds down to `"0.1"`.
    pub fn format_one_decimal(&self) -> String {
        format!("{:.1}", f64::from(self.0) / 100.0)
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

/// Full precision rendering, e.g. `"8.25"`.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
