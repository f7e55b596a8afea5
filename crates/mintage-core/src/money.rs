//! # Money Module
//!
//! Provides the `Money` type returned by the normalizer.
//!
//! ## Why Integer Minor Units?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  "1234.56" parsed as f64 and multiplied by 100:                         │
//! │    123455.99999999999  ❌ truncates to 123455                           │
//! │                                                                         │
//! │  OUR SOLUTION: never build a float                                      │
//! │    "1234" * 100 + "56" = 123456 exactly                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mintage_core::money::Money;
//!
//! let amount = Money::from_cents(123456);
//! assert_eq!(amount.major(), 1234);
//! assert_eq!(amount.minor_part(), 56);
//! assert_eq!(amount.to_string(), "1234.56");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use ts_rs::TS;

use crate::MINOR_UNITS_PER_MAJOR;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor units (cents), with no currency attached.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative amounts come from `-` or accounting parentheses
/// - **Single field tuple struct**: zero-cost wrapper over i64
/// - **No currency**: the normalizer strips symbols and codes without
///   remembering them, so `Money` only carries the number
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in minor units.
    ///
    /// ## Example
    /// ```rust
    /// use mintage_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-50025).cents(), -50025);
    /// ```
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use mintage_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).major(), 10);
    /// assert_eq!(Money::from_cents(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_UNITS_PER_MAJOR
    }

    /// Returns the minor portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_UNITS_PER_MAJOR).abs()
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

    /// Returns the absolute value, saturating at `i64::MAX`.
    ///
    /// `Money::from_cents(i64::MIN)` has no positive counterpart; it maps to
    /// `i64::MAX` instead of overflowing.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.saturating_abs())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `sign + major + "." + two-digit minor`, e.g. `-500.25`.
///
/// No currency symbol: the amount is currency-agnostic once parsed.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.major().abs(),
            self.minor_part()
        )
    }
}

impl Neg for Money {
    type Output = Self;

    /// Saturates like [`Money::abs`] for `i64::MIN`.
    #[inline]
    fn neg(self) -> Self {
        Money(self.0.saturating_neg())
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
