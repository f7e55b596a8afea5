//! # Amount Normalizer
//!
//! Turns free-form money text into signed minor units.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "($1,234.567)"                                                         │
//! │       │                                                                 │
//! │       ▼  require_text            blank? ──► EmptyInput                  │
//! │       ▼  strip_currency          "(1,234.567)"                          │
//! │       ▼  SeparatorRoles::infer   decimal '.', thousands ','             │
//! │       ▼  split                   "(1,234" | "567)"                      │
//! │       ▼  drop thousands          "(1234"  | "567)"                      │
//! │       ▼  take_sign               negative, "1234" | "567"               │
//! │       ▼  validate                non-digits? ──► InvalidCharacters      │
//! │       ▼  round_fraction          "567" ──► 57                           │
//! │       ▼  assemble                1234 * 100 + 57 = 123457               │
//! │       ▼                                                                 │
//! │  Money(-123457)                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Fractions longer than two digits round half-up on the third digit alone.
//! Digits past the third are ignored, so `"0.0049"` reads as `0.00` and
//! `"0.005"` as `0.01`.

use std::str::FromStr;

use crate::currency::strip_currency;
use crate::error::{NormalizeError, NormalizeResult};
use crate::money::Money;
use crate::separators::SeparatorRoles;
use crate::validation::{ensure_digits, require_text};
use crate::MINOR_UNITS_PER_MAJOR;

/// Characters that mark a negative amount.
const NEGATIVE_MARKERS: [char; 2] = ['-', '('];

/// Characters removed from the integer part once the sign has been read.
const SIGN_MARKERS: [char; 3] = ['-', '(', ')'];

/// Closes accounting notation; the only marker allowed in the fraction.
const CLOSING_PAREN: char = ')';

/// Normalizes a money string to signed minor units.
///
/// ## Example
/// ```rust
/// use mintage_core::normalizer::normalize;
///
/// assert_eq!(normalize("$1,234.56").unwrap().cents(), 123456);
/// assert_eq!(normalize("€1.234,56").unwrap().cents(), 123456);
/// assert_eq!(normalize("USD 1,000.50").unwrap().cents(), 100050);
/// assert_eq!(normalize("($500.25)").unwrap().cents(), -50025);
/// assert!(normalize("   ").is_err());
/// ```
///
/// ## Errors
/// - [`NormalizeError::EmptyInput`] for blank text
/// - [`NormalizeError::InvalidCharacters`] when anything but digits,
///   separators and sign markers survives currency stripping, or a sign
///   marker other than a closing `)` follows the decimal mark
/// - [`NormalizeError::OutOfRange`] when the amount overflows `i64`
pub fn normalize(input: &str) -> NormalizeResult<Money> {
    let text = require_text(input)?;
    let cleaned = strip_currency(text);
    let roles = SeparatorRoles::infer(&cleaned);

    let parts = AmountParts::split(&cleaned, roles);

    ensure_digits(&parts.integer, input)?;
    ensure_digits(parts.decimal.as_deref().unwrap_or_default(), input)?;

    parts.assemble(input)
}

impl FromStr for Money {
    type Err = NormalizeError;

    /// Parses with [`normalize`], so `"€1.234,56".parse::<Money>()` works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

// =============================================================================
// Splitting
// =============================================================================

/// The whole and fractional digit strings of an amount, plus its sign.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AmountParts {
    integer: String,
    /// `None` when no decimal mark was found.
    decimal: Option<String>,
    negative: bool,
}

impl AmountParts {
    fn split(cleaned: &str, roles: SeparatorRoles) -> Self {
        let (integer, decimal) = match roles.decimal.and_then(|mark| {
            cleaned
                .split_once(mark)
                .map(|(left, right)| (left, right.replace(mark, "")))
        }) {
            Some((left, right)) => (left.to_string(), Some(right)),
            None => (cleaned.to_string(), None),
        };

        let integer = match roles.thousands {
            Some(mark) => integer.replace(mark, ""),
            None => integer,
        };

        let integer = remove_whitespace(&integer);
        let decimal = decimal.map(|d| remove_whitespace(&d));

        // The sign is read from the whole part only. "(500.25)" leaves its
        // ')' in the fraction; any other marker there fails validation.
        let negative = integer.contains(NEGATIVE_MARKERS);

        AmountParts {
            integer: integer.replace(SIGN_MARKERS, ""),
            decimal: decimal.map(|d| d.replace(CLOSING_PAREN, "")),
            negative,
        }
    }

    /// Builds the final value. Both parts must already be digits-only.
    fn assemble(&self, input: &str) -> NormalizeResult<Money> {
        let out_of_range = || NormalizeError::OutOfRange {
            input: input.to_string(),
        };

        let whole: i64 = if self.integer.is_empty() {
            0
        } else {
            self.integer.parse().map_err(|_| out_of_range())?
        };

        let fraction = round_fraction(self.decimal.as_deref().unwrap_or_default());

        let magnitude = whole
            .checked_add(i64::from(fraction.carry))
            .and_then(|w| w.checked_mul(MINOR_UNITS_PER_MAJOR))
            .and_then(|m| m.checked_add(fraction.cents))
            .ok_or_else(out_of_range)?;

        let amount = Money::from_cents(magnitude);
        Ok(if self.negative { -amount } else { amount })
    }
}

fn remove_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

// =============================================================================
// Rounding
// =============================================================================

/// A fractional part reduced to two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fraction {
    /// 0-99
    cents: i64,
    /// Rounding reached 100 and spilled into the whole part.
    carry: bool,
}

/// Reduces an ASCII-digit fraction to two digits.
///
/// - `""` → 00
/// - `"5"` → 50
/// - `"567"` → 57, `"561"` → 56
/// - `"995"` → 00 with carry
fn round_fraction(digits: &str) -> Fraction {
    let digit = |i: usize| i64::from(digits.as_bytes()[i] - b'0');

    let (cents, round_up) = match digits.len() {
        0 => (0, false),
        1 => (digit(0) * 10, false),
        2 => (digit(0) * 10 + digit(1), false),
        _ => (digit(0) * 10 + digit(1), digit(2) >= 5),
    };

    let cents = cents + i64::from(round_up);
    if cents == MINOR_UNITS_PER_MAJOR {
        Fraction {
            cents: 0,
            carry: true,
        }
    } else {
        Fraction {
            cents,
            carry: false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(input: &str) -> i64 {
        normalize(input)
            .unwrap_or_else(|e| panic!("{input:?} failed: {e}"))
            .cents()
    }

    #[test]
    fn test_end_to_end_scenarios() {
        assert_eq!(cents("$1,234.56"), 123456);
        assert_eq!(cents("¥1,234"), 123400);
        assert_eq!(cents("₹1,23,456.78"), 12345678);
        assert_eq!(cents("£10,000,000.00"), 1000000000);
        assert_eq!(normalize(""), Err(NormalizeError::EmptyInput));
    }

    #[test]
    fn test_separator_symmetry() {
        assert_eq!(cents("$1,234.56"), 123456);
        assert_eq!(cents("€1.234,56"), 123456);
        assert_eq!(cents("1.234,56 €"), 123456);
        assert_eq!(cents("1 234,56"), 123456);
    }

    #[test]
    fn test_no_decimal_defaults_to_zero_cents() {
        assert_eq!(cents("£1,000"), 100000);
        assert_eq!(cents("1000"), 100000);
        assert_eq!(cents("1.000.000"), 100000000);
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(cents("USD 1,000.50"), 100050);
        assert_eq!(cents("50 EUR"), 5000);
        assert_eq!(cents("chf 12.30"), 1230);
    }

    #[test]
    fn test_exact_for_two_fraction_digits() {
        assert_eq!(cents("0.01"), 1);
        assert_eq!(cents("19.99"), 1999);
        assert_eq!(cents("1,000,000.10"), 100000010);
        assert_eq!(cents(".50"), 50);
        assert_eq!(cents("0"), 0);
    }

    #[test]
    fn test_negative_forms() {
        assert_eq!(cents("($500.25)"), -50025);
        assert_eq!(cents("$-500.25"), -50025);
        assert_eq!(cents("-$500.25"), -50025);
        assert_eq!(cents("(1.234,56 €)"), -123456);
    }

    #[test]
    fn test_sign_prefix_negates() {
        let samples = [
            "$1,234.56",
            "€1.234,56",
            "£1,000",
            "USD 1,000.50",
            "50 EUR",
            "₹1,23,456.78",
            "0.07",
        ];
        for s in samples {
            assert_eq!(cents(&format!("-{s}")), -cents(s), "sample {s:?}");
        }
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(cents("-0.00"), 0);
        assert!(!normalize("(0)").unwrap().is_negative());
    }

    #[test]
    fn test_rounding_uses_third_digit() {
        assert_eq!(cents("1,234.567"), 123457);
        assert_eq!(cents("1,234.561"), 123456);
        assert_eq!(cents("1,234.565"), 123457);
        // Fourth digit is never consulted
        assert_eq!(cents("1,000.0049"), 100000);
    }

    #[test]
    fn test_rounding_carries_into_whole_part() {
        // integer "9", fraction "995" → 10.00
        assert_eq!(cents("0,009.995"), 1000);
        assert_eq!(cents("1,009.995"), 101000);
        assert_eq!(cents("-0,009.999"), -1000);
    }

    #[test]
    fn test_round_fraction() {
        let f = |d: &str| {
            let r = round_fraction(d);
            (r.cents, r.carry)
        };
        assert_eq!(f(""), (0, false));
        assert_eq!(f("5"), (50, false));
        assert_eq!(f("05"), (5, false));
        assert_eq!(f("567"), (57, false));
        assert_eq!(f("561"), (56, false));
        assert_eq!(f("995"), (0, true));
        assert_eq!(f("994999"), (99, false));
    }

    #[test]
    fn test_ambiguous_single_separator() {
        assert_eq!(cents("1,2345"), 1234500);
        assert_eq!(cents("1.5"), 1500);
        assert_eq!(cents("100."), 10000);
    }

    #[test]
    fn test_repeated_decimal_marks_after_split_are_dropped() {
        // ',' decimal (rightmost), '.' thousands; a second ',' is dropped
        // and its digits join the fraction
        let parts = AmountParts::split("1.2,3,4", SeparatorRoles::infer("1.2,3,4"));
        assert_eq!(parts.integer, "12");
        assert_eq!(parts.decimal.as_deref(), Some("34"));
        assert_eq!(cents("1.2,3,4"), 1234);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize("   "), Err(NormalizeError::EmptyInput));
        assert_eq!(normalize("\n\t"), Err(NormalizeError::EmptyInput));
    }

    #[test]
    fn test_invalid_characters() {
        for input in ["hello", "about 100", "#100", "12abc34", "1,234.5x"] {
            assert_eq!(
                normalize(input),
                Err(NormalizeError::InvalidCharacters {
                    input: input.to_string()
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_sign_in_fraction_is_rejected() {
        for input in ["500.25-", "1,234.5(6", "12,50-"] {
            assert_eq!(
                normalize(input),
                Err(NormalizeError::InvalidCharacters {
                    input: input.to_string()
                }),
                "input {input:?}"
            );
        }
        // Accounting notation still closes inside the fraction
        assert_eq!(cents("(12,50)"), -1250);
    }

    #[test]
    fn test_currency_without_digits_is_zero() {
        for input in ["$", "USD", "()", "-", "€ ", "(US$)"] {
            assert_eq!(normalize(input), Ok(Money::from_cents(0)), "input {input:?}");
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(cents("92,233,720,368,547,758.07"), i64::MAX);
        assert_eq!(cents("-92,233,720,368,547,758.07"), -i64::MAX);

        assert!(matches!(
            normalize("92,233,720,368,547,758.08"),
            Err(NormalizeError::OutOfRange { .. })
        ));
        assert!(matches!(
            normalize("123456789012345678901234567890"),
            Err(NormalizeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let amount: Money = "€1.234,56".parse().unwrap();
        assert_eq!(amount.cents(), 123456);
        assert!("nope".parse::<Money>().is_err());
    }
}
