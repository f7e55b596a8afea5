//! # Separator Role Inference
//!
//! Decides which of `.` and `,` is the decimal mark and which groups
//! thousands, without knowing the locale.
//!
//! ## Decision Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Marks present          Trailing digits   Decimal   Thousands           │
//! │  ─────────────────────  ───────────────   ───────   ─────────           │
//! │  both                   -                 later     earlier             │
//! │  one kind, once         2                 it        -                   │
//! │  one kind, once         3                 -         it                  │
//! │  one kind, otherwise    0, 1, 4+          -         it                  │
//! │  neither                -                 -         -                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The decimal mark is the rightmost separator in both `"1,234.56"` and
//! `"1.234,56"`, which is what makes the two-mark case unambiguous.
//!
//! The last row of the one-kind cases hides genuinely ambiguous text such as
//! `"1,2345"` (read as 12345 with no cents) rather than rejecting it.

/// Full stop separator.
pub const DOT: char = '.';

/// Comma separator.
pub const COMMA: char = ',';

/// Which separator plays which role in a cleaned amount.
///
/// Invariant: `decimal` and `thousands` are never the same character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeparatorRoles {
    /// Mark between whole and fractional digits.
    pub decimal: Option<char>,

    /// Mark grouping whole digits.
    pub thousands: Option<char>,
}

impl SeparatorRoles {
    /// Infers separator roles from currency-free text.
    ///
    /// ## Example
    /// ```rust
    /// use mintage_core::separators::SeparatorRoles;
    ///
    /// let us = SeparatorRoles::infer("1,234.56");
    /// assert_eq!((us.decimal, us.thousands), (Some('.'), Some(',')));
    ///
    /// let eu = SeparatorRoles::infer("1.234,56");
    /// assert_eq!((eu.decimal, eu.thousands), (Some(','), Some('.')));
    /// ```
    pub fn infer(text: &str) -> Self {
        match (text.rfind(DOT), text.rfind(COMMA)) {
            (Some(dot), Some(comma)) if dot > comma => Self::both(DOT, COMMA),
            (Some(_), Some(_)) => Self::both(COMMA, DOT),
            (Some(last), None) => Self::single(text, DOT, last),
            (None, Some(last)) => Self::single(text, COMMA, last),
            (None, None) => Self::default(),
        }
    }

    /// True when a decimal mark was found.
    pub fn has_decimal(&self) -> bool {
        self.decimal.is_some()
    }

    fn both(decimal: char, thousands: char) -> Self {
        SeparatorRoles {
            decimal: Some(decimal),
            thousands: Some(thousands),
        }
    }

    fn single(text: &str, mark: char, last: usize) -> Self {
        let occurrences = text.matches(mark).count();
        let trailing_digits = text[last + mark.len_utf8()..]
            .chars()
            .filter(char::is_ascii_digit)
            .count();

        match (occurrences, trailing_digits) {
            (1, 2) => SeparatorRoles {
                decimal: Some(mark),
                thousands: None,
            },
            // (1, 3) is a plain thousands group; anything else is ambiguous
            // and falls back to the same reading.
            _ => SeparatorRoles {
                decimal: None,
                thousands: Some(mark),
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
