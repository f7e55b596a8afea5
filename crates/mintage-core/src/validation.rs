//! # Validation Module
//!
//! Input checks run by the normalizer before and after cleaning.
//!
//! ## Validation Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  raw text ──► require_text ────────► EmptyInput                         │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │  strip currency, split, drop separators and sign markers               │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │  ensure_digits (integer part, decimal part) ──► InvalidCharacters       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{NormalizeError, NormalizeResult};

/// Checks that `input` has content and returns it trimmed.
///
/// ## Example
/// ```rust
/// use mintage_core::validation::require_text;
///
/// assert_eq!(require_text("  $5 ").unwrap(), "$5");
/// assert!(require_text(" \t\n").is_err());
/// ```
pub fn require_text(input: &str) -> NormalizeResult<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }
    Ok(trimmed)
}

/// Checks that `part` is made only of ASCII digits.
///
/// An empty part passes; it is defaulted by the caller. `input` is the
/// original text, carried into the error for diagnostics.
pub fn ensure_digits(part: &str, input: &str) -> NormalizeResult<()> {
    if part.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid(input))
    }
}

fn invalid(input: &str) -> NormalizeError {
    NormalizeError::InvalidCharacters {
        input: input.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("12").unwrap(), "12");
        assert_eq!(require_text(""), Err(NormalizeError::EmptyInput));
        assert_eq!(require_text("   "), Err(NormalizeError::EmptyInput));
    }

    #[test]
    fn test_ensure_digits() {
        assert!(ensure_digits("0123456789", "x").is_ok());
        assert!(ensure_digits("", "x").is_ok());

        assert!(ensure_digits("12a", "x").is_err());
        assert!(ensure_digits("1 2", "x").is_err());
        // Non-ASCII digits are not accepted
        assert!(ensure_digits("١٢", "x").is_err());
    }

    #[test]
    fn test_error_carries_original_input() {
        let err = ensure_digits("#100", "#100 dollars").unwrap_err();
        assert_eq!(
            err,
            NormalizeError::InvalidCharacters {
                input: "#100 dollars".to_string()
            }
        );
    }
}
