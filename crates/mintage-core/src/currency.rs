//! # Currency Stripping
//!
//! Removes currency symbols and 3-letter currency codes around an amount,
//! leaving the digits, separators and sign markers in place.
//!
//! ## What Gets Removed
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input                 Stripped           Rule                          │
//! │  ─────────────────     ────────────────   ───────────────────────────── │
//! │  "$1,234.56"           "1,234.56"         leading symbol                │
//! │  "USD 1,000.50"        "1,000.50"         leading code                  │
//! │  "50 EUR"              "50"               trailing code                 │
//! │  "1.234,56 €"          "1.234,56"         trailing symbol               │
//! │  "($500.25)"           "(500.25)"         symbol behind a sign marker   │
//! │  "#100"                "#100"             unknown, fails validation     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only one symbol and one code are removed from each end. Whatever else is
//! left is the validator's problem.
//!
//! Symbols are usually written in front of the amount. Trailing placement
//! (`"1.234,56 €"`, `"99¢"`) is accepted as well, since continental Europe
//! writes the symbol after the number.

/// Recognized currency symbols.
///
/// Multi-character forms come first so `"US$"` wins over `"$"`.
pub const CURRENCY_SYMBOLS: &[&str] = &[
    "US$", "HK$", "NZ$", "A$", "C$", "S$", "R$", // prefixed dollars / real
    "$", "€", "£", "¥", "₹", "₽", "₩", "₺", "₪", "₫", "₱", "₦", "₴", "₸", "₡", "₲", "₵", "₭",
    "₮", "₼", "₾", "฿", "৳", "¢",
];

/// Length of an ISO 4217 style currency code.
const CODE_LEN: usize = 3;

/// Strips currency symbols and codes from `text` and trims whitespace.
///
/// Leading `-` / `(` and trailing `)` are set aside first so that the
/// symbol or code they wrap is still found.
///
/// ## Example
/// ```rust
/// use mintage_core::currency::strip_currency;
///
/// assert_eq!(strip_currency("  USD 1,000.50 "), "1,000.50");
/// assert_eq!(strip_currency("($500.25)"), "(500.25)");
/// assert_eq!(strip_currency("-€12,50"), "-12,50");
/// ```
pub fn strip_currency(text: &str) -> String {
    let text = text.trim();

    let lead_len = text.len() - text.trim_start_matches(is_leading_marker).len();
    let (lead, rest) = text.split_at(lead_len);

    let body_len = rest.trim_end_matches(is_trailing_marker).len();
    let (body, tail) = rest.split_at(body_len);

    let body = strip_leading_code(body.trim());
    let body = strip_leading_symbol(body).trim_start();
    let body = strip_trailing_code(body);
    let body = strip_trailing_symbol(body).trim_end();

    format!("{lead}{body}{tail}").trim().to_string()
}

fn is_leading_marker(c: char) -> bool {
    c == '-' || c == '(' || c.is_whitespace()
}

fn is_trailing_marker(c: char) -> bool {
    c == ')' || c.is_whitespace()
}

fn strip_leading_symbol(s: &str) -> &str {
    CURRENCY_SYMBOLS
        .iter()
        .find_map(|symbol| s.strip_prefix(*symbol))
        .unwrap_or(s)
}

fn strip_trailing_symbol(s: &str) -> &str {
    CURRENCY_SYMBOLS
        .iter()
        .find_map(|symbol| s.strip_suffix(*symbol))
        .unwrap_or(s)
}

/// Removes a leading run of exactly three ASCII letters.
///
/// A longer run (`"hello 5"`) is a word, not a code, and is left alone.
fn strip_leading_code(s: &str) -> &str {
    let letters = s.chars().take_while(char::is_ascii_alphabetic).count();
    if letters == CODE_LEN {
        // ASCII letters are one byte each
        s[CODE_LEN..].trim_start()
    } else {
        s
    }
}

fn strip_trailing_code(s: &str) -> &str {
    let letters = s.chars().rev().take_while(char::is_ascii_alphabetic).count();
    if letters == CODE_LEN {
        s[..s.len() - CODE_LEN].trim_end()
    } else {
        s
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
