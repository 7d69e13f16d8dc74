//! Numeric text helpers: trailing-zero trimming and ordinal suffixes.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Removes redundant trailing zeros from a decimal's textual form.
///
/// The input is parsed under the invariant decimal grammar and, on
/// success, re-rendered in its minimal form: no scientific notation, no
/// non-significant trailing zero digits, sign and integer part
/// preserved. Unparseable input is returned unchanged, so the function
/// is safe to apply to arbitrary text.
///
/// Unlike the parsers in [`crate::parse`], this function does not trim
/// whitespace first; `" 2.0"` fails to parse and comes back unchanged.
/// That asymmetry is kept deliberately for compatibility with existing
/// consumers.
///
/// # Examples
///
/// ```rust
/// use valext::remove_trailing_zero;
///
/// assert_eq!(remove_trailing_zero("2.0100"), "2.01");
/// assert_eq!(remove_trailing_zero("2.000"), "2");
/// assert_eq!(remove_trailing_zero("test"), "test");
/// assert_eq!(remove_trailing_zero(" 2.0"), " 2.0");
/// assert_eq!(remove_trailing_zero(""), "");
/// ```
#[must_use]
pub fn remove_trailing_zero(input: &str) -> String {
    match Decimal::from_str(input) {
        Ok(value) => value.normalize().to_string(),
        Err(_) => input.to_string(),
    }
}

/// Renders an integer with its English ordinal suffix.
///
/// 11, 12 and 13 (mod 100) always take "th"; otherwise the last digit
/// picks "st", "nd", "rd" or "th". Negative numbers keep their sign.
///
/// # Examples
///
/// ```rust
/// use valext::to_ordinal;
///
/// assert_eq!(to_ordinal(1), "1st");
/// assert_eq!(to_ordinal(2), "2nd");
/// assert_eq!(to_ordinal(11), "11th");
/// assert_eq!(to_ordinal(113), "113th");
/// assert_eq!(to_ordinal(-3), "-3rd");
/// ```
#[must_use]
pub fn to_ordinal(number: i64) -> String {
    let suffix = match (number % 100).abs() {
        11..=13 => "th",
        n => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{number}{suffix}")
}
