//! Token classification for primitive value grammars.
//!
//! Classifiers answer "does this text represent a value of type T"
//! without producing the value. Each one trims surrounding whitespace
//! first (the identifier classifier mirrors the identifier parser's own
//! whitespace tolerance) and returns `false` for anything malformed.
//! Classification never fails and never allocates on the happy path.
//!
//! Classification and parsing agree by construction: every classifier
//! delegates to the same strict parser the [`crate::parse`] module uses,
//! so a token that classifies as boolean can never fall back to the
//! default when parsed.
//!
//! ## Examples
//!
//! ```rust
//! use valext::{is_boolean, is_date_time, is_decimal, is_identifier, is_integer};
//!
//! assert!(is_boolean("yes"));
//! assert!(is_integer(" -42 "));
//! assert!(is_decimal("3.14"));
//! assert!(is_identifier("d3b07384-d9a1-4b6e-9a3f-8fc2f0a7b1ff"));
//! assert!(is_date_time("2023-08-01"));
//! assert!(!is_boolean("maybe"));
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::parse;

/// Tokens accepted as `true` beyond the literal, case-insensitive.
pub(crate) const AFFIRMATIVE_TOKENS: &[&str] = &["true", "1", "yes", "y", "on"];

/// Tokens accepted as `false` beyond the literal, case-insensitive.
pub(crate) const NEGATIVE_TOKENS: &[&str] = &["false", "0", "no", "n", "off"];

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"(?i)^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Looks a trimmed token up in the boolean token tables.
///
/// Shared by [`is_boolean`] and the boolean parser so the two can never
/// disagree about what counts as a boolean.
pub(crate) fn boolean_token_value(token: &str) -> Option<bool> {
    if AFFIRMATIVE_TOKENS.iter().any(|t| token.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if NEGATIVE_TOKENS.iter().any(|t| token.eq_ignore_ascii_case(t)) {
        Some(false)
    } else {
        None
    }
}

/// Returns `true` when the trimmed text is a boolean literal or a member
/// of the extended token set (`1`, `0`, `yes`, `no`, `y`, `n`, `on`,
/// `off`), case-insensitively.
///
/// # Examples
///
/// ```rust
/// use valext::is_boolean;
///
/// assert!(is_boolean("True"));
/// assert!(is_boolean(" off "));
/// assert!(!is_boolean("maybe"));
/// assert!(!is_boolean(""));
/// ```
#[must_use]
pub fn is_boolean(input: &str) -> bool {
    boolean_token_value(input.trim()).is_some()
}

/// Returns `true` when the trimmed text is a base-10 integer with an
/// optional leading sign. No grouping separators are accepted.
///
/// Shares [`crate::parse_integer`]'s grammar, including its `i32` range;
/// a token that classifies here always parses there. Callers working
/// with wider values have [`crate::parse_long`].
///
/// # Examples
///
/// ```rust
/// use valext::is_integer;
///
/// assert!(is_integer("123"));
/// assert!(is_integer("-7"));
/// assert!(!is_integer("12.5"));
/// assert!(!is_integer("abc"));
/// assert!(!is_integer("2147483648"));
/// ```
#[must_use]
pub fn is_integer(input: &str) -> bool {
    parse::try_parse_integer(input).is_ok()
}

/// Returns `true` when the trimmed text parses under the invariant
/// decimal grammar: optional sign, digits, optional decimal point and
/// fractional digits.
///
/// # Examples
///
/// ```rust
/// use valext::is_decimal;
///
/// assert!(is_decimal("12.34"));
/// assert!(is_decimal("-0.5"));
/// assert!(!is_decimal("1,00"));
/// ```
#[must_use]
pub fn is_decimal(input: &str) -> bool {
    parse::try_parse_decimal(input).is_ok()
}

/// Returns `true` when the text is a valid 128-bit identifier in any of
/// the accepted textual forms (hyphenated, simple, braced, or URN).
///
/// # Examples
///
/// ```rust
/// use valext::is_identifier;
///
/// assert!(is_identifier("d3b07384-d9a1-4b6e-9a3f-8fc2f0a7b1ff"));
/// assert!(is_identifier("d3b07384d9a14b6e9a3f8fc2f0a7b1ff"));
/// assert!(!is_identifier("hello"));
/// ```
#[must_use]
pub fn is_identifier(input: &str) -> bool {
    parse::try_parse_identifier(input).is_ok()
}

/// Returns `true` when the trimmed text matches one of the supported
/// culture-invariant date/time layouts (see [`crate::parse::try_parse_date_time`]).
///
/// # Examples
///
/// ```rust
/// use valext::is_date_time;
///
/// assert!(is_date_time("2023-08-01"));
/// assert!(is_date_time("2023-08-01T14:30:00"));
/// assert!(!is_date_time("not a date"));
/// ```
#[must_use]
pub fn is_date_time(input: &str) -> bool {
    parse::try_parse_date_time(input).is_ok()
}

/// Returns `true` when the text parses as an invariant decimal. Alias
/// policy of [`is_decimal`] kept for callers validating "numeric" fields.
#[must_use]
pub fn is_numeric(input: &str) -> bool {
    is_decimal(input)
}

/// Validates the text against a simple email shape: one `@`, no
/// whitespace, and a dotted domain.
///
/// # Examples
///
/// ```rust
/// use valext::is_email;
///
/// assert!(is_email("alice@example.com"));
/// assert!(!is_email("not-an-email"));
/// ```
#[must_use]
pub fn is_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

/// Quick check for JSON-looking text: trimmed input wrapped in `{}` or
/// `[]`. This is a shape test, not a validation.
///
/// # Examples
///
/// ```rust
/// use valext::is_json;
///
/// assert!(is_json(r#"{"a": 1}"#));
/// assert!(is_json("[1, 2]"));
/// assert!(!is_json("a: 1"));
/// ```
#[must_use]
pub fn is_json(input: &str) -> bool {
    let trimmed = input.trim();
    (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_boolean;

    #[test]
    fn test_extended_boolean_tokens() {
        for token in ["true", "false", "1", "0", "yes", "no", "y", "n", "on", "off"] {
            assert!(is_boolean(token), "token {token:?} should classify as boolean");
        }
        assert!(is_boolean("YES"));
        assert!(!is_boolean("maybe"));
        assert!(!is_boolean(""));
    }

    #[test]
    fn test_classification_agrees_with_parsing() {
        // A token that classifies as boolean must never hit the default.
        for token in ["true", "off", "Y", " no "] {
            assert!(is_boolean(token));
            assert_eq!(parse_boolean(token, true), parse_boolean(token, false));
        }
    }

    #[test]
    fn test_integer_and_decimal_trim() {
        assert!(is_integer("  42  "));
        assert!(is_decimal("  -1.25  "));
        assert!(!is_integer("4 2"));
    }

    #[test]
    fn test_integer_classification_matches_parse_range() {
        // i32::MAX and the first value past it.
        assert!(is_integer("2147483647"));
        assert!(!is_integer("2147483648"));
        assert_eq!(crate::parse::parse_integer("2147483647", 0), i32::MAX);
        assert_eq!(crate::parse::parse_integer("2147483648", 1), 1);
        assert_eq!(crate::parse::parse_integer("2147483648", 2), 2);
    }

    #[test]
    fn test_json_shape() {
        assert!(is_json("  {\"k\": [1]}  "));
        assert!(!is_json("{unterminated"));
    }
}
