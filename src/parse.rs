//! Safe parsing of primitive values with explicit fallback semantics.
//!
//! Two layers live here. The strict `try_parse_*` functions trim their
//! input, apply the culture-invariant grammar for the target type, and
//! return a [`ParseError`] describing the rejection. The `parse_*`
//! functions wrap them with the fallback policy the rest of the crate
//! follows: an unparseable token silently yields the caller-supplied
//! default, and no parser ever panics or raises.
//!
//! ## Examples
//!
//! ```rust
//! use valext::{parse_boolean, parse_decimal, parse_integer};
//! use rust_decimal::Decimal;
//!
//! assert!(parse_boolean("yes", false));
//! assert_eq!(parse_integer("42", 0), 42);
//! assert_eq!(parse_integer("not a number", -1), -1);
//! assert_eq!(parse_decimal("2.50", Decimal::ZERO), Decimal::new(250, 2));
//! ```
//!
//! When the caller has no meaningful default, the type's zero value is
//! the conventional one: `false`, `0`, [`Decimal::ZERO`], the Unix epoch
//! for date/times, and the nil identifier.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{ParseError, Result};
use crate::token::boolean_token_value;

/// Date/time layouts tried in order after RFC 3339. All are
/// culture-invariant; locale-dependent formats are out of scope.
const DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Strictly parses a boolean token.
///
/// Resolution order: blank input is [`ParseError::Empty`]; a literal
/// `true`/`false` (case-insensitive) parses directly; otherwise the
/// extended token set is consulted (`1`, `yes`, `y`, `on` are
/// affirmative, `0`, `no`, `n`, `off` negative); anything else is
/// [`ParseError::InvalidBoolean`].
///
/// # Errors
///
/// Returns an error when the trimmed token is empty or not in the
/// boolean token sets.
pub fn try_parse_boolean(input: &str) -> Result<bool> {
    let token = input.trim();
    boolean_token_value(token)
        .ok_or_else(|| ParseError::for_token(token, ParseError::InvalidBoolean))
}

/// Strictly parses a trimmed base-10 `i32`.
///
/// # Errors
///
/// Returns an error for blank input or anything outside the optional
/// sign plus digits grammar (including out-of-range values).
pub fn try_parse_integer(input: &str) -> Result<i32> {
    let token = input.trim();
    token
        .parse::<i32>()
        .map_err(|_| ParseError::for_token(token, ParseError::InvalidInteger))
}

/// Strictly parses a trimmed base-10 `i64`.
///
/// # Errors
///
/// Returns an error for blank input or anything outside the optional
/// sign plus digits grammar (including out-of-range values).
pub fn try_parse_long(input: &str) -> Result<i64> {
    let token = input.trim();
    token
        .parse::<i64>()
        .map_err(|_| ParseError::for_token(token, ParseError::InvalidInteger))
}

/// Strictly parses a trimmed invariant-form decimal.
///
/// The grammar is an optional sign, digits, and an optional decimal
/// point with fractional digits. Grouping separators are rejected.
///
/// # Errors
///
/// Returns an error for blank or malformed input, or when the value
/// exceeds the 28-29 significant digits the decimal type holds.
pub fn try_parse_decimal(input: &str) -> Result<Decimal> {
    let token = input.trim();
    Decimal::from_str(token).map_err(|_| ParseError::for_token(token, ParseError::InvalidDecimal))
}

/// Strictly parses a trimmed date/time token.
///
/// Tries RFC 3339 first (the offset is discarded and the local clock
/// time kept), then the invariant layouts `%Y-%m-%dT%H:%M:%S` and
/// `%Y-%m-%d %H:%M:%S` with optional fractional seconds, then a bare
/// `%Y-%m-%d` date at midnight.
///
/// # Errors
///
/// Returns an error when no layout matches.
pub fn try_parse_date_time(input: &str) -> Result<NaiveDateTime> {
    let token = input.trim();

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(token) {
        return Ok(dt.naive_local());
    }
    for layout in DATE_TIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(token, layout) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(token, DATE_LAYOUT) {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default());
    }

    Err(ParseError::for_token(token, ParseError::InvalidDateTime))
}

/// Strictly parses a trimmed 128-bit identifier.
///
/// Accepts every textual form the identifier type itself accepts:
/// hyphenated, simple (32 hex digits), braced, and URN.
///
/// # Errors
///
/// Returns an error for blank input or any other malformed form.
pub fn try_parse_identifier(input: &str) -> Result<Uuid> {
    let token = input.trim();
    Uuid::parse_str(token).map_err(|_| ParseError::for_token(token, ParseError::InvalidIdentifier))
}

/// Parses a boolean token, returning `default` when it is unrecognized.
///
/// # Examples
///
/// ```rust
/// use valext::parse_boolean;
///
/// assert!(parse_boolean("yes", false));
/// assert!(!parse_boolean(" OFF ", true));
/// assert!(parse_boolean("maybe", true));
/// assert!(!parse_boolean("maybe", false));
/// assert!(!parse_boolean("", false));
/// ```
#[must_use]
pub fn parse_boolean(input: &str, default: bool) -> bool {
    try_parse_boolean(input).unwrap_or(default)
}

/// Parses an `i32`, returning `default` when the token is unparseable.
///
/// # Examples
///
/// ```rust
/// use valext::parse_integer;
///
/// assert_eq!(parse_integer(" 42 ", 0), 42);
/// assert_eq!(parse_integer("oops", -1), -1);
/// ```
#[must_use]
pub fn parse_integer(input: &str, default: i32) -> i32 {
    try_parse_integer(input).unwrap_or(default)
}

/// Parses an `i64`, returning `default` when the token is unparseable.
///
/// # Examples
///
/// ```rust
/// use valext::parse_long;
///
/// assert_eq!(parse_long("9007199254740993", 0), 9_007_199_254_740_993);
/// assert_eq!(parse_long("", 7), 7);
/// ```
#[must_use]
pub fn parse_long(input: &str, default: i64) -> i64 {
    try_parse_long(input).unwrap_or(default)
}

/// Parses a decimal, returning `default` when the token is unparseable.
///
/// # Examples
///
/// ```rust
/// use valext::parse_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal("2.01", Decimal::ZERO), Decimal::new(201, 2));
/// assert_eq!(parse_decimal("n/a", Decimal::ONE), Decimal::ONE);
/// ```
#[must_use]
pub fn parse_decimal(input: &str, default: Decimal) -> Decimal {
    try_parse_decimal(input).unwrap_or(default)
}

/// Parses a date/time, returning `default` when no layout matches.
///
/// The conventional no-better-idea default is
/// `NaiveDateTime::default()`, the Unix epoch.
///
/// # Examples
///
/// ```rust
/// use valext::parse_date_time;
/// use chrono::NaiveDateTime;
///
/// let epoch = NaiveDateTime::default();
/// let dt = parse_date_time("2023-08-01T14:30:00", epoch);
/// assert_eq!(dt.to_string(), "2023-08-01 14:30:00");
/// assert_eq!(parse_date_time("not a date", epoch), epoch);
/// ```
#[must_use]
pub fn parse_date_time(input: &str, default: NaiveDateTime) -> NaiveDateTime {
    try_parse_date_time(input).unwrap_or(default)
}

/// Parses a 128-bit identifier, returning `default` when the token is
/// malformed. The nil identifier is the conventional default.
///
/// # Examples
///
/// ```rust
/// use valext::parse_identifier;
/// use uuid::Uuid;
///
/// let id = parse_identifier("d3b07384-d9a1-4b6e-9a3f-8fc2f0a7b1ff", Uuid::nil());
/// assert!(!id.is_nil());
/// assert_eq!(parse_identifier("nope", Uuid::nil()), Uuid::nil());
/// ```
#[must_use]
pub fn parse_identifier(input: &str, default: Uuid) -> Uuid {
    try_parse_identifier(input).unwrap_or(default)
}

/// Re-renders a parseable date/time token with the given chrono format
/// string; unparseable input is returned unchanged (empty stays empty).
///
/// # Examples
///
/// ```rust
/// use valext::reformat_date;
///
/// assert_eq!(reformat_date("2023-08-01T14:30:00", "%Y/%m/%d"), "2023/08/01");
/// assert_eq!(reformat_date("not a date", "%Y/%m/%d"), "not a date");
/// assert_eq!(reformat_date("", "%Y/%m/%d"), "");
/// ```
#[must_use]
pub fn reformat_date(input: &str, format: &str) -> String {
    match try_parse_date_time(input) {
        Ok(dt) => dt.format(format).to_string(),
        Err(_) => input.to_string(),
    }
}
