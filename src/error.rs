//! Error types for strict value parsing.
//!
//! The public helpers in this crate are total: every fallible operation
//! takes a caller-supplied default and returns it silently on failure.
//! Underneath them sits a strict `try_parse_*` layer that reports *why* a
//! token was rejected, which is what this module provides.
//!
//! ## Examples
//!
//! ```rust
//! use valext::{try_parse_boolean, ParseError};
//!
//! let err = try_parse_boolean("maybe").unwrap_err();
//! assert!(matches!(err, ParseError::InvalidBoolean(_)));
//! assert!(err.to_string().contains("maybe"));
//! ```

use thiserror::Error;

/// Represents all ways a token can fail to parse as a typed value.
///
/// There is exactly one error mode in this crate ("value not
/// representable"), so every variant carries the offending token and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty or whitespace-only
    #[error("empty input")]
    Empty,

    /// Token is neither a boolean literal nor in the extended token set
    #[error("unrecognized boolean token `{0}`")]
    InvalidBoolean(String),

    /// Token is not a valid base-10 integer
    #[error("invalid integer `{0}`")]
    InvalidInteger(String),

    /// Token is not a valid invariant-form decimal
    #[error("invalid decimal `{0}`")]
    InvalidDecimal(String),

    /// Token matches none of the supported date/time layouts
    #[error("invalid date/time `{0}`")]
    InvalidDateTime(String),

    /// Token is not a valid identifier textual form
    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),

    /// Token is not a valid 22-character compact identifier
    #[error("malformed compact identifier `{0}`")]
    InvalidCompactId(String),
}

impl ParseError {
    /// Builds [`ParseError::Empty`] for blank input, otherwise the error
    /// produced by `f` for the offending token.
    ///
    /// Every parser reports the same way: blank means empty, anything
    /// else names the token. This keeps that rule in one place.
    pub(crate) fn for_token(token: &str, f: impl FnOnce(String) -> Self) -> Self {
        if token.trim().is_empty() {
            ParseError::Empty
        } else {
            f(token.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
