//! # valext
//!
//! Safe, culture-invariant conversion, formatting, validation and parsing
//! helpers for primitive value types.
//!
//! ## What is valext?
//!
//! valext is a flat collection of pure, stateless utility functions over
//! booleans, integers, decimals, date/times, identifiers and text. It
//! exists so application code can stop re-implementing ad-hoc parsing
//! and formatting logic: every helper here is deterministic, tolerant of
//! blank input, and independent of any ambient locale.
//!
//! ## Key Features
//!
//! - **Total by design**: fallible operations take a caller-supplied
//!   default and return it silently on failure; nothing panics or raises
//! - **Classification agrees with parsing**: a token that classifies as
//!   a boolean/integer/decimal can never fall back to the default when
//!   parsed, because both paths share one grammar
//! - **Culture-invariant**: numeric and date/time grammars never consult
//!   the process locale
//! - **Unicode-correct text handling**: diacritic removal via canonical
//!   decomposition, reversal by grapheme cluster
//! - **Compact identifiers**: a bit-exact 22-character URL-safe codec
//!   for 128-bit identifiers with a round-trip guarantee
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! valext = "0.1"
//! ```
//!
//! ### Safe parsing with fallbacks
//!
//! ```rust
//! use valext::{is_boolean, parse_boolean, parse_integer};
//!
//! assert!(is_boolean("yes"));
//! assert!(parse_boolean("yes", false));
//! assert!(parse_boolean("maybe", true));      // unrecognized, default wins
//! assert_eq!(parse_integer("42", 0), 42);
//! assert_eq!(parse_integer("forty-two", 0), 0);
//! ```
//!
//! ### Case conversion and slugs
//!
//! ```rust
//! use valext::{to_camel_case, to_slug, to_snake_case};
//!
//! assert_eq!(to_snake_case("helloWorldTest"), "hello_world_test");
//! assert_eq!(to_camel_case("multiple words_here"), "multipleWordsHere");
//! assert_eq!(to_slug("Café au lait"), "cafe-au-lait");
//! ```
//!
//! ### Compact identifiers
//!
//! ```rust
//! use valext::{decode_short_id, encode_short_id};
//! use uuid::Uuid;
//!
//! let id = Uuid::parse_str("d3b07384-d9a1-4b6e-9a3f-8fc2f0a7b1ff").unwrap();
//! let short = encode_short_id(&id);
//! assert_eq!(short.len(), 22);
//! assert_eq!(decode_short_id(&short, Uuid::nil()), id);
//! ```
//!
//! ## Error Handling
//!
//! The `parse_*` family never errors; callers get their default back.
//! When a caller wants to know *why* a token was rejected, the strict
//! `try_parse_*` layer returns a [`ParseError`]:
//!
//! ```rust
//! use valext::{try_parse_integer, ParseError};
//!
//! assert!(matches!(try_parse_integer(""), Err(ParseError::Empty)));
//! assert!(matches!(try_parse_integer("x"), Err(ParseError::InvalidInteger(_))));
//! ```
//!
//! ## Concurrency
//!
//! Every function is synchronous and pure. The only process-wide state
//! is a set of immutable lookup tables and pre-compiled boundary
//! patterns initialized on first use, so all helpers are safe to call
//! from any number of threads without coordination.

pub mod case;
pub mod error;
pub mod hash;
pub mod normalize;
pub mod numeric;
pub mod parse;
pub mod short_id;
pub mod text;
pub mod token;

pub use case::{
    split_words, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, to_title_case,
};
pub use error::{ParseError, Result};
pub use hash::{from_base64, sha256_base64, to_base64};
pub use normalize::{mask, remove_diacritics, remove_non_alphanumeric, reverse, to_slug};
pub use numeric::{remove_trailing_zero, to_ordinal};
pub use parse::{
    parse_boolean, parse_date_time, parse_decimal, parse_identifier, parse_integer, parse_long,
    reformat_date, try_parse_boolean, try_parse_date_time, try_parse_decimal,
    try_parse_identifier, try_parse_integer, try_parse_long,
};
pub use short_id::{decode_short_id, encode_short_id, ShortId};
pub use text::{
    contains_ignore_case, ensure_ends_with, ensure_starts_with, equals_ignore_case, left,
    null_if_empty, or_default, right, safe_substring, safe_trim, truncate, word_count,
};
pub use token::{
    is_boolean, is_date_time, is_decimal, is_email, is_identifier, is_integer, is_json,
    is_numeric,
};

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_boolean_classify_then_parse() {
        assert!(is_boolean("yes"));
        assert!(parse_boolean("yes", false));
        assert!(parse_boolean("maybe", true));
        assert!(!parse_boolean("maybe", false));
    }

    #[test]
    fn test_case_styles_compose() {
        let input = "Multiple Words_Here";
        assert_eq!(to_pascal_case(input), "MultipleWordsHere");
        assert_eq!(to_camel_case(input), "multipleWordsHere");
        assert_eq!(to_kebab_case(input), "multiple-words-here");
    }

    #[test]
    fn test_slug_reuses_diacritic_removal() {
        assert_eq!(to_slug("Crème Brûlée!"), "creme-brulee");
    }

    #[test]
    fn test_short_id_round_trip() {
        let id = Uuid::parse_str("d3b07384-d9a1-4b6e-9a3f-8fc2f0a7b1ff").unwrap();
        let short = encode_short_id(&id);
        assert_eq!(decode_short_id(&short, Uuid::nil()), id);
    }

    #[test]
    fn test_trailing_zero_examples() {
        assert_eq!(remove_trailing_zero("2.0100"), "2.01");
        assert_eq!(remove_trailing_zero("test"), "test");
        assert_eq!(remove_trailing_zero(""), "");
    }
}
