//! Case-style conversion between word-boundary-delimited naming styles.
//!
//! All five converters share one word segmentation rule: the input is
//! split wherever a run of non-alphanumeric characters occurs, and
//! additionally between a lowercase letter or digit and the uppercase
//! letter that follows it. Each style is then a deterministic re-join of
//! that word sequence with its own separator and capitalization rule.
//!
//! ## Examples
//!
//! ```rust
//! use valext::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, to_title_case};
//!
//! assert_eq!(to_pascal_case("hello world"), "HelloWorld");
//! assert_eq!(to_camel_case("  multiple_words-here  "), "multipleWordsHere");
//! assert_eq!(to_snake_case("helloWorldTest"), "hello_world_test");
//! assert_eq!(to_kebab_case("Multiple Words_Here"), "multiple-words-here");
//! assert_eq!(to_title_case("hello world"), "Hello World");
//! ```
//!
//! Inputs consisting only of separators yield the empty string; so does
//! empty or whitespace-only input. No converter ever fails.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHANUMERIC_RUN: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    static ref SPACE_OR_DASH_RUN: Regex = Regex::new(r"[\s\-]+").unwrap();
    static ref SPACE_OR_UNDERSCORE_RUN: Regex = Regex::new(r"[\s_]+").unwrap();
}

/// Splits free text into the word sequence shared by every case style.
///
/// Words are the maximal runs of alphanumeric characters left after
/// breaking on non-alphanumeric runs and on lowercase-or-digit to
/// uppercase transitions. Empty input yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// use valext::split_words;
///
/// assert_eq!(split_words("helloWorld"), vec!["hello", "World"]);
/// assert_eq!(split_words("multiple_words-here"), vec!["multiple", "words", "here"]);
/// assert_eq!(split_words("---"), Vec::<String>::new());
/// ```
#[must_use]
pub fn split_words(input: &str) -> Vec<String> {
    let spaced = CAMEL_BOUNDARY.replace_all(input, "$1 $2");
    NON_ALPHANUMERIC_RUN
        .split(&spaced)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Converts free text to Title Case (each whitespace-delimited word
/// capitalized).
///
/// The whole string is lowercased first, then the first letter of each
/// word is uppercased using locale-invariant rules. Leading non-letter
/// characters (punctuation, digits) are skipped when finding the letter
/// to capitalize. Returns an empty string for empty or whitespace-only
/// input.
///
/// # Examples
///
/// ```rust
/// use valext::to_title_case;
///
/// assert_eq!(to_title_case("hello world"), "Hello World");
/// assert_eq!(to_title_case("HELLO"), "Hello");
/// assert_eq!(to_title_case("(hello world)"), "(Hello World)");
/// assert_eq!(to_title_case("   "), "");
/// ```
#[must_use]
pub fn to_title_case(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut at_word_start = true;
    for c in lowered.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start && c.is_alphabetic() {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts free text to PascalCase.
///
/// Each segmented word is capitalized (first character uppercased, the
/// remainder lowercased) and the words are concatenated with no
/// separator. Returns an empty string when the input is empty,
/// whitespace-only, or contains no alphanumeric characters.
///
/// # Examples
///
/// ```rust
/// use valext::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello world"), "HelloWorld");
/// assert_eq!(to_pascal_case("helloWorld"), "HelloWorld");
/// assert_eq!(to_pascal_case("  multiple_words-here  "), "MultipleWordsHere");
/// ```
#[must_use]
pub fn to_pascal_case(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(input.len());
    for word in split_words(input) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

/// Converts free text to camelCase.
///
/// Computed as PascalCase with only the first character lowercased, so
/// both styles decompose into the same word sequence.
///
/// # Examples
///
/// ```rust
/// use valext::to_camel_case;
///
/// assert_eq!(to_camel_case("hello world"), "helloWorld");
/// assert_eq!(to_camel_case("  multiple_words-here  "), "multipleWordsHere");
/// assert_eq!(to_camel_case(""), "");
/// ```
#[must_use]
pub fn to_camel_case(input: &str) -> String {
    let pascal = to_pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => pascal,
    }
}

/// Converts free text to snake_case.
///
/// An underscore is inserted at each lowercase-or-digit to uppercase
/// boundary, whitespace and dash runs collapse to a single underscore,
/// and the result is lowercased. Existing underscores are kept as-is.
///
/// # Examples
///
/// ```rust
/// use valext::to_snake_case;
///
/// assert_eq!(to_snake_case("helloWorldTest"), "hello_world_test");
/// assert_eq!(to_snake_case("Multiple Words-Here"), "multiple_words_here");
/// assert_eq!(to_snake_case(""), "");
/// ```
#[must_use]
pub fn to_snake_case(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let result = CAMEL_BOUNDARY.replace_all(input, "${1}_${2}");
    let result = SPACE_OR_DASH_RUN.replace_all(&result, "_");
    result.to_lowercase()
}

/// Converts free text to kebab-case.
///
/// A dash is inserted at each lowercase-or-digit to uppercase boundary,
/// whitespace and underscore runs collapse to a single dash, and the
/// result is lowercased. Existing dashes are kept as-is.
///
/// # Examples
///
/// ```rust
/// use valext::to_kebab_case;
///
/// assert_eq!(to_kebab_case("helloWorldTest"), "hello-world-test");
/// assert_eq!(to_kebab_case("Multiple Words_Here"), "multiple-words-here");
/// assert_eq!(to_kebab_case("   "), "");
/// ```
#[must_use]
pub fn to_kebab_case(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let result = CAMEL_BOUNDARY.replace_all(input, "$1-$2");
    let result = SPACE_OR_UNDERSCORE_RUN.replace_all(&result, "-");
    result.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_camel_boundary() {
        assert_eq!(split_words("helloWorldTest"), vec!["hello", "World", "Test"]);
        assert_eq!(split_words("v2Ready"), vec!["v2", "Ready"]);
    }

    #[test]
    fn test_split_words_separators_only() {
        assert_eq!(split_words("-_- "), Vec::<String>::new());
    }

    #[test]
    fn test_pascal_and_camel_share_segmentation() {
        let input = "some mixedInput_value";
        assert_eq!(to_pascal_case(input), "SomeMixedInputValue");
        assert_eq!(to_camel_case(input), "someMixedInputValue");
    }

    #[test]
    fn test_single_character_words() {
        assert_eq!(to_pascal_case("a b c"), "ABC");
        assert_eq!(to_snake_case("a b c"), "a_b_c");
    }

    #[test]
    fn test_title_case_lowers_first() {
        assert_eq!(to_title_case("hELLO wORLD"), "Hello World");
    }

    #[test]
    fn test_title_case_skips_leading_punctuation() {
        assert_eq!(to_title_case("(hello world)"), "(Hello World)");
        assert_eq!(to_title_case("\"quoted\" words"), "\"Quoted\" Words");
        assert_eq!(to_title_case("1st place"), "1St Place");
    }

    #[test]
    fn test_snake_keeps_existing_underscores() {
        assert_eq!(to_snake_case("already_snake_case"), "already_snake_case");
    }

    #[test]
    fn test_kebab_keeps_existing_dashes() {
        assert_eq!(to_kebab_case("already-kebab-case"), "already-kebab-case");
    }
}
