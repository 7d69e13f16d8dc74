//! Text normalization: diacritics, slugs, masking, and grapheme-aware
//! reversal.
//!
//! Every function here returns an owned `String`, never fails, and maps
//! empty input to the empty string.
//!
//! ## Examples
//!
//! ```rust
//! use valext::{mask, remove_diacritics, reverse, to_slug};
//!
//! assert_eq!(to_slug("Café au lait"), "cafe-au-lait");
//! assert_eq!(remove_diacritics("naïve"), "naive");
//! assert_eq!(mask("4111111111111111", 4, 4, '*'), "4111********1111");
//! assert_eq!(reverse("héllo"), "olléh");
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^a-zA-Z0-9]").unwrap();
    static ref NON_SLUG_CHAR: Regex = Regex::new(r"[^a-z0-9\s-]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Removes diacritical marks (accents) from the text.
///
/// Each character is canonically decomposed, non-spacing combining marks
/// are dropped, and the remainder is recomposed. Characters without a
/// decomposition pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use valext::remove_diacritics;
///
/// assert_eq!(remove_diacritics("Café"), "Cafe");
/// assert_eq!(remove_diacritics("über"), "uber");
/// assert_eq!(remove_diacritics("plain"), "plain");
/// ```
#[must_use]
pub fn remove_diacritics(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .nfc()
        .collect()
}

/// Deletes every character outside `[A-Za-z0-9]`.
///
/// # Examples
///
/// ```rust
/// use valext::remove_non_alphanumeric;
///
/// assert_eq!(remove_non_alphanumeric("a-b_c 1!"), "abc1");
/// assert_eq!(remove_non_alphanumeric(""), "");
/// ```
#[must_use]
pub fn remove_non_alphanumeric(input: &str) -> String {
    NON_ALPHANUMERIC.replace_all(input, "").into_owned()
}

/// Produces a lowercase, URL-safe slug.
///
/// The text is lowercased, diacritics are removed, characters outside
/// `[a-z0-9\s-]` are deleted, whitespace runs collapse to a single `-`,
/// and leading/trailing dashes are trimmed. Whitespace-only input yields
/// the empty string.
///
/// # Examples
///
/// ```rust
/// use valext::to_slug;
///
/// assert_eq!(to_slug("Café au lait"), "cafe-au-lait");
/// assert_eq!(to_slug("  Hello, World!  "), "hello-world");
/// assert_eq!(to_slug("!!!"), "");
/// ```
#[must_use]
pub fn to_slug(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let lowered = remove_diacritics(input).to_lowercase();
    let cleaned = NON_SLUG_CHAR.replace_all(&lowered, "");
    let dashed = WHITESPACE_RUN.replace_all(cleaned.trim(), "-");
    dashed.trim_matches('-').to_string()
}

/// Reverses the text by user-perceived character (grapheme cluster), so
/// combining sequences and surrogate-pair characters stay intact.
///
/// # Examples
///
/// ```rust
/// use valext::reverse;
///
/// assert_eq!(reverse("abc"), "cba");
/// // The combining acute accent stays attached to its base letter.
/// assert_eq!(reverse("ae\u{301}b"), "be\u{301}a");
/// ```
#[must_use]
pub fn reverse(input: &str) -> String {
    input.graphemes(true).rev().collect()
}

/// Masks the middle of the text, keeping the first `unmasked_start` and
/// last `unmasked_end` characters visible.
///
/// When the text has no more characters than `unmasked_start +
/// unmasked_end` it is returned unchanged. Short inputs are deliberately
/// left alone rather than treated as an error.
///
/// # Examples
///
/// ```rust
/// use valext::mask;
///
/// assert_eq!(mask("abcdef", 1, 1, '*'), "a****f");
/// assert_eq!(mask("abc", 1, 1, '*'), "a*c");
/// assert_eq!(mask("ab", 1, 1, '*'), "ab");
/// ```
#[must_use]
pub fn mask(input: &str, unmasked_start: usize, unmasked_end: usize, mask_char: char) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= unmasked_start + unmasked_end {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    out.extend(&chars[..unmasked_start]);
    out.extend(std::iter::repeat(mask_char).take(chars.len() - unmasked_start - unmasked_end));
    out.extend(&chars[chars.len() - unmasked_end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_diacritics_recomposes() {
        // Decomposed input ("e" + combining acute) loses only the mark.
        assert_eq!(remove_diacritics("Cafe\u{301}"), "Cafe");
        assert_eq!(remove_diacritics("ÀÉÎÕÜ"), "AEIOU");
    }

    #[test]
    fn test_slug_collapses_whitespace() {
        assert_eq!(to_slug("a   b\t c"), "a-b-c");
        assert_eq!(to_slug("- leading and trailing -"), "leading-and-trailing");
    }

    #[test]
    fn test_slug_keeps_existing_dashes() {
        assert_eq!(to_slug("pre-sliced bread"), "pre-sliced-bread");
    }

    #[test]
    fn test_reverse_surrogate_pairs() {
        assert_eq!(reverse("a👍b"), "b👍a");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_mask_zero_bounds() {
        assert_eq!(mask("abcd", 0, 0, '#'), "####");
    }

    #[test]
    fn test_mask_counts_chars_not_bytes() {
        assert_eq!(mask("éléphant", 1, 2, '*'), "é*****nt");
    }
}
