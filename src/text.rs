//! Null-tolerant core string helpers.
//!
//! Small slicing and comparison utilities that never panic on short or
//! empty input. Length arguments count `char`s, not bytes, so slicing a
//! multi-byte string can never split a code point.

/// Returns `default` when the input is empty or whitespace-only,
/// otherwise the input itself.
///
/// # Examples
///
/// ```rust
/// use valext::or_default;
///
/// assert_eq!(or_default("  ", "fallback"), "fallback");
/// assert_eq!(or_default("abc", "fallback"), "abc");
/// ```
#[must_use]
pub fn or_default(input: &str, default: &str) -> String {
    if input.trim().is_empty() {
        default.to_string()
    } else {
        input.to_string()
    }
}

/// Returns `None` when the input is empty or whitespace-only, otherwise
/// `Some` of the original text.
///
/// # Examples
///
/// ```rust
/// use valext::null_if_empty;
///
/// assert_eq!(null_if_empty("   "), None);
/// assert_eq!(null_if_empty("abc"), Some("abc".to_string()));
/// ```
#[must_use]
pub fn null_if_empty(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

/// Trims surrounding whitespace. Present for symmetry with the other
/// total helpers; never fails.
#[must_use]
pub fn safe_trim(input: &str) -> String {
    input.trim().to_string()
}

/// Truncates to at most `max_length` characters.
///
/// # Examples
///
/// ```rust
/// use valext::truncate;
///
/// assert_eq!(truncate("abc", 2), "ab");
/// assert_eq!(truncate("abc", 5), "abc");
/// ```
#[must_use]
pub fn truncate(input: &str, max_length: usize) -> String {
    input.chars().take(max_length).collect()
}

/// Extracts a substring without panicking on out-of-range indices.
///
/// `start_index` past the end yields the empty string; a `length` that
/// overruns the end is shortened to what is available.
///
/// # Examples
///
/// ```rust
/// use valext::safe_substring;
///
/// assert_eq!(safe_substring("abcdef", 2, 3), "cde");
/// assert_eq!(safe_substring("abc", 2, 10), "c");
/// assert_eq!(safe_substring("abc", 7, 2), "");
/// ```
#[must_use]
pub fn safe_substring(input: &str, start_index: usize, length: usize) -> String {
    input.chars().skip(start_index).take(length).collect()
}

/// Returns the leftmost `length` characters, or the whole string when it
/// is shorter.
#[must_use]
pub fn left(input: &str, length: usize) -> String {
    input.chars().take(length).collect()
}

/// Returns the rightmost `length` characters, or the whole string when
/// it is shorter.
///
/// # Examples
///
/// ```rust
/// use valext::right;
///
/// assert_eq!(right("abcdef", 2), "ef");
/// assert_eq!(right("ab", 5), "ab");
/// ```
#[must_use]
pub fn right(input: &str, length: usize) -> String {
    let count = input.chars().count();
    input.chars().skip(count.saturating_sub(length)).collect()
}

/// Counts whitespace-delimited words. Blank input counts zero.
///
/// # Examples
///
/// ```rust
/// use valext::word_count;
///
/// assert_eq!(word_count("the quick  brown fox"), 4);
/// assert_eq!(word_count("   "), 0);
/// ```
#[must_use]
pub fn word_count(input: &str) -> usize {
    input.split_whitespace().count()
}

/// Compares two strings case-insensitively.
#[must_use]
pub fn equals_ignore_case(input: &str, other: &str) -> bool {
    input.to_lowercase() == other.to_lowercase()
}

/// Tests whether `input` contains `value`, ignoring case.
///
/// # Examples
///
/// ```rust
/// use valext::contains_ignore_case;
///
/// assert!(contains_ignore_case("Hello World", "WORLD"));
/// assert!(!contains_ignore_case("Hello", "bye"));
/// ```
#[must_use]
pub fn contains_ignore_case(input: &str, value: &str) -> bool {
    input.to_lowercase().contains(&value.to_lowercase())
}

/// Prepends `prefix` unless the string already starts with it. Empty
/// input yields the prefix alone.
///
/// # Examples
///
/// ```rust
/// use valext::ensure_starts_with;
///
/// assert_eq!(ensure_starts_with("example.com", "https://"), "https://example.com");
/// assert_eq!(ensure_starts_with("https://example.com", "https://"), "https://example.com");
/// ```
#[must_use]
pub fn ensure_starts_with(input: &str, prefix: &str) -> String {
    if input.is_empty() {
        prefix.to_string()
    } else if input.starts_with(prefix) {
        input.to_string()
    } else {
        format!("{prefix}{input}")
    }
}

/// Appends `suffix` unless the string already ends with it. Empty input
/// yields the suffix alone.
#[must_use]
pub fn ensure_ends_with(input: &str, suffix: &str) -> String {
    if input.is_empty() {
        suffix.to_string()
    } else if input.ends_with(suffix) {
        input.to_string()
    } else {
        format!("{input}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("héllo", 2), "hé");
    }

    #[test]
    fn test_safe_substring_clamps() {
        assert_eq!(safe_substring("", 0, 3), "");
        assert_eq!(safe_substring("abc", 0, 0), "");
    }

    #[test]
    fn test_right_multibyte() {
        assert_eq!(right("héllo", 4), "éllo");
    }

    #[test]
    fn test_equals_ignore_case_unicode() {
        assert!(equals_ignore_case("STRASSE", "strasse"));
        assert!(!equals_ignore_case("abc", "abd"));
    }

    #[test]
    fn test_ensure_affixes_idempotent() {
        let once = ensure_ends_with("path", "/");
        assert_eq!(ensure_ends_with(&once, "/"), once);
    }
}
