//! Digest and Base64 transport helpers for text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Computes the SHA-256 digest of the text and returns it Base64
/// encoded. Blank input yields the empty string.
///
/// # Examples
///
/// ```rust
/// use valext::sha256_base64;
///
/// let digest = sha256_base64("hello");
/// assert_eq!(digest.len(), 44);
/// assert_eq!(sha256_base64("  "), "");
/// ```
#[must_use]
pub fn sha256_base64(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let digest = Sha256::digest(input.as_bytes());
    STANDARD.encode(digest)
}

/// Encodes the text's UTF-8 bytes as standard Base64. Empty input yields
/// the empty string.
///
/// # Examples
///
/// ```rust
/// use valext::to_base64;
///
/// assert_eq!(to_base64("hello"), "aGVsbG8=");
/// ```
#[must_use]
pub fn to_base64(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    STANDARD.encode(input.as_bytes())
}

/// Decodes standard Base64 back to UTF-8 text.
///
/// Input that is not valid Base64, or does not decode to valid UTF-8, is
/// returned unchanged rather than reported as an error.
///
/// # Examples
///
/// ```rust
/// use valext::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8="), "hello");
/// assert_eq!(from_base64("not base64!"), "not base64!");
/// ```
#[must_use]
pub fn from_base64(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    match STANDARD.decode(input) {
        Ok(bytes) => String::from_utf8(bytes).unwrap_or_else(|_| input.to_string()),
        Err(_) => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_round_trip() {
        for input in ["hello", "héllo wörld", "a"] {
            assert_eq!(from_base64(&to_base64(input)), input);
        }
    }

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256("abc") in Base64.
        assert_eq!(sha256_base64("abc"), "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=");
    }

    #[test]
    fn test_from_base64_invalid_utf8_returns_input() {
        // Valid Base64 for the single byte 0xFF, which is not UTF-8.
        assert_eq!(from_base64("/w=="), "/w==");
    }
}
