//! Compact 22-character URL-safe encoding of 128-bit identifiers.
//!
//! A 16-byte identifier Base64-encodes to 24 characters, the last two of
//! which are always `=` padding. The compact form swaps the Base64
//! alphabet's `/` and `+` for the URL-safe `_` and `-` and drops the
//! padding, leaving exactly [`ShortId::LEN`] characters. Decoding
//! reverses the steps and `decode(encode(x)) == x` holds for every
//! identifier.
//!
//! The byte layout fed to Base64 is the identifier's little-endian field
//! serialization ([`Uuid::to_bytes_le`]), matching the layout existing
//! encoders used, so previously issued compact strings decode to the
//! same identifier.
//!
//! ## Examples
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

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{ParseError, Result};

/// A 128-bit identifier that displays and serializes as its compact
/// 22-character URL-safe form.
///
/// Wraps a [`Uuid`]; use it at API boundaries where the compact textual
/// form is the contract (URLs, serde payloads) and plain [`Uuid`]
/// everywhere else.
///
/// # Examples
///
/// ```rust
/// use valext::ShortId;
/// use uuid::Uuid;
///
/// let id = ShortId::from(Uuid::parse_str("d3b07384-d9a1-4b6e-9a3f-8fc2f0a7b1ff").unwrap());
/// let text = id.to_string();
/// assert_eq!(text.len(), ShortId::LEN);
/// assert_eq!(text.parse::<ShortId>().unwrap(), id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShortId(Uuid);

impl ShortId {
    /// Length of the compact encoding: 16 bytes of identifier is 24
    /// Base64 characters, of which the final two are always padding.
    pub const LEN: usize = 22;

    /// Returns the wrapped identifier.
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }

    /// Encodes the identifier as its 22-character compact form.
    ///
    /// The output never contains `/`, `+`, or `=`.
    #[must_use]
    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0.to_bytes_le())
    }

    /// Decodes a compact string produced by [`ShortId::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidCompactId`] when the input is not
    /// exactly 22 characters or is not valid URL-safe Base64 for 16
    /// bytes. [`ParseError::Empty`] is reported for blank input.
    pub fn decode(input: &str) -> Result<Self> {
        if input.len() != Self::LEN {
            return Err(ParseError::for_token(input, ParseError::InvalidCompactId));
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(input)
            .map_err(|_| ParseError::InvalidCompactId(input.to_string()))?;
        let raw: [u8; 16] = bytes
            .try_into()
            .map_err(|_| ParseError::InvalidCompactId(input.to_string()))?;
        Ok(ShortId(Uuid::from_bytes_le(raw)))
    }
}

impl From<Uuid> for ShortId {
    fn from(uuid: Uuid) -> Self {
        ShortId(uuid)
    }
}

impl From<ShortId> for Uuid {
    fn from(id: ShortId) -> Self {
        id.0
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for ShortId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        ShortId::decode(s)
    }
}

impl Serialize for ShortId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for ShortId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ShortId::decode(&s).map_err(serde::de::Error::custom)
    }
}

/// Encodes a 128-bit identifier into its 22-character compact form.
///
/// # Examples
///
/// ```rust
/// use valext::encode_short_id;
/// use uuid::Uuid;
///
/// let short = encode_short_id(&Uuid::nil());
/// assert_eq!(short, "AAAAAAAAAAAAAAAAAAAAAA");
/// ```
#[must_use]
pub fn encode_short_id(id: &Uuid) -> String {
    ShortId::from(*id).encode()
}

/// Decodes a 22-character compact string back to the identifier,
/// returning `default` for any malformed input (wrong length, invalid
/// Base64, or non-16-byte payload).
///
/// # Examples
///
/// ```rust
/// use valext::{decode_short_id, encode_short_id};
/// use uuid::Uuid;
///
/// let id = Uuid::parse_str("d3b07384-d9a1-4b6e-9a3f-8fc2f0a7b1ff").unwrap();
/// assert_eq!(decode_short_id(&encode_short_id(&id), Uuid::nil()), id);
/// assert_eq!(decode_short_id("too short", Uuid::nil()), Uuid::nil());
/// ```
#[must_use]
pub fn decode_short_id(input: &str, default: Uuid) -> Uuid {
    ShortId::decode(input).map_or(default, ShortId::into_uuid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_url_safe() {
        // Bytes chosen so standard Base64 would emit both '+' and '/'.
        let id = Uuid::from_bytes([0xfb, 0xef, 0xbe, 0xff, 0xff, 0xff, 0x3e, 0xfb, 0xef, 0xbe,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        let short = encode_short_id(&id);
        assert_eq!(short.len(), ShortId::LEN);
        assert!(!short.contains('/'));
        assert!(!short.contains('+'));
        assert!(!short.contains('='));
    }

    #[test]
    fn test_round_trip() {
        let id = Uuid::parse_str("d3b07384-d9a1-4b6e-9a3f-8fc2f0a7b1ff").unwrap();
        assert_eq!(decode_short_id(&encode_short_id(&id), Uuid::nil()), id);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert!(ShortId::decode("").is_err());
        assert!(ShortId::decode("AAAA").is_err());
        assert!(ShortId::decode("AAAAAAAAAAAAAAAAAAAAAAA").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_alphabet() {
        // Right length, characters outside the URL-safe alphabet.
        assert!(ShortId::decode("!!!!!!!!!!!!!!!!!!!!!!").is_err());
        assert_eq!(
            decode_short_id("!!!!!!!!!!!!!!!!!!!!!!", Uuid::nil()),
            Uuid::nil()
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let id = ShortId::from(Uuid::parse_str("d3b07384-d9a1-4b6e-9a3f-8fc2f0a7b1ff").unwrap());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json.len(), ShortId::LEN + 2);
        let back: ShortId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
