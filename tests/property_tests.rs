//! Property-based tests for the crate's round-trip and invariant
//! guarantees, complementing the example-driven integration tests.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;
use valext::*;

proptest! {
    // Compact identifier codec: decode(encode(x)) == x for every
    // 128-bit value, and the encoding stays inside the URL-safe shape.
    #[test]
    fn prop_short_id_round_trip(bits in any::<u128>()) {
        let id = Uuid::from_u128(bits);
        let short = encode_short_id(&id);
        prop_assert_eq!(short.len(), 22);
        prop_assert!(!short.contains('/'));
        prop_assert!(!short.contains('+'));
        prop_assert!(!short.contains('='));
        prop_assert_eq!(decode_short_id(&short, Uuid::nil()), id);
    }

    // Decoding anything that is not exactly 22 characters yields the
    // caller's default.
    #[test]
    fn prop_short_id_rejects_wrong_length(s in "[A-Za-z0-9_-]{0,30}") {
        prop_assume!(s.len() != 22);
        let fallback = Uuid::from_u128(7);
        prop_assert_eq!(decode_short_id(&s, fallback), fallback);
    }

    // Camel starts lowercase, Pascal starts uppercase, and both are
    // built from the same word sequence.
    #[test]
    fn prop_camel_and_pascal_agree(s in "\\PC{0,40}") {
        let camel = to_camel_case(&s);
        let pascal = to_pascal_case(&s);
        if let Some(first) = camel.chars().next() {
            prop_assert!(!first.is_uppercase());
        }
        if let Some(first) = pascal.chars().next() {
            prop_assert!(!first.is_lowercase());
        }
        prop_assert_eq!(camel.to_lowercase(), pascal.to_lowercase());
        prop_assert_eq!(
            split_words(&s).concat().to_lowercase(),
            pascal.to_lowercase()
        );
    }

    // Slug output never leaves the URL-safe alphabet and never has a
    // dash at either end.
    #[test]
    fn prop_slug_alphabet(s in "\\PC{0,40}") {
        let slug = to_slug(&s);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
    }

    // Trimming trailing zeros never changes the numeric value.
    #[test]
    fn prop_trailing_zero_preserves_value(units in any::<i64>(), scale in 0u32..15) {
        let value = Decimal::new(units, scale);
        let text = value.to_string();
        let trimmed = remove_trailing_zero(&text);
        prop_assert_eq!(
            try_parse_decimal(&trimmed).unwrap(),
            try_parse_decimal(&text).unwrap()
        );
    }

    // Reversal is an involution on grapheme clusters.
    #[test]
    fn prop_reverse_involution(s in "\\PC{0,40}") {
        prop_assert_eq!(reverse(&reverse(&s)), s);
    }

    // Masking preserves character count and the unmasked edges, or
    // leaves short input untouched.
    #[test]
    fn prop_mask_preserves_length(s in "\\PC{0,40}", start in 0usize..6, end in 0usize..6) {
        let masked = mask(&s, start, end, '*');
        prop_assert_eq!(masked.chars().count(), s.chars().count());
        if s.chars().count() <= start + end {
            prop_assert_eq!(masked, s);
        } else {
            let prefix: String = s.chars().take(start).collect();
            prop_assert!(masked.starts_with(&prefix));
        }
    }

    // Boolean classification and parsing agree on every input: a token
    // that classifies as boolean never falls back to the default.
    #[test]
    fn prop_boolean_classify_parse_agree(s in "\\PC{0,12}") {
        if is_boolean(&s) {
            prop_assert_eq!(parse_boolean(&s, true), parse_boolean(&s, false));
        } else {
            prop_assert!(parse_boolean(&s, true));
            prop_assert!(!parse_boolean(&s, false));
        }
    }

    // Base64 transport helpers round-trip arbitrary text.
    #[test]
    fn prop_base64_round_trip(s in "\\PC{0,40}") {
        prop_assert_eq!(from_base64(&to_base64(&s)), s);
    }
}
