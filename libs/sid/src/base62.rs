//! Base62 codec for 128-bit values.
//!
//! Values are written most-significant digit first using the alphabet
//! `0-9A-Za-z`, where each symbol's digit value is its index. The output is
//! minimal: no padding, and zero encodes to the single character `0`.
//!
//! A full 128-bit value needs at most 22 digits, since 62^22 > 2^128.

use tracing::trace;

use crate::{SidError, SidResult};

/// The base62 alphabet, ordered by digit value.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Maximum encoded length of a 128-bit value.
pub const MAX_ENCODED_LEN: usize = 22;

/// Number of hex digits in a UUID once hyphens are removed.
const UUID_HEX_LEN: usize = 32;

const BASE: u128 = 62;

/// Encodes a UUID string as base62.
///
/// Hyphens are optional and ignored; the remaining text must be exactly 32
/// hex digits in either case.
///
/// # Errors
///
/// Returns [`SidError::MalformedUuid`] if the input is not a 128-bit hex value.
pub fn encode(uuid: &str) -> SidResult<String> {
    let value = parse_uuid_hex(uuid)?;
    Ok(encode_u128(value))
}

/// Decodes a base62 string into a hyphenated, lowercase UUID string.
///
/// # Errors
///
/// Returns [`SidError::InvalidBase62Character`] naming the first character
/// outside the alphabet, [`SidError::Empty`] for empty input, or
/// [`SidError::Overflow`] if the value does not fit in 128 bits.
pub fn decode(encoded: &str) -> SidResult<String> {
    let value = decode_u128(encoded)?;
    Ok(uuid::Uuid::from_u128(value).hyphenated().to_string())
}

/// Encodes a 128-bit value as a minimal base62 string.
#[must_use]
pub fn encode_u128(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut i = buf.len();
    while value > 0 {
        i -= 1;
        buf[i] = BASE62_ALPHABET[(value % BASE) as usize];
        value /= BASE;
    }

    buf[i..].iter().map(|&b| char::from(b)).collect()
}

/// Decodes a base62 string into a 128-bit value.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_u128(encoded: &str) -> SidResult<u128> {
    if encoded.is_empty() {
        return Err(SidError::Empty);
    }

    let mut value: u128 = 0;
    for (position, character) in encoded.chars().enumerate() {
        let Some(digit) = digit_value(character) else {
            trace!(%character, position, "rejected base62 input");
            return Err(SidError::InvalidBase62Character {
                character,
                position,
            });
        };
        value = value
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(u128::from(digit)))
            .ok_or(SidError::Overflow)?;
    }

    Ok(value)
}

/// Returns the digit value of a base62 symbol.
fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    let b = c as u8;
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'Z' => Some(b - b'A' + 10),
        b'a'..=b'z' => Some(b - b'a' + 36),
        _ => None,
    }
}

/// Parses a UUID written as 32 hex digits, ignoring hyphens.
pub(crate) fn parse_uuid_hex(input: &str) -> SidResult<u128> {
    let malformed = |reason: &str| SidError::MalformedUuid {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let hex: String = input.chars().filter(|&c| c != '-').collect();
    if hex.len() != UUID_HEX_LEN {
        return Err(malformed("expected 32 hex digits"));
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed("contains non-hex characters"));
    }

    u128::from_str_radix(&hex, 16).map_err(|e| malformed(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NIL: &str = "00000000-0000-0000-0000-000000000000";
    const MAX: &str = "ffffffff-ffff-ffff-ffff-ffffffffffff";

    #[test]
    fn test_alphabet_is_ordered() {
        assert_eq!(BASE62_ALPHABET.len(), 62);
        for (i, &b) in BASE62_ALPHABET.iter().enumerate() {
            assert_eq!(digit_value(char::from(b)), Some(i as u8));
        }
    }

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode_u128(0), "0");
        assert_eq!(encode_u128(61), "z");
        assert_eq!(encode_u128(62), "10");
        assert_eq!(encode_u128(3843), "zz");
    }

    #[test]
    fn test_nil_uuid_encodes_to_zero_digit() {
        assert_eq!(encode(NIL).unwrap(), "0");
        assert_eq!(decode("0").unwrap(), NIL);
    }

    #[test]
    fn test_max_uuid_encoding() {
        let encoded = encode(MAX).unwrap();
        assert!(encoded.len() <= MAX_ENCODED_LEN);
        assert_eq!(encoded, "7n42DGM5Tflk9n8mt7Fhc7");
        assert_ne!(encoded, encode(NIL).unwrap());
        assert_eq!(decode(&encoded).unwrap(), MAX);
    }

    #[test]
    fn test_known_uuid_roundtrip() {
        let uuid = "550e8400-e29b-41d4-a716-446655440000";
        let encoded = encode(uuid).unwrap();
        assert_eq!(decode(&encoded).unwrap(), uuid);
    }

    #[test]
    fn test_encode_normalizes_case_and_hyphens() {
        let lower = encode("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(encode("550E8400E29B41D4A716446655440000").unwrap(), lower);
        assert_eq!(
            decode(&lower).unwrap(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_encode_rejects_wrong_length() {
        let err = encode("550e8400-e29b-41d4-a716").unwrap_err();
        assert!(matches!(err, SidError::MalformedUuid { .. }));
    }

    #[test]
    fn test_encode_rejects_non_hex() {
        let err = encode("550e8400-e29b-41d4-a716-44665544000g").unwrap_err();
        assert!(matches!(err, SidError::MalformedUuid { .. }));
        let err = encode("+50e8400e29b41d4a716446655440000").unwrap_err();
        assert!(matches!(err, SidError::MalformedUuid { .. }));
    }

    #[test]
    fn test_decode_rejects_invalid_character() {
        let err = decode("abc-def").unwrap_err();
        assert_eq!(
            err,
            SidError::InvalidBase62Character {
                character: '-',
                position: 3
            }
        );
        assert!(decode("ab_").unwrap_err().is_alphabet_error());
        assert!(decode("é").unwrap_err().is_alphabet_error());
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert_eq!(decode("").unwrap_err(), SidError::Empty);
    }

    #[test]
    fn test_decode_rejects_overflow() {
        assert_eq!(decode("zzzzzzzzzzzzzzzzzzzzzz").unwrap_err(), SidError::Overflow);
        // One past u128::MAX.
        assert_eq!(decode("7n42DGM5Tflk9n8mt7Fhc8").unwrap_err(), SidError::Overflow);
    }

    #[test]
    fn test_decode_pads_small_values() {
        assert_eq!(decode("z").unwrap(), "00000000-0000-0000-0000-00000000003d");
    }

    proptest! {
        #[test]
        fn prop_uuid_roundtrip(value in any::<u128>()) {
            let uuid = uuid::Uuid::from_u128(value).hyphenated().to_string();
            let encoded = encode(&uuid).unwrap();
            prop_assert!(encoded.len() <= MAX_ENCODED_LEN);
            prop_assert_eq!(decode(&encoded).unwrap(), uuid);
        }

        #[test]
        fn prop_encoded_roundtrip(value in any::<u128>()) {
            let encoded = encode_u128(value);
            prop_assert!(encoded == "0" || !encoded.starts_with('0'));
            let uuid = decode(&encoded).unwrap();
            prop_assert_eq!(encode(&uuid).unwrap(), encoded);
        }
    }
}
