//! Random URL-safe segments.
//!
//! Not cryptographically secure: segments only need to be URL-safe and
//! vary between calls.

use rand::Rng;

/// The 64-symbol alphabet random segments are drawn from.
pub const URL_SAFE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Generates a random segment of `length` characters using the thread RNG.
#[must_use]
pub fn random_segment(length: usize) -> String {
    random_segment_with(&mut rand::rng(), length)
}

/// Generates a random segment of `length` characters from `rng`.
pub fn random_segment_with<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(URL_SAFE_ALPHABET[rng.random_range(0..URL_SAFE_ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_length_and_alphabet() {
        let segment = random_segment(12);
        assert_eq!(segment.len(), 12);
        assert!(segment.bytes().all(|b| URL_SAFE_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_zero_length_is_empty() {
        assert_eq!(random_segment(0), "");
    }

    #[test]
    fn test_successive_segments_differ() {
        assert_ne!(random_segment(16), random_segment(16));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = random_segment_with(&mut StdRng::seed_from_u64(7), 20);
        let b = random_segment_with(&mut StdRng::seed_from_u64(7), 20);
        assert_eq!(a, b);
    }
}
