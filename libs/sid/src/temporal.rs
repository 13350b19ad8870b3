//! Fixed-width temporal segment encoding.
//!
//! A 64-bit timestamp is written as 8 big-endian bytes and encoded with
//! URL-safe base64 without padding, which always yields 11 characters.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use tracing::trace;

use crate::{SidError, SidResult};

/// Width of an encoded temporal segment.
pub const TEMPORAL_LEN: usize = 11;

/// Encodes a timestamp as an 11-character URL-safe segment.
#[must_use]
pub fn encode_timestamp(timestamp: u64) -> String {
    URL_SAFE_NO_PAD.encode(timestamp.to_be_bytes())
}

/// Decodes an 11-character temporal segment back into its timestamp.
///
/// # Errors
///
/// Returns [`SidError::InvalidBase64Character`] for a character outside the
/// URL-safe alphabet, or [`SidError::InvalidTemporalSegment`] if the segment
/// has the wrong width or non-canonical trailing bits.
pub fn decode_timestamp(segment: &str) -> SidResult<u64> {
    if let Some((position, character)) = segment
        .chars()
        .enumerate()
        .find(|&(_, c)| !is_url_safe(c))
    {
        trace!(%character, position, "rejected temporal segment");
        return Err(SidError::InvalidBase64Character {
            character,
            position,
        });
    }

    if segment.len() != TEMPORAL_LEN {
        return Err(SidError::InvalidTemporalSegment {
            message: format!(
                "expected {TEMPORAL_LEN} characters, got {}",
                segment.len()
            ),
        });
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| SidError::InvalidTemporalSegment {
            message: e.to_string(),
        })?;
    let bytes: [u8; 8] = bytes
        .try_into()
        .map_err(|_| SidError::InvalidTemporalSegment {
            message: "segment does not hold 8 bytes".to_string(),
        })?;

    Ok(u64::from_be_bytes(bytes))
}

/// Current time in milliseconds since the Unix epoch.
///
/// Clocks set before the epoch read as zero.
#[must_use]
pub fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Returns true if `c` belongs to the URL-safe base64 alphabet.
pub(crate) fn is_url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
