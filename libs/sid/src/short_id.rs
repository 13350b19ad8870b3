//! Short ID assembly: `[<prefix>:]<temporal><random>`.
//!
//! The temporal segment is always [`TEMPORAL_LEN`] characters, so a body can
//! be split back into its parts without knowing the random length.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::random::random_segment;
use crate::temporal::{decode_timestamp, encode_timestamp, is_url_safe, now_millis, TEMPORAL_LEN};
use crate::{SidError, SidResult};

/// Separator between prefix and body.
pub const SEPARATOR: char = ':';

/// Default length of the random segment.
pub const DEFAULT_RANDOM_LENGTH: usize = 8;

/// Default upper bound on the random segment length.
pub const DEFAULT_MAX_LENGTH: usize = 256;

/// Returns true if `prefix` contains no [`SEPARATOR`].
///
/// Usable in const context so typed IDs can check their prefix at compile time.
#[must_use]
pub const fn is_valid_prefix(prefix: &str) -> bool {
    let bytes = prefix.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == SEPARATOR as u8 {
            return false;
        }
        i += 1;
    }
    true
}

/// Per-call overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Timestamp in milliseconds; the current time when absent.
    pub timestamp: Option<u64>,
    /// Random segment length; the configured default when absent.
    pub length: Option<usize>,
}

impl Options {
    /// Options with a fixed timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Options with a fixed random segment length.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
}

/// How prefixes are validated.
///
/// Under every policy a prefix may not contain [`SEPARATOR`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PrefixPolicy {
    /// Any prefix is accepted; an empty prefix means no prefix.
    #[default]
    Unchecked,
    /// Prefix length in characters must lie in `min..=max`.
    ///
    /// An empty prefix counts as length zero.
    Bounded { min: usize, max: usize },
}

impl PrefixPolicy {
    /// One to four characters, rejecting empty prefixes.
    #[must_use]
    pub const fn strict() -> Self {
        Self::Bounded { min: 1, max: 4 }
    }

    /// Validates `prefix`, returning it if a separator should be emitted.
    fn apply<'a>(&self, prefix: Option<&'a str>) -> SidResult<Option<&'a str>> {
        let prefix = prefix.unwrap_or("");
        let reject = |reason: String| {
            debug!(prefix, %reason, "rejected prefix");
            Err(SidError::InvalidPrefix {
                prefix: prefix.to_string(),
                reason,
            })
        };

        if !is_valid_prefix(prefix) {
            return reject(format!("must not contain '{SEPARATOR}'"));
        }

        if let Self::Bounded { min, max } = *self {
            let len = prefix.chars().count();
            if len < min || len > max {
                return reject(format!("length must be between {min} and {max}, got {len}"));
            }
        }

        Ok((!prefix.is_empty()).then_some(prefix))
    }
}

/// Generator-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Random segment length used when [`Options::length`] is absent.
    pub default_length: usize,
    /// Largest random segment length accepted.
    pub max_length: usize,
    pub prefix_policy: PrefixPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_RANDOM_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            prefix_policy: PrefixPolicy::Unchecked,
        }
    }
}

/// Assembles short IDs according to a [`GeneratorConfig`].
///
/// Stateless apart from its configuration; share freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortIdGenerator {
    config: GeneratorConfig,
}

impl ShortIdGenerator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the generator configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a short ID.
    ///
    /// # Errors
    ///
    /// Returns [`SidError::InvalidPrefix`] if the prefix is rejected by the
    /// policy, or [`SidError::InvalidLength`] if the random length exceeds
    /// the configured maximum.
    pub fn generate(&self, prefix: Option<&str>, options: Options) -> SidResult<String> {
        let prefix = self.config.prefix_policy.apply(prefix)?;

        let length = options.length.unwrap_or(self.config.default_length);
        if length > self.config.max_length {
            return Err(SidError::InvalidLength {
                length,
                max: self.config.max_length,
            });
        }

        let timestamp = options.timestamp.unwrap_or_else(now_millis);
        ShortId::generate(prefix, timestamp, length).map(|id| id.to_string())
    }
}

/// Generates a short ID with the default configuration.
///
/// # Errors
///
/// See [`ShortIdGenerator::generate`].
pub fn generate_short_id(prefix: Option<&str>, options: Options) -> SidResult<String> {
    ShortIdGenerator::default().generate(prefix, options)
}

/// A short ID split into its segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ShortId {
    prefix: Option<String>,
    temporal: String,
    random: String,
    timestamp_ms: u64,
}

impl ShortId {
    /// Builds a short ID with a fresh random segment of `length` characters.
    ///
    /// An empty prefix is treated as none. No length policy is applied.
    ///
    /// # Errors
    ///
    /// Returns [`SidError::InvalidPrefix`] if the prefix contains
    /// [`SEPARATOR`], since the result could not be parsed back.
    pub fn generate(prefix: Option<&str>, timestamp_ms: u64, length: usize) -> SidResult<Self> {
        if let Some(prefix) = prefix.filter(|p| !is_valid_prefix(p)) {
            return Err(SidError::InvalidPrefix {
                prefix: prefix.to_string(),
                reason: format!("must not contain '{SEPARATOR}'"),
            });
        }

        Ok(Self {
            prefix: prefix.filter(|p| !p.is_empty()).map(str::to_string),
            temporal: encode_timestamp(timestamp_ms),
            random: random_segment(length),
            timestamp_ms,
        })
    }

    /// Parses a short ID.
    ///
    /// # Errors
    ///
    /// Returns [`SidError::Empty`] for empty input,
    /// [`SidError::InvalidBase64Character`] for a body character outside the
    /// URL-safe alphabet (position is relative to the body), or
    /// [`SidError::InvalidTemporalSegment`] if the body is too short.
    pub fn parse(s: &str) -> SidResult<Self> {
        if s.is_empty() {
            return Err(SidError::Empty);
        }

        let (prefix, body) = match s.split_once(SEPARATOR) {
            Some((prefix, body)) => (Some(prefix.to_string()), body),
            None => (None, s),
        };

        if let Some((position, character)) =
            body.chars().enumerate().find(|&(_, c)| !is_url_safe(c))
        {
            return Err(SidError::InvalidBase64Character {
                character,
                position,
            });
        }

        if body.len() < TEMPORAL_LEN {
            return Err(SidError::InvalidTemporalSegment {
                message: format!(
                    "body must be at least {TEMPORAL_LEN} characters, got {}",
                    body.len()
                ),
            });
        }

        let (temporal, random) = body.split_at(TEMPORAL_LEN);
        let timestamp_ms = decode_timestamp(temporal)?;

        Ok(Self {
            prefix,
            temporal: temporal.to_string(),
            random: random.to_string(),
            timestamp_ms,
        })
    }

    /// The prefix, if the ID carries one.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The encoded temporal segment.
    pub fn temporal(&self) -> &str {
        &self.temporal
    }

    /// The random segment.
    pub fn random(&self) -> &str {
        &self.random
    }

    /// The decoded timestamp in milliseconds.
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{prefix}{SEPARATOR}")?;
        }
        write!(f, "{}{}", self.temporal, self.random)
    }
}

impl std::str::FromStr for ShortId {
    type Err = SidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
