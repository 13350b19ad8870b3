//! Configuration from the environment.
//!
//! Handles:
//! - Default random segment length (`SID_RANDOM_LENGTH`)
//! - Prefix length bound (`SID_PREFIX_MAX`)
//! - Log output format (`SID_LOG_FORMAT`, `text` or `json`)
//!
//! Command-line flags override these values.

use sid::{GeneratorConfig, PrefixPolicy};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Random segment length used when `--length` is not given.
    pub random_length: Option<usize>,

    /// Upper bound on prefix length; prefixes are unchecked when unset.
    ///
    /// Generating without a prefix stays allowed when this is set.
    pub prefix_max: Option<usize>,

    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let random_length = lookup("SID_RANDOM_LENGTH").and_then(|s| s.parse().ok());

        let prefix_max = lookup("SID_PREFIX_MAX").and_then(|s| s.parse().ok());

        let log_format = lookup("SID_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or_default();

        Self {
            random_length,
            prefix_max,
            log_format,
        }
    }

    /// Build the generator configuration.
    ///
    /// `strict` selects the 1..=4 character prefix policy and takes precedence
    /// over `SID_PREFIX_MAX`.
    pub fn generator_config(&self, strict: bool) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();

        if let Some(length) = self.random_length {
            config.default_length = length;
        }

        config.prefix_policy = match (strict, self.prefix_max) {
            (true, _) => PrefixPolicy::strict(),
            (false, Some(max)) => PrefixPolicy::Bounded { min: 0, max },
            (false, None) => PrefixPolicy::Unchecked,
        };

        config
    }
}
