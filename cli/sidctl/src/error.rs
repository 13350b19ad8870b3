//! Error handling and display for the CLI.

use colored::Colorize;
use sid::SidError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("UUID version {0} requires --name")]
    MissingName(u8),

    #[error(transparent)]
    Sid(#[from] SidError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let sid_err = err.downcast_ref::<SidError>().or_else(|| {
        err.downcast_ref::<CliError>().and_then(|e| match e {
            CliError::Sid(inner) => Some(inner),
            _ => None,
        })
    });

    if let Some(hint) = sid_err.and_then(hint_for) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint_for(err: &SidError) -> Option<&'static str> {
    match err {
        SidError::InvalidBase62Character { .. } => {
            Some("SUUIDs only contain 0-9, A-Z and a-z. Did you pass a short ID or a UUID?")
        }
        SidError::InvalidBase64Character { .. } => {
            Some("Short ID bodies only contain A-Z, a-z, 0-9, '-' and '_'.")
        }
        SidError::MalformedUuid { .. } => {
            Some("Expected 32 hex digits, optionally hyphenated as 8-4-4-4-12.")
        }
        SidError::Overflow => Some("The value is too large to be a UUID."),
        SidError::InvalidPrefix { .. } => {
            Some("Adjust the prefix, or unset SID_PREFIX_MAX / drop --strict-prefix.")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_alphabet_errors() {
        let err = SidError::InvalidBase62Character {
            character: '-',
            position: 0,
        };
        assert!(hint_for(&err).is_some());
        assert!(hint_for(&SidError::Empty).is_none());
    }

    #[test]
    fn test_cli_error_wraps_sid_error() {
        let err: CliError = SidError::Overflow.into();
        assert_eq!(err.to_string(), "base62 value exceeds 128 bits");
    }
}
