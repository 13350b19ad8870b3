//! Short ID generation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sid::{Options, ShortIdGenerator};
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Generate one or more short IDs.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Prefix joined to the ID body with ':'.
    #[arg(short, long)]
    prefix: Option<String>,

    /// Timestamp in milliseconds (defaults to now).
    #[arg(short, long)]
    timestamp: Option<u64>,

    /// Random segment length.
    #[arg(short, long)]
    length: Option<usize>,

    /// Number of IDs to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Require prefixes of 1 to 4 characters.
    #[arg(long)]
    strict_prefix: bool,
}

#[derive(Debug, Serialize)]
struct GeneratedIds {
    ids: Vec<String>,
}

impl GenerateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let generator = ShortIdGenerator::new(ctx.config.generator_config(self.strict_prefix));
        debug!(config = ?generator.config(), count = self.count, "generating short ids");

        let options = Options {
            timestamp: self.timestamp,
            length: self.length,
        };

        let ids = (0..self.count)
            .map(|_| generator.generate(self.prefix.as_deref(), options))
            .collect::<Result<Vec<_>, _>>()
            .map_err(CliError::from)?;

        match ctx.format {
            OutputFormat::Json => print_single(&GeneratedIds { ids }),
            OutputFormat::Table => {
                for id in ids {
                    println!("{id}");
                }
            }
        }

        Ok(())
    }
}
