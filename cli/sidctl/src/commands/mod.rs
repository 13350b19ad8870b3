//! CLI commands.

mod codec;
mod generate;
mod inspect;
mod uuid;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// sid - Generate sortable short IDs and encode UUIDs as base62.
#[derive(Debug, Parser)]
#[command(name = "sid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log filter (overrides RUST_LOG), e.g. `debug` or `sid=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate short IDs.
    Generate(generate::GenerateCommand),

    /// Encode UUIDs as base62 SUUIDs.
    Encode(codec::EncodeCommand),

    /// Decode base62 SUUIDs into UUIDs.
    Decode(codec::DecodeCommand),

    /// Generate UUIDs alongside their SUUIDs.
    Uuid(uuid::UuidCommand),

    /// Split a short ID into its segments.
    Inspect(inspect::InspectCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// The log filter given on the command line.
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            config,
            format: self.format,
        };

        match self.command {
            Commands::Generate(cmd) => cmd.run(&ctx),
            Commands::Encode(cmd) => cmd.run(&ctx),
            Commands::Decode(cmd) => cmd.run(&ctx),
            Commands::Uuid(cmd) => cmd.run(&ctx),
            Commands::Inspect(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("sid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}
