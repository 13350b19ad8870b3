//! Base62 encode/decode commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Encode UUIDs as base62.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// UUIDs, hyphenated or not.
    #[arg(required = true)]
    uuids: Vec<String>,
}

/// Decode base62 SUUIDs.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Base62 SUUIDs.
    #[arg(required = true)]
    suuids: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct CodecRow {
    uuid: String,
    suuid: String,
}

impl EncodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = self
            .uuids
            .into_iter()
            .map(|uuid| -> Result<CodecRow> {
                let suuid = sid::encode(&uuid).map_err(CliError::from)?;
                Ok(CodecRow { uuid, suuid })
            })
            .collect::<Result<Vec<_>>>()?;

        print_output(&rows, ctx.format);
        Ok(())
    }
}

impl DecodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = self
            .suuids
            .into_iter()
            .map(|suuid| -> Result<CodecRow> {
                let uuid = sid::decode(&suuid).map_err(CliError::from)?;
                Ok(CodecRow { uuid, suuid })
            })
            .collect::<Result<Vec<_>>>()?;

        print_output(&rows, ctx.format);
        Ok(())
    }
}
