//! Short ID inspection.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use sid::ShortId;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Split a short ID into prefix, temporal, and random segments.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// The short ID to inspect.
    id: String,
}

#[derive(Debug, Serialize)]
struct ShortIdView {
    prefix: Option<String>,
    temporal: String,
    timestamp_ms: u64,
    /// RFC 3339 rendering, when the timestamp is a representable date.
    time: Option<String>,
    random: String,
}

impl From<&ShortId> for ShortIdView {
    fn from(id: &ShortId) -> Self {
        let time = i64::try_from(id.timestamp_ms())
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|t| t.to_rfc3339());

        Self {
            prefix: id.prefix().map(str::to_string),
            temporal: id.temporal().to_string(),
            timestamp_ms: id.timestamp_ms(),
            time,
            random: id.random().to_string(),
        }
    }
}

impl InspectCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = ShortId::parse(&self.id).map_err(CliError::from)?;
        let view = ShortIdView::from(&id);

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => {
                println!("prefix: {}", view.prefix.as_deref().unwrap_or("-"));
                println!("temporal: {}", view.temporal);
                println!("timestamp_ms: {}", view.timestamp_ms);
                println!("time: {}", view.time.as_deref().unwrap_or("-"));
                println!("random: {}", view.random);
            }
        }

        Ok(())
    }
}
