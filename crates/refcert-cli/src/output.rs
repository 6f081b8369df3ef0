//! # Output Rendering
//!
//! Every subcommand produces a serializable report. In `json` mode the
//! report is printed as pretty JSON; in `text` mode a human-readable
//! rendering is printed instead.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for command reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Write `report` to `out` in the requested format.
pub fn render<T, W>(
    out: &mut W,
    format: OutputFormat,
    report: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<()>
where
    T: Serialize,
    W: Write,
{
    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report")?
        }
        OutputFormat::Text => text(report),
    };
    writeln!(out, "{rendered}").context("failed to write output")
}

/// Write `report` to stdout in the requested format.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    report: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<()> {
    render(&mut std::io::stdout().lock(), format, report, text)
}
