//! # refcert CLI entry point
//!
//! Parses command-line arguments, resolves layered configuration, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use refcert_cli::cert::{run_cert, CertArgs};
use refcert_cli::config::CliConfig;
use refcert_cli::id::{run_id, IdArgs};
use refcert_cli::output::OutputFormat;

/// Referee certification tool.
///
/// Mints and inspects typed identifiers, bridges keys from the legacy
/// integer-keyed system, and queries certification sets.
#[derive(Parser, Debug)]
#[command(name = "refcert", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report format. Overrides the config file and `REFCERT_OUTPUT`.
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mint, inspect, and bridge typed identifiers.
    Id(IdArgs),

    /// Build, sort, and compare certification sets.
    Cert(CertArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = CliConfig::resolve(
        cli.config.as_deref(),
        |key| std::env::var(key).ok(),
        cli.output,
        cli.log_json,
    );

    let log_json = config.as_ref().map_or(cli.log_json, |c| c.log_json);
    init_tracing(cli.verbose, log_json);

    tracing::debug!("refcert CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = config.and_then(|config| {
        tracing::debug!(output = ?config.output, log_json = config.log_json, "resolved config");
        match &cli.command {
            Commands::Id(args) => run_id(args, &config),
            Commands::Cert(args) => run_cert(args, &config),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
