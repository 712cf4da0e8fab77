//! # bosh CLI entry point
//!
//! Parses command-line arguments, sets up logging, loads the optional
//! configuration file and dispatches to the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bosh_cli::config::CliConfig;
use bosh_cli::rules::{run_rules, RulesArgs};
use bosh_cli::validate::{run_validate, ValidateArgs};

/// bosh: Boutiques tool descriptor validator.
///
/// Checks descriptors against the descriptor JSON Schema, then runs the
/// semantic consistency rules, and prints every finding.
#[derive(Parser, Debug)]
#[command(name = "bosh", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate tool descriptors.
    Validate(ValidateArgs),

    /// List the validation rules of a profile.
    Rules(RulesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Without -v, RUST_LOG decides; default is warnings only.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("bosh CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match CliConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &config),
        Commands::Rules(args) => run_rules(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
