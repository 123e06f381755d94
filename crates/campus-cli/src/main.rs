//! Operator CLI for Campus authorization
//!
//! Inspects the permission matrix and resource policies and evaluates single
//! requests offline against session and record documents.

use anyhow::Result;
use campus_cli::commands::{self, Command};
use campus_cli::{CliConfig, CliOverrides, OutputFormat};
use campus_core::config::{CampusConfig, ConfigMerge};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "campus-authz")]
#[command(about = "Campus - inspect role and tenant authorization policies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "campus.toml")]
    config: PathBuf,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::resolve(&cli.config)?;
    config.merge_with(&CliOverrides::from_flags(cli.verbose, cli.output));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let rendered = commands::run(&cli.command, config.output_format())?;
    println!("{rendered}");
    Ok(())
}
