//! update-rdkit - sync the vendored RDKit sources into the Rosetta tree

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use rdkit_sync::ops::{update, UpdateOptions};

mod cli;

use cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Any argument at all, parseable or not, means usage
    match Cli::try_parse() {
        Ok(cli) if !cli.wants_usage() => {}
        _ => {
            println!("{}", Cli::command().render_long_help());
            return Ok(());
        }
    }

    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("rdkit_sync=info,update_rdkit=info"))
        .with_target(false)
        .without_time()
        .init();

    let base = std::env::current_dir().context("failed to determine current directory")?;
    let opts = UpdateOptions::from_base(base)?;
    let report = update(&opts)?;

    if !report.warnings.is_empty() {
        tracing::warn!(
            "{} sources left out of {}",
            report.warnings.len(),
            report.settings_path.display()
        );
    }

    Ok(())
}
