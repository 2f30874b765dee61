//! mdpara - Markdown to paragraph records
//!
//! Reads the Markdown file named by `--in`, splits it into paragraphs and
//! writes them as a JSON array to the file named by `--out`.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use mdpara::RunConfig;

/// Main entry point for the mdpara CLI application
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = RunConfig::new(cli.input, cli.output).context("Invalid command-line arguments")?;

    mdpara::convert(&config).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            config.input().display(),
            config.output().display()
        )
    })?;

    Ok(())
}
