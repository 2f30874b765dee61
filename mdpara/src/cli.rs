//! Command-line interface definitions for mdpara

use clap::Parser;

/// CLI structure for the mdpara application
#[derive(Parser, Debug)]
#[command(name = "mdpara")]
#[command(version)]
#[command(about = "Convert a Markdown file into JSON paragraph records", long_about = None)]
pub struct Cli {
    /// Source Markdown file
    #[arg(long = "in", value_name = "PATH")]
    pub input: String,

    /// Destination JSON file (created or truncated)
    #[arg(long = "out", value_name = "PATH")]
    pub output: String,
}
