//! silabeo command-line entry point

use anyhow::Result;
use clap::Parser;
use silabeo_cli::commands::Commands;

/// Split Spanish text into syllables
#[derive(Debug, Parser)]
#[command(name = "silabeo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
