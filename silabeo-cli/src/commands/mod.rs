//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

pub mod generate_config;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Syllabify text from files, inline text, or stdin
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed by the list command
    pub fn render(&self) -> String {
        match self {
            ListCommands::Formats => {
                let mut listing = String::from("Available output formats:\n");
                for format in process::OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                        listing.push_str(&format!("  {:<10} {}\n", value.get_name(), help));
                    }
                }
                listing
            }
        }
    }
}
