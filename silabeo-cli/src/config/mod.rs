//! Configuration file support
//!
//! Settings are read from TOML; command-line flags take precedence.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::commands::process::OutputFormat;
use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Syllabification configuration
    #[serde(default)]
    pub syllabification: SyllabificationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Syllabification-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SyllabificationConfig {
    /// Separator placed between syllables
    pub separator: String,

    /// Keep the original casing of each word
    pub preserve_case: bool,
}

impl Default for SyllabificationConfig {
    fn default() -> Self {
        Self {
            separator: silabeo_core::defaults::SEPARATOR.to_string(),
            preserve_case: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl OutputConfig {
    /// Parse `default_format` into a known format
    pub fn format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}' (expected text, json or markdown)",
                self.default_format
            ))
            .into()
        })
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Render a commented template with the default values
    pub fn template() -> Result<String> {
        let body = toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default configuration")?;

        Ok(format!(
            "# silabeo configuration\n\
             #\n\
             # [syllabification]\n\
             #   separator     - string placed between syllables (no letters, no spaces)\n\
             #   preserve_case - keep original casing instead of lower-casing words\n\
             # [output]\n\
             #   default_format - text, json or markdown\n\
             #   pretty_json    - indent JSON output\n\
             \n{body}"
        ))
    }
}
