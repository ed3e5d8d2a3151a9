//! Input resolution: glob patterns, inline text, or stdin

use anyhow::{Context, Result};
use glob::glob;
use silabeo_core::Input;
use std::path::PathBuf;

use crate::error::CliError;

/// A named piece of input waiting to be syllabified
#[derive(Debug)]
pub struct Document {
    /// Display name: file path, `<text>` or `<stdin>`
    pub name: String,
    /// Source handed to the syllabifier
    pub input: Input,
}

impl Document {
    /// Inline text given on the command line
    pub fn inline(text: &str) -> Self {
        Self {
            name: "<text>".to_string(),
            input: Input::from_text(text),
        }
    }

    /// Standard input
    pub fn stdin() -> Self {
        Self {
            name: "<stdin>".to_string(),
            input: Input::from_reader(std::io::stdin()),
        }
    }

    /// A file on disk
    pub fn file(path: PathBuf) -> Self {
        Self {
            name: path.display().to_string(),
            input: Input::from_file(path),
        }
    }
}

/// Resolve file patterns to existing files, sorted and de-duplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}
