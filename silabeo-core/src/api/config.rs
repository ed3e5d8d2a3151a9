//! Configuration API for syllabification

use crate::api::Error;
use crate::classifier::{CharacterClassifier, SpanishClassifier};

/// Default configuration constants
pub mod defaults {
    /// Middle dot, the externally visible separator
    pub const SEPARATOR: &str = "\u{00B7}";

    /// Hyphen separator used by the plain-text rendering
    pub const LEGACY_SEPARATOR: &str = "-";
}

/// How the casing of each word is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Lower-case every word before splitting
    #[default]
    Lowercase,
    /// Keep the original casing; boundaries are the same either way
    Preserve,
}

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) separator: String,
    pub(crate) case_mode: CaseMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: defaults::SEPARATOR.to_string(),
            case_mode: CaseMode::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Separator placed between syllables
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Case rendering mode
    pub fn case_mode(&self) -> CaseMode {
        self.case_mode
    }

    /// Validate the configuration
    ///
    /// A separator containing whitespace would be split apart again by the
    /// tokenizer, and one containing letters would merge into syllables.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.separator.is_empty() {
            return Err(Error::Configuration(
                "separator must not be empty".into(),
            ));
        }

        if self.separator.chars().any(char::is_whitespace) {
            return Err(Error::Configuration(format!(
                "separator {:?} must not contain whitespace",
                self.separator
            )));
        }

        let classifier = SpanishClassifier::new();
        if let Some(letter) = self
            .separator
            .chars()
            .find(|&c| classifier.is_vowel(c) || classifier.is_consonant(c))
        {
            return Err(Error::Configuration(format!(
                "separator {:?} must not contain the letter '{}'",
                self.separator, letter
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    separator: Option<String>,
    case_mode: Option<CaseMode>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the syllable separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Set the case rendering mode
    pub fn case_mode(mut self, mode: CaseMode) -> Self {
        self.case_mode = Some(mode);
        self
    }

    /// Shorthand for `case_mode(CaseMode::Preserve)` when `preserve` is true
    pub fn preserve_case(self, preserve: bool) -> Self {
        self.case_mode(if preserve {
            CaseMode::Preserve
        } else {
            CaseMode::Lowercase
        })
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(separator) = self.separator {
            config.separator = separator;
        }

        if let Some(mode) = self.case_mode {
            config.case_mode = mode;
        }

        config.validate()?;
        Ok(config)
    }
}
