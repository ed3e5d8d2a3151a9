//! Public API for syllabification
//!
//! Wraps the tokenizer and breaker behind a configured [`Syllabifier`] that
//! accepts text, bytes, files, or readers.

mod config;
mod error;
mod input;
mod output;
mod processor;


pub use config::{defaults, CaseMode, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, ProcessingStats, Word};
pub use processor::Syllabifier;
