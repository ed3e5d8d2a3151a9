//! Output types for the syllabification API

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Processing output with per-word detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Syllabified text, words joined by single spaces
    pub text: String,
    /// Every whitespace-delimited token, in order
    pub words: Vec<Word>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// One token of the input with its syllables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Token text without the trailing punctuation, as written
    pub original: String,
    /// Syllables after case folding; empty for punctuation-only tokens
    pub syllables: Vec<String>,
    /// Trailing punctuation, kept verbatim
    pub trailing_punctuation: String,
}

impl Word {
    /// True when the token had no word part
    pub fn is_punctuation_only(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Render the token with `separator` between syllables
    pub fn render(&self, separator: &str) -> String {
        let mut rendered = self.syllables.join(separator);
        rendered.push_str(&self.trailing_punctuation);
        rendered
    }
}

/// Metadata about the processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Counters
    pub stats: ProcessingStats,
}

/// Processing statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Total bytes of input text
    pub bytes_processed: usize,
    /// Tokens with a word part
    pub word_count: usize,
    /// Syllables across all words
    pub syllable_count: usize,
    /// Average syllables per word
    pub avg_syllables_per_word: f32,
}

impl ProcessingStats {
    pub(crate) fn from_words(bytes_processed: usize, words: &[Word]) -> Self {
        let word_count = words.iter().filter(|w| !w.is_punctuation_only()).count();
        let syllable_count = words.iter().map(|w| w.syllables.len()).sum();
        let avg_syllables_per_word = if word_count > 0 {
            syllable_count as f32 / word_count as f32
        } else {
            0.0
        };

        Self {
            bytes_processed,
            word_count,
            syllable_count,
            avg_syllables_per_word,
        }
    }
}
