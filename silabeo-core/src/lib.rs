//! Spanish orthographic syllabification
//!
//! This crate splits Spanish words into syllables with a greedy, single-pass
//! scanner and reassembles text with the boundaries marked. Classification
//! and cluster tables are compile-time constants, so every call is pure and
//! can run on any number of threads at once.
//!
//! # Architecture
//!
//! - **Tokenizer**: whitespace split, trailing punctuation separated
//! - **Classifier**: strong vowel, weak vowel, consonant, or other
//! - **Breaker**: three-character lookahead scanner producing syllables
//! - **API**: [`Syllabifier`] with a validated [`Config`]
//!
//! # Example
//!
//! ```rust
//! use silabeo_core::{syllabify, Config, Syllabifier};
//!
//! assert_eq!(syllabify("Hola, ¿cómo estás?"), "ho·la, ¿có·mo es·tás?");
//!
//! let config = Config::builder().separator("-").preserve_case(true).build().unwrap();
//! let syllabifier = Syllabifier::with_config(config).unwrap();
//! assert_eq!(syllabifier.syllabify_text("Murciélago"), "Mur-cié-la-go");
//! ```

pub mod api;
pub mod breaker;
pub mod character_window;
pub mod classifier;
pub mod tables;
pub mod tokenizer;

pub use api::{
    defaults, CaseMode, Config, ConfigBuilder, Error, Input, Output, ProcessingMetadata,
    ProcessingStats, Result, Syllabifier, Word,
};
pub use breaker::{BreakDecision, SyllableBreaker, Syllables};
pub use classifier::{CharClass, CharacterClassifier, SpanishClassifier};
pub use tokenizer::{tokenize, Token, Tokens};

/// Syllabify `text` with the default configuration
///
/// Each word is lower-cased and its syllables joined with a middle dot;
/// trailing punctuation stays in place and words are separated by single
/// spaces.
pub fn syllabify(text: &str) -> String {
    Syllabifier::new().syllabify_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllabify_entry_point() {
        assert_eq!(syllabify("casa"), "ca·sa");
        assert_eq!(syllabify(""), "");
        assert_eq!(syllabify("¡Hola!"), "¡ho·la!");
    }

    #[test]
    fn test_syllabify_is_deterministic() {
        let text = "El murciélago come frutas en la cueva.";
        assert_eq!(syllabify(text), syllabify(text));
    }
}
