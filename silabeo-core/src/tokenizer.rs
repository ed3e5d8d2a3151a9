//! Whitespace tokenizer with trailing punctuation separation

use std::str::SplitWhitespace;

use crate::tables::{PunctTable, TRAILING_PUNCTUATION};

/// One whitespace-delimited unit of input text
///
/// `core` followed by `trailing_punctuation` is exactly the original unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Word part, possibly empty when the unit is all punctuation
    pub core: &'a str,
    /// Maximal trailing punctuation run
    pub trailing_punctuation: &'a str,
}

impl<'a> Token<'a> {
    /// Split a raw unit into core and trailing punctuation
    pub fn from_raw(raw: &'a str, table: &PunctTable) -> Self {
        let (core, trailing_punctuation) = raw.split_at(table.trailing_run_start(raw));
        Self {
            core,
            trailing_punctuation,
        }
    }

    /// True when there is nothing to syllabify
    pub fn is_punctuation_only(&self) -> bool {
        self.core.is_empty()
    }
}

/// Lazy token iterator over a text
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    units: SplitWhitespace<'a>,
    table: &'static PunctTable,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.units.next().map(|raw| Token::from_raw(raw, self.table))
    }
}

/// Tokenize text using the Spanish trailing punctuation set
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        units: text.split_whitespace(),
        table: &TRAILING_PUNCTUATION,
    }
}
