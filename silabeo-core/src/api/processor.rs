//! Main syllabifier implementation

use std::borrow::Cow;
use std::io::Read;
use std::time::Instant;

use crate::api::{
    CaseMode, Config, Error, Input, Output, ProcessingMetadata, ProcessingStats, Word,
};
use crate::breaker::SyllableBreaker;
use crate::tokenizer::{tokenize, Token};

/// Text syllabifier with a validated configuration
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Syllabifier {
    breaker: SyllableBreaker,
    config: Config,
}

impl Syllabifier {
    /// Create a syllabifier with the default configuration
    pub fn new() -> Self {
        Self {
            breaker: SyllableBreaker::new(),
            config: Config::default(),
        }
    }

    /// Create a syllabifier with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        log::trace!("syllabifier configured: {:?}", config);

        Ok(Self {
            breaker: SyllableBreaker::new(),
            config,
        })
    }

    /// Create a syllabifier using `separator` between syllables
    pub fn with_separator(separator: impl Into<String>) -> Result<Self, Error> {
        let config = Config::builder().separator(separator).build()?;
        Self::with_config(config)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Syllables of a single word, punctuation included as written
    pub fn syllables(&self, word: &str) -> Vec<String> {
        let folded = self.fold_case(word);
        let syllables: Vec<String> = self
            .breaker
            .split(&folded)
            .iter()
            .map(|s| s.to_string())
            .collect();
        syllables
    }

    /// Syllabify a whole text
    ///
    /// Total over its input: never fails, and empty text gives empty text.
    pub fn syllabify_text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 2);

        for (n, token) in tokenize(text).enumerate() {
            if n > 0 {
                out.push(' ');
            }
            self.render_token(token, &mut out);
        }

        out
    }

    /// Process input and return syllables with metadata
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let start = Instant::now();
        let text = input.into_text()?;

        let words: Vec<Word> = tokenize(&text).map(|token| self.analyze(token)).collect();
        let rendered = words
            .iter()
            .map(|w| w.render(&self.config.separator))
            .collect::<Vec<_>>()
            .join(" ");

        let stats = ProcessingStats::from_words(text.len(), &words);
        let duration = start.elapsed();
        log::debug!(
            "syllabified {} words into {} syllables in {:?}",
            stats.word_count,
            stats.syllable_count,
            duration
        );

        Ok(Output {
            text: rendered,
            words,
            metadata: ProcessingMetadata { duration, stats },
        })
    }

    /// Process input from a reader stream
    pub fn process_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<Output, Error> {
        self.process(Input::from_reader(reader))
    }

    /// Process independent inputs concurrently, preserving order
    #[cfg(feature = "parallel")]
    pub fn process_batch(&self, inputs: Vec<Input>) -> Vec<Result<Output, Error>> {
        use rayon::prelude::*;

        log::debug!("processing batch of {} inputs", inputs.len());
        inputs
            .into_par_iter()
            .map(|input| self.process(input))
            .collect()
    }

    fn fold_case<'a>(&self, core: &'a str) -> Cow<'a, str> {
        match self.config.case_mode {
            CaseMode::Preserve => Cow::Borrowed(core),
            CaseMode::Lowercase if core.chars().any(char::is_uppercase) => {
                Cow::Owned(core.to_lowercase())
            }
            CaseMode::Lowercase => Cow::Borrowed(core),
        }
    }

    fn render_token(&self, token: Token<'_>, out: &mut String) {
        if !token.is_punctuation_only() {
            let folded = self.fold_case(token.core);
            for (n, syllable) in self.breaker.split(&folded).iter().enumerate() {
                if n > 0 {
                    out.push_str(&self.config.separator);
                }
                out.push_str(syllable);
            }
        }
        out.push_str(token.trailing_punctuation);
    }

    fn analyze(&self, token: Token<'_>) -> Word {
        let syllables = if token.is_punctuation_only() {
            Vec::new()
        } else {
            self.syllables(token.core)
        };

        Word {
            original: token.core.to_string(),
            syllables,
            trailing_punctuation: token.trailing_punctuation.to_string(),
        }
    }
}

impl Default for Syllabifier {
    fn default() -> Self {
        Self::new()
    }
}
