//! Syllable breaker
//!
//! A greedy left-to-right scanner. At each character it looks at the window
//! `(c1, c2, c3)` and takes a final decision; boundaries are never revisited.
//!
//! | window            | decision                                  |
//! |-------------------|-------------------------------------------|
//! | V C V             | boundary after `c1`                       |
//! | V C C (cluster)   | boundary after `c1`                       |
//! | V C C (other)     | boundary after `c2`                       |
//! | V V (strong pair) | boundary after `c1` (hiatus)              |
//! | V V (otherwise)   | `c2` joins `c1`, rules rerun from `c2`    |
//! | anything else     | accumulate                                |
//!
//! Prefix boundaries ("sub·ra·yar") and three-consonant runs ("trans·por·te")
//! need lookbehind and are out of reach of this scanner.

use smallvec::SmallVec;

use crate::character_window::CharacterWindow;
use crate::classifier::{CharClass, CharacterClassifier, SpanishClassifier};
use crate::tables::{ClusterTable, INSEPARABLE_CLUSTERS};

/// Syllables of one word, borrowed from it
pub type Syllables<'a> = SmallVec<[&'a str; 6]>;

/// Decision about the position after the current character
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BreakDecision {
    /// No boundary, keep accumulating
    Continue,
    /// Boundary right after `c1`
    After,
    /// `c2` closes the current syllable; boundary right after it
    AfterNext,
    /// `c2` forms a diphthong with `c1`; decide again from `c2`
    Absorb,
}

/// Splits a single word into syllables
#[derive(Debug, Clone)]
pub struct SyllableBreaker<C = SpanishClassifier> {
    classifier: C,
    clusters: &'static ClusterTable,
}

impl SyllableBreaker {
    /// Breaker with the Spanish classifier and cluster table
    pub fn new() -> Self {
        Self::with_classifier(SpanishClassifier::new(), &INSEPARABLE_CLUSTERS)
    }
}

impl Default for SyllableBreaker {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CharacterClassifier> SyllableBreaker<C> {
    /// Breaker with a custom classifier
    pub fn with_classifier(classifier: C, clusters: &'static ClusterTable) -> Self {
        Self {
            classifier,
            clusters,
        }
    }

    /// Decide what happens after the window's current character
    ///
    /// `after_diphthong` is set when `c1` was just absorbed into a diphthong,
    /// in which case a following vowel opens a new syllable.
    pub fn decide(&self, window: &CharacterWindow, after_diphthong: bool) -> BreakDecision {
        let (Some(c1), c2, c3) = window.triple() else {
            return BreakDecision::Continue;
        };

        let first = self.classifier.classify(c1);
        if !first.is_vowel() {
            return BreakDecision::Continue;
        }

        let class = |c: char| self.classifier.classify(c);

        match (c2, c3) {
            (Some(n), Some(nn)) if class(n).is_consonant() && class(nn).is_vowel() => {
                BreakDecision::After
            }
            (Some(n), Some(nn)) if class(n).is_consonant() && class(nn).is_consonant() => {
                if self.clusters.is_inseparable(n, nn) {
                    BreakDecision::After
                } else {
                    BreakDecision::AfterNext
                }
            }
            (Some(n), _) if class(n).is_vowel() => {
                let hiatus =
                    first == CharClass::StrongVowel && class(n) == CharClass::StrongVowel;
                if after_diphthong || hiatus {
                    BreakDecision::After
                } else {
                    BreakDecision::Absorb
                }
            }
            _ => BreakDecision::Continue,
        }
    }

    /// Split `word` into syllables whose concatenation is exactly `word`
    ///
    /// Never fails; an empty word comes back as a single empty syllable.
    pub fn split<'a>(&self, word: &'a str) -> Syllables<'a> {
        let chars: SmallVec<[char; 24]> = word.chars().collect();
        let at = |i: usize| chars.get(i).copied();

        let mut syllables = Syllables::new();
        let mut window = CharacterWindow::new();
        let mut start = 0;
        let mut after_diphthong = false;
        let mut i = 0;

        while i < chars.len() {
            window.advance(chars[i], at(i + 1), at(i + 2));
            let decision = self.decide(&window, after_diphthong);
            after_diphthong = false;

            match decision {
                BreakDecision::Continue => {}
                BreakDecision::After => {
                    syllables.push(&word[start..window.byte_end()]);
                    start = window.byte_end();
                }
                BreakDecision::AfterNext => {
                    i += 1;
                    window.advance(chars[i], at(i + 1), at(i + 2));
                    syllables.push(&word[start..window.byte_end()]);
                    start = window.byte_end();
                }
                BreakDecision::Absorb => after_diphthong = true,
            }
            i += 1;
        }

        if start < word.len() {
            syllables.push(&word[start..]);
        }
        if syllables.is_empty() {
            syllables.push(word);
        }
        syllables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(word: &str) -> Vec<&str> {
        SyllableBreaker::new().split(word).into_vec()
    }

    #[test]
    fn test_vcv_rule() {
        assert_eq!(split("casa"), vec!["ca", "sa"]);
        assert_eq!(split("niño"), vec!["ni", "ño"]);
        assert_eq!(split("cómo"), vec!["có", "mo"]);
    }

    #[test]
    fn test_inseparable_cluster() {
        assert_eq!(split("hablar"), vec!["ha", "blar"]);
        assert_eq!(split("libro"), vec!["li", "bro"]);
        assert_eq!(split("perro"), vec!["pe", "rro"]);
        assert_eq!(split("calle"), vec!["ca", "lle"]);
        assert_eq!(split("muchacho"), vec!["mu", "cha", "cho"]);
    }

    #[test]
    fn test_separable_cluster() {
        assert_eq!(split("estás"), vec!["es", "tás"]);
        assert_eq!(split("árbol"), vec!["ár", "bol"]);
        assert_eq!(split("instrumento"), vec!["in", "stru", "men", "to"]);
    }

    #[test]
    fn test_single_syllable() {
        assert_eq!(split("tren"), vec!["tren"]);
        assert_eq!(split("a"), vec!["a"]);
        assert_eq!(split("y"), vec!["y"]);
        assert_eq!(split("sol"), vec!["sol"]);
    }

    #[test]
    fn test_diphthongs() {
        assert_eq!(split("aire"), vec!["ai", "re"]);
        assert_eq!(split("ciudad"), vec!["ciu", "dad"]);
        assert_eq!(split("puerta"), vec!["puer", "ta"]);
        assert_eq!(split("guitarra"), vec!["gui", "ta", "rra"]);
        assert_eq!(split("pingüino"), vec!["pin", "güi", "no"]);
        assert_eq!(split("buey"), vec!["buey"]);
    }

    #[test]
    fn test_hiatus() {
        assert_eq!(split("caos"), vec!["ca", "os"]);
        assert_eq!(split("poeta"), vec!["po", "e", "ta"]);
        assert_eq!(split("oeste"), vec!["o", "es", "te"]);
    }

    #[test]
    fn test_vowel_after_diphthong_opens_syllable() {
        assert_eq!(split("leía"), vec!["leí", "a"]);
    }

    #[test]
    fn test_three_consonant_run() {
        // Greedy VC·CV cuts after the first consonant of the run
        assert_eq!(split("transporte"), vec!["tran", "spor", "te"]);
        assert_eq!(split("obstáculo"), vec!["ob", "stá", "cu", "lo"]);
        assert_eq!(split("construir"), vec!["con", "struir"]);
    }

    #[test]
    fn test_other_characters_are_inert() {
        assert_eq!(split("¡hola"), vec!["¡ho", "la"]);
        assert_eq!(split("¿cómo"), vec!["¿có", "mo"]);
        assert_eq!(split("covid19"), vec!["co", "vid19"]);
        assert_eq!(split("123"), vec!["123"]);
    }

    #[test]
    fn test_case_insensitive_rules() {
        assert_eq!(split("CASA"), vec!["CA", "SA"]);
        assert_eq!(split("HaBLar"), vec!["Ha", "BLar"]);
        assert_eq!(split("CAOS"), vec!["CA", "OS"]);
    }

    #[test]
    fn test_empty_word_fallback() {
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn test_completeness() {
        for word in ["murciélago", "extraordinario", "pingüino", "¡¿qué", "ñandú", "x"] {
            assert_eq!(split(word).concat(), word);
            assert!(split(word).iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn test_decide_window() {
        let breaker = SyllableBreaker::new();
        let mut window = CharacterWindow::new();

        window.advance('a', Some('s'), Some('a'));
        assert_eq!(breaker.decide(&window, false), BreakDecision::After);

        window.advance('a', Some('n'), Some('s'));
        assert_eq!(breaker.decide(&window, false), BreakDecision::AfterNext);

        window.advance('a', Some('i'), Some('r'));
        assert_eq!(breaker.decide(&window, false), BreakDecision::Absorb);
        assert_eq!(breaker.decide(&window, true), BreakDecision::After);

        window.advance('t', Some('r'), Some('e'));
        assert_eq!(breaker.decide(&window, false), BreakDecision::Continue);
    }
}
