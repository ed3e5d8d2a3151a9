//! Character classification for syllable detection

/// Classification of characters for syllable boundary detection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// a, e, o and their acute-accented forms
    StrongVowel,
    /// i, u, their acute-accented forms, and ü
    WeakVowel,
    /// Spanish consonant inventory, ñ included
    Consonant,
    /// Digits, symbols, and letters outside the Spanish alphabet
    Other,
}

impl CharClass {
    /// Check if the class is either vowel subclass
    #[inline]
    pub fn is_vowel(self) -> bool {
        matches!(self, CharClass::StrongVowel | CharClass::WeakVowel)
    }

    /// Check if the class is a consonant
    #[inline]
    pub fn is_consonant(self) -> bool {
        self == CharClass::Consonant
    }
}

/// Pure character classification logic
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character, ignoring case
    fn classify(&self, ch: char) -> CharClass;

    /// Check if character is any vowel
    fn is_vowel(&self, ch: char) -> bool {
        self.classify(ch).is_vowel()
    }

    /// Check if character is a strong vowel
    fn is_strong_vowel(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharClass::StrongVowel)
    }

    /// Check if character is a weak vowel
    fn is_weak_vowel(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharClass::WeakVowel)
    }

    /// Check if character is a consonant
    fn is_consonant(&self, ch: char) -> bool {
        self.classify(ch).is_consonant()
    }
}

/// Classifier for the Spanish alphabet
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishClassifier;

impl SpanishClassifier {
    /// Create the Spanish classifier
    pub const fn new() -> Self {
        Self
    }
}

impl CharacterClassifier for SpanishClassifier {
    #[inline]
    fn classify(&self, ch: char) -> CharClass {
        match ch {
            'a' | 'e' | 'o' | 'A' | 'E' | 'O' => CharClass::StrongVowel,
            'á' | 'é' | 'ó' | 'Á' | 'É' | 'Ó' => CharClass::StrongVowel,
            'i' | 'u' | 'I' | 'U' => CharClass::WeakVowel,
            'í' | 'ú' | 'ü' | 'Í' | 'Ú' | 'Ü' => CharClass::WeakVowel,
            'ñ' | 'Ñ' => CharClass::Consonant,
            c if c.is_ascii_alphabetic() => CharClass::Consonant,
            _ => CharClass::Other,
        }
    }
}
