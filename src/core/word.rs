//! Puzzle word representation
//!
//! A Word stores a validated 5-letter lowercase word. Letters are full
//! `char`s rather than bytes: the Swedish and Spanish word lists use å/ö/ä,
//! ñ, and accented vowels.

use super::WORD_LENGTH;
use std::fmt;

/// A validated 5-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased first, so "CRANE" and "crane" are the same word.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5 characters or any
    /// character is not alphabetic.
    ///
    /// # Examples
    /// ```
    /// use lexle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let chars: Vec<char> = text.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(chars.len()));
        }

        if !chars.iter().all(|c| c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [char; WORD_LENGTH] = chars
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.chars().count()))?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), &['c', 'r', 'a', 'n', 'e']);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_non_ascii_letters() {
        // Swedish and Spanish answers are full Unicode words
        let word = Word::new("mörkt").unwrap();
        assert_eq!(word.text(), "mörkt");
        assert_eq!(word.char_at(1), 'ö');

        let word2 = Word::new("ñoños").unwrap();
        assert_eq!(word2.char_at(0), 'ñ');
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        // "mörkt" is 6 bytes but 5 characters
        assert!(Word::new("mörkt").is_ok());
        assert!(matches!(
            Word::new("mörkta"),
            Err(WordError::InvalidLength(6))
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), 'c');
        assert_eq!(word.char_at(4), 'e');
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
