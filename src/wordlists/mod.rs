//! Word list loading
//!
//! The provider is the source of truth for valid guesses and for resolving
//! today's answer index to an answer word. Lists live on disk as
//! `words-<code>.json`, a JSON array of lowercase words, one file per
//! language, each expected to hold at least the full 365-answer rotation.

use crate::core::{Word, daily::NUM_ANSWERS};
use crate::locale::Language;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word-list loading and answer resolution
#[derive(Debug)]
pub enum DictError {
    /// The list file could not be read
    Unavailable(io::Error),
    /// The list file was not a JSON array of strings
    Malformed(serde_json::Error),
    /// The list cannot cover today's answer index
    TooShort { len: usize },
}

impl fmt::Display for DictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(e) => write!(f, "Word list unavailable: {e}"),
            Self::Malformed(e) => write!(f, "Word list malformed: {e}"),
            Self::TooShort { len } => {
                write!(f, "Word list has {len} words, need at least {NUM_ANSWERS}")
            }
        }
    }
}

impl std::error::Error for DictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable(e) => Some(e),
            Self::Malformed(e) => Some(e),
            Self::TooShort { .. } => None,
        }
    }
}

/// Source of the ordered word list for a language
pub trait WordProvider {
    /// Fetch the full ordered word list for a language
    ///
    /// # Errors
    /// Returns `DictError` when the list cannot be loaded or parsed; the
    /// caller must treat the dictionary as unavailable and block submission
    /// rather than rejecting guesses as unknown words.
    fn fetch(&self, language: Language) -> Result<Vec<Word>, DictError>;
}

/// Provider reading `words-<code>.json` files from a directory
pub struct FileProvider {
    dir: PathBuf,
}

impl FileProvider {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the list file for a language
    #[must_use]
    pub fn list_path(&self, language: Language) -> PathBuf {
        self.dir.join(format!("words-{}.json", language.code()))
    }
}

impl WordProvider for FileProvider {
    fn fetch(&self, language: Language) -> Result<Vec<Word>, DictError> {
        load_from_file(self.list_path(language))
    }
}

/// Load a word list from a JSON array file
///
/// Entries that fail word validation are skipped, preserving the order of
/// the rest. Order matters: the answer rotation indexes into this list.
///
/// # Errors
/// Returns `DictError::Unavailable` if the file cannot be read and
/// `DictError::Malformed` if it is not a JSON array of strings.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictError> {
    let content = fs::read_to_string(path).map_err(DictError::Unavailable)?;
    let entries: Vec<String> = serde_json::from_str(&content).map_err(DictError::Malformed)?;

    Ok(entries
        .iter()
        .filter_map(|entry| Word::new(entry.trim()).ok())
        .collect())
}

/// Convert a string slice into validated words, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Resolve an answer index against a word list
///
/// # Errors
/// Returns `DictError::TooShort` when the index does not resolve, instead of
/// silently treating the answer as empty.
pub fn answer_for(words: &[Word], index: usize) -> Result<&Word, DictError> {
    words
        .get(index)
        .ok_or(DictError::TooShort { len: words.len() })
}
