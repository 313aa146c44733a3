//! Guess persistence
//!
//! Guesses are remembered per (language, answer) key, so switching language
//! or crossing a day boundary naturally starts a fresh board while older
//! boards stay untouched. Keys are never deleted; the set grows by one small
//! file per puzzle actually played, which is accepted.

use crate::locale::Language;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for persistence failures
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Storage I/O error: {e}"),
            Self::Serde(e) => write!(f, "Storage serialization error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serde(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e)
    }
}

/// Persistence adapter for guess sequences and the active language
///
/// The engine owns all mutation; implementations only move sequences in and
/// out of a key-value backend. Missing keys load as `None`.
pub trait GuessStore {
    /// Load the guess sequence persisted for a (language, answer) pair
    ///
    /// # Errors
    /// Returns `StoreError` only on backend failure; a missing or corrupt
    /// entry is `Ok(None)`.
    fn load_guesses(
        &self,
        language: Language,
        answer: &str,
    ) -> Result<Option<Vec<String>>, StoreError>;

    /// Persist the guess sequence for a (language, answer) pair
    ///
    /// # Errors
    /// Returns `StoreError` on backend failure.
    fn save_guesses(
        &self,
        language: Language,
        answer: &str,
        guesses: &[String],
    ) -> Result<(), StoreError>;

    /// Load the persisted active language, if any
    ///
    /// # Errors
    /// Returns `StoreError` on backend failure; an unknown persisted code is
    /// `Ok(None)`.
    fn load_language(&self) -> Result<Option<Language>, StoreError>;

    /// Persist the active language
    ///
    /// # Errors
    /// Returns `StoreError` on backend failure.
    fn save_language(&self, language: Language) -> Result<(), StoreError>;
}

impl<S: GuessStore + ?Sized> GuessStore for &S {
    fn load_guesses(
        &self,
        language: Language,
        answer: &str,
    ) -> Result<Option<Vec<String>>, StoreError> {
        (**self).load_guesses(language, answer)
    }

    fn save_guesses(
        &self,
        language: Language,
        answer: &str,
        guesses: &[String],
    ) -> Result<(), StoreError> {
        (**self).save_guesses(language, answer, guesses)
    }

    fn load_language(&self) -> Result<Option<Language>, StoreError> {
        (**self).load_language()
    }

    fn save_language(&self, language: Language) -> Result<(), StoreError> {
        (**self).save_language(language)
    }
}

impl<S: GuessStore + ?Sized> GuessStore for std::rc::Rc<S> {
    fn load_guesses(
        &self,
        language: Language,
        answer: &str,
    ) -> Result<Option<Vec<String>>, StoreError> {
        (**self).load_guesses(language, answer)
    }

    fn save_guesses(
        &self,
        language: Language,
        answer: &str,
        guesses: &[String],
    ) -> Result<(), StoreError> {
        (**self).save_guesses(language, answer, guesses)
    }

    fn load_language(&self) -> Result<Option<Language>, StoreError> {
        (**self).load_language()
    }

    fn save_language(&self, language: Language) -> Result<(), StoreError> {
        (**self).save_language(language)
    }
}

/// Composite key for one (language, answer) board
fn guess_key(language: Language, answer: &str) -> String {
    format!("{}-{}", language.code(), answer)
}

/// File-backed store: one JSON file per board plus a `language` file
///
/// Lives under the data directory (default `$HOME/.config/lexle`). Another
/// process writing the same files wins wholesale on the next reload; there
/// is no merging.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default data directory: `$HOME/.config/lexle`
    ///
    /// # Errors
    /// Returns an error when `$HOME` is not set.
    pub fn default_dir() -> Result<PathBuf, StoreError> {
        let home = std::env::var("HOME")
            .map_err(|_| StoreError::Io(io::Error::other("HOME is not set")))?;
        Ok(PathBuf::from(home).join(".config/lexle"))
    }

    fn guess_path(&self, language: Language, answer: &str) -> PathBuf {
        self.dir.join(format!("{}.json", guess_key(language, answer)))
    }

    fn language_path(&self) -> PathBuf {
        self.dir.join("language")
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl GuessStore for FileStore {
    fn load_guesses(
        &self,
        language: Language,
        answer: &str,
    ) -> Result<Option<Vec<String>>, StoreError> {
        let path = self.guess_path(language, answer);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        // A corrupt blob degrades to a fresh board, never a failure
        Ok(serde_json::from_str(&raw).ok())
    }

    fn save_guesses(
        &self,
        language: Language,
        answer: &str,
        guesses: &[String],
    ) -> Result<(), StoreError> {
        let blob = serde_json::to_string(guesses)?;
        self.write_file(&self.guess_path(language, answer), &blob)
    }

    fn load_language(&self) -> Result<Option<Language>, StoreError> {
        let path = self.language_path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(raw.trim().parse().ok())
    }

    fn save_language(&self, language: Language) -> Result<(), StoreError> {
        self.write_file(&self.language_path(), language.code())
    }
}

/// In-memory store, for tests and for running without a writable home
#[derive(Default)]
pub struct MemoryStore {
    guesses: RefCell<HashMap<String, Vec<String>>>,
    language: RefCell<Option<Language>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuessStore for MemoryStore {
    fn load_guesses(
        &self,
        language: Language,
        answer: &str,
    ) -> Result<Option<Vec<String>>, StoreError> {
        Ok(self.guesses.borrow().get(&guess_key(language, answer)).cloned())
    }

    fn save_guesses(
        &self,
        language: Language,
        answer: &str,
        guesses: &[String],
    ) -> Result<(), StoreError> {
        self.guesses
            .borrow_mut()
            .insert(guess_key(language, answer), guesses.to_vec());
        Ok(())
    }

    fn load_language(&self) -> Result<Option<Language>, StoreError> {
        Ok(*self.language.borrow())
    }

    fn save_language(&self, language: Language) -> Result<(), StoreError> {
        *self.language.borrow_mut() = Some(language);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_guesses() {
        let store = MemoryStore::new();
        let guesses = vec!["crane".to_string(), "sl".to_string()];

        store
            .save_guesses(Language::EnGb, "slate", &guesses)
            .unwrap();

        assert_eq!(
            store.load_guesses(Language::EnGb, "slate").unwrap(),
            Some(guesses)
        );
    }

    #[test]
    fn memory_store_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load_guesses(Language::EnGb, "slate").unwrap(), None);
    }

    #[test]
    fn memory_store_keys_are_per_language_and_answer() {
        let store = MemoryStore::new();
        store
            .save_guesses(Language::EnGb, "slate", &["crane".to_string()])
            .unwrap();

        assert_eq!(store.load_guesses(Language::Se, "slate").unwrap(), None);
        assert_eq!(store.load_guesses(Language::EnGb, "crane").unwrap(), None);
    }

    #[test]
    fn memory_store_round_trips_language() {
        let store = MemoryStore::new();
        assert_eq!(store.load_language().unwrap(), None);

        store.save_language(Language::Es).unwrap();
        assert_eq!(store.load_language().unwrap(), Some(Language::Es));
    }

    #[test]
    fn file_store_round_trips() {
        let dir = std::env::temp_dir().join(format!("lexle-test-{}", std::process::id()));
        let store = FileStore::new(&dir);
        let guesses = vec!["mössa".to_string(), String::new()];

        store.save_guesses(Language::Se, "mörkt", &guesses).unwrap();
        store.save_language(Language::Se).unwrap();

        assert_eq!(
            store.load_guesses(Language::Se, "mörkt").unwrap(),
            Some(guesses)
        );
        assert_eq!(store.load_language().unwrap(), Some(Language::Se));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn file_store_corrupt_blob_loads_as_absent() {
        let dir = std::env::temp_dir().join(format!("lexle-corrupt-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("enGB-slate.json"), "not json at all").unwrap();

        let store = FileStore::new(&dir);
        assert_eq!(store.load_guesses(Language::EnGb, "slate").unwrap(), None);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn file_store_unknown_language_code_loads_as_absent() {
        let dir = std::env::temp_dir().join(format!("lexle-lang-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("language"), "klingon").unwrap();

        let store = FileStore::new(&dir);
        assert_eq!(store.load_language().unwrap(), None);

        let _ = fs::remove_dir_all(dir);
    }
}
