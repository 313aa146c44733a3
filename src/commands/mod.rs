//! Command implementations

pub mod board;
pub mod languages;
pub mod share;

use crate::core::{Word, daily};
use crate::game::Game;
use crate::locale::Language;
use crate::storage::{GuessStore, StoreError};
use crate::wordlists::{WordProvider, answer_for};
use anyhow::Result;

pub use board::run_board;
pub use languages::run_languages;
pub use share::run_share;

/// Resolve the active language: explicit override, else persisted, else default
///
/// # Errors
/// Returns `StoreError` when the store backend fails.
pub fn active_language<S: GuessStore>(
    store: &S,
    explicit: Option<Language>,
) -> Result<Language, StoreError> {
    if let Some(language) = explicit {
        return Ok(language);
    }
    Ok(store.load_language()?.unwrap_or(Language::DEFAULT))
}

/// Load today's board for a language
///
/// Fetches the word list, resolves the current answer index against it, and
/// restores any persisted guesses. Returns the index alongside the game for
/// headers and share blocks.
///
/// # Errors
/// Propagates word-list failures (`DictError`) and store failures.
pub fn load_today<S: GuessStore, P: WordProvider>(
    language: Language,
    provider: &P,
    store: S,
) -> Result<(usize, Game<S>)> {
    let words = provider.fetch(language)?;
    let index = daily::answer_index();
    let answer: Word = answer_for(&words, index)?.clone();
    let game = Game::load(language, answer, words, store)?;
    Ok((index, game))
}
