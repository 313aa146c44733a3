//! Core domain types: words, letter scoring, and the daily puzzle selector

pub mod daily;
pub mod scoring;
pub mod word;

pub use scoring::{LetterState, key_states, score};
pub use word::{Word, WordError};

/// Every puzzle word is exactly this many letters
pub const WORD_LENGTH: usize = 5;

/// Maximum number of submitted guesses per puzzle
pub const MAX_GUESSES: usize = 6;
