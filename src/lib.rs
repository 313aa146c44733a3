//! Lexle
//!
//! A multilingual daily word-guessing game for the terminal. One puzzle per
//! day per language, six guesses, boards persisted per (language, answer)
//! pair so switching language or waiting for midnight never loses progress.
//!
//! # Quick Start
//!
//! ```rust
//! use lexle::core::{LetterState, Word, score};
//!
//! let guess = Word::new("crepe").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let states = score(&guess, &answer);
//! assert_eq!(states[0], LetterState::Correct);
//! ```

// Core domain types
pub mod core;

// Language table
pub mod locale;

// Word lists
pub mod wordlists;

// Guess persistence
pub mod storage;

// Guess-state engine
pub mod game;

// Share-summary formatting
pub mod share;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
