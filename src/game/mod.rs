//! Guess-state engine

pub mod engine;

pub use engine::{Game, GameStatus, SubmitOutcome};
