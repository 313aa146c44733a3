//! Share-summary formatting
//!
//! Renders a finished board as the fixed-format text block people paste into
//! chats: a header with the puzzle number and guesses used, one emoji row
//! per submitted guess, and a trailing link. Pure formatting, no state.

use crate::core::{LetterState, MAX_GUESSES, WORD_LENGTH, Word};

/// Display name used in the share header
pub const GAME_NAME: &str = "Lexle";

/// Link appended to every share block
pub const GAME_LINK: &str = "https://github.com/example/lexle";

/// Emoji for one letter state
#[must_use]
pub const fn state_glyph(state: LetterState) -> char {
    match state {
        LetterState::Correct => '🟩',
        LetterState::Present => '🟨',
        LetterState::Absent => '⬛',
    }
}

/// One emoji row for a scored guess
#[must_use]
pub fn row_glyphs(states: &[LetterState; WORD_LENGTH]) -> String {
    states.iter().copied().map(state_glyph).collect()
}

/// Full share block for a finished board
///
/// The header shows guesses used out of six, or `X/6` for a lost board.
#[must_use]
pub fn share_summary(
    answer_index: usize,
    rows: &[(Word, [LetterState; WORD_LENGTH])],
    won: bool,
) -> String {
    let used = if won {
        rows.len().to_string()
    } else {
        "X".to_string()
    };

    let grid: Vec<String> = rows.iter().map(|(_, states)| row_glyphs(states)).collect();

    format!(
        "{GAME_NAME} {answer_index} {used}/{MAX_GUESSES}\n\n{}\n\n{GAME_LINK}",
        grid.join("\n")
    )
}
