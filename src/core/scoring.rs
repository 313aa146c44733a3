//! Per-guess letter scoring
//!
//! Each letter of a submitted guess is classified against the answer as
//! Correct (right letter, right position), Present (letter occurs elsewhere
//! in the answer), or Absent. Duplicate letters are handled with a
//! multiset-consumption rule: a letter can only be marked Present as many
//! times as unconsumed occurrences remain in the answer.

use super::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Classification of one guessed letter against the answer
///
/// Ordered so that `max` picks the most informative state when aggregating
/// across rows (Absent < Present < Correct).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

/// Score a guess against the answer
///
/// # Algorithm
/// 1. First pass: mark exact matches Correct and consume those letters from
///    the answer's letter multiset
/// 2. Second pass, left to right over the remaining positions: mark Present
///    and consume one occurrence if the letter is still in the multiset,
///    otherwise Absent
///
/// The left-to-right consumption in the second pass gives priority to the
/// earliest-positioned duplicate, and no letter is ever marked Present more
/// times than it occurs unconsumed in the answer.
///
/// # Examples
/// ```
/// use lexle::core::{LetterState, Word, score};
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("slate").unwrap();
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(
///     score(&guess, &answer),
///     [
///         LetterState::Absent,
///         LetterState::Absent,
///         LetterState::Correct,
///         LetterState::Absent,
///         LetterState::Correct,
///     ]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> [LetterState; WORD_LENGTH] {
    let mut result = [LetterState::Absent; WORD_LENGTH];
    let mut answer_available: FxHashMap<char, u8> = FxHashMap::default();
    for &ch in answer.chars() {
        *answer_available.entry(ch).or_insert(0) += 1;
    }

    // First pass: mark Correct (exact position matches)
    // Allow: Index needed to access guess[i], answer[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.chars()[i] == answer.chars()[i] {
            result[i] = LetterState::Correct;

            // Remove from available pool
            let letter = guess.chars()[i];
            if let Some(count) = answer_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: mark Present (wrong position, but letter remains)
    // Allow: Index needed to access guess[i] and check/set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == LetterState::Absent {
            let letter = guess.chars()[i];
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }
    }

    result
}

/// Fold submitted rows into the best state seen per letter
///
/// Drives the on-screen keyboard coloring: a key shows Correct if the letter
/// was ever Correct, else Present if ever Present, else Absent if ever
/// guessed. Letters never guessed are not in the map.
#[must_use]
pub fn key_states(rows: &[(Word, [LetterState; WORD_LENGTH])]) -> FxHashMap<char, LetterState> {
    let mut best: FxHashMap<char, LetterState> = FxHashMap::default();

    for (guess, states) in rows {
        for (i, &state) in states.iter().enumerate() {
            let letter = guess.chars()[i];
            best.entry(letter)
                .and_modify(|s| *s = (*s).max(state))
                .or_insert(state);
        }
    }

    best
}
