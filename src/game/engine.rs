//! Game state and guess handling
//!
//! The engine owns the ordered guess sequence for one (language, answer)
//! pair. Every row but the last is a submitted full-length guess; the last
//! row is the in-progress input. The sequence is mirrored to the injected
//! store on every mutation, and external store changes are taken wholesale
//! via `reload` (last writer wins, no merging).
//!
//! Bad input never errors and never corrupts state: invalid characters are
//! filtered, short or unknown submissions are reported as outcomes and leave
//! the sequence untouched. Only store I/O failures surface as `Err`.

use crate::core::{LetterState, MAX_GUESSES, WORD_LENGTH, Word, score};
use crate::locale::Language;
use crate::storage::{GuessStore, StoreError};

/// Explicit game state, derived from the guess sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Guess accepted; a fresh row was appended
    Accepted,
    /// Guess accepted and it was the answer
    Won,
    /// Guess accepted and it used the final row
    Lost,
    /// The guess is not in the word list; carries the rejected guess
    NotAWord(String),
    /// The in-progress row is not five letters yet
    RowIncomplete,
    /// The game was already over; nothing happened
    AlreadyDone,
}

/// Guess-state engine for one (language, answer) pair
pub struct Game<S: GuessStore> {
    language: Language,
    answer: Word,
    words: Vec<Word>,
    guesses: Vec<String>,
    store: S,
}

impl<S: GuessStore> Game<S> {
    /// Initialize against a language and its resolved answer and word list
    ///
    /// Restores the persisted guess sequence for the pair, or starts fresh
    /// with a single empty row. A persisted sequence that violates the row
    /// invariants (hand-edited file, older format) is discarded.
    ///
    /// # Errors
    /// Returns `StoreError` when the store backend fails.
    pub fn load(
        language: Language,
        answer: Word,
        words: Vec<Word>,
        store: S,
    ) -> Result<Self, StoreError> {
        let persisted = store.load_guesses(language, answer.text())?;
        let guesses =
            persisted.and_then(|seq| sanitize(seq, language)).unwrap_or_else(|| vec![String::new()]);

        Ok(Self {
            language,
            answer,
            words,
            guesses,
            store,
        })
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    /// The full guess sequence, in-progress row included
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.guesses
    }

    /// The submitted rows (everything but the in-progress one)
    #[must_use]
    pub fn submitted(&self) -> &[String] {
        &self.guesses[..self.guesses.len() - 1]
    }

    /// The in-progress row
    #[must_use]
    pub fn current_input(&self) -> &str {
        self.guesses.last().map_or("", String::as_str)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.submitted().last().map(String::as_str) == Some(self.answer.text()) {
            GameStatus::Won
        } else if self.submitted().len() == MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status() == GameStatus::Won
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Replace the in-progress row with normalized input
    ///
    /// Characters outside the language's alphabet are silently dropped
    /// (case-insensitively), the rest lowercased, and the row truncated to
    /// five letters. No-op once the game is done.
    ///
    /// # Errors
    /// Returns `StoreError` when persisting fails.
    pub fn set_input(&mut self, raw: &str) -> Result<(), StoreError> {
        if self.is_done() {
            return Ok(());
        }

        let locale = self.language.locale();
        let normalized: String = raw
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|&c| locale.allows(c))
            .take(WORD_LENGTH)
            .collect();

        if let Some(last) = self.guesses.last_mut() {
            *last = normalized;
        }
        self.persist()
    }

    /// Append one letter to the in-progress row (on-screen keyboard path)
    ///
    /// # Errors
    /// Returns `StoreError` when persisting fails.
    pub fn push_char(&mut self, c: char) -> Result<(), StoreError> {
        let mut input = self.current_input().to_string();
        input.push(c);
        self.set_input(&input)
    }

    /// Delete the last letter of the in-progress row
    ///
    /// # Errors
    /// Returns `StoreError` when persisting fails.
    pub fn pop_char(&mut self) -> Result<(), StoreError> {
        if self.is_done() {
            return Ok(());
        }
        if let Some(last) = self.guesses.last_mut() {
            last.pop();
        }
        self.persist()
    }

    /// Submit the in-progress row
    ///
    /// Accepted guesses append a fresh empty row and persist; every
    /// rejection leaves the sequence exactly as it was.
    ///
    /// # Errors
    /// Returns `StoreError` when persisting fails.
    pub fn submit(&mut self) -> Result<SubmitOutcome, StoreError> {
        if self.is_done() {
            return Ok(SubmitOutcome::AlreadyDone);
        }

        let guess = self.current_input().to_string();
        if guess.chars().count() != WORD_LENGTH {
            return Ok(SubmitOutcome::RowIncomplete);
        }

        if !self.words.iter().any(|w| w.text() == guess) {
            return Ok(SubmitOutcome::NotAWord(guess));
        }

        self.guesses.push(String::new());
        self.persist()?;

        Ok(match self.status() {
            GameStatus::Won => SubmitOutcome::Won,
            GameStatus::Lost => SubmitOutcome::Lost,
            GameStatus::InProgress => SubmitOutcome::Accepted,
        })
    }

    /// Score one submitted row against the answer
    ///
    /// Returns `None` for the in-progress row or an out-of-range index.
    #[must_use]
    pub fn score_row(&self, index: usize) -> Option<[LetterState; WORD_LENGTH]> {
        let row = self.submitted().get(index)?;
        let word = Word::new(row).ok()?;
        Some(score(&word, &self.answer))
    }

    /// All submitted rows with their scores, for rendering and sharing
    #[must_use]
    pub fn scored_rows(&self) -> Vec<(Word, [LetterState; WORD_LENGTH])> {
        self.submitted()
            .iter()
            .filter_map(|row| Word::new(row).ok())
            .map(|word| {
                let states = score(&word, &self.answer);
                (word, states)
            })
            .collect()
    }

    /// Overwrite in-memory state from the store
    ///
    /// Reaction to external change notifications (another process wrote the
    /// same board, or the terminal regained focus): the persisted sequence
    /// is authoritative and replaces memory wholesale.
    ///
    /// # Errors
    /// Returns `StoreError` when the store backend fails.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let persisted = self.store.load_guesses(self.language, self.answer.text())?;
        self.guesses = persisted
            .and_then(|seq| sanitize(seq, self.language))
            .unwrap_or_else(|| vec![String::new()]);
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store
            .save_guesses(self.language, self.answer.text(), &self.guesses)
    }
}

/// Validate a persisted guess sequence against the row invariants
///
/// Every row but the last must be exactly five letters, the last at most
/// five, at most seven rows total, and every character must belong to the
/// language's alphabet. Anything else is discarded.
fn sanitize(seq: Vec<String>, language: Language) -> Option<Vec<String>> {
    if seq.is_empty() || seq.len() > MAX_GUESSES + 1 {
        return None;
    }

    let locale = language.locale();
    let last = seq.len() - 1;
    for (i, row) in seq.iter().enumerate() {
        let len = row.chars().count();
        let full_required = i < last;
        if (full_required && len != WORD_LENGTH) || len > WORD_LENGTH {
            return None;
        }
        if !row.chars().all(|c| locale.allows(c)) {
            return None;
        }
    }

    Some(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Absent, Correct, Present};
    use crate::storage::MemoryStore;
    use crate::wordlists::words_from_slice;

    const LIST: &[&str] = &["slate", "crane", "crepe", "ocean", "irate", "speed"];

    fn game(store: &MemoryStore) -> Game<&MemoryStore> {
        Game::load(
            Language::EnGb,
            Word::new("crane").unwrap(),
            words_from_slice(LIST),
            store,
        )
        .unwrap()
    }

    #[test]
    fn fresh_game_has_one_empty_row() {
        let store = MemoryStore::new();
        let game = game(&store);

        assert_eq!(game.rows(), &[String::new()]);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_done());
    }

    #[test]
    fn input_is_filtered_lowercased_and_truncated() {
        let store = MemoryStore::new();
        let mut game = game(&store);

        game.set_input("Cr4-An e!X").unwrap();
        assert_eq!(game.current_input(), "crane");

        game.set_input("slates").unwrap();
        assert_eq!(game.current_input(), "slate");
    }

    #[test]
    fn input_rejects_letters_outside_language_alphabet() {
        let store = MemoryStore::new();
        let mut game = game(&store);

        // English keyboard has no å/ö
        game.set_input("åcröane").unwrap();
        assert_eq!(game.current_input(), "crane");
    }

    #[test]
    fn push_and_pop_edit_the_in_progress_row() {
        let store = MemoryStore::new();
        let mut game = game(&store);

        for c in ['C', 'r', 'a'] {
            game.push_char(c).unwrap();
        }
        assert_eq!(game.current_input(), "cra");

        game.pop_char().unwrap();
        assert_eq!(game.current_input(), "cr");
    }

    #[test]
    fn every_mutation_persists() {
        let store = MemoryStore::new();
        let mut game = game(&store);

        game.set_input("cra").unwrap();
        assert_eq!(
            store.load_guesses(Language::EnGb, "crane").unwrap(),
            Some(vec!["cra".to_string()])
        );

        game.set_input("crepe").unwrap();
        game.submit().unwrap();
        assert_eq!(
            store.load_guesses(Language::EnGb, "crane").unwrap(),
            Some(vec!["crepe".to_string(), String::new()])
        );
    }

    #[test]
    fn submit_short_row_never_appends() {
        let store = MemoryStore::new();
        let mut game = game(&store);

        game.set_input("cra").unwrap();
        assert_eq!(game.submit().unwrap(), SubmitOutcome::RowIncomplete);
        assert_eq!(game.rows().len(), 1);
        assert_eq!(game.current_input(), "cra");
    }

    #[test]
    fn submit_unknown_word_reports_and_keeps_state() {
        let store = MemoryStore::new();
        let mut game = game(&store);

        game.set_input("zzzzz").unwrap();
        // "zzzzz" is five valid letters but not in the list
        assert_eq!(
            game.submit().unwrap(),
            SubmitOutcome::NotAWord("zzzzz".to_string())
        );
        assert_eq!(game.rows().len(), 1);
        assert_eq!(game.current_input(), "zzzzz");
    }

    #[test]
    fn winning_guess_sets_won_and_freezes_the_game() {
        let store = MemoryStore::new();
        let mut game = game(&store);

        game.set_input("crane").unwrap();
        assert_eq!(game.submit().unwrap(), SubmitOutcome::Won);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_won());
        assert!(game.is_done());

        // All further mutation is a no-op
        game.set_input("slate").unwrap();
        assert_eq!(game.current_input(), "");
        game.push_char('s').unwrap();
        assert_eq!(game.current_input(), "");
        assert_eq!(game.submit().unwrap(), SubmitOutcome::AlreadyDone);
        assert_eq!(game.rows().len(), 2);
    }

    #[test]
    fn six_misses_lose_and_freeze_the_game() {
        let store = MemoryStore::new();
        let mut game = game(&store);

        for i in 0..MAX_GUESSES {
            game.set_input("slate").unwrap();
            let outcome = game.submit().unwrap();
            if i < MAX_GUESSES - 1 {
                assert_eq!(outcome, SubmitOutcome::Accepted);
            } else {
                assert_eq!(outcome, SubmitOutcome::Lost);
            }
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.is_done());
        assert!(!game.is_won());
        assert_eq!(game.rows().len(), MAX_GUESSES + 1);

        game.set_input("crane").unwrap();
        assert_eq!(game.submit().unwrap(), SubmitOutcome::AlreadyDone);
        assert_eq!(game.rows().len(), MAX_GUESSES + 1);
    }

    #[test]
    fn score_row_scores_submitted_rows_only() {
        let store = MemoryStore::new();
        let mut game = game(&store);

        game.set_input("crepe").unwrap();
        game.submit().unwrap();

        assert_eq!(
            game.score_row(0),
            Some([Correct, Correct, Absent, Absent, Correct])
        );
        // In-progress row has no score
        assert_eq!(game.score_row(1), None);
    }

    #[test]
    fn scored_rows_follow_submission_order() {
        let store = MemoryStore::new();
        let mut game = game(&store);

        game.set_input("ocean").unwrap();
        game.submit().unwrap();
        game.set_input("irate").unwrap();
        game.submit().unwrap();

        let rows = game.scored_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0.text(), "ocean");
        assert_eq!(rows[0].1, [Absent, Present, Present, Present, Present]);
        assert_eq!(rows[1].0.text(), "irate");
    }

    #[test]
    fn state_survives_a_restart() {
        let store = MemoryStore::new();
        {
            let mut game = game(&store);
            game.set_input("slate").unwrap();
            game.submit().unwrap();
            game.set_input("cr").unwrap();
        }

        let game = game(&store);
        assert_eq!(game.submitted(), &["slate".to_string()]);
        assert_eq!(game.current_input(), "cr");
    }

    #[test]
    fn switching_language_and_back_restores_the_board() {
        let store = MemoryStore::new();
        let mut english = game(&store);
        english.set_input("slate").unwrap();
        english.submit().unwrap();

        // Play a different board in Swedish against its own answer
        let mut swedish = Game::load(
            Language::Se,
            Word::new("mörkt").unwrap(),
            words_from_slice(&["mörkt", "mössa"]),
            &store,
        )
        .unwrap();
        swedish.set_input("mössa").unwrap();
        swedish.submit().unwrap();

        // English board is untouched
        let english_again = game(&store);
        assert_eq!(english_again.submitted(), &["slate".to_string()]);

        let swedish_again = Game::load(
            Language::Se,
            Word::new("mörkt").unwrap(),
            words_from_slice(&["mörkt", "mössa"]),
            &store,
        )
        .unwrap();
        assert_eq!(swedish_again.submitted(), &["mössa".to_string()]);
    }

    #[test]
    fn reload_takes_the_store_wholesale() {
        let store = MemoryStore::new();
        let mut game = game(&store);
        game.set_input("cra").unwrap();

        // Another writer replaces the board
        store
            .save_guesses(
                Language::EnGb,
                "crane",
                &["slate".to_string(), "ir".to_string()],
            )
            .unwrap();

        game.reload().unwrap();
        assert_eq!(game.submitted(), &["slate".to_string()]);
        assert_eq!(game.current_input(), "ir");
    }

    #[test]
    fn corrupt_persisted_sequences_start_fresh() {
        let store = MemoryStore::new();

        // Submitted row with the wrong length
        store
            .save_guesses(
                Language::EnGb,
                "crane",
                &["slat".to_string(), String::new()],
            )
            .unwrap();
        assert_eq!(game(&store).rows(), &[String::new()]);

        // Too many rows
        let eight: Vec<String> = std::iter::repeat_n("slate".to_string(), 8).collect();
        store.save_guesses(Language::EnGb, "crane", &eight).unwrap();
        assert_eq!(game(&store).rows(), &[String::new()]);

        // Characters outside the alphabet
        store
            .save_guesses(
                Language::EnGb,
                "crane",
                &["sl4te".to_string(), String::new()],
            )
            .unwrap();
        assert_eq!(game(&store).rows(), &[String::new()]);

        // Empty sequence
        store.save_guesses(Language::EnGb, "crane", &[]).unwrap();
        assert_eq!(game(&store).rows(), &[String::new()]);
    }

    #[test]
    fn won_board_restores_as_won() {
        let store = MemoryStore::new();
        store
            .save_guesses(
                Language::EnGb,
                "crane",
                &["slate".to_string(), "crane".to_string(), String::new()],
            )
            .unwrap();

        let game = game(&store);
        assert_eq!(game.status(), GameStatus::Won);
    }
}
