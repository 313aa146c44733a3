//! Print the share summary for today's board

use crate::game::Game;
use crate::share::share_summary;
use crate::storage::GuessStore;

/// Print the share block for a finished board, or a hint when unfinished
pub fn run_share<S: GuessStore>(answer_index: usize, game: &Game<S>) {
    if game.is_done() {
        println!("{}", share_summary(answer_index, &game.scored_rows(), game.is_won()));
    } else {
        let locale = game.language().locale();
        println!(
            "{} {}/6 — nothing to share yet",
            locale.guess_label,
            game.submitted().len() + 1
        );
    }
}
