//! Print today's board to stdout

use crate::core::{LetterState, MAX_GUESSES, WORD_LENGTH};
use crate::game::{Game, GameStatus};
use crate::share::GAME_NAME;
use crate::storage::GuessStore;
use colored::Colorize;

/// Render today's board non-interactively
pub fn run_board<S: GuessStore>(answer_index: usize, game: &Game<S>) {
    let locale = game.language().locale();
    println!(
        "\n{} {} {}\n",
        GAME_NAME.bold(),
        answer_index.to_string().bold(),
        locale.flag
    );

    let scored = game.scored_rows();
    for (word, states) in &scored {
        let row: Vec<String> = word
            .chars()
            .iter()
            .zip(states.iter())
            .map(|(&letter, &state)| paint(letter, state))
            .collect();
        println!("  {}", row.join(" "));
    }

    // In-progress row plus remaining blanks
    if !game.is_done() {
        let mut current: Vec<String> = game
            .current_input()
            .chars()
            .map(|c| format!(" {} ", c.to_uppercase()))
            .collect();
        current.resize(WORD_LENGTH, " · ".to_string());
        println!("  {}", current.join(" "));

        for _ in scored.len() + 1..MAX_GUESSES {
            println!("  {}", vec![" · "; WORD_LENGTH].join(" "));
        }
    }

    match game.status() {
        GameStatus::Won => println!("\n{}\n", locale.won.green().bold()),
        GameStatus::Lost => {
            println!("\n{}\n", locale.lost.yellow());
            println!("{}\n", game.answer().text().to_uppercase().bold());
        }
        GameStatus::InProgress => println!(
            "\n{} {}/{MAX_GUESSES}\n",
            locale.guess_label,
            scored.len() + 1
        ),
    }
}

fn paint(letter: char, state: LetterState) -> String {
    let cell = format!(" {} ", letter.to_uppercase());
    match state {
        LetterState::Correct => cell.black().on_green().to_string(),
        LetterState::Present => cell.black().on_yellow().to_string(),
        LetterState::Absent => cell.white().on_black().to_string(),
    }
}
