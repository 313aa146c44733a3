//! Lexle - CLI
//!
//! Multilingual daily word-guessing game: interactive TUI plus a few
//! non-interactive commands for scripting and sharing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use lexle::{
    commands::{active_language, load_today, run_board, run_languages, run_share},
    interactive::{App, run_tui},
    locale::Language,
    storage::FileStore,
    wordlists::FileProvider,
};
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser)]
#[command(
    name = "lexle",
    about = "Multilingual daily word-guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language for this run: se, enGB, enUS, or es (default: persisted choice)
    #[arg(short, long, global = true)]
    language: Option<Language>,

    /// State directory (default: $HOME/.config/lexle)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Word-list directory holding words-<code>.json files (default: <data-dir>/words)
    #[arg(long, global = true)]
    words_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzle interactively (default)
    Play,

    /// Print today's board without entering the TUI
    Board,

    /// Print the share summary for today's finished puzzle
    Share,

    /// List supported languages
    Languages,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => FileStore::default_dir()?,
    };
    let words_dir = cli.words_dir.unwrap_or_else(|| data_dir.join("words"));

    let store = FileStore::new(data_dir);
    let provider = FileProvider::new(words_dir);
    let language = active_language(&store, cli.language)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(Rc::new(store), provider, language);
            run_tui(app)
        }
        Commands::Board => {
            let (index, game) = load_today(language, &provider, &store)?;
            run_board(index, &game);
            Ok(())
        }
        Commands::Share => {
            let (index, game) = load_today(language, &provider, &store)?;
            run_share(index, &game);
            Ok(())
        }
        Commands::Languages => {
            run_languages(language);
            Ok(())
        }
    }
}
