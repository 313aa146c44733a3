//! TUI application state and logic
//!
//! The app sits between terminal events and the guess-state engine: letter
//! keys edit the in-progress row, Enter submits, digits switch language, and
//! regaining terminal focus reloads persisted state (another process may
//! have played the same board). Store failures become messages rather than
//! crashes; a missing word list disables the board with a localized notice.

use crate::commands::load_today;
use crate::game::{Game, GameStatus, SubmitOutcome};
use crate::locale::Language;
use crate::share::share_summary;
use crate::storage::GuessStore;
use crate::wordlists::WordProvider;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: GuessStore + Clone, P: WordProvider> {
    store: S,
    provider: P,
    pub language: Language,
    pub answer_index: usize,
    /// Today's board; `None` while the dictionary is unavailable
    pub board: Option<Game<S>>,
    pub message: String,
    pub help_visible: bool,
    pub share_visible: bool,
    pub should_quit: bool,
}

impl<S: GuessStore + Clone, P: WordProvider> App<S, P> {
    pub fn new(store: S, provider: P, language: Language) -> Self {
        let mut app = Self {
            store,
            provider,
            language,
            answer_index: 0,
            board: None,
            message: String::new(),
            help_visible: false,
            share_visible: false,
            should_quit: false,
        };
        app.load_board();
        app
    }

    /// (Re)initialize the board against the active language's current answer
    fn load_board(&mut self) {
        match load_today(self.language, &self.provider, self.store.clone()) {
            Ok((index, game)) => {
                self.answer_index = index;
                self.board = Some(game);
                self.refresh_message();
            }
            Err(_) => {
                self.board = None;
                self.message = self.language.locale().dictionary_unavailable.to_string();
            }
        }
    }

    /// Switch language, persist it, and reinitialize against its answer
    pub fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        if let Err(e) = self.store.save_language(language) {
            self.message = e.to_string();
            return;
        }
        self.language = language;
        self.share_visible = false;
        self.load_board();
    }

    /// Overwrite in-memory state from the store (focus regained)
    pub fn on_focus_gained(&mut self) {
        let reloaded = match &mut self.board {
            Some(board) => board.reload(),
            None => {
                // The word list may have appeared in the meantime
                self.load_board();
                return;
            }
        };
        match reloaded {
            Ok(()) => self.refresh_message(),
            Err(e) => self.message = e.to_string(),
        }
    }

    fn refresh_message(&mut self) {
        let locale = self.language.locale();
        self.message = match self.board.as_ref().map(Game::status) {
            Some(GameStatus::Won) => locale.won.to_string(),
            Some(GameStatus::Lost) => locale.lost.to_string(),
            Some(GameStatus::InProgress) => String::new(),
            None => locale.dictionary_unavailable.to_string(),
        };
    }

    /// Share block for a finished board
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let board = self.board.as_ref()?;
        if !board.is_done() {
            return None;
        }
        Some(share_summary(
            self.answer_index,
            &board.scored_rows(),
            board.is_won(),
        ))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl-C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Overlays swallow the next key
        if self.help_visible || self.share_visible {
            self.help_visible = false;
            self.share_visible = false;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.help_visible = true,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.set_language(Language::ALL[index]);
            }
            KeyCode::Char(c) => self.on_letter(c),
            KeyCode::Backspace => {
                if let Some(board) = &mut self.board
                    && let Err(e) = board.pop_char()
                {
                    self.message = e.to_string();
                }
            }
            KeyCode::Enter => self.on_submit(),
            _ => {}
        }
    }

    fn on_letter(&mut self, c: char) {
        let Some(board) = &mut self.board else {
            return;
        };

        // Once the board is done, letters no longer type; 's' opens the
        // share overlay instead
        if board.is_done() {
            if c == 's' || c == 'S' {
                self.share_visible = true;
                self.message = self.language.locale().copied.to_string();
            }
            return;
        }

        if let Err(e) = board.push_char(c) {
            self.message = e.to_string();
        }
    }

    fn on_submit(&mut self) {
        let Some(board) = &mut self.board else {
            return;
        };

        match board.submit() {
            Ok(SubmitOutcome::NotAWord(guess)) => {
                self.message = format!("\"{guess}\" {}", self.language.locale().word_not_found);
            }
            Ok(SubmitOutcome::Won | SubmitOutcome::Lost | SubmitOutcome::Accepted) => {
                self.refresh_message();
            }
            Ok(SubmitOutcome::RowIncomplete | SubmitOutcome::AlreadyDone) => {}
            Err(e) => self.message = e.to_string(),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<S: GuessStore + Clone, P: WordProvider>(app: App<S, P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: GuessStore + Clone, P: WordProvider>(
    terminal: &mut Terminal<B>,
    mut app: App<S, P>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::FocusGained => app.on_focus_gained(),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
