//! TUI rendering with ratatui
//!
//! Guess grid, on-screen keyboard, message line, and the help and share
//! overlays.

use super::app::App;
use crate::core::{LetterState, MAX_GUESSES, WORD_LENGTH, key_states};
use crate::game::Game;
use crate::locale::{KEY_DELETE, KEY_SUBMIT, Language};
use crate::share::GAME_NAME;
use crate::storage::GuessStore;
use crate::wordlists::WordProvider;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use rustc_hash::FxHashMap;

/// Main UI rendering function
pub fn ui<S: GuessStore + Clone, P: WordProvider>(f: &mut Frame, app: &App<S, P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Length(MAX_GUESSES as u16 + 2), // Guess grid
            Constraint::Length(3),                      // Message
            Constraint::Min(5),                         // Keyboard
            Constraint::Length(1),                      // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, app.board.as_ref(), chunks[1]);
    render_message(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, chunks[4]);

    if app.help_visible {
        render_help(f, app);
    } else if app.share_visible {
        render_share(f, app);
    }
}

const fn state_color(state: LetterState) -> Color {
    match state {
        LetterState::Correct => Color::Green,
        LetterState::Present => Color::Yellow,
        LetterState::Absent => Color::DarkGray,
    }
}

fn render_header<S: GuessStore + Clone, P: WordProvider>(f: &mut Frame, app: &App<S, P>, area: Rect) {
    let mut spans = vec![Span::styled(
        format!("{GAME_NAME} {} ", app.answer_index),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, language) in Language::ALL.iter().enumerate() {
        let style = if *language == app.language {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(
            format!(" {}{} ", i + 1, language.locale().flag),
            style,
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid<S: GuessStore>(f: &mut Frame, board: Option<&Game<S>>, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for row_index in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH);

        let (letters, states): (Vec<char>, Option<[LetterState; WORD_LENGTH]>) = match board {
            Some(game) => {
                if let Some(states) = game.score_row(row_index) {
                    let word: Vec<char> = game.rows()[row_index].chars().collect();
                    (word, Some(states))
                } else if row_index == game.submitted().len() {
                    (game.current_input().chars().collect(), None)
                } else {
                    (Vec::new(), None)
                }
            }
            None => (Vec::new(), None),
        };

        for i in 0..WORD_LENGTH {
            let cell = letters.get(i).map_or("   ".to_string(), |c| {
                format!(" {} ", c.to_uppercase())
            });
            let style = match states {
                Some(row_states) => Style::default()
                    .fg(Color::Black)
                    .bg(state_color(row_states[i]))
                    .add_modifier(Modifier::BOLD),
                None => Style::default()
                    .fg(Color::White)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            };
            spans.push(Span::styled(cell, style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::NONE)
            .padding(ratatui::widgets::Padding::vertical(1)),
    );
    f.render_widget(grid, area);
}

fn render_message<S: GuessStore + Clone, P: WordProvider>(f: &mut Frame, app: &App<S, P>, area: Rect) {
    let message = Paragraph::new(app.message.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(message, area);
}

fn render_keyboard<S: GuessStore + Clone, P: WordProvider>(f: &mut Frame, app: &App<S, P>, area: Rect) {
    let locale = app.language.locale();

    let states: FxHashMap<char, LetterState> = app
        .board
        .as_ref()
        .map(|game| key_states(&game.scored_rows()))
        .unwrap_or_default();

    // The key string has no explicit row breaks; wrap at ten keys per row
    let keys: Vec<char> = locale.keys.chars().collect();
    let mut lines = Vec::new();
    for row in keys.chunks(10) {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for &key in row {
            let style = if key == KEY_DELETE || key == KEY_SUBMIT {
                Style::default().fg(Color::Cyan)
            } else {
                match states.get(&key) {
                    Some(&state) => Style::default()
                        .fg(Color::Black)
                        .bg(state_color(state))
                        .add_modifier(Modifier::BOLD),
                    None => Style::default().fg(Color::White).bg(Color::Black),
                }
            };
            spans.push(Span::styled(format!(" {key} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Type to guess | Enter: submit | 1-4: language | ?: help | Esc: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_help<S: GuessStore + Clone, P: WordProvider>(f: &mut Frame, app: &App<S, P>) {
    let locale = app.language.locale();
    let lines = vec![
        Line::from(format!("Guess the day's {WORD_LENGTH}-letter word in {MAX_GUESSES} tries.")),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" A ", Style::default().fg(Color::Black).bg(Color::Green)),
            Span::raw(" letter in the right spot"),
        ]),
        Line::from(vec![
            Span::styled(" B ", Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::raw(" letter elsewhere in the word"),
        ]),
        Line::from(vec![
            Span::styled(" C ", Style::default().fg(Color::Black).bg(Color::DarkGray)),
            Span::raw(" letter not in the word"),
        ]),
        Line::raw(""),
        Line::from(format!(
            "One new word per day, per language {}. Boards are saved per",
            locale.flag
        )),
        Line::raw("language, so switching back resumes where you left off."),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    render_overlay(f, " How to play ", lines);
}

fn render_share<S: GuessStore + Clone, P: WordProvider>(f: &mut Frame, app: &App<S, P>) {
    let Some(text) = app.share_text() else {
        return;
    };

    let mut lines: Vec<Line> = text.lines().map(Line::raw).collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().add_modifier(Modifier::DIM),
    )));

    render_overlay(f, " Share ", lines);
}

fn render_overlay(f: &mut Frame, title: &str, lines: Vec<Line>) {
    let height = lines.len() as u16 + 2;
    let area = centered_rect(f.area(), 60, height);

    let overlay = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, area);
    f.render_widget(overlay, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
