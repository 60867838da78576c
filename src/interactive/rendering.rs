//! TUI rendering with ratatui
//!
//! Board, keyboard and statistics panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use crate::dictionary::WordPicker;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROW: usize = 10;

/// Main UI rendering function
pub fn ui<P: WordPicker>(f: &mut Frame, app: &App<'_, P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Side panels
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::CorrectPosition => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Mark::WrongPosition => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Mark::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn cell(letter: char, style: Style) -> [Span<'static>; 2] {
    let letter: String = letter.to_uppercase().collect();
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

fn render_board<P: WordPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let history = app.engine.history();
    let length = app.engine.word_length();
    let input: Vec<char> = app.input_buffer.chars().collect();

    let mut lines = Vec::with_capacity(app.engine.max_attempts() * 2);
    for row in 0..app.engine.max_attempts() {
        let spans: Vec<Span> = if let Some(entry) = history.get(row) {
            entry
                .word
                .letters()
                .iter()
                .zip(entry.score.marks())
                .flat_map(|(&letter, &mark)| cell(letter, mark_style(mark)))
                .collect()
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            let style = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            (0..length)
                .flat_map(|i| cell(input.get(i).copied().unwrap_or('_'), style))
                .collect()
        } else {
            let style = Style::default().fg(Color::DarkGray);
            (0..length).flat_map(|_| cell('·', style)).collect()
        };
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<P: WordPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Keyboard
            Constraint::Percentage(35), // Guess distribution
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard<P: WordPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let hints = app.keyboard_hints();
    let lines: Vec<Line> = hints
        .chunks(KEYBOARD_ROW)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&(letter, mark)| {
                    let style = mark.map_or_else(|| Style::default().fg(Color::White), mark_style);
                    cell(letter, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_distribution<P: WordPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let distribution = &app.stats.guess_distribution;
    let peak = distribution.iter().copied().max().unwrap_or(0).max(1);
    let width = usize::from(area.width.saturating_sub(10));

    let lines: Vec<Line> = distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(guesses, &count)| {
            let bar = "█".repeat(count * width / peak);
            Line::from(vec![
                Span::raw(format!("{guesses}: ")),
                Span::styled(bar, Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let chart = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(chart, area);
}

fn render_messages<P: WordPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<P: WordPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver if app.engine.has_won() => (
            " Solved! | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            app.engine
                .revealed_target()
                .map(|target| format!("The word was {}", target.text().to_uppercase()))
                .unwrap_or_default(),
            Color::Red,
        ),
        InputMode::Guessing => (
            format!(
                " Enter a {}-letter word | Enter to submit ",
                app.engine.word_length()
            ),
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<P: WordPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempt_text = format!(
        "Attempt: {}/{}",
        app.engine.attempt_count(),
        app.engine.max_attempts()
    );
    f.render_widget(
        Paragraph::new(attempt_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let words_text = format!("Words: {}", app.engine.dictionary().len());
    f.render_widget(
        Paragraph::new(words_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, FixedPicker};
    use crate::game::{GameConfig, GameEngine};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App<'_, FixedPicker>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn type_word(app: &mut App<'_, FixedPicker>, word: &str) {
        for code in word.chars().map(KeyCode::Char).chain([KeyCode::Enter]) {
            app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
        }
    }

    #[test]
    fn renders_board_and_panels() {
        let dictionary = Dictionary::parse(["pling", "kropp", "kupar"]).unwrap();
        let engine =
            GameEngine::new(&dictionary, FixedPicker::new("kupar"), GameConfig::default())
                .unwrap();
        let mut app = App::new(engine);
        type_word(&mut app, "kropp");

        let screen = draw(&app);
        assert!(screen.contains("W O R D L E"));
        assert!(screen.contains(" Board "));
        assert!(screen.contains(" K "));
        assert!(screen.contains("Attempt: 1/6"));
        assert!(screen.contains("Words: 3"));
    }

    #[test]
    fn renders_revealed_target_after_loss() {
        let dictionary = Dictionary::parse(["pling", "kropp", "kupar"]).unwrap();
        let engine =
            GameEngine::new(&dictionary, FixedPicker::new("kupar"), GameConfig::new(1)).unwrap();
        let mut app = App::new(engine);
        type_word(&mut app, "pling");

        let screen = draw(&app);
        assert!(screen.contains("The word was KUPAR"));
        assert!(screen.contains("n: New Game"));
    }
}
