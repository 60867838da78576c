//! TUI application state and logic

use crate::core::{GameError, Mark};
use crate::dictionary::WordPicker;
use crate::game::{GameEngine, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, P: WordPicker> {
    pub engine: GameEngine<'a, P>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Letters shown on the keyboard panel
    pub alphabet: Vec<char>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results of the games finished during this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by the number of guesses used
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_attempts + 1],
        }
    }

    /// Whole-number win percentage, 0 before any game finished
    #[must_use]
    pub fn win_rate(&self) -> usize {
        (self.games_won * 100).checked_div(self.total_games).unwrap_or(0)
    }

    fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(guesses) {
            *slot += 1;
        }
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
    }
}

impl<'a, P: WordPicker> App<'a, P> {
    #[must_use]
    pub fn new(engine: GameEngine<'a, P>) -> Self {
        let alphabet = engine.dictionary().alphabet().into_iter().collect();
        let stats = Statistics::new(engine.max_attempts());
        let mut app = Self {
            engine,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats,
            should_quit: false,
            input_mode: InputMode::Guessing,
            alphabet,
        };
        app.add_message(
            &format!(
                "Welcome! Guess the {}-letter word in {} tries.",
                app.engine.word_length(),
                app.engine.max_attempts()
            ),
            MessageStyle::Info,
        );
        app.add_message("Type a word and press Enter. Esc quits.", MessageStyle::Info);
        app
    }

    /// Apply one key press
    ///
    /// # Errors
    /// Returns `GameError` if a new game cannot select a target.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), GameError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_alphabetic() => {
                    let lower = c.to_lowercase();
                    let len = self.input_buffer.chars().count() + lower.len();
                    if len <= self.engine.word_length() {
                        self.input_buffer.extend(lower);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input()?,
                _ => {}
            },
        }
        Ok(())
    }

    /// Submit the input buffer as a guess
    ///
    /// # Errors
    /// Returns `GameError` only if the engine refuses the guess outright,
    /// which cannot happen while the game is in progress.
    pub fn submit_input(&mut self) -> Result<(), GameError> {
        let length = self.engine.word_length();
        if self.input_buffer.chars().count() != length {
            self.add_message(
                &format!("Word must be exactly {length} letters!"),
                MessageStyle::Error,
            );
            return Ok(());
        }

        let input = self.input_buffer.clone();
        match self.engine.submit_guess(&input)? {
            GuessOutcome::Rejected => {
                self.add_message(
                    &format!("'{}' is not in the word list", input.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::Accepted(score) => {
                self.input_buffer.clear();
                debug!("tui guess {input} scored {score}");
                self.after_accepted_guess();
            }
        }
        Ok(())
    }

    fn after_accepted_guess(&mut self) {
        let guesses = self.engine.attempt_count();

        if self.engine.has_won() {
            self.stats.record_win(guesses);
            self.input_mode = InputMode::GameOver;

            let celebration = match guesses {
                1 => "HOLE IN ONE! Extraordinary!",
                2 => "MAGNIFICENT! Two guesses!",
                3 => "SPLENDID! Three guesses!",
                4 => "GREAT JOB! Four guesses!",
                5 => "NICE WORK! Five guesses!",
                6 => "PHEW! Got it in six!",
                _ => "SOLVED!",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if let Some(target) = self.engine.revealed_target() {
            let text = format!("Out of attempts! The word was {}", target.text().to_uppercase());
            self.stats.record_loss();
            self.input_mode = InputMode::GameOver;
            self.add_message(&text, MessageStyle::Error);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else {
            let remaining = self.engine.remaining_attempts();
            self.add_message(
                &format!(
                    "{remaining} {} left",
                    if remaining == 1 { "attempt" } else { "attempts" }
                ),
                MessageStyle::Info,
            );
        }
    }

    /// Start over with a fresh target; statistics are kept
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if no target can be selected.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.engine.reset()?;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "New game started! Guess the {}-letter word.",
                self.engine.word_length()
            ),
            MessageStyle::Info,
        );
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Best mark seen so far for every alphabet letter, `None` if unused
    #[must_use]
    pub fn keyboard_hints(&self) -> Vec<(char, Option<Mark>)> {
        self.alphabet
            .iter()
            .map(|&letter| {
                let best = self
                    .engine
                    .history()
                    .iter()
                    .flat_map(|entry| entry.word.letters().iter().zip(entry.score.marks()))
                    .filter(|&(&l, _)| l == letter)
                    .map(|(_, &mark)| mark)
                    .max();
                (letter, best)
            })
            .collect()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if a new game cannot start.
pub fn run_tui<P: WordPicker>(app: App<'_, P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, P>(terminal: &mut Terminal<B>, mut app: App<'_, P>) -> Result<()>
where
    B: ratatui::backend::Backend,
    P: WordPicker,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
