//! Simple interactive CLI mode
//!
//! Text-based game without TUI: the guess grid is printed after every turn
//! and words are read line by line.

use crate::core::Word;
use crate::dictionary::WordPicker;
use crate::game::{GameEngine, GameSession, GameView, HistoryEntry, SessionError, SessionOutcome};
use crate::output::{
    render_grid, render_used_letters, write_game_over, write_invalid_word, write_welcome,
    write_win,
};
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

/// Games played during one run of the simple mode
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayStats {
    pub games: usize,
    pub wins: usize,
}

/// Line-based `GameView` over any reader and writer
pub struct ConsoleView<R, W> {
    reader: R,
    writer: W,
    show_used: bool,
    language: Option<String>,
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    /// `show_used` prints the used-letter line before each prompt
    pub const fn new(reader: R, writer: W, show_used: bool) -> Self {
        Self {
            reader,
            writer,
            show_used,
            language: None,
        }
    }

    /// Name the word list language in the welcome banner
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Ask whether to start another game; end of input counts as no
    ///
    /// # Errors
    /// Returns any I/O error from the reader or writer.
    pub fn ask_play_again(&mut self) -> io::Result<bool> {
        Ok(self
            .prompt("Play again? (yes/no)")?
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y")))
    }

    /// # Errors
    /// Returns any I/O error from the writer.
    pub fn write_farewell(&mut self, stats: PlayStats) -> io::Result<()> {
        if stats.games > 0 {
            writeln!(
                self.writer,
                "\nYou won {} of {} {}.",
                stats.wins,
                stats.games,
                if stats.games == 1 { "game" } else { "games" }
            )?;
        }
        writeln!(self.writer, "👋 Thanks for playing!")
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print a prompt and read one trimmed line, `None` at end of input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> GameView for ConsoleView<R, W> {
    fn show_welcome(&mut self, word_length: usize, max_attempts: usize) -> io::Result<()> {
        write_welcome(
            &mut self.writer,
            word_length,
            max_attempts,
            self.language.as_deref(),
        )
    }

    fn show_history(&mut self, history: &[HistoryEntry]) -> io::Result<()> {
        write!(self.writer, "{}", render_grid(history))
    }

    fn show_used_letters(&mut self, used: &BTreeSet<char>) -> io::Result<()> {
        if !self.show_used {
            return Ok(());
        }
        match render_used_letters(used) {
            Some(line) => writeln!(self.writer, "{line}"),
            None => Ok(()),
        }
    }

    fn show_invalid_word(&mut self, word: &str) -> io::Result<()> {
        write_invalid_word(&mut self.writer, word)
    }

    fn show_win(&mut self, history: &[HistoryEntry]) -> io::Result<()> {
        write_win(&mut self.writer, history)?;
        writeln!(self.writer, "Perhaps another game?")
    }

    fn show_loss(&mut self, target: &Word) -> io::Result<()> {
        write_game_over(&mut self.writer, target)
    }

    fn read_word(&mut self) -> io::Result<Option<String>> {
        match self.prompt("Enter a word")? {
            Some(input) if matches!(input.to_lowercase().as_str(), "quit" | "exit") => Ok(None),
            other => Ok(other),
        }
    }
}

/// Run the simple interactive CLI mode until the player stops
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output,
/// or if the engine cannot select a target word.
pub fn run_simple<P, R, W>(
    engine: GameEngine<'_, P>,
    view: ConsoleView<R, W>,
) -> Result<PlayStats, SessionError>
where
    P: WordPicker,
    R: BufRead,
    W: Write,
{
    let mut session = GameSession::new(engine, view);
    let mut stats = PlayStats::default();

    loop {
        match session.play()? {
            SessionOutcome::Won { .. } => {
                stats.games += 1;
                stats.wins += 1;
            }
            SessionOutcome::Lost { .. } => stats.games += 1,
            SessionOutcome::Abandoned => break,
        }

        if !session.view_mut().ask_play_again()? {
            break;
        }
    }

    session.view_mut().write_farewell(stats)?;
    Ok(stats)
}
