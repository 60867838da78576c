//! Console messages for the game
//!
//! Every function writes to the given writer so front ends and tests can
//! choose where the text goes.

use super::formatters::display_letter;
use crate::core::Word;
use crate::game::HistoryEntry;
use colored::Colorize;
use std::io::{self, Write};

/// Print the rules, naming the word list language when it is known
///
/// # Errors
/// Returns any error from the writer.
pub fn write_welcome<W: Write>(
    w: &mut W,
    word_length: usize,
    max_attempts: usize,
    language: Option<&str>,
) -> io::Result<()> {
    writeln!(w, "\n{}", "═".repeat(60).cyan())?;
    writeln!(w, "{}", "  W O R D L E".bright_cyan().bold())?;
    writeln!(w, "{}", "═".repeat(60).cyan())?;
    if let Some(language) = language {
        writeln!(w, "Welcome to the game of wordle! (language: {language})")?;
    }
    writeln!(w, "I am thinking of a {word_length}-letter word.")?;
    writeln!(w, "You have {max_attempts} tries to guess the word.")?;
    writeln!(w, "After each guess, you will receive feedback on every letter:")?;
    writeln!(w, " *X*  - correct letter in the correct position")?;
    writeln!(w, " (X)  - correct letter, but in the wrong position")?;
    writeln!(w, "  X   - incorrect letter")?;
    writeln!(w, "Type 'quit' to give up.\n")?;
    Ok(())
}

/// # Errors
/// Returns any error from the writer.
pub fn write_invalid_word<W: Write>(w: &mut W, word: &str) -> io::Result<()> {
    let shown: String = word.chars().map(display_letter).collect();
    writeln!(w, "{} {}", "Invalid word:".red(), shown.bright_red().bold())
}

/// Celebrate a win with the emoji history
///
/// # Errors
/// Returns any error from the writer.
pub fn write_win<W: Write>(w: &mut W, history: &[HistoryEntry]) -> io::Result<()> {
    let attempts = history.len();
    writeln!(w, "\n{}", "🏆 Congratulations! You won! 🏆".bright_green().bold())?;
    writeln!(
        w,
        "Solved in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    )?;
    for (i, entry) in history.iter().enumerate() {
        writeln!(
            w,
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            entry.word.text().to_uppercase().bright_white().bold(),
            entry.score.to_emoji()
        )?;
    }
    writeln!(w)
}

/// # Errors
/// Returns any error from the writer.
pub fn write_game_over<W: Write>(w: &mut W, target: &Word) -> io::Result<()> {
    writeln!(
        w,
        "\n{} {}\n",
        "😢 Game over! The target word was:".red().bold(),
        target.text().to_uppercase().bright_yellow().bold()
    )
}
