//! Formatting utilities for terminal output

use crate::core::Mark;
use crate::game::HistoryEntry;
use std::collections::BTreeSet;

/// Uppercase form of a letter for display
#[must_use]
pub fn display_letter(letter: char) -> String {
    letter.to_uppercase().collect()
}

/// One grid cell, five columns wide
///
/// `*X*` correct position, `(X)` wrong position, bare letter when absent.
#[must_use]
pub fn format_cell(letter: char, mark: Mark) -> String {
    let letter = display_letter(letter);
    match mark {
        Mark::CorrectPosition => format!(" *{letter}* "),
        Mark::WrongPosition => format!(" ({letter}) "),
        Mark::Absent => format!("  {letter}  "),
    }
}

/// Horizontal grid border for a word length
#[must_use]
pub fn grid_border(word_length: usize) -> String {
    let mut border = String::from("+");
    for _ in 0..word_length {
        border.push_str("-----+");
    }
    border
}

/// Draw the guess grid
///
/// ```text
/// +-----+-----+-----+-----+-----+
/// | *S* |  T  | (A) | (R) |  T  |
/// +-----+-----+-----+-----+-----+
/// ```
///
/// Returns an empty string when nothing has been guessed yet.
#[must_use]
pub fn render_grid(history: &[HistoryEntry]) -> String {
    let Some(first) = history.first() else {
        return String::new();
    };

    let border = grid_border(first.word.len());
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');

    for entry in history {
        out.push('|');
        for (&letter, &mark) in entry.word.letters().iter().zip(entry.score.marks()) {
            out.push_str(&format_cell(letter, mark));
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&border);
    out.push('\n');
    out
}

/// "Used letters: A B C", or `None` if nothing has been used
#[must_use]
pub fn render_used_letters(used: &BTreeSet<char>) -> Option<String> {
    if used.is_empty() {
        return None;
    }
    let letters: Vec<String> = used.iter().map(|&c| display_letter(c)).collect();
    Some(format!("Used letters: {}", letters.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Score, Word};
    use pretty_assertions::assert_eq;

    fn entry(guess: &str, target: &str) -> HistoryEntry {
        let word = Word::new(guess).unwrap();
        let score = Score::calculate(&word, &Word::new(target).unwrap()).unwrap();
        HistoryEntry { word, score }
    }

    #[test]
    fn cells() {
        assert_eq!(format_cell('s', Mark::CorrectPosition), " *S* ");
        assert_eq!(format_cell('a', Mark::WrongPosition), " (A) ");
        assert_eq!(format_cell('t', Mark::Absent), "  T  ");
        assert_eq!(format_cell('ä', Mark::Absent), "  Ä  ");
    }

    #[test]
    fn border_matches_word_length() {
        assert_eq!(grid_border(5), "+-----+-----+-----+-----+-----+");
        assert_eq!(grid_border(1), "+-----+");
    }

    #[test]
    fn grid_for_start_vs_spray() {
        let grid = render_grid(&[entry("start", "spray")]);
        assert_eq!(
            grid,
            "+-----+-----+-----+-----+-----+\n\
             | *S* |  T  | (A) | (R) |  T  |\n\
             +-----+-----+-----+-----+-----+\n"
        );
    }

    #[test]
    fn grid_has_one_row_per_guess() {
        let grid = render_grid(&[entry("pling", "kupar"), entry("kropp", "kupar")]);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "| (P) |  L  |  I  |  N  |  G  |");
        assert_eq!(lines[2], "| *K* | (R) |  O  | (P) |  P  |");
    }

    #[test]
    fn empty_grid() {
        assert_eq!(render_grid(&[]), "");
    }

    #[test]
    fn used_letters_line() {
        let used: BTreeSet<char> = "kropp".chars().collect();
        assert_eq!(
            render_used_letters(&used).as_deref(),
            Some("Used letters: K O P R")
        );
        assert_eq!(render_used_letters(&BTreeSet::new()), None);
    }
}
