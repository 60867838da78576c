//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Returns a vector of valid Word instances, skipping blank and invalid lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_sv.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Parse newline-separated words
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS_EN;
///
/// let words = words_from_slice(WORDS_EN);
/// assert_eq!(words.len(), WORDS_EN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "Slate", "släkt"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "släkt");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "two words", "", "a1b2c", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_str_skips_blank_lines() {
        let words = words_from_str("pling\n\n  kropp  \r\nkupar\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["pling", "kropp", "kupar"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir()
            .join(format!("wordle_game_loader_{}.txt", std::process::id()));
        fs::write(&path, "pling\nsläkt\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "släkt");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/wordle_game/words.txt").is_err());
    }
}
