//! Raw dictionary preparation
//!
//! Turns a raw word list into a game word list. Raw lists hold one entry per
//! line, and some entries carry annotations after a `/` (`kropp/ABC`). An
//! entry is kept when, after dropping the annotation, it:
//! - has exactly the configured number of letters
//! - contains no uppercase letters (proper nouns, abbreviations)
//! - is entirely alphabetic
//! - only uses characters from the allowed alphabet, when one is given

use rustc_hash::FxHashSet;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Filtering rules for one language
#[derive(Debug, Clone)]
pub struct PrepareRules {
    pub word_length: usize,
    pub allowed: Option<FxHashSet<char>>,
}

impl PrepareRules {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            allowed: None,
        }
    }

    /// Restrict words to the characters in `alphabet`; whitespace is ignored
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: &str) -> Self {
        self.allowed = Some(alphabet.chars().filter(|c| !c.is_whitespace()).collect());
        self
    }

    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        word.chars().count() == self.word_length
            && word.chars().all(|c| c.is_alphabetic() && !c.is_uppercase())
            && self
                .allowed
                .as_ref()
                .is_none_or(|allowed| word.chars().all(|c| allowed.contains(&c)))
    }
}

/// Clean one raw line, returning the word if it is kept
#[must_use]
pub fn clean_line<'l>(line: &'l str, rules: &PrepareRules) -> Option<&'l str> {
    let line = line.trim();
    let word = line.split_once('/').map_or(line, |(word, _)| word);
    rules.accepts(word).then_some(word)
}

/// Clean a whole raw list, preserving order
///
/// # Examples
/// ```
/// use wordle_game::wordlists::prepare::{PrepareRules, clean_words};
///
/// let raw = "kropp/ABC\nKalle\nhus\nsläkt\nab-cd\n";
/// let rules = PrepareRules::new(5).with_alphabet("abcdefghijklmnopqrstuvwxyzåäö");
/// assert_eq!(clean_words(raw, &rules), vec!["kropp", "släkt"]);
/// ```
#[must_use]
pub fn clean_words<'r>(raw: &'r str, rules: &PrepareRules) -> Vec<&'r str> {
    raw.lines().filter_map(|line| clean_line(line, rules)).collect()
}

/// Read the allowed alphabet file (typically one line holding every letter)
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn read_alphabet<P: AsRef<Path>>(path: P) -> io::Result<String> {
    Ok(fs::read_to_string(path)?.trim().to_string())
}

/// Clean `raw_path` into `output_path`, one word per line
///
/// Returns the number of words written.
///
/// # Errors
/// Returns an I/O error if the raw file cannot be read or the output cannot
/// be written.
pub fn prepare_file<P: AsRef<Path>, Q: AsRef<Path>>(
    raw_path: P,
    output_path: Q,
    rules: &PrepareRules,
) -> io::Result<usize> {
    let raw = fs::read_to_string(raw_path)?;
    let words = clean_words(&raw, rules);

    let mut output = BufWriter::new(fs::File::create(output_path)?);
    for word in &words {
        writeln!(output, "{word}")?;
    }
    output.flush()?;

    Ok(words.len())
}
