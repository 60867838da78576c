//! The set of valid guessable words
//!
//! A `Dictionary` is built once from an external word list and never changes
//! afterwards. All of its words share one length.

mod picker;

pub use picker::{FixedPicker, RandomPicker, WordPicker};

use crate::core::{GameError, Word, normalize};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Immutable, non-empty collection of same-length words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary from already validated words
    ///
    /// Repeated words are kept once, at their first position, so that random
    /// selection stays uniform over distinct words.
    ///
    /// # Errors
    /// - `GameError::EmptyDictionary` if `words` is empty
    /// - `GameError::InconsistentWordLength` if a word's length differs from
    ///   the first word's
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, GameError> {
        let mut list: Vec<Word> = Vec::new();
        let mut index = FxHashMap::default();
        let mut word_length = None;

        for word in words {
            let expected = *word_length.get_or_insert(word.len());
            if word.len() != expected {
                return Err(GameError::InconsistentWordLength {
                    expected,
                    word: word.text().to_string(),
                });
            }
            if !index.contains_key(word.text()) {
                index.insert(word.text().to_string(), list.len());
                list.push(word);
            }
        }

        let word_length = word_length.ok_or(GameError::EmptyDictionary)?;

        Ok(Self {
            words: list,
            index,
            word_length,
        })
    }

    /// Build a dictionary from raw strings, rejecting any invalid entry
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` for the first entry that is not a
    /// valid word, plus everything [`Dictionary::new`] can return.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::parse(["pling", "släkt", "kropp", "kupar"]).unwrap();
    /// assert_eq!(dictionary.len(), 4);
    /// assert!(dictionary.contains("KUPAR"));
    /// assert!(!dictionary.contains("start"));
    /// ```
    pub fn parse<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// Exact membership test after normalization
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(normalize(word).as_str())
    }

    /// Look up the stored word for some raw input
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.index
            .get(normalize(word).as_str())
            .map(|&i| &self.words[i])
    }

    /// Choose a word with the given picker
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if the picker yields nothing.
    pub fn random_word<P: WordPicker + ?Sized>(
        &self,
        picker: &mut P,
    ) -> Result<&Word, GameError> {
        picker.pick(&self.words).ok_or(GameError::EmptyDictionary)
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// All words in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every distinct letter used by any word, sorted
    #[must_use]
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.words
            .iter()
            .flat_map(|w| w.letters().iter().copied())
            .collect()
    }
}
