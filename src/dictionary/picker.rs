//! Target word selection
//!
//! Defines the `WordPicker` trait and its implementations. Randomness is
//! injected through this trait so tests can fix the target word.

use crate::core::{Word, normalize};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of target words
pub trait WordPicker {
    /// Pick one word from `words`
    ///
    /// Returns `None` if nothing can be picked.
    fn pick<'w>(&mut self, words: &'w [Word]) -> Option<&'w Word>;
}

/// Uniform random selection
///
/// No reproducibility is promised unless the picker is built from a seed.
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picker for a given seed
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Picker seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> WordPicker for RandomPicker<R> {
    fn pick<'w>(&mut self, words: &'w [Word]) -> Option<&'w Word> {
        words.choose(&mut self.rng)
    }
}

/// Deterministic picker that returns scripted words in order, cycling
///
/// A scripted word that is not among the offered words yields `None`.
pub struct FixedPicker {
    script: Vec<String>,
    next: usize,
}

impl FixedPicker {
    /// Always pick `word`
    pub fn new(word: impl AsRef<str>) -> Self {
        Self::cycle([word])
    }

    /// Pick each of `words` in turn, starting over after the last one
    pub fn cycle<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            script: words.into_iter().map(|w| normalize(w.as_ref())).collect(),
            next: 0,
        }
    }
}

impl WordPicker for FixedPicker {
    fn pick<'w>(&mut self, words: &'w [Word]) -> Option<&'w Word> {
        if self.script.is_empty() {
            return None;
        }
        let wanted = &self.script[self.next % self.script.len()];
        self.next += 1;
        words.iter().find(|w| w.text() == wanted)
    }
}
