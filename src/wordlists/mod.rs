//! Word lists for the game
//!
//! Provides embedded per-language word lists compiled into the binary, a
//! loader for word list files, and the raw dictionary preparation filter.

mod embedded;
pub mod loader;
pub mod prepare;

pub use embedded::{WORDS_EN, WORDS_EN_COUNT, WORDS_SV, WORDS_SV_COUNT};

/// Language codes with an embedded word list
pub const LANGUAGES: &[&str] = &["en", "sv"];

/// Embedded word list for a language code
///
/// # Examples
/// ```
/// use wordle_game::wordlists::embedded;
///
/// assert!(embedded("sv").unwrap().contains(&"kropp"));
/// assert!(embedded("xx").is_none());
/// ```
#[must_use]
pub fn embedded(lang: &str) -> Option<&'static [&'static str]> {
    match lang {
        "en" => Some(WORDS_EN),
        "sv" => Some(WORDS_SV),
        _ => None,
    }
}
