//! Dictionary preparation command
//!
//! Cleans a raw word list into one the game can load with `--wordlist`.

use crate::wordlists::prepare::{PrepareRules, prepare_file, read_alphabet};
use anyhow::{Context, Result, ensure};
use log::info;
use std::path::Path;

/// Clean `raw` into `output`, keeping words of `word_length` letters
///
/// When `chars` is given, its contents are the allowed alphabet.
///
/// # Errors
/// Fails if `word_length` is zero or if any of the files cannot be read or
/// written.
pub fn run_prepare(
    raw: &Path,
    chars: Option<&Path>,
    output: &Path,
    word_length: usize,
) -> Result<usize> {
    ensure!(word_length > 0, "word length must be positive");

    let mut rules = PrepareRules::new(word_length);
    if let Some(chars) = chars {
        let alphabet = read_alphabet(chars)
            .with_context(|| format!("Failed to read alphabet from {}", chars.display()))?;
        rules = rules.with_alphabet(&alphabet);
    }

    let kept = prepare_file(raw, output, &rules).with_context(|| {
        format!(
            "Failed to prepare {} into {}",
            raw.display(),
            output.display()
        )
    })?;
    info!("kept {kept} words from {}", raw.display());

    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("wordle_game_prepare_cmd_{}_{name}", std::process::id()))
    }

    #[test]
    fn prepares_with_alphabet() {
        let raw = temp_path("raw.txt");
        let chars = temp_path("chars.txt");
        let out = temp_path("out.txt");
        fs::write(&raw, "kropp/AB\nKalle\nsläkt\nhus\nkupar\n").unwrap();
        fs::write(&chars, "abcdefghijklmnopqrstuvwxyz\n").unwrap();

        let kept = run_prepare(&raw, Some(&chars), &out, 5).unwrap();

        assert_eq!(kept, 2);
        assert_eq!(fs::read_to_string(&out).unwrap(), "kropp\nkupar\n");
        for path in [raw, chars, out] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn missing_raw_file_reports_path() {
        let raw = temp_path("missing.txt");
        let out = temp_path("never.txt");

        let err = run_prepare(&raw, None, &out, 5).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn zero_length_rejected() {
        let raw = temp_path("zero.txt");
        let out = temp_path("zero_out.txt");
        assert!(run_prepare(&raw, None, &out, 0).is_err());
    }
}
