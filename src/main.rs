//! Wordle Game - CLI
//!
//! Word-guessing game with TUI and console modes, plus a tool that prepares
//! word lists from raw dictionaries.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{ConsoleView, run_prepare, run_simple},
    dictionary::{Dictionary, RandomPicker},
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig, GameEngine},
    interactive::{App, run_tui},
    wordlists::{LANGUAGES, embedded, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word, in the terminal UI or the plain console",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language of the built-in word list: 'sv' (default) or 'en'
    #[arg(short, long, global = true, default_value = "sv")]
    lang: String,

    /// Path to a word list file (one word per line), overrides --lang
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Number of guesses per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Show the letters used so far (console mode)
    #[arg(short = 'u', long, global = true)]
    show_used: bool,

    /// Seed for target selection, for repeatable games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line based, no TUI)
    Simple,

    /// Clean a raw dictionary into a word list
    Prepare {
        /// Raw dictionary, one entry per line
        raw: PathBuf,

        /// Where to write the cleaned word list
        output: PathBuf,

        /// File holding the allowed alphabet
        #[arg(short, long)]
        chars: Option<PathBuf>,

        /// Required word length
        #[arg(short = 'n', long, default_value = "5")]
        length: usize,
    },
}

/// Build the dictionary from --wordlist, or the embedded list for --lang
fn load_dictionary(wordlist: Option<&Path>, lang: &str) -> Result<Dictionary> {
    let words = if let Some(path) = wordlist {
        load_from_file(path)
            .with_context(|| format!("Failed to load word list {}", path.display()))?
    } else {
        let list = embedded(lang).ok_or_else(|| {
            anyhow!(
                "Unknown language '{lang}', expected one of: {}",
                LANGUAGES.join(", ")
            )
        })?;
        words_from_slice(list)
    };

    Dictionary::new(words).context("Word list cannot be used as a dictionary")
}

fn picker(seed: Option<u64>) -> RandomPicker {
    seed.map_or_else(RandomPicker::from_os_rng, RandomPicker::from_seed)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Prepare {
            raw,
            output,
            chars,
            length,
        } => {
            let kept = run_prepare(&raw, chars.as_deref(), &output, length)?;
            println!(
                "Dictionary processed and saved to {} ({kept} words)",
                output.display()
            );
            Ok(())
        }
        Commands::Play => {
            let dictionary = load_dictionary(cli.wordlist.as_deref(), &cli.lang)?;
            let config = GameConfig::new(cli.max_attempts);
            let engine = GameEngine::new(&dictionary, picker(cli.seed), config)?;
            run_tui(App::new(engine))
        }
        Commands::Simple => {
            let dictionary = load_dictionary(cli.wordlist.as_deref(), &cli.lang)?;
            let config = GameConfig::new(cli.max_attempts);
            let engine = GameEngine::new(&dictionary, picker(cli.seed), config)?;
            let mut view = ConsoleView::new(io::stdin().lock(), io::stdout().lock(), cli.show_used);
            if cli.wordlist.is_none() {
                view = view.with_language(cli.lang);
            }
            run_simple(engine, view)?;
            Ok(())
        }
    }
}
