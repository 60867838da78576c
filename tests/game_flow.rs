//! End-to-end game scenarios over the public API

use pretty_assertions::assert_eq;
use std::io::Cursor;
use wordle_game::commands::{ConsoleView, PlayStats, run_simple};
use wordle_game::core::{GameError, Mark, Word};
use wordle_game::dictionary::{Dictionary, FixedPicker, RandomPicker};
use wordle_game::game::{GameConfig, GameEngine, GameStatus, GuessOutcome};
use wordle_game::wordlists::{WORDS_SV, loader::words_from_slice};

use Mark::{Absent, CorrectPosition as Correct, WrongPosition as Wrong};

fn dictionary() -> Dictionary {
    Dictionary::parse(["pling", "släkt", "kropp", "kupar"]).unwrap()
}

fn engine(dictionary: &Dictionary) -> GameEngine<'_, FixedPicker> {
    GameEngine::new(dictionary, FixedPicker::new("kupar"), GameConfig::default()).unwrap()
}

fn marks(outcome: &GuessOutcome) -> Vec<Mark> {
    outcome.score().expect("guess was accepted").marks().to_vec()
}

#[test]
fn scripted_guesses_against_kupar() {
    let dictionary = dictionary();
    let mut engine = engine(&dictionary);

    let pling = engine.submit_guess("pling").unwrap();
    assert_eq!(marks(&pling), vec![Wrong, Absent, Absent, Absent, Absent]);

    let slakt = engine.submit_guess("släkt").unwrap();
    assert_eq!(marks(&slakt), vec![Absent, Absent, Absent, Wrong, Absent]);

    let kropp = engine.submit_guess("KROPP").unwrap();
    assert_eq!(marks(&kropp), vec![Correct, Wrong, Absent, Wrong, Absent]);
    assert!(!engine.has_won());

    let kupar = engine.submit_guess("kupar").unwrap();
    assert_eq!(marks(&kupar), vec![Correct; 5]);
    assert!(engine.has_won());
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.attempt_count(), 4);
    assert_eq!(engine.revealed_target().map(Word::text), Some("kupar"));
}

#[test]
fn six_misses_exhaust_the_game() {
    let dictionary = dictionary();
    let mut engine = engine(&dictionary);

    for word in ["pling", "släkt", "kropp", "pling", "släkt", "kropp"] {
        assert!(engine.submit_guess(word).unwrap().is_accepted());
    }

    assert!(!engine.attempts_remaining());
    assert!(!engine.has_won());
    assert_eq!(engine.status(), GameStatus::Lost);
    assert_eq!(engine.submit_guess("kupar"), Err(GameError::NoAttemptsLeft));
    assert_eq!(engine.attempt_count(), 6);
}

#[test]
fn unknown_word_costs_nothing() {
    let dictionary = dictionary();
    let mut engine = engine(&dictionary);
    engine.submit_guess("pling").unwrap();

    assert_eq!(engine.submit_guess("zzzzz").unwrap(), GuessOutcome::Rejected);
    assert_eq!(engine.attempt_count(), 1);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.history()[0].word.text(), "pling");
}

#[test]
fn wrong_length_is_an_error() {
    let dictionary = dictionary();
    let mut engine = engine(&dictionary);

    assert_eq!(
        engine.submit_guess("kup"),
        Err(GameError::LengthMismatch {
            expected: 5,
            actual: 3
        })
    );
    assert_eq!(engine.attempt_count(), 0);
}

#[test]
fn reset_gives_an_independent_game() {
    let dictionary = dictionary();
    let picker = FixedPicker::cycle(["kupar", "kropp"]);
    let mut engine = GameEngine::new(&dictionary, picker, GameConfig::default()).unwrap();

    engine.submit_guess("kropp").unwrap();
    engine.reset().unwrap();

    assert_eq!(engine.attempt_count(), 0);
    assert!(engine.used_letters().is_empty());
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.target_word().text(), "kropp");
    assert!(engine.submit_guess("kropp").unwrap().score().unwrap().is_perfect());
}

#[test]
fn seeded_games_are_repeatable() {
    let dictionary = Dictionary::new(words_from_slice(WORDS_SV)).unwrap();
    let first = GameEngine::new(&dictionary, RandomPicker::from_seed(7), GameConfig::default())
        .unwrap()
        .target_word()
        .clone();
    let second = GameEngine::new(&dictionary, RandomPicker::from_seed(7), GameConfig::default())
        .unwrap()
        .target_word()
        .clone();

    assert_eq!(first, second);
    assert!(dictionary.contains(first.text()));
}

#[test]
fn console_session_end_to_end() {
    let dictionary = dictionary();
    let input = "zzzzz\npling\nkropp\nkupar\nno\n";
    let mut output = Vec::new();

    let view = ConsoleView::new(Cursor::new(input), &mut output, true);
    let stats = run_simple(engine(&dictionary), view).unwrap();

    assert_eq!(stats, PlayStats { games: 1, wins: 1 });
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Invalid word:"));
    assert!(text.contains("| *K* | (R) |  O  | (P) |  P  |"));
    assert!(text.contains("Used letters: G I K L N O P R"));
    assert!(text.contains("You won 1 of 1 game."));
}
