//! Property tests for the game engine.

use proptest::prelude::*;
use strictly_hangman::{
    Category, Engine, FarewellPhrases, GameConfig, GameRng, GuessOutcome, HintOutcome,
    WordSourceError,
};

fn engine(word: String, n: usize, max_hints: u32, seed: u64) -> Engine {
    let categories = (0..n)
        .map(|i| Category::new(format!("Lang{i}"), "#1E1E1E", "#FFD742"))
        .collect();
    Engine::new(
        GameConfig::new(categories, max_hints),
        move || Ok::<_, WordSourceError>(word.clone()),
        GameRng::new(seed),
        FarewellPhrases::default(),
    )
    .expect("engine should start")
}

fn distinct(word: &str) -> Vec<char> {
    let mut letters = Vec::new();
    for c in word.chars() {
        if !letters.contains(&c) {
            letters.push(c);
        }
    }
    letters
}

/// A word plus a shuffled ordering of its distinct letters.
fn word_and_permutation() -> impl Strategy<Value = (String, Vec<char>)> {
    "[a-z]{1,12}".prop_flat_map(|word| {
        let letters = distinct(&word);
        (Just(word), Just(letters).prop_shuffle())
    })
}

/// Letters a-m for words, n-z for wrong guesses.
fn word_and_wrong_letters() -> impl Strategy<Value = (String, Vec<char>, usize)> {
    (
        "[a-m]{1,10}",
        Just(('n'..='z').collect::<Vec<char>>()).prop_shuffle(),
        2usize..=14,
    )
}

proptest! {
    #[test]
    fn prop_won_exactly_after_last_missing_letter(
        (word, order) in word_and_permutation(),
        n in 2usize..10,
    ) {
        let mut engine = engine(word, n, 0, 0);
        let last = order.len() - 1;
        for (i, letter) in order.into_iter().enumerate() {
            prop_assert!(!engine.game().is_won());
            engine.guess_letter(letter);
            prop_assert_eq!(engine.game().is_won(), i == last);
        }
        prop_assert!(engine.game().is_over());
    }

    #[test]
    fn prop_lost_exactly_at_n_minus_one(
        (word, wrong, n) in word_and_wrong_letters(),
    ) {
        let mut engine = engine(word, n, 0, 0);
        let lives = n - 1;
        for (i, letter) in wrong.into_iter().take(lives).enumerate() {
            prop_assert!(!engine.game().is_lost());
            engine.guess_letter(letter);
            let step = i + 1;
            prop_assert_eq!(engine.game().is_lost(), step == lives);
            prop_assert_eq!(engine.game().remaining_guesses() == 0, step == lives);
            prop_assert!(engine.game().wrong_guess_count() <= lives);
        }
    }

    #[test]
    fn prop_guess_is_idempotent(
        word in "[a-z]{1,8}",
        guesses in proptest::collection::vec(proptest::char::range('a', 'z'), 1..20),
    ) {
        let mut engine = engine(word, 9, 2, 0);
        for letter in guesses {
            engine.guess_letter(letter);
            let once = engine.game().clone();
            let again = engine.guess_letter(letter);
            prop_assert!(matches!(again, GuessOutcome::Ignored(_)));
            prop_assert_eq!(engine.game(), &once);
        }
    }

    #[test]
    fn prop_no_mutation_once_over(
        word in "[a-z]{1,6}",
        guesses in proptest::collection::vec(proptest::char::range('a', 'z'), 0..40),
        n in 2usize..6,
    ) {
        let mut engine = engine(word, n, 3, 7);
        for letter in guesses {
            let was_over = engine.game().is_over();
            let before = engine.game().clone();
            let guess = engine.guess_letter(letter);
            let hint = engine.use_hint();
            if was_over {
                prop_assert!(!guess.is_applied());
                prop_assert!(!hint.is_revealed());
                prop_assert_eq!(engine.game(), &before);
            }
        }
    }

    #[test]
    fn prop_hints_never_add_wrong_guesses(
        word in "[a-z]{1,12}",
        max_hints in 0u32..6,
        seed in any::<u64>(),
    ) {
        let mut engine = engine(word, 9, max_hints, seed);
        let mut revealed = 0;
        for _ in 0..10 {
            let wrong_before = engine.game().wrong_guess_count();
            if let HintOutcome::Revealed(event) = engine.use_hint() {
                prop_assert!(event.correct);
                revealed += 1;
            }
            prop_assert_eq!(engine.game().wrong_guess_count(), wrong_before);
            prop_assert!(engine.game().hints_used() <= max_hints);
        }
        prop_assert!(revealed <= max_hints);
    }

    #[test]
    fn prop_new_game_always_resets(
        word in "[a-z]{0,8}",
        guesses in proptest::collection::vec(proptest::char::range('a', 'z'), 0..30),
        hints in 0usize..4,
    ) {
        let mut engine = engine(word, 4, 2, 11);
        for _ in 0..hints {
            engine.use_hint();
        }
        for letter in guesses {
            engine.guess_letter(letter);
        }
        engine.take_terminal_signal();

        engine.start_new_game().unwrap();
        prop_assert!(engine.game().state().guessed_letters().is_empty());
        prop_assert_eq!(engine.game().hints_used(), 0);
        prop_assert!(!engine.terminal_signal_emitted());
    }
}
