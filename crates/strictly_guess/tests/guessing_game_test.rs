//! Tests for guess classification, history and game completion.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;

use strictly_guess::{GameRules, GuessError, GuessingGame, MAX_GUESSES, Outcome};

fn game_with_secret(secret: i64) -> GuessingGame {
    GuessingGame::with_secret("Alice", GameRules::default(), secret)
}

#[test]
fn test_new_game_starts_empty() {
    let game = GuessingGame::create("Alice");
    assert_eq!(game.name(), "Alice");
    assert!(game.guesses().is_empty());
    assert_eq!(game.current_outcome(), Outcome::Start);
    assert!(!game.done());
    assert!(!game.lost());
    assert_eq!(game.remaining_guesses(), MAX_GUESSES);
}

#[test]
fn test_outcome_matches_comparison() {
    for secret in [-5_i64, 0, 1, 42, 100] {
        for guess in [-6_i64, -5, 0, 1, 41, 42, 43, 100, 101] {
            let mut game = game_with_secret(secret);
            let outcome = game.check_guess(&guess.to_string()).expect("integer guess");
            let expected = match guess.cmp(&secret) {
                std::cmp::Ordering::Less => Outcome::TooLow,
                std::cmp::Ordering::Greater => Outcome::TooHigh,
                std::cmp::Ordering::Equal => Outcome::Correct,
            };
            assert_eq!(outcome, expected, "secret={secret} guess={guess}");
            assert_eq!(game.current_outcome(), expected);
        }
    }
}

#[test]
fn test_scenario_low_high_correct() {
    let mut game = game_with_secret(42);
    let outcomes: Vec<Outcome> = ["10", "50", "42"]
        .iter()
        .map(|g| game.check_guess(g).expect("valid guess"))
        .collect();

    assert_eq!(outcomes, [Outcome::TooLow, Outcome::TooHigh, Outcome::Correct]);
    assert_eq!(game.guesses(), ["10", "50", "42"]);
    assert!(game.done());
    assert!(!game.lost());
}

#[test]
fn test_invalid_guess_on_fresh_game() {
    let mut game = game_with_secret(42);
    let err = game.check_guess("abc").unwrap_err();

    assert!(matches!(err, GuessError::InvalidInput { ref raw } if raw == "abc"));
    assert!(game.guesses().is_empty());
    assert_eq!(game.current_outcome(), Outcome::Start);
}

#[test]
fn test_invalid_guess_keeps_previous_outcome() {
    let mut game = game_with_secret(42);
    game.check_guess("90").expect("valid guess");

    for bad in ["", "  ", "4 2", "forty-two", "42abc", "0x2a", "1e3", "-"] {
        assert!(game.check_guess(bad).is_err(), "{bad:?} should be rejected");
    }

    assert_eq!(game.guesses(), ["90"]);
    assert_eq!(game.current_outcome(), Outcome::TooHigh);
}

#[test]
fn test_integers_beyond_i64_still_compare() {
    let mut game = game_with_secret(42);
    assert_eq!(
        game.check_guess("99999999999999999999").expect("integer guess"),
        Outcome::TooHigh
    );
    assert_eq!(
        game.check_guess(" -99999999999999999999").expect("integer guess"),
        Outcome::TooLow
    );
    assert_eq!(game.guesses(), ["99999999999999999999", " -99999999999999999999"]);
    assert_eq!(game.current_outcome(), Outcome::TooLow);
}

#[test]
fn test_history_grows_only_on_success() {
    let mut game = game_with_secret(7);
    let inputs = ["1", "x", "2", "", "3"];
    let mut expected_len = 0;
    for input in inputs {
        let before = game.guesses().len();
        if game.check_guess(input).is_ok() {
            expected_len += 1;
        }
        assert!(game.guesses().len() >= before);
        assert_eq!(game.guesses().len(), expected_len);
    }
    assert_eq!(game.guesses(), ["1", "2", "3"]);
}

#[test]
fn test_loss_after_max_guesses() {
    let rules = GameRules::new(1, 100, 3).expect("valid rules");
    let mut game = GuessingGame::with_secret("Bob", rules, 50);

    game.check_guess("1").expect("valid");
    game.check_guess("2").expect("valid");
    assert!(!game.done());

    let outcome = game.check_guess("3").expect("valid");
    assert_eq!(outcome, Outcome::TooLow);
    assert!(game.done());
    assert!(game.lost());
    assert_eq!(game.remaining_guesses(), 0);
}

#[test]
fn test_correct_on_last_guess_is_not_a_loss() {
    let rules = GameRules::new(1, 100, 2).expect("valid rules");
    let mut game = GuessingGame::with_secret("Bob", rules, 50);

    game.check_guess("10").expect("valid");
    game.check_guess("50").expect("valid");
    assert!(game.done());
    assert!(!game.lost());
}

#[test]
fn test_game_accepts_guesses_after_done() {
    let mut game = game_with_secret(3);
    game.check_guess("3").expect("valid");
    assert!(game.done());

    // Stopping play is left to whoever holds the saved game.
    assert_eq!(game.check_guess("4").expect("valid"), Outcome::TooHigh);
    assert_eq!(game.guesses().len(), 2);
}

#[test]
fn test_message_covers_every_outcome() {
    let game = game_with_secret(42);
    for outcome in Outcome::iter() {
        let text = game.message(outcome);
        assert!(!text.is_empty(), "{outcome} has no message");
        assert!(!text.contains("42"), "{outcome} message leaks the secret");
    }
}

#[test]
fn test_start_message_greets_player() {
    let game = game_with_secret(42);
    assert_eq!(
        game.message(Outcome::Start),
        "Hello, Alice. I'm thinking of a number from 1 to 100. You have 10 guesses."
    );
}

#[test]
fn test_message_is_fixed_per_outcome() {
    let mut game = game_with_secret(42);
    let fresh: Vec<String> = Outcome::iter().map(|o| game.message(o)).collect();
    for raw in ["10", "50", "42"] {
        game.check_guess(raw).expect("valid guess");
    }
    let played: Vec<String> = Outcome::iter().map(|o| game.message(o)).collect();
    assert_eq!(fresh, played);
}

#[test]
fn test_lost_message_names_player() {
    let game = game_with_secret(42);
    assert!(game.message(Outcome::Lost).contains("Alice"));
}

#[test]
fn test_message_is_pure() {
    let mut game = game_with_secret(42);
    game.check_guess("10").expect("valid");
    let before = game.clone();
    for outcome in Outcome::iter() {
        let _ = game.message(outcome);
    }
    assert_eq!(game, before);
}

#[test]
fn test_secret_within_range() {
    let rules = GameRules::new(-3, 3, 5).expect("valid rules");
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let mut game = GuessingGame::create_with("Carol", rules, &mut rng);
        // Exactly one value in the range is correct.
        let hits = (-3..=3)
            .filter(|v: &i64| {
                let mut probe = game.clone();
                probe.check_guess(&v.to_string()).expect("valid") == Outcome::Correct
            })
            .count();
        assert_eq!(hits, 1);
        assert!(game.check_guess("-4").expect("valid") == Outcome::TooLow);
    }
}

#[test]
fn test_seeded_rng_is_deterministic() {
    let rules = GameRules::default();
    let a = GuessingGame::create_with("Dan", rules, &mut StdRng::seed_from_u64(99));
    let b = GuessingGame::create_with("Dan", rules, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn test_serde_preserves_game() {
    let mut game = game_with_secret(42);
    game.check_guess(" 17").expect("valid");
    let json = serde_json::to_string(&game).expect("serialize");
    assert!(json.contains("\"TOO_LOW\""));
    let restored: GuessingGame = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, game);
}
