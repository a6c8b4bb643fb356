// Integration tests (native) for the `secret-word` crate.
// These tests avoid wasm-specific functionality and exercise the public game
// API so they can run under `cargo test` on the host.

use secret_word::{Game, RandomSource, START_GUESSES, Stage, WIN_REWARD, WORD_LIST};

// Deterministic random source: replays a fixed list of picks, then 0.
struct Picks {
    picks: Vec<usize>,
    next: usize,
}

impl Picks {
    fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for Picks {
    fn index(&mut self, len: usize) -> usize {
        let p = self.picks.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        p % len
    }
}

#[test]
fn shipped_word_list_is_accepted_at_startup() {
    assert!(Game::new(WORD_LIST, Picks::new(&[])).is_ok());
}

// Every word in the shipped table must break into one lowercase letter per
// position when its round starts.
#[test]
fn every_shipped_word_yields_per_position_lowercase_letters() {
    for (ci, (category, list)) in WORD_LIST.iter().enumerate() {
        for (wi, word) in list.iter().enumerate() {
            let mut game = Game::new(WORD_LIST, Picks::new(&[ci, wi])).unwrap();
            game.start_game();
            let round = game.round().unwrap();
            assert_eq!(round.category(), *category);
            assert_eq!(round.word(), *word);
            assert_eq!(
                round.letters().len(),
                word.chars().count(),
                "letter count mismatch for '{}'",
                word
            );
            assert!(
                round.letters().iter().all(|c| c.is_lowercase()),
                "non-lowercase letter in round for '{}'",
                word
            );
        }
    }
}

#[test]
fn full_session_win_then_loss_then_retry() {
    // First category, first word. Once the scripted picks run out the source
    // returns 0, so the follow-up round is deterministic too.
    let mut game = Game::new(WORD_LIST, Picks::new(&[0, 0])).unwrap();
    game.start_game();
    assert_eq!(game.stage(), Stage::Playing);

    // Win the round by guessing each distinct letter of the drawn word.
    let mut distinct: Vec<char> = Vec::new();
    for &c in game.round().unwrap().letters() {
        if !distinct.contains(&c) {
            distinct.push(c);
        }
    }
    for c in distinct {
        game.guess_letter(c);
    }
    assert_eq!(game.score(), WIN_REWARD);
    assert_eq!(game.stage(), Stage::Playing);
    assert!(game.guessed_letters().is_empty());
    assert_eq!(game.remaining_guesses(), START_GUESSES);

    // Burn the remaining guesses on letters no shipped word starts a round
    // with here ("cat" again, via the exhausted pick source).
    for c in ['x', 'y', 'z'] {
        game.guess_letter(c);
    }
    assert_eq!(game.stage(), Stage::End);
    assert_eq!(game.score(), WIN_REWARD); // kept until retry

    game.retry();
    assert_eq!(game.stage(), Stage::Start);
    assert_eq!(game.score(), 0);
    assert_eq!(game.remaining_guesses(), START_GUESSES);
}
