//! Core game rules: a small state machine over three screens (start, playing,
//! end). Pure Rust with no browser types so it compiles and tests natively;
//! the word table and the random source are injected by the caller.
//!
//! The screen layer only ever calls the three intents (`start_game`,
//! `guess_letter`, `retry`) and reads the accessors back. Win and loss are
//! re-checked synchronously inside the mutation that can trigger them, so a
//! caller never observes zero guesses left while the stage still says playing.

use std::collections::HashSet;
use std::fmt;

/// Category name -> ordered candidate words. Supplied once, never mutated.
pub type WordSource = &'static [(&'static str, &'static [&'static str])];

/// Guesses a fresh session starts with.
pub const START_GUESSES: u32 = 3;
/// Points awarded per completed word.
pub const WIN_REWARD: i64 = 100;

// --- Stage -------------------------------------------------------------------

/// Which screen of the game is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    Start,
    Playing,
    End,
}

// --- Random source -----------------------------------------------------------

/// Uniform index source for category / word selection. Injected so tests can
/// script the picks; the browser build seeds one from `performance.now()`.
pub trait RandomSource {
    /// Returns an index in `0..len`. Never called with `len == 0` by the game.
    fn index(&mut self, len: usize) -> usize;
}

// --- Errors ------------------------------------------------------------------

/// The word table handed to [`Game::new`] had no usable words: no categories,
/// a category without words, or an empty word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyWordSource;

impl fmt::Display for EmptyWordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("word source has no usable words")
    }
}

impl std::error::Error for EmptyWordSource {}

// --- Round -------------------------------------------------------------------

/// The currently active round: the drawn category / word and the word broken
/// into per-position lowercase letters. Rebuilt on every new round, dropped
/// only when a fresh one replaces it.
#[derive(Clone, Debug)]
pub struct Round {
    category: &'static str,
    word: &'static str,
    letters: Vec<char>, // one entry per word position, lowercased, duplicates kept
}

impl Round {
    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn word(&self) -> &'static str {
        self.word
    }

    /// Lowercase letters of the word, one per position. Repeated letters stay
    /// repeated so masked rendering can reveal every occurrence at once.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

// --- Game --------------------------------------------------------------------

/// Owns all mutable game state. The screen layer holds one of these and talks
/// to it exclusively through the intents and accessors below.
pub struct Game<R: RandomSource> {
    stage: Stage,
    words: WordSource,
    round: Option<Round>,
    guessed: Vec<char>, // hits, original casing as typed, no case-insensitive duplicates
    wrong: Vec<char>,   // misses, normalized lowercase, no duplicates
    guesses: u32,       // remaining wrong guesses
    score: i64,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    /// Builds a game over the given word table. An unusable table is a
    /// configuration error and is rejected here, before any round can start.
    pub fn new(words: WordSource, rng: R) -> Result<Self, EmptyWordSource> {
        let usable = !words.is_empty()
            && words
                .iter()
                .all(|(_, list)| !list.is_empty() && list.iter().all(|w| !w.is_empty()));
        if !usable {
            return Err(EmptyWordSource);
        }
        Ok(Self {
            stage: Stage::Start,
            words,
            round: None,
            guessed: Vec::new(),
            wrong: Vec::new(),
            guesses: START_GUESSES,
            score: 0,
            rng,
        })
    }

    // --- Intents -------------------------------------------------------------

    /// Starts a round: clears the guess state, draws a category and a word,
    /// and switches to the playing screen. Score and remaining guesses are
    /// deliberately left alone so they carry across won rounds; only
    /// [`Game::retry`] resets them.
    pub fn start_game(&mut self) {
        self.guessed.clear();
        self.wrong.clear();
        let (category, list) = self.words[self.rng.index(self.words.len())];
        let word = list[self.rng.index(list.len())];
        let letters = word.chars().map(normalize).collect();
        self.round = Some(Round {
            category,
            word,
            letters,
        });
        self.stage = Stage::Playing;
        // The word letters changed, so the win condition is re-derived here
        // too; the distinct-letter guard keeps a fresh round from counting as
        // already won.
        self.check_win();
    }

    /// Classifies one typed letter. Outside the playing screen, or for a
    /// letter already classified this round (in either casing), this is a
    /// no-op rather than an error.
    pub fn guess_letter(&mut self, letter: char) {
        if self.stage != Stage::Playing {
            return;
        }
        let Some(round) = &self.round else {
            return;
        };
        let normalized = normalize(letter);
        if self.wrong.contains(&normalized)
            || self.guessed.iter().any(|&g| normalize(g) == normalized)
        {
            return;
        }
        if round.letters.contains(&normalized) {
            self.guessed.push(letter);
            self.check_win();
        } else {
            self.wrong.push(normalized);
            self.guesses = self.guesses.saturating_sub(1);
            self.check_loss();
        }
    }

    /// Back to the start screen with a zeroed score and full guesses. Round
    /// and guess state are rebuilt by the next [`Game::start_game`].
    pub fn retry(&mut self) {
        self.score = 0;
        self.guesses = START_GUESSES;
        self.stage = Stage::Start;
    }

    // --- Derived transitions -------------------------------------------------

    // Run after every decrement of `guesses`.
    fn check_loss(&mut self) {
        if self.guesses == 0 {
            self.guessed.clear();
            self.wrong.clear();
            self.stage = Stage::End;
        }
    }

    // Run after every hit and after a round's letters are (re)set. The word
    // is complete once the guessed letters, deduplicated case-insensitively,
    // cover every distinct letter of the word. The `unique.is_empty()` guard
    // keeps an unpicked round from counting as won.
    fn check_win(&mut self) {
        let won = match &self.round {
            Some(round) => {
                let unique: HashSet<char> = round.letters.iter().copied().collect();
                !unique.is_empty() && {
                    let matched: HashSet<char> = self
                        .guessed
                        .iter()
                        .map(|&g| normalize(g))
                        .filter(|g| unique.contains(g))
                        .collect();
                    matched.len() == unique.len()
                }
            }
            None => false,
        };
        if won {
            self.score += WIN_REWARD;
            self.start_game();
        }
    }

    // --- Read-only view ------------------------------------------------------

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Active round, if one has been drawn. `None` until the first start.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong
    }

    pub fn remaining_guesses(&self) -> u32 {
        self.guesses
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Whether a word letter has been revealed, compared case-insensitively.
    pub fn is_guessed(&self, letter: char) -> bool {
        let normalized = normalize(letter);
        self.guessed.iter().any(|&g| normalize(g) == normalized)
    }

    /// Read-only copy of everything the screen layer renders.
    #[cfg(feature = "serde")]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            stage: self.stage,
            category: self.round.as_ref().map(|r| r.category),
            letters: self.round.as_ref().map(|r| r.letters()).unwrap_or(&[]),
            guessed: &self.guessed,
            wrong: &self.wrong,
            guesses: self.guesses,
            score: self.score,
        }
    }

    #[cfg(feature = "serde_json")]
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }
}

/// Serializable view of the visible game state.
#[cfg(feature = "serde")]
#[derive(Debug, serde::Serialize)]
pub struct Snapshot<'a> {
    pub stage: Stage,
    pub category: Option<&'a str>,
    pub letters: &'a [char],
    pub guessed: &'a [char],
    pub wrong: &'a [char],
    pub guesses: u32,
    pub score: i64,
}

// Lowercases one character, keeping a 1:1 mapping per word position.
fn normalize(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
