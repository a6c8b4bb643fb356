//! Shipped word table: category name -> candidate words.
//!
//! All entries are lowercase ASCII so per-position normalization in the game
//! core is a no-op for shipped data (typed guesses still normalize, so `A`
//! and `a` hit the same letter). Invariants over this table are enforced by
//! `tests/wordlist.rs`.

pub const ANIMAL_WORDS: &[&str] = &[
    "cat", "dog", "horse", "eagle", "shark", "tiger", "otter", "rabbit", "camel", "falcon",
];

pub const FRUIT_WORDS: &[&str] = &[
    "banana", "apple", "orange", "mango", "grape", "papaya", "melon", "cherry", "lemon",
];

pub const COLOR_WORDS: &[&str] = &[
    "red", "blue", "green", "yellow", "purple", "silver", "maroon", "indigo",
];

pub const SPORT_WORDS: &[&str] = &[
    "soccer", "tennis", "hockey", "boxing", "rowing", "karate", "cycling", "fencing",
];

pub const TECHNOLOGY_WORDS: &[&str] = &[
    "router", "laptop", "screen", "mouse", "keyboard", "server", "printer", "monitor",
];

pub const NATURE_WORDS: &[&str] = &[
    "river", "forest", "island", "desert", "meadow", "canyon", "glacier", "volcano",
];

pub const PROFESSION_WORDS: &[&str] = &[
    "doctor", "teacher", "pilot", "farmer", "lawyer", "painter", "plumber", "butcher",
];

pub const INSTRUMENT_WORDS: &[&str] = &[
    "guitar", "violin", "drums", "piano", "flute", "trumpet", "cello", "banjo",
];

/// The full table handed to the game at startup.
pub const WORD_LIST: &[(&str, &[&str])] = &[
    ("animals", ANIMAL_WORDS),
    ("fruits", FRUIT_WORDS),
    ("colors", COLOR_WORDS),
    ("sports", SPORT_WORDS),
    ("technology", TECHNOLOGY_WORDS),
    ("nature", NATURE_WORDS),
    ("professions", PROFESSION_WORDS),
    ("instruments", INSTRUMENT_WORDS),
];
