//! Secret Word core crate.
//!
//! Browser hangman-style word guessing game: a hidden word is drawn from the
//! categorized table in [`words`], and the player reveals it letter by letter
//! with three wrong guesses per session. The rules live in [`game`] as a pure
//! state machine with injected word table and random source, so they compile
//! and test natively; [`screen`] renders the three screens with
//! wasm-bindgen / web-sys.

use wasm_bindgen::prelude::*;

pub mod game;
mod screen;
pub mod words;

pub use game::{EmptyWordSource, Game, RandomSource, Round, START_GUESSES, Stage, WIN_REWARD};
pub use words::WORD_LIST;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// JS entrypoint: boots the canvas presentation over the shipped word table.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    screen::start_app()
}
