//! Browser presentation: draws one of three screens (start, playing, end)
//! onto a canvas plus a couple of DOM overlays (score, remaining-guess
//! hearts), and forwards keyboard / mouse input to the game core.
//!
//! All rules live in [`crate::game`]; this module only calls the three
//! intents and redraws after each one. There is no animation loop; every
//! repaint is a synchronous reaction to a single input event.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, window};

use crate::game::{Game, RandomSource, START_GUESSES, Stage};
use crate::words::WORD_LIST;

// --- Random source -----------------------------------------------------------

/// Browser-side random source. A linear congruential generator seeded from
/// `performance.now()`; the `rng` feature swaps in browser entropy instead.
struct PerfRandom {
    state: u64,
}

impl PerfRandom {
    fn new() -> Self {
        let now = window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Self { state: now as u64 }
    }
}

impl RandomSource for PerfRandom {
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        #[cfg(feature = "rng")]
        {
            let mut buf = [0u8; 8];
            if getrandom::getrandom(&mut buf).is_ok() {
                return (u64::from_le_bytes(buf) % len as u64) as usize;
            }
        }
        // Simple linear transform and modulus (not crypto secure)
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.state >> 16) as usize % len
    }
}

// --- App state ---------------------------------------------------------------

struct App {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    game: Game<PerfRandom>,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

// --- WASM entry --------------------------------------------------------------

#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // An unusable word table is a configuration error; fail the boot, not a
    // later round.
    let game = Game::new(WORD_LIST, PerfRandom::new())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    // Create / reuse the game canvas
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("sw-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("sw-canvas");
        c.set_width(720);
        c.set_height(480);
        c.set_attribute("style", "position:fixed; left:50%; top:50%; transform:translate(-50%,-50%); box-shadow:0 0 32px 0 rgba(0,0,0,0.18); border-radius:18px; border:2px solid #222; background:#181818; z-index:20;").ok();
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    ctx.set_text_align("center");

    ensure_overlays(&doc)?;
    install_listeners(&doc, &canvas)?;

    let app = App { canvas, ctx, game };
    render(&app);
    APP.with(|a| a.replace(Some(app)));
    Ok(())
}

// --- DOM overlays ------------------------------------------------------------

fn ensure_overlays(doc: &Document) -> Result<(), JsValue> {
    // Score overlay (top-left)
    if doc.get_element_by_id("sw-score").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("sw-score");
            div.set_text_content(Some("Score: 0"));
            div.set_attribute("style", "position:fixed; top:10px; left:12px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:45; letter-spacing:0.5px;").ok();
            body.append_child(&div)?;
        }
    }
    // Remaining-guess hearts (top-left, next to score)
    if doc.get_element_by_id("sw-lives").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("sw-lives");
            div.set_inner_html(&hearts_html(START_GUESSES));
            div.set_attribute("style", "position:fixed; top:10px; left:170px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; z-index:44; letter-spacing:0.5px;").ok();
            body.append_child(&div)?;
        }
    }
    Ok(())
}

// Filled hearts for guesses still available, hollow for spent ones.
fn hearts_html(remaining: u32) -> String {
    let max_hearts = START_GUESSES as usize;
    let filled = (remaining as usize).min(max_hearts);
    let mut html = String::new();
    for _ in 0..filled {
        html.push_str("<span style='color:#ff4d4d;font-size:16px;margin-right:6px;'>♥</span>");
    }
    for _ in filled..max_hearts {
        html.push_str("<span style='color:#6b6b6b;font-size:16px;margin-right:6px;'>♡</span>");
    }
    html
}

fn update_overlays(app: &App) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id("sw-score") {
            el.set_text_content(Some(&format!("Score: {}", app.game.score())));
        }
        if let Some(el) = doc.get_element_by_id("sw-lives") {
            el.set_inner_html(&hearts_html(app.game.remaining_guesses()));
        }
    }
}

// --- Input -------------------------------------------------------------------

fn install_listeners(doc: &Document, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    // Keyboard: single letters guess while playing, Enter starts / retries.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            APP.with(|cell| {
                if let Some(app) = cell.borrow_mut().as_mut() {
                    let key = evt.key();
                    match app.game.stage() {
                        Stage::Start => {
                            if key == "Enter" || key == " " {
                                app.game.start_game();
                            }
                        }
                        Stage::Playing => {
                            if key.len() == 1 {
                                if let Some(c) = key.chars().next() {
                                    if c.is_ascii_alphabetic() {
                                        app.game.guess_letter(c);
                                    }
                                }
                            }
                        }
                        Stage::End => {
                            if key == "Enter" {
                                app.game.retry();
                            }
                        }
                    }
                    render(app);
                }
            });
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Mouse: clicking the canvas starts from the start screen, retries from
    // the end screen. Guessing stays keyboard-only.
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            APP.with(|cell| {
                if let Some(app) = cell.borrow_mut().as_mut() {
                    match app.game.stage() {
                        Stage::Start => app.game.start_game(),
                        Stage::Playing => {}
                        Stage::End => app.game.retry(),
                    }
                    render(app);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

// --- Rendering ---------------------------------------------------------------

fn render(app: &App) {
    match app.game.stage() {
        Stage::Start => render_start(app),
        Stage::Playing => render_playing(app),
        Stage::End => render_end(app),
    }
    update_overlays(app);
}

fn clear_background(app: &App) {
    app.ctx.set_fill_style_str("#181825");
    app.ctx.fill_rect(
        0.0,
        0.0,
        app.canvas.width() as f64,
        app.canvas.height() as f64,
    );
}

// Layered stroke + fill so glyphs stay readable on the dark backdrop.
fn draw_glyph(ctx: &CanvasRenderingContext2d, text: &str, x: f64, y: f64) {
    ctx.set_line_width(6.0);
    ctx.set_stroke_style_str("rgba(0,0,0,0.85)");
    ctx.stroke_text(text, x, y).ok();
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_text(text, x, y).ok();
}

fn render_start(app: &App) {
    clear_background(app);
    let ctx = &app.ctx;
    let cx = app.canvas.width() as f64 / 2.0;
    let cy = app.canvas.height() as f64 / 2.0;
    ctx.set_font("56px 'Fira Code', monospace");
    ctx.set_fill_style_str("#ffd166");
    ctx.fill_text("SECRET WORD", cx, cy - 30.0).ok();
    ctx.set_font("20px 'Fira Code', monospace");
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_text("Click or press Enter to play", cx, cy + 30.0)
        .ok();
}

fn render_playing(app: &App) {
    clear_background(app);
    let ctx = &app.ctx;
    let game = &app.game;
    let Some(round) = game.round() else {
        return;
    };
    let cx = app.canvas.width() as f64 / 2.0;

    // Category hint
    ctx.set_font("18px 'Fira Code', monospace");
    ctx.set_fill_style_str("#9ad1ff");
    ctx.fill_text(
        &format!("Hint: the word is about {}", round.category()),
        cx,
        70.0,
    )
    .ok();

    // One outlined tile per word position; revealed letters are drawn in.
    // Repeated letters show up in every tile at once.
    let letters = round.letters();
    let tile = 52.0;
    let gap = 10.0;
    let total = letters.len() as f64 * tile + (letters.len() as f64 - 1.0) * gap;
    let mut x = cx - total / 2.0;
    let top = 160.0;
    ctx.set_shadow_color("rgba(0,0,0,0.55)");
    ctx.set_shadow_blur(12.0);
    ctx.set_shadow_offset_y(3.0);
    ctx.set_font("36px 'Fira Code', monospace");
    for &letter in letters {
        ctx.set_stroke_style_str("#ffd166");
        ctx.set_line_width(2.0);
        ctx.stroke_rect(x, top, tile, tile);
        if game.is_guessed(letter) {
            draw_glyph(ctx, &letter.to_string(), x + tile / 2.0, top + tile * 0.72);
        }
        x += tile + gap;
    }
    ctx.set_shadow_blur(0.0);
    ctx.set_shadow_offset_y(0.0);

    // Misses so far
    if !game.wrong_letters().is_empty() {
        let missed: String = game
            .wrong_letters()
            .iter()
            .map(|c| format!("{c} "))
            .collect();
        ctx.set_font("20px 'Fira Code', monospace");
        ctx.set_fill_style_str("#ff8080");
        ctx.fill_text(&format!("Missed: {}", missed.trim_end()), cx, 310.0)
            .ok();
    }

    ctx.set_font("16px 'Fira Code', monospace");
    ctx.set_fill_style_str("#8888aa");
    ctx.fill_text("Type a letter to guess", cx, 420.0).ok();
}

fn render_end(app: &App) {
    clear_background(app);
    let ctx = &app.ctx;
    let cx = app.canvas.width() as f64 / 2.0;
    let cy = app.canvas.height() as f64 / 2.0;
    ctx.set_fill_style_str("rgba(0,0,0,0.55)");
    ctx.fill_rect(
        0.0,
        0.0,
        app.canvas.width() as f64,
        app.canvas.height() as f64,
    );
    ctx.set_font("72px 'Fira Code', monospace");
    ctx.set_line_width(6.0);
    ctx.set_stroke_style_str("#000000");
    ctx.set_fill_style_str("#ffffff");
    ctx.stroke_text("GAME OVER", cx, cy - 20.0).ok();
    ctx.fill_text("GAME OVER", cx, cy - 20.0).ok();
    ctx.set_font("20px 'Fira Code', monospace");
    ctx.set_fill_style_str("#ffd166");
    ctx.fill_text(&format!("Final score: {}", app.game.score()), cx, cy + 30.0)
        .ok();
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_text("Click or press Enter to retry", cx, cy + 64.0)
        .ok();
}
