//! Browser bindings for the word search.
//!
//! The page calls `puzzle_init` once, feeds words with `puzzle_load_words`,
//! forwards pointer or cell events, and reads state back either from the
//! flat frame buffer (`get_frame_ptr`) or as JSON (`puzzle_snapshot_json`).

use std::cell::RefCell;

use ayla_wordsearch::{
    parse_word_list, InputEvent, PuzzleConfig, PuzzleSnapshot, WordSearchGame, CUSTOM_NEW_PUZZLE,
};
use wasm_bindgen::prelude::*;

pub mod runner;

pub use runner::PuzzleRunner;

thread_local! {
    static RUNNER: RefCell<Option<PuzzleRunner<WordSearchGame>>> = RefCell::new(None);
}

/// Run `f` against the live runner. Returns `None` (and logs) before init.
fn with_runner<R>(f: impl FnOnce(&mut PuzzleRunner<WordSearchGame>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("puzzle not initialized; call puzzle_init() first");
                None
            }
        }
    })
}

fn load_config(json: &str) -> PuzzleConfig {
    if json.trim().is_empty() {
        return PuzzleConfig::default();
    }
    match PuzzleConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using default config");
            PuzzleConfig::default()
        }
    }
}

fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[wasm_bindgen]
pub fn puzzle_init(config_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = load_config(config_json);
    let seed = config.seed.unwrap_or_else(random_seed);
    let mut runner = PuzzleRunner::new(WordSearchGame::with_seed(seed, config));
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("ayla word search: initialized");
}

/// Parse `words_json` and rebuild the puzzle from it. Malformed JSON keeps
/// the current puzzle and progress, and reports 0.
fn load_words_json(runner: &mut PuzzleRunner<WordSearchGame>, words_json: &str) -> u32 {
    let words = match parse_word_list(words_json) {
        Ok(words) => words,
        Err(err) => {
            log::warn!("invalid word list, keeping current puzzle: {err}");
            return 0;
        }
    };
    runner.with_game(|game, ctx| {
        game.load_words(ctx, words);
        game.session().puzzle().placed_words().len() as u32
    })
}

/// Replace the candidate words and build a new puzzle. Returns the number
/// of words that made it into the grid.
#[wasm_bindgen]
pub fn puzzle_load_words(words_json: &str) -> u32 {
    with_runner(|r| load_words_json(r, words_json)).unwrap_or(0)
}

#[wasm_bindgen]
pub fn puzzle_new() {
    with_runner(|r| {
        r.handle_input(InputEvent::Custom { kind: CUSTOM_NEW_PUZZLE, a: 0.0, b: 0.0, c: 0.0 })
    });
}

#[wasm_bindgen]
pub fn puzzle_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.handle_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn puzzle_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.handle_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn puzzle_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.handle_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn puzzle_pointer_leave() {
    with_runner(|r| r.handle_input(InputEvent::PointerLeave));
}

#[wasm_bindgen]
pub fn puzzle_cell_down(row: u32, col: u32) {
    with_runner(|r| r.handle_input(InputEvent::CellDown { row, col }));
}

#[wasm_bindgen]
pub fn puzzle_cell_enter(row: u32, col: u32) {
    with_runner(|r| r.handle_input(InputEvent::CellEnter { row, col }));
}

#[wasm_bindgen]
pub fn puzzle_cell_up() {
    with_runner(|r| r.handle_input(InputEvent::CellUp));
}

#[wasm_bindgen]
pub fn puzzle_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.handle_input(InputEvent::Custom { kind, a, b, c }));
}

// ---- State accessors ----

#[wasm_bindgen]
pub fn puzzle_snapshot_json() -> String {
    with_runner(|r| PuzzleSnapshot::capture(r.game().session()).to_json())
        .and_then(|json| match json {
            Ok(json) => Some(json),
            Err(err) => {
                log::warn!("snapshot serialization failed: {err}");
                None
            }
        })
        .unwrap_or_else(|| "null".to_string())
}

#[wasm_bindgen]
pub fn puzzle_is_complete() -> bool {
    with_runner(|r| r.game().session().is_complete()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_grid_size() -> u32 {
    with_runner(|r| r.grid_size()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height()).unwrap_or(0.0)
}
