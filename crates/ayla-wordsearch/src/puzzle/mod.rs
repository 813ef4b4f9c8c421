//! Word-search puzzle: grid generation and the interactive solving session.

pub mod direction;
pub mod generator;
pub mod grid;
pub mod session;

pub use direction::Direction;
pub use generator::{
    eligible_words, generate, normalize_word, Generator, PlacedWord, PlacementOrder, Puzzle,
    DEFAULT_GRID_SIZE, MAX_PLACEMENT_ATTEMPTS, MIN_WORD_LEN,
};
pub use grid::{Cell, Grid};
pub use session::{CellState, PuzzleSession, SelectionState, Verdict};
