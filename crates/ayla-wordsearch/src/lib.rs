pub mod api;
pub mod bridge;
pub mod config;
pub mod core;
pub mod input;
pub mod puzzle;
pub mod word_search;

// Re-export key types at crate root for convenience
pub use api::game::{Game, EngineContext, RenderContext};
pub use api::types::{
    GameEvent, SoundEvent, CUSTOM_NEW_PUZZLE, EVENT_NEW_PUZZLE, EVENT_PUZZLE_COMPLETE,
    EVENT_WORD_FOUND,
};
pub use bridge::protocol::{FrameBuffer, ProtocolLayout};
pub use bridge::snapshot::{PuzzleSnapshot, WordEntry};
pub use config::{parse_word_list, ConfigError, PuzzleConfig};
pub use crate::core::layout::BoardLayout;
pub use crate::core::rng::{RandomSource, Rng};
pub use input::queue::{InputEvent, InputQueue};
pub use puzzle::{
    generate, Cell, CellState, Direction, Generator, Grid, PlacedWord, PlacementOrder, Puzzle,
    PuzzleSession, SelectionState, Verdict,
};
pub use word_search::WordSearchGame;
