use bytemuck::{Pod, Zeroable};

/// A sound event emitted by the puzzle.
/// The numeric value maps to a sound in the TypeScript sound player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    /// A word was found.
    pub const SUCCESS: SoundEvent = SoundEvent(1);
    /// The last word was found.
    pub const CELEBRATE: SoundEvent = SoundEvent(2);
}

/// A game event handed from Rust to TypeScript through the frame buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

/// A word was found. a = placed-word index, b = found count, c = placed count.
pub const EVENT_WORD_FOUND: f32 = 1.0;
/// Every word is found. a = found count.
pub const EVENT_PUZZLE_COMPLETE: f32 = 2.0;
/// A new puzzle replaced the old one. a = placed count, b = dropped count.
pub const EVENT_NEW_PUZZLE: f32 = 3.0;

/// Custom event kind (UI → Rust): regenerate from the current word list.
pub const CUSTOM_NEW_PUZZLE: u32 = 1;
