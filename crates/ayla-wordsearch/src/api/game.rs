use crate::api::types::{GameEvent, SoundEvent};
use crate::bridge::protocol::FrameBuffer;
use crate::config::PuzzleConfig;
use crate::input::queue::InputQueue;

/// The contract a puzzle fulfills so the runner can drive it.
pub trait Game {
    /// Return configuration. Called once before init.
    fn config(&self) -> PuzzleConfig {
        PuzzleConfig::default()
    }

    /// Build the initial puzzle.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Apply every pending input event, in order.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only pass that writes the visible state for the host.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Per-update outputs the game hands back to the host.
pub struct EngineContext {
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            sounds: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Emit a sound event to be forwarded to TypeScript.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear transient data (sounds, events) before the next update.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for writing the visible puzzle state.
pub struct RenderContext<'a> {
    pub frame: &'a mut FrameBuffer,
}
