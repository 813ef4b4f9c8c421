use ayla_wordsearch::{
    EngineContext, FrameBuffer, Game, GameEvent, InputEvent, InputQueue, ProtocolLayout,
    PuzzleConfig, RenderContext, SoundEvent,
};

/// Generic runner that wires a puzzle to the host page.
///
/// The page keeps one runner in a `thread_local!` and calls free functions
/// exported via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly. Every input event is applied and published
/// before the exported call returns, so gestures never interleave.
pub struct PuzzleRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    frame: FrameBuffer,
    config: PuzzleConfig,
    initialized: bool,
}

impl<G: Game> PuzzleRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let frame = FrameBuffer::new(ProtocolLayout::from_config(&config));

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            frame,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    /// Input queued before this point is discarded.
    pub fn init(&mut self) {
        self.input.drain();
        self.ctx.clear_frame_data();
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.publish();
    }

    /// Queue an input event without applying it yet.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Queue an input event and apply it immediately.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.push_input(event);
        self.pump();
    }

    /// Apply all queued input, then rebuild the frame buffer.
    pub fn pump(&mut self) {
        if !self.initialized {
            return;
        }
        self.ctx.clear_frame_data();
        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();
        self.publish();
    }

    /// Run `f` against the game outside the input path (e.g. loading words),
    /// then publish whatever it emitted.
    pub fn with_game<R>(&mut self, f: impl FnOnce(&mut G, &mut EngineContext) -> R) -> R {
        self.ctx.clear_frame_data();
        let result = f(&mut self.game, &mut self.ctx);
        self.publish();
        result
    }

    fn publish(&mut self) {
        self.frame.begin_frame();
        {
            let mut render_ctx = RenderContext {
                frame: &mut self.frame,
            };
            self.game.render(&mut render_ctx);
        }
        self.frame.write_outputs(&self.ctx.sounds, &self.ctx.events);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Sounds emitted by the last applied call.
    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }

    /// Events emitted by the last applied call.
    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn grid_size(&self) -> u32 {
        self.config.grid_size as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayla_wordsearch::bridge::protocol::{
        HEADER_COMPLETE, HEADER_EVENT_COUNT, HEADER_FOUND_COUNT, HEADER_FRAME_COUNTER,
        HEADER_SOUND_COUNT,
    };
    use ayla_wordsearch::{WordSearchGame, EVENT_NEW_PUZZLE, EVENT_WORD_FOUND};

    fn runner(words: &[&str]) -> PuzzleRunner<WordSearchGame> {
        let config = PuzzleConfig {
            grid_size: 8,
            ..PuzzleConfig::default()
        };
        let mut runner = PuzzleRunner::new(WordSearchGame::with_seed(11, config));
        runner.init();
        let words = words.iter().map(|w| w.to_string()).collect();
        runner.with_game(|game, ctx| game.load_words(ctx, words));
        runner
    }

    #[test]
    fn input_before_init_is_discarded() {
        let config = PuzzleConfig {
            grid_size: 8,
            ..PuzzleConfig::default()
        };
        let mut runner = PuzzleRunner::new(WordSearchGame::with_seed(11, config));
        runner.handle_input(InputEvent::CellDown { row: 3, col: 3 });
        assert!(!runner.is_initialized());
        assert_eq!(runner.frame().header(HEADER_FRAME_COUNTER), 0.0);

        runner.init();
        runner.handle_input(InputEvent::CellEnter { row: 3, col: 4 });
        assert!(runner.game().session().selection().is_empty());

        runner.handle_input(InputEvent::CellDown { row: 3, col: 3 });
        runner.handle_input(InputEvent::CellEnter { row: 3, col: 4 });
        assert_eq!(runner.game().session().selection().len(), 2);
    }

    #[test]
    fn loading_words_publishes_new_puzzle() {
        let runner = runner(&["cat", "dog"]);
        assert_eq!(runner.events()[0].kind, EVENT_NEW_PUZZLE);
        assert_eq!(runner.frame().header(HEADER_EVENT_COUNT), 1.0);
        assert_eq!(runner.grid_size(), 8);
    }

    #[test]
    fn each_event_is_applied_immediately() {
        let mut runner = runner(&["cat", "dog"]);
        let path = runner.game().session().puzzle().placed_words()[0].positions.clone();

        runner.handle_input(InputEvent::CellDown { row: path[0].row as u32, col: path[0].col as u32 });
        assert_eq!(runner.game().session().selection().len(), 1);
        for cell in &path[1..] {
            runner.handle_input(InputEvent::CellEnter { row: cell.row as u32, col: cell.col as u32 });
        }
        runner.handle_input(InputEvent::CellUp);

        assert_eq!(runner.sounds(), &[SoundEvent::SUCCESS]);
        assert_eq!(runner.events()[0].kind, EVENT_WORD_FOUND);
        assert_eq!(runner.frame().header(HEADER_SOUND_COUNT), 1.0);
        assert_eq!(runner.frame().header(HEADER_FOUND_COUNT), 1.0);
        assert_eq!(runner.frame().header(HEADER_COMPLETE), 0.0);

        // Outputs do not leak into the next call
        runner.handle_input(InputEvent::PointerLeave);
        assert!(runner.sounds().is_empty());
        assert_eq!(runner.frame().header(HEADER_SOUND_COUNT), 0.0);
    }
}
