use glam::Vec2;

use crate::api::game::{EngineContext, Game, RenderContext};
use crate::api::types::{
    GameEvent, SoundEvent, CUSTOM_NEW_PUZZLE, EVENT_NEW_PUZZLE, EVENT_PUZZLE_COMPLETE,
    EVENT_WORD_FOUND,
};
use crate::bridge::snapshot::PuzzleSnapshot;
use crate::config::PuzzleConfig;
use crate::core::layout::BoardLayout;
use crate::core::rng::Rng;
use crate::input::queue::{InputEvent, InputQueue};
use crate::puzzle::grid::Cell;
use crate::puzzle::session::{PuzzleSession, SelectionState, Verdict};

const DEFAULT_SEED: u64 = 42;

/// The word-search activity: owns the current word list and the session
/// for the puzzle built from it.
pub struct WordSearchGame {
    config: PuzzleConfig,
    words: Vec<String>,
    rng: Rng,
    session: PuzzleSession,
    layout: BoardLayout,
    /// Completion has been announced for the current puzzle.
    celebrated: bool,
}

impl WordSearchGame {
    pub fn new(config: PuzzleConfig) -> Self {
        Self::with_seed(config.seed.unwrap_or(DEFAULT_SEED), config)
    }

    /// Build with an explicit seed, ignoring `config.seed`.
    pub fn with_seed(seed: u64, config: PuzzleConfig) -> Self {
        let mut rng = Rng::new(seed);
        let words: Vec<String> = Vec::new();
        let session = PuzzleSession::new(config.generator().generate(words.as_slice(), &mut rng));
        let layout =
            BoardLayout::centered(config.world_width, config.world_height, config.grid_size);
        Self {
            config,
            words,
            rng,
            session,
            layout,
            celebrated: false,
        }
    }

    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot::capture(&self.session)
    }

    /// Replace the candidate words and build a fresh puzzle from them.
    pub fn load_words(&mut self, ctx: &mut EngineContext, words: Vec<String>) {
        self.words = words;
        self.new_puzzle(ctx);
    }

    /// Discard the current puzzle and progress, and build a new one.
    pub fn new_puzzle(&mut self, ctx: &mut EngineContext) {
        let puzzle = self.config.generator().generate(self.words.as_slice(), &mut self.rng);
        let placed = puzzle.placed_words().len();
        let dropped = puzzle.dropped().len();
        if placed == 0 {
            log::warn!("new puzzle has no findable words ({} candidates)", self.words.len());
        }
        self.session = PuzzleSession::new(puzzle);
        self.celebrated = false;
        ctx.emit_event(GameEvent::new(EVENT_NEW_PUZZLE, placed as f32, dropped as f32, 0.0));
    }

    fn handle(&mut self, ctx: &mut EngineContext, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                if let Some(cell) = self.layout.cell_at(Vec2::new(x, y)) {
                    self.session.begin_selection(cell);
                }
            }
            InputEvent::PointerMove { x, y } => {
                if self.session.state() == SelectionState::Selecting {
                    if let Some(cell) = self.layout.cell_at(Vec2::new(x, y)) {
                        self.session.extend_selection(cell);
                    }
                }
            }
            InputEvent::CellDown { row, col } => {
                self.session.begin_selection(Cell::new(row as usize, col as usize));
            }
            InputEvent::CellEnter { row, col } => {
                self.session.extend_selection(Cell::new(row as usize, col as usize));
            }
            InputEvent::PointerUp { .. } | InputEvent::CellUp => {
                let verdict = self.session.end_selection();
                self.announce(ctx, verdict);
            }
            InputEvent::PointerLeave => self.session.cancel_selection(),
            InputEvent::Custom { kind, .. } => {
                if kind == CUSTOM_NEW_PUZZLE {
                    self.new_puzzle(ctx);
                }
            }
        }
    }

    /// Turn a verdict into sounds and events for the host.
    fn announce(&mut self, ctx: &mut EngineContext, verdict: Verdict) {
        let Verdict::Found { word, index, completed } = verdict else {
            return;
        };
        let found = self.session.found_count() as f32;
        let total = self.session.puzzle().placed_words().len() as f32;
        log::info!("found {word}");
        ctx.emit_sound(SoundEvent::SUCCESS);
        ctx.emit_event(GameEvent::new(EVENT_WORD_FOUND, index as f32, found, total));

        if completed && !self.celebrated {
            self.celebrated = true;
            log::info!("puzzle complete");
            ctx.emit_sound(SoundEvent::CELEBRATE);
            ctx.emit_event(GameEvent::new(EVENT_PUZZLE_COMPLETE, found, 0.0, 0.0));
        }
    }
}

impl Default for WordSearchGame {
    fn default() -> Self {
        Self::new(PuzzleConfig::default())
    }
}

impl Game for WordSearchGame {
    fn config(&self) -> PuzzleConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.new_puzzle(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            self.handle(ctx, *event);
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        ctx.frame.write_session(&self.session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(words: &[&str]) -> (WordSearchGame, EngineContext) {
        let config = PuzzleConfig {
            grid_size: 8,
            ..PuzzleConfig::default()
        };
        let mut game = WordSearchGame::with_seed(7, config);
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        game.load_words(&mut ctx, words.iter().map(|w| w.to_string()).collect());
        ctx.clear_frame_data();
        (game, ctx)
    }

    fn cell_events(path: &[Cell]) -> InputQueue {
        let mut input = InputQueue::new();
        input.push(InputEvent::CellDown { row: path[0].row as u32, col: path[0].col as u32 });
        for cell in &path[1..] {
            input.push(InputEvent::CellEnter { row: cell.row as u32, col: cell.col as u32 });
        }
        input.push(InputEvent::CellUp);
        input
    }

    fn path_of(game: &WordSearchGame, i: usize) -> Vec<Cell> {
        game.session().puzzle().placed_words()[i].positions.clone()
    }

    #[test]
    fn load_words_emits_new_puzzle_event() {
        let mut game = WordSearchGame::with_seed(3, PuzzleConfig::default());
        let mut ctx = EngineContext::new();
        game.load_words(&mut ctx, vec!["cat".into(), "dog".into(), "no".into()]);
        assert_eq!(ctx.events, vec![GameEvent::new(EVENT_NEW_PUZZLE, 2.0, 0.0, 0.0)]);
        assert_eq!(game.words().len(), 3);
    }

    #[test]
    fn cell_gesture_finds_word_and_plays_success() {
        let (mut game, mut ctx) = game_with(&["cat", "dog", "sun"]);
        let path = path_of(&game, 0);
        game.update(&mut ctx, &cell_events(&path));
        assert!(game.session().is_found(0));
        assert_eq!(ctx.sounds, vec![SoundEvent::SUCCESS]);
        assert_eq!(ctx.events, vec![GameEvent::new(EVENT_WORD_FOUND, 0.0, 1.0, 3.0)]);
    }

    #[test]
    fn finding_everything_celebrates_once() {
        let (mut game, mut ctx) = game_with(&["cat", "dog", "sun"]);
        for i in 0..3 {
            let mut path = path_of(&game, i);
            path.reverse();
            game.update(&mut ctx, &cell_events(&path));
        }
        assert!(game.session().is_complete());
        let celebrations = ctx.sounds.iter().filter(|&&s| s == SoundEvent::CELEBRATE).count();
        assert_eq!(celebrations, 1);
        assert_eq!(ctx.events.last(), Some(&GameEvent::new(EVENT_PUZZLE_COMPLETE, 3.0, 0.0, 0.0)));

        // Replaying a found word changes nothing
        ctx.clear_frame_data();
        let path = path_of(&game, 0);
        game.update(&mut ctx, &cell_events(&path));
        assert!(ctx.sounds.is_empty());
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn pointer_gesture_maps_through_layout() {
        let (mut game, mut ctx) = game_with(&["cat", "dog", "sun"]);
        let path = path_of(&game, 1);
        let layout = *game.layout();

        let mut input = InputQueue::new();
        let start = layout.cell_center(path[0]);
        input.push(InputEvent::PointerDown { x: start.x, y: start.y });
        for &cell in &path {
            // Two moves per cell exercise de-duplication
            let p = layout.cell_center(cell);
            input.push(InputEvent::PointerMove { x: p.x, y: p.y });
            input.push(InputEvent::PointerMove { x: p.x + 1.0, y: p.y + 1.0 });
        }
        let end = layout.cell_center(*path.last().unwrap());
        input.push(InputEvent::PointerUp { x: end.x, y: end.y });
        game.update(&mut ctx, &input);

        assert!(game.session().is_found(1));
    }

    #[test]
    fn pointer_leave_cancels_gesture() {
        let (mut game, mut ctx) = game_with(&["cat", "dog", "sun"]);
        let path = path_of(&game, 0);
        let mut input = cell_events(&path);
        // Rebuild with a leave before the release
        let mut events = input.drain();
        events.insert(events.len() - 1, InputEvent::PointerLeave);
        for event in events {
            input.push(event);
        }
        game.update(&mut ctx, &input);
        assert_eq!(game.session().found_count(), 0);
        assert!(ctx.sounds.is_empty());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let (mut game, mut ctx) = game_with(&["cat"]);
        let mut input = InputQueue::new();
        input.push(InputEvent::CellEnter { row: 0, col: 0 });
        input.push(InputEvent::CellUp);
        game.update(&mut ctx, &input);
        assert!(game.session().selection().is_empty());
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn new_puzzle_custom_event_resets_progress() {
        let (mut game, mut ctx) = game_with(&["cat", "dog", "sun"]);
        let path = path_of(&game, 0);
        game.update(&mut ctx, &cell_events(&path));
        assert_eq!(game.session().found_count(), 1);

        ctx.clear_frame_data();
        let mut input = InputQueue::new();
        input.push(InputEvent::Custom { kind: CUSTOM_NEW_PUZZLE, a: 0.0, b: 0.0, c: 0.0 });
        game.update(&mut ctx, &input);
        assert_eq!(game.session().found_count(), 0);
        assert_eq!(ctx.events, vec![GameEvent::new(EVENT_NEW_PUZZLE, 3.0, 0.0, 0.0)]);
    }

    #[test]
    fn empty_puzzle_never_celebrates() {
        let (mut game, mut ctx) = game_with(&["x", "yz"]);
        assert!(game.session().puzzle().placed_words().is_empty());
        let mut input = InputQueue::new();
        input.push(InputEvent::CellDown { row: 0, col: 0 });
        input.push(InputEvent::CellUp);
        game.update(&mut ctx, &input);
        assert!(ctx.sounds.is_empty());
    }
}
