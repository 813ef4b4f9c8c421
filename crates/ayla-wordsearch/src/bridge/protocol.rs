/// Frame buffer layout shared with the host page.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Cells: grid_size² × 2 floats]   letter index (A = 0, -1 = empty), CellState
/// [Sounds: max_sounds × 1 float]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::types::{GameEvent, SoundEvent};
use crate::config::PuzzleConfig;
use crate::puzzle::grid::Cell;
use crate::puzzle::session::{PuzzleSession, SelectionState};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_GRID_SIZE: usize = 2;
pub const HEADER_SELECTING: usize = 3;
pub const HEADER_SELECTION_LEN: usize = 4;
pub const HEADER_PLACED_COUNT: usize = 5;
pub const HEADER_FOUND_COUNT: usize = 6;
pub const HEADER_COMPLETE: usize = 7;
pub const HEADER_MAX_SOUNDS: usize = 8;
pub const HEADER_SOUND_COUNT: usize = 9;
pub const HEADER_MAX_EVENTS: usize = 10;
pub const HEADER_EVENT_COUNT: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per cell: letter index, cell state (wire format, never changes).
pub const CELL_FLOATS: usize = 2;

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub grid_size: usize,
    /// Maximum sound events per update.
    pub max_sounds: usize,
    /// Maximum game events per update.
    pub max_events: usize,

    pub cell_data_floats: usize,
    pub sound_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where cell data begins.
    pub cell_data_offset: usize,
    /// Offset (in floats) where sound data begins.
    pub sound_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(grid_size: usize, max_sounds: usize, max_events: usize) -> Self {
        let cell_data_floats = grid_size * grid_size * CELL_FLOATS;
        let sound_data_floats = max_sounds;
        let event_data_floats = max_events * EVENT_FLOATS;

        let cell_data_offset = HEADER_FLOATS;
        let sound_data_offset = cell_data_offset + cell_data_floats;
        let event_data_offset = sound_data_offset + sound_data_floats;
        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            grid_size,
            max_sounds,
            max_events,
            cell_data_floats,
            sound_data_floats,
            event_data_floats,
            cell_data_offset,
            sound_data_offset,
            event_data_offset,
            buffer_total_floats,
        }
    }

    pub fn from_config(config: &PuzzleConfig) -> Self {
        Self::new(config.grid_size, config.max_sounds, config.max_events)
    }
}

/// Flat f32 view of the puzzle, rewritten after every update.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
    frame_counter: u32,
}

impl FrameBuffer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let mut frame = Self {
            data: vec![0.0; layout.buffer_total_floats],
            layout,
            frame_counter: 0,
        };
        frame.write_capacities();
        frame
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    fn write_capacities(&mut self) {
        self.data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        self.data[HEADER_GRID_SIZE] = self.layout.grid_size as f32;
        self.data[HEADER_MAX_SOUNDS] = self.layout.max_sounds as f32;
        self.data[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
    }

    /// Start a new frame: bump the counter and zero the output counts.
    pub fn begin_frame(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.data[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        self.data[HEADER_SOUND_COUNT] = 0.0;
        self.data[HEADER_EVENT_COUNT] = 0.0;
    }

    /// Write header counters and every cell's letter and state.
    pub fn write_session(&mut self, session: &PuzzleSession) {
        let grid = session.puzzle().grid();
        if grid.size() != self.layout.grid_size {
            log::warn!(
                "frame layout expects a {0}x{0} grid, got {1}x{1}",
                self.layout.grid_size,
                grid.size()
            );
            return;
        }

        self.data[HEADER_SELECTING] =
            if session.state() == SelectionState::Selecting { 1.0 } else { 0.0 };
        self.data[HEADER_SELECTION_LEN] = session.selection().len() as f32;
        self.data[HEADER_PLACED_COUNT] = session.puzzle().placed_words().len() as f32;
        self.data[HEADER_FOUND_COUNT] = session.found_count() as f32;
        self.data[HEADER_COMPLETE] = if session.is_complete() { 1.0 } else { 0.0 };

        let size = self.layout.grid_size;
        let base = self.layout.cell_data_offset;
        for row in 0..size {
            for col in 0..size {
                let cell = Cell::new(row, col);
                let i = base + (row * size + col) * CELL_FLOATS;
                self.data[i] = grid.get(cell).map_or(-1.0, |b| (b - b'A') as f32);
                self.data[i + 1] = session.cell_state(cell) as u8 as f32;
            }
        }
    }

    /// Copy this update's sounds and events in, truncating at capacity.
    pub fn write_outputs(&mut self, sounds: &[SoundEvent], events: &[GameEvent]) {
        if sounds.len() > self.layout.max_sounds || events.len() > self.layout.max_events {
            log::warn!(
                "frame outputs truncated: {} sounds, {} events",
                sounds.len(),
                events.len()
            );
        }

        let sound_count = sounds.len().min(self.layout.max_sounds);
        let base = self.layout.sound_data_offset;
        for (slot, sound) in self.data[base..base + sound_count].iter_mut().zip(sounds) {
            *slot = sound.0 as f32;
        }
        self.data[HEADER_SOUND_COUNT] = sound_count as f32;

        let event_count = events.len().min(self.layout.max_events);
        let base = self.layout.event_data_offset;
        let floats: &[f32] = bytemuck::cast_slice(&events[..event_count]);
        self.data[base..base + floats.len()].copy_from_slice(floats);
        self.data[HEADER_EVENT_COUNT] = event_count as f32;
    }

    pub fn header(&self, field: usize) -> f32 {
        self.data[field]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
