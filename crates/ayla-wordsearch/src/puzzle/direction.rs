use serde::Serialize;

use super::grid::Cell;

/// One of the 8 lattice directions a word can run in.
/// Deltas are `(d_row, d_col)`; rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    Down,
    DownRight,
    Left,
    Up,
    UpLeft,
    DownLeft,
    UpRight,
}

impl Direction {
    /// All directions, in the order the generator indexes them.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::Left,
        Direction::Up,
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::UpRight,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
        }
    }

    /// The cell `steps` cells away from `start`, or `None` if it leaves a
    /// `size`×`size` board.
    pub fn step(self, start: Cell, steps: usize, size: usize) -> Option<Cell> {
        let (dr, dc) = self.delta();
        let row = start.row as isize + dr * steps as isize;
        let col = start.col as isize + dc * steps as isize;
        if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
            return None;
        }
        Some(Cell::new(row as usize, col as usize))
    }
}
