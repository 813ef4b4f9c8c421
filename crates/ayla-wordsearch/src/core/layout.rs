use glam::Vec2;

use crate::puzzle::grid::Cell;

/// Maps world coordinates (as reported by pointer events) onto grid cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Top-left corner of cell (0, 0) in world units.
    pub origin: Vec2,
    /// Edge length of one square cell in world units.
    pub cell_size: f32,
    /// Number of cells per side.
    pub size: usize,
}

impl BoardLayout {
    pub fn new(origin: Vec2, cell_size: f32, size: usize) -> Self {
        Self { origin, cell_size, size }
    }

    /// Largest square board that fits the world, centered in it.
    pub fn centered(world_width: f32, world_height: f32, size: usize) -> Self {
        let side = world_width.min(world_height);
        let cell_size = if size == 0 { 0.0 } else { side / size as f32 };
        let board = cell_size * size as f32;
        let origin = Vec2::new((world_width - board) / 2.0, (world_height - board) / 2.0);
        Self { origin, cell_size, size }
    }

    /// Convert a world position to the cell under it, if any.
    pub fn cell_at(&self, pos: Vec2) -> Option<Cell> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let local = (pos - self.origin) / self.cell_size;
        let col = local.x.floor() as i64;
        let row = local.y.floor() as i64;
        if row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size {
            Some(Cell::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// World-space center of a cell.
    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        self.origin
            + Vec2::new(
                cell.col as f32 * self.cell_size + self.cell_size * 0.5,
                cell.row as f32 * self.cell_size + self.cell_size * 0.5,
            )
    }
}
