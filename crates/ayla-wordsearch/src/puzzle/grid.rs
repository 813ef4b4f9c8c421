use serde::Serialize;

/// A `(row, col)` position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Square, row-major grid of uppercase ASCII letters.
///
/// Cells are `None` only while the generator is still placing words; a
/// finished puzzle always has every cell filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a filled grid from rows of letters. Rows must all be `rows.len()`
    /// letters long; lowercase input is uppercased.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut grid = Self::new(size);
        for (row, line) in rows.iter().enumerate() {
            for (col, letter) in line.bytes().take(size).enumerate() {
                grid.set(Cell::new(row, col), letter.to_ascii_uppercase());
            }
        }
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    fn idx(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.col
    }

    pub fn get(&self, cell: Cell) -> Option<u8> {
        if self.contains(cell) {
            self.cells[self.idx(cell)]
        } else {
            None
        }
    }

    pub fn set(&mut self, cell: Cell, letter: u8) {
        if self.contains(cell) {
            let i = self.idx(cell);
            self.cells[i] = Some(letter);
        }
    }

    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Fill every empty cell using `letter_for`.
    pub fn fill_empty(&mut self, mut letter_for: impl FnMut() -> u8) {
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(letter_for());
        }
    }

    /// Concatenate the letters under `path`, in path order.
    /// Cells that are off the board or empty are skipped.
    pub fn word_at(&self, path: &[Cell]) -> String {
        path.iter()
            .filter_map(|&cell| self.get(cell))
            .map(char::from)
            .collect()
    }

    /// One string per row; empty cells render as `.`.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.map_or('.', char::from)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert!(!grid.is_filled());
        assert_eq!(grid.get(Cell::new(3, 3)), None);
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::new(3);
        grid.set(Cell::new(1, 2), b'Q');
        assert_eq!(grid.get(Cell::new(1, 2)), Some(b'Q'));
        // Out of bounds writes are ignored
        grid.set(Cell::new(3, 0), b'Z');
        assert_eq!(grid.get(Cell::new(3, 0)), None);
    }

    #[test]
    fn from_rows_and_word_at() {
        let grid = Grid::from_rows(&["cat", "xox", "dog"]);
        assert!(grid.is_filled());
        let path = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)];
        assert_eq!(grid.word_at(&path), "CAT");
        let diag = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)];
        assert_eq!(grid.word_at(&diag), "COG");
    }

    #[test]
    fn fill_empty_leaves_existing_letters() {
        let mut grid = Grid::new(2);
        grid.set(Cell::new(0, 0), b'A');
        grid.fill_empty(|| b'Z');
        assert_eq!(grid.rows(), vec!["AZ".to_string(), "ZZ".to_string()]);
    }
}
