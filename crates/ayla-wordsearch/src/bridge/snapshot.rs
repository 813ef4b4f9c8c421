use serde::Serialize;

use crate::puzzle::grid::Cell;
use crate::puzzle::session::{CellState, PuzzleSession, SelectionState};

/// One entry of the "words to find" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub found: bool,
}

/// JSON view of a session for renderers that prefer structured data over
/// the flat frame buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PuzzleSnapshot {
    pub size: usize,
    /// One string per row.
    pub grid: Vec<String>,
    pub words: Vec<WordEntry>,
    /// Found words in discovery order.
    pub found: Vec<String>,
    pub cells: Vec<Vec<CellState>>,
    pub selection: Vec<Cell>,
    pub state: SelectionState,
    pub complete: bool,
    /// Words that could not be fit into the grid.
    pub dropped: Vec<String>,
}

impl PuzzleSnapshot {
    pub fn capture(session: &PuzzleSession) -> Self {
        let puzzle = session.puzzle();
        let size = puzzle.grid().size();
        let cells = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| session.cell_state(Cell::new(row, col)))
                    .collect()
            })
            .collect();

        Self {
            size,
            grid: puzzle.grid().rows(),
            words: session
                .words()
                .map(|(word, found)| WordEntry {
                    word: word.to_string(),
                    found,
                })
                .collect(),
            found: session.found_words().map(str::to_string).collect(),
            cells,
            selection: session.selection().to_vec(),
            state: session.state(),
            complete: session.is_complete(),
            dropped: puzzle.dropped().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{RandomSource, Rng};
    use crate::puzzle::generator::{generate, Generator};

    /// Always draws 0: every try is Right from (0,0).
    struct Zeros;

    impl RandomSource for Zeros {
        fn next_int(&mut self, _upper_bound: u32) -> u32 {
            0
        }
    }

    #[test]
    fn snapshot_reflects_session() {
        let puzzle = generate(&["cat", "dog"], 6, &mut Rng::new(9));
        let first = puzzle.placed_words()[0].positions.clone();
        let mut session = PuzzleSession::new(puzzle);
        session.begin_selection(first[0]);
        for &cell in &first[1..] {
            session.extend_selection(cell);
        }
        session.end_selection();

        let snap = PuzzleSnapshot::capture(&session);
        assert_eq!(snap.size, 6);
        assert_eq!(snap.grid.len(), 6);
        assert!(snap.grid.iter().all(|row| row.len() == 6));
        assert_eq!(snap.words[0], WordEntry { word: "CAT".into(), found: true });
        assert_eq!(snap.found, vec!["CAT"]);
        assert_eq!(snap.cells[first[0].row][first[0].col], CellState::Found);
        assert!(snap.selection.is_empty());
        assert_eq!(snap.state, SelectionState::Idle);
        assert!(!snap.complete);
    }

    #[test]
    fn snapshot_json_shape() {
        let puzzle = generate(&["sun"], 4, &mut Rng::new(1));
        let session = PuzzleSession::new(puzzle);
        let json = PuzzleSnapshot::capture(&session).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["size"], 4);
        assert_eq!(value["words"][0]["word"], "SUN");
        assert_eq!(value["words"][0]["found"], false);
        assert_eq!(value["state"], "idle");
        assert_eq!(value["cells"][0][0], "unfound");
    }

    #[test]
    fn snapshot_lists_dropped_words() {
        let puzzle = Generator::new(5)
            .with_max_attempts(1)
            .generate(&["cat", "dog"], &mut Zeros);
        let session = PuzzleSession::new(puzzle);
        let snap = PuzzleSnapshot::capture(&session);
        assert_eq!(snap.words, vec![WordEntry { word: "CAT".into(), found: false }]);
        assert_eq!(snap.dropped, vec!["DOG"]);

        let value: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
        assert_eq!(value["dropped"][0], "DOG");
    }
}
