//! Gesture-driven solving state for one puzzle.
//!
//! A drag starts with `begin_selection`, grows with `extend_selection` and is
//! judged by `end_selection`. Matching is plain string equality of the
//! letters under the path (forwards or backwards) against the placed words,
//! so bent or over-long paths simply fail to match.

use std::collections::HashSet;

use serde::Serialize;

use super::generator::Puzzle;
use super::grid::Cell;

/// Whether a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    Idle,
    Selecting,
}

/// How a cell should be drawn. Exactly one applies at a time; an active
/// selection wins over a found word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellState {
    Unfound = 0,
    Found = 1,
    Selected = 2,
}

/// Outcome of judging a finished gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// A new word was found. `index` points into the placed-word list;
    /// `completed` is set when this find finished the puzzle.
    Found {
        word: String,
        index: usize,
        completed: bool,
    },
    /// The path spells a word that was already found.
    AlreadyFound(String),
    /// The path spells nothing on the list.
    NoMatch,
    /// No gesture was in progress.
    Ignored,
}

/// One puzzle plus the player's progress on it.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    puzzle: Puzzle,
    state: SelectionState,
    selection: Vec<Cell>,
    found: Vec<bool>,
    found_order: Vec<usize>,
    found_cells: HashSet<Cell>,
}

impl PuzzleSession {
    pub fn new(puzzle: Puzzle) -> Self {
        let count = puzzle.placed_words().len();
        Self {
            puzzle,
            state: SelectionState::Idle,
            selection: Vec::with_capacity(16),
            found: vec![false; count],
            found_order: Vec::with_capacity(count),
            found_cells: HashSet::new(),
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selection(&self) -> &[Cell] {
        &self.selection
    }

    /// Start a new gesture at `cell`, discarding any previous path.
    /// An off-board start only discards.
    pub fn begin_selection(&mut self, cell: Cell) {
        self.cancel_selection();
        if !self.puzzle.grid().contains(cell) {
            return;
        }
        self.selection.push(cell);
        self.state = SelectionState::Selecting;
    }

    /// Add `cell` to the active gesture. Repeats of the last cell are
    /// dropped, since move events fire far more often than cells change.
    pub fn extend_selection(&mut self, cell: Cell) {
        if self.state != SelectionState::Selecting || !self.puzzle.grid().contains(cell) {
            return;
        }
        if self.selection.last() == Some(&cell) {
            return;
        }
        self.selection.push(cell);
    }

    /// Finish the gesture and judge it. The path is always cleared.
    pub fn end_selection(&mut self) -> Verdict {
        if self.state != SelectionState::Selecting {
            return Verdict::Ignored;
        }
        self.state = SelectionState::Idle;
        let verdict = self.verify();
        self.selection.clear();
        verdict
    }

    /// Abandon the gesture without judging it (pointer left the board).
    pub fn cancel_selection(&mut self) {
        self.state = SelectionState::Idle;
        self.selection.clear();
    }

    /// Judge the current path against the placed words, recording a find.
    pub fn verify(&mut self) -> Verdict {
        let candidate = self.puzzle.grid().word_at(&self.selection);
        if candidate.is_empty() {
            return Verdict::NoMatch;
        }
        let reversed: String = candidate.chars().rev().collect();

        let mut already = None;
        for (index, placed) in self.puzzle.placed_words().iter().enumerate() {
            if placed.word != candidate && placed.word != reversed {
                continue;
            }
            if self.found[index] {
                already = Some(placed.word.clone());
                continue;
            }

            self.found[index] = true;
            self.found_order.push(index);
            self.found_cells.extend(placed.positions.iter().copied());
            let word = placed.word.clone();
            let completed = self.is_complete();
            log::debug!("found {word} ({}/{})", self.found_order.len(), self.found.len());
            return Verdict::Found {
                word,
                index,
                completed,
            };
        }

        match already {
            Some(word) => Verdict::AlreadyFound(word),
            None => Verdict::NoMatch,
        }
    }

    /// Every placed word has been found.
    pub fn is_complete(&self) -> bool {
        self.found_order.len() == self.puzzle.placed_words().len()
    }

    pub fn is_found(&self, index: usize) -> bool {
        self.found.get(index).copied().unwrap_or(false)
    }

    pub fn found_count(&self) -> usize {
        self.found_order.len()
    }

    /// Found words in the order they were discovered.
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.found_order
            .iter()
            .map(|&i| self.puzzle.placed_words()[i].word.as_str())
    }

    /// The "words to find" list with each word's found flag.
    pub fn words(&self) -> impl Iterator<Item = (&str, bool)> {
        self.puzzle
            .placed_words()
            .iter()
            .zip(&self.found)
            .map(|(p, &found)| (p.word.as_str(), found))
    }

    pub fn cell_state(&self, cell: Cell) -> CellState {
        if self.selection.contains(&cell) {
            CellState::Selected
        } else if self.found_cells.contains(&cell) {
            CellState::Found
        } else {
            CellState::Unfound
        }
    }
}
