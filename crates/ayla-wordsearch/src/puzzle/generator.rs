//! Randomized word placement.
//!
//! Each word gets a bounded number of random (direction, start cell) tries.
//! A try succeeds when every cell the word would cover is either empty or
//! already holds the letter the word needs there, so words may cross.
//! Words that never fit are dropped; generation itself cannot fail.

use serde::{Deserialize, Serialize};

use crate::core::rng::RandomSource;
use super::direction::Direction;
use super::grid::{Cell, Grid};

/// Default board edge length.
pub const DEFAULT_GRID_SIZE: usize = 14;
/// Placement tries per word before it is dropped.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 200;
/// Shortest word worth hiding.
pub const MIN_WORD_LEN: usize = 3;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Order in which eligible words get their placement tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementOrder {
    /// Input order: earlier words claim cells first.
    #[default]
    Input,
    /// Longest words first (stable for equal lengths), which raises the fill rate.
    LongestFirst,
}

/// A word written into the grid, with its cells in letter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub positions: Vec<Cell>,
    pub direction: Direction,
}

/// A finished puzzle. Immutable once generated.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    placed_words: Vec<PlacedWord>,
    dropped: Vec<String>,
}

impl Puzzle {
    /// Assemble a puzzle from an already filled grid. Intended for fixtures;
    /// positions are trusted as given.
    pub fn from_parts(grid: Grid, placed_words: Vec<PlacedWord>) -> Self {
        Self {
            grid,
            placed_words,
            dropped: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed_words
    }

    /// Eligible words that ran out of placement attempts.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    /// The "words to find" list: placed words in placement order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placed_words.iter().map(|p| p.word.as_str())
    }
}

/// Uppercase and strip everything outside `A-Z`.
pub fn normalize_word(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

/// Normalize a raw word list and keep words of `MIN_WORD_LEN..=size` letters.
/// Input order is preserved; repeated words keep their first occurrence.
pub fn eligible_words<S: AsRef<str>>(words: &[S], size: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    for raw in words {
        let word = normalize_word(raw.as_ref());
        if word.len() < MIN_WORD_LEN || word.len() > size {
            continue;
        }
        if !out.contains(&word) {
            out.push(word);
        }
    }
    out
}

/// Puzzle generator with its tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    pub size: usize,
    pub max_attempts: u32,
    pub order: PlacementOrder,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            order: PlacementOrder::Input,
        }
    }
}

impl Generator {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_order(mut self, order: PlacementOrder) -> Self {
        self.order = order;
        self
    }

    /// Build a puzzle from raw candidate words.
    pub fn generate<S, R>(&self, words: &[S], rng: &mut R) -> Puzzle
    where
        S: AsRef<str>,
        R: RandomSource + ?Sized,
    {
        let mut words = eligible_words(words, self.size);
        if self.order == PlacementOrder::LongestFirst {
            words.sort_by(|a, b| b.len().cmp(&a.len()));
        }

        let mut grid = Grid::new(self.size);
        let mut placed_words = Vec::with_capacity(words.len());
        let mut dropped = Vec::new();

        for word in words {
            match self.try_place(&mut grid, &word, rng) {
                Some((positions, direction)) => placed_words.push(PlacedWord {
                    word,
                    positions,
                    direction,
                }),
                None => {
                    log::debug!(
                        "dropping {word:?}: no fit after {} attempts",
                        self.max_attempts
                    );
                    dropped.push(word);
                }
            }
        }

        grid.fill_empty(|| ALPHABET[rng.next_int(ALPHABET.len() as u32) as usize]);

        log::info!(
            "generated {0}x{0} word search: {1} placed, {2} dropped",
            self.size,
            placed_words.len(),
            dropped.len()
        );

        Puzzle {
            grid,
            placed_words,
            dropped,
        }
    }

    /// Random tries for one word. On success the letters are written and the
    /// covered cells returned in letter order.
    fn try_place<R>(&self, grid: &mut Grid, word: &str, rng: &mut R) -> Option<(Vec<Cell>, Direction)>
    where
        R: RandomSource + ?Sized,
    {
        if self.size == 0 {
            return None;
        }
        let letters = word.as_bytes();
        for _ in 0..self.max_attempts {
            let direction = Direction::ALL[rng.next_int(Direction::ALL.len() as u32) as usize];
            let row = rng.next_int(self.size as u32) as usize;
            let col = rng.next_int(self.size as u32) as usize;

            if let Some(positions) = fit(grid, letters, Cell::new(row, col), direction) {
                for (&cell, &letter) in positions.iter().zip(letters) {
                    grid.set(cell, letter);
                }
                return Some((positions, direction));
            }
        }
        None
    }
}

/// The cells `letters` would cover from `start`, if it stays on the board and
/// only lands on empty or agreeing cells.
fn fit(grid: &Grid, letters: &[u8], start: Cell, direction: Direction) -> Option<Vec<Cell>> {
    let mut positions = Vec::with_capacity(letters.len());
    for (i, &letter) in letters.iter().enumerate() {
        let cell = direction.step(start, i, grid.size())?;
        match grid.get(cell) {
            Some(existing) if existing != letter => return None,
            _ => positions.push(cell),
        }
    }
    Some(positions)
}

/// Build a puzzle with the default attempt budget and input order.
pub fn generate<S, R>(words: &[S], size: usize, rng: &mut R) -> Puzzle
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    Generator::new(size).generate(words, rng)
}
