//! Puzzle generation: randomized word placement and empty-cell filling.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bank::WordBank;
use crate::config::PuzzleConfig;
use crate::grid::Grid;

/// Random (row, col, direction) trials per word before the word is dropped.
const MAX_PLACE_ATTEMPTS: usize = 100;

/// Word-count cap: at most one word per ten grid cells.
const CELLS_PER_WORD: usize = 10;

const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// A unit step `(d_row, d_col)`, serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction(pub i8, pub i8);

impl Direction {
    /// Row step per letter.
    pub fn d_row(&self) -> i8 {
        self.0
    }

    /// Column step per letter.
    pub fn d_col(&self) -> i8 {
        self.1
    }
}

/// The eight placement directions: horizontal, vertical, and diagonal.
pub const DIRECTIONS: [Direction; 8] = [
    Direction(0, 1),
    Direction(1, 0),
    Direction(1, 1),
    Direction(1, -1),
    Direction(0, -1),
    Direction(-1, 0),
    Direction(-1, -1),
    Direction(-1, 1),
];

/// A word successfully written into the grid.
///
/// Reading `word.len()` cells from `(start_row, start_col)` stepping by
/// `direction` reproduces the word exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    /// The placed word, uppercase ASCII
    pub word: String,

    /// Row of the first letter
    pub start_row: usize,

    /// Column of the first letter
    pub start_col: usize,

    /// Step applied between consecutive letters
    pub direction: Direction,

    /// Interactive-consumer state; always `false` from the generator
    pub found: bool,
}

/// A complete generated puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    /// Fully-filled letter grid
    pub grid: Grid,

    /// Words actually placed, in placement order
    pub words: Vec<PlacedWord>,

    /// Theme the puzzle was requested with
    pub theme: String,

    /// Difficulty the puzzle was requested with
    pub difficulty: String,

    /// Grid dimension
    pub size: usize,
}

/// Word-search puzzle generator.
///
/// Construct one per puzzle; [`PuzzleGenerator::generate`] builds a fresh
/// grid each call and shares no state between calls. Generation never fails:
/// an unknown theme or difficulty degrades to a substitute word list, and a
/// word that cannot be placed within the attempt budget is dropped.
pub struct PuzzleGenerator {
    config: PuzzleConfig,
    bank: WordBank,
}

impl PuzzleGenerator {
    /// Create a generator backed by the bundled word bank.
    pub fn new(config: PuzzleConfig) -> Self {
        Self::with_bank(config, WordBank::builtin())
    }

    /// Create a generator with an injected word bank.
    pub fn with_bank(config: PuzzleConfig, bank: WordBank) -> Self {
        Self { config, bank }
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Generate a puzzle using the thread-local RNG.
    pub fn generate(&self) -> Puzzle {
        self.generate_with(&mut rand::rng())
    }

    /// Generate a puzzle using the given RNG.
    ///
    /// Passing a seeded RNG makes placement, word order, and filler letters
    /// fully deterministic.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Puzzle {
        let size = self.config.grid_size;
        let mut grid = Grid::new(size);
        let mut placed = Vec::new();

        for word in self.word_list(rng) {
            if !place_word(&mut grid, &mut placed, &word, rng) {
                tracing::debug!(
                    "dropped '{}' after {} placement attempts",
                    word,
                    MAX_PLACE_ATTEMPTS
                );
            }
        }

        fill_empty_cells(&mut grid, rng);

        Puzzle {
            grid,
            words: placed,
            theme: self.config.theme.clone(),
            difficulty: self.config.difficulty.clone(),
            size,
        }
    }

    /// Resolve, truncate, and shuffle the word list for this configuration.
    ///
    /// The list is capped at `grid_size^2 / 10` words so dense banks cannot
    /// request more words than the grid can reasonably hold, then shuffled
    /// so placement order does not follow bank order.
    fn word_list<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut words = self
            .bank
            .resolve(&self.config.theme, &self.config.difficulty);

        let max_words = self.config.grid_size * self.config.grid_size / CELLS_PER_WORD;
        words.truncate(max_words);
        words.shuffle(rng);

        words
    }
}

/// Try up to [`MAX_PLACE_ATTEMPTS`] random placements for one word.
///
/// Each attempt draws a uniform starting cell and direction. On the first
/// attempt that fits, the word is written into the grid and recorded, and
/// the function returns `true`. Returns `false` when the budget is spent.
fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    placed: &mut Vec<PlacedWord>,
    word: &str,
    rng: &mut R,
) -> bool {
    let size = grid.size();
    if size == 0 {
        return false;
    }

    for _ in 0..MAX_PLACE_ATTEMPTS {
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        let direction = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];

        if can_place_word(grid, word, row, col, direction) {
            write_word(grid, word, row, col, direction);
            placed.push(PlacedWord {
                word: word.to_string(),
                start_row: row,
                start_col: col,
                direction,
                found: false,
            });
            return true;
        }
    }

    false
}

/// Whether `word` fits at `(start_row, start_col)` along `direction`.
///
/// Every letter position must be in bounds and either empty or already
/// holding the same letter. Matching letters are allowed so crossing words
/// can share a cell.
fn can_place_word(grid: &Grid, word: &str, start_row: usize, start_col: usize, direction: Direction) -> bool {
    let size = grid.size() as isize;

    for (i, letter) in word.chars().enumerate() {
        let row = start_row as isize + i as isize * direction.d_row() as isize;
        let col = start_col as isize + i as isize * direction.d_col() as isize;

        if row < 0 || row >= size || col < 0 || col >= size {
            return false;
        }

        if let Some(existing) = grid.letter(row as usize, col as usize) {
            if existing != letter {
                return false;
            }
        }
    }

    true
}

/// Write `word` into the grid. Caller has already validated the placement.
fn write_word(grid: &mut Grid, word: &str, start_row: usize, start_col: usize, direction: Direction) {
    for (i, letter) in word.chars().enumerate() {
        let row = start_row as isize + i as isize * direction.d_row() as isize;
        let col = start_col as isize + i as isize * direction.d_col() as isize;
        grid.set(row as usize, col as usize, letter);
    }
}

/// Fill every remaining empty cell with a uniform random letter.
fn fill_empty_cells<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            if grid.letter(row, col).is_none() {
                grid.set(row, col, ALPHABET[rng.random_range(0..ALPHABET.len())]);
            }
        }
    }
}
