//! Square letter grid with an explicit empty-cell sentinel.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A `size` x `size` matrix of cells.
///
/// Each cell is either `None` (not yet assigned, the sentinel) or a single
/// letter. Letters may legitimately be shared between crossing words, so the
/// sentinel is kept distinct from every letter value. After generation
/// completes, no sentinel cells remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The letter at (row, col), or `None` for an empty cell.
    ///
    /// Out-of-bounds coordinates also return `None`; callers doing bounds
    /// checks do them on signed coordinates before indexing.
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// Assign a letter to (row, col).
    ///
    /// Ignored when out of bounds; placement validates coordinates first.
    pub fn set(&mut self, row: usize, col: usize, letter: char) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = Some(letter);
        }
    }

    /// Whether every cell holds a letter.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate over rows as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size.max(1))
    }
}

// Serialized as rows of single-character strings, with "" for the sentinel.
// This is the shape consumers of the puzzle JSON artifacts expect.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<String>> = self
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect();
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows: Vec<Vec<String>> = Vec::deserialize(deserializer)?;
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for row in &rows {
            if row.len() != size {
                return Err(D::Error::custom(format!(
                    "grid is not square: {} rows but a row of {} cells",
                    size,
                    row.len()
                )));
            }
            for cell in row {
                let mut chars = cell.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => cells.push(None),
                    (Some(c), None) => cells.push(Some(c)),
                    _ => {
                        return Err(D::Error::custom(format!(
                            "grid cell '{cell}' is not a single character"
                        )))
                    }
                }
            }
        }

        Ok(Self { size, cells })
    }
}
