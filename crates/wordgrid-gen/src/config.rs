//! Puzzle configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a single puzzle.
///
/// All fields have defaults, so a partial configuration is always usable.
/// An unknown theme or difficulty is not rejected here; the generator
/// falls back to a substitute word list during word selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Grid dimension (the grid is `grid_size` x `grid_size`)
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,

    /// Word bank theme key
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Word bank difficulty key within the theme
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_grid_size() -> usize {
    15
}

fn default_theme() -> String {
    "animals".to_string()
}

fn default_difficulty() -> String {
    "medium".to_string()
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            theme: default_theme(),
            difficulty: default_difficulty(),
        }
    }
}
