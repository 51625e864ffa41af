//! Puzzle index written alongside the generated artifacts.

use serde::{Deserialize, Serialize};

/// Artifact base name for a (theme, difficulty) pair.
pub fn slug(theme: &str, difficulty: &str) -> String {
    format!("{theme}-{difficulty}")
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// One puzzle's entry in the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    /// Artifact base name, `"{theme}-{difficulty}"`
    pub slug: String,

    /// Theme key
    pub theme: String,

    /// Difficulty key
    pub difficulty: String,

    /// Grid dimension
    pub grid_size: usize,

    /// Human-readable title
    pub title: String,

    /// SVG image file name
    pub image: String,

    /// Puzzle data file name
    pub json_file: String,
}

impl IndexEntry {
    /// Build the entry for a (theme, difficulty, grid size) triple.
    pub fn new(theme: &str, difficulty: &str, grid_size: usize) -> Self {
        let slug = slug(theme, difficulty);
        Self {
            title: format!(
                "{} Word Search - {}",
                capitalize(theme),
                capitalize(difficulty)
            ),
            image: format!("{slug}.svg"),
            json_file: format!("{slug}.json"),
            slug,
            theme: theme.to_string(),
            difficulty: difficulty.to_string(),
            grid_size,
        }
    }
}

/// The `puzzle-index.json` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleIndex {
    /// All generated puzzles, in batch order
    pub puzzles: Vec<IndexEntry>,

    /// Distinct themes, in first-seen order
    pub themes: Vec<String>,

    /// Distinct difficulties, in first-seen order
    pub difficulties: Vec<String>,

    /// Number of puzzles
    pub total_count: usize,

    /// RFC 3339 build timestamp
    pub last_updated: String,
}

impl PuzzleIndex {
    /// Assemble the index from per-puzzle entries.
    pub fn new(puzzles: Vec<IndexEntry>, last_updated: String) -> Self {
        let themes = distinct(puzzles.iter().map(|p| p.theme.as_str()));
        let difficulties = distinct(puzzles.iter().map(|p| p.difficulty.as_str()));
        let total_count = puzzles.len();

        Self {
            puzzles,
            themes,
            difficulties,
            total_count,
            last_updated,
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
