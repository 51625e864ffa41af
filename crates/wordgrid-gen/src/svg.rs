//! SVG rendering for generated puzzles.

use std::fmt::Write;

use crate::generator::Puzzle;

/// Layout options for [`render_svg`].
#[derive(Debug, Clone, Copy)]
pub struct SvgOptions {
    /// Side length of one grid cell, in pixels
    pub cell_size: usize,

    /// Font size for grid letters, in pixels
    pub font_size: usize,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            cell_size: 30,
            font_size: 18,
        }
    }
}

/// Render a puzzle as a standalone SVG document.
///
/// Pure transformation of an already-generated puzzle: one rectangle and one
/// centered letter per cell, a title banner, and the word checklist flowed
/// into `ceil(sqrt(word_count))` columns below the grid. Words appear in
/// placement order.
pub fn render_svg(puzzle: &Puzzle, options: &SvgOptions) -> String {
    let cell = options.cell_size;
    let width = puzzle.size * cell + 100;
    let height = puzzle.size * cell + 200;

    let mut svg = String::new();

    let _ = write!(
        svg,
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
  <defs>
    <style>
      .grid-cell {{ fill: #ffffff; stroke: #333333; stroke-width: 1; }}
      .grid-text {{ font-family: 'Courier New', monospace; font-size: {font_size}px; text-anchor: middle; dominant-baseline: middle; fill: #333333; font-weight: bold; }}
      .title {{ font-family: 'Arial', sans-serif; font-size: 24px; text-anchor: middle; fill: #2c3e50; font-weight: bold; }}
      .word-list {{ font-family: 'Arial', sans-serif; font-size: 14px; fill: #666666; }}
    </style>
  </defs>

  <rect width="{width}" height="{height}" fill="#f8f9fa"/>

  <text x="{title_x}" y="30" class="title">{theme} Word Search - {difficulty}</text>
"##,
        font_size = options.font_size,
        title_x = width / 2,
        theme = puzzle.theme.to_uppercase(),
        difficulty = puzzle.difficulty.to_uppercase(),
    );

    for (i, row) in puzzle.grid.rows().enumerate() {
        for (j, letter) in row.iter().enumerate() {
            let x = j * cell + 50;
            let y = i * cell + 60;
            let letter = letter.unwrap_or(' ');

            let _ = write!(
                svg,
                r#"
  <rect x="{x}" y="{y}" width="{cell}" height="{cell}" class="grid-cell"/>
  <text x="{text_x}" y="{text_y}" class="grid-text">{letter}</text>"#,
                text_x = x + cell / 2,
                text_y = y + cell / 2,
            );
        }
    }

    let list_y = puzzle.size * cell + 100;
    let _ = write!(
        svg,
        r#"
  <text x="50" y="{list_y}" class="title">Find these words:</text>"#,
    );

    let columns = (puzzle.words.len() as f64).sqrt().ceil() as usize;
    for (index, placed) in puzzle.words.iter().enumerate() {
        let row = index / columns.max(1);
        let col = index % columns.max(1);
        let x = 50 + col * 150;
        let y = list_y + 30 + row * 25;

        let _ = write!(
            svg,
            r#"
  <text x="{x}" y="{y}" class="word-list">&#8226; {word}</text>"#,
            word = placed.word,
        );
    }

    svg.push_str("\n</svg>\n");

    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PuzzleConfig;
    use crate::generator::PuzzleGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_puzzle(grid_size: usize) -> Puzzle {
        let config = PuzzleConfig {
            grid_size,
            ..PuzzleConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(21);
        PuzzleGenerator::new(config).generate_with(&mut rng)
    }

    #[test]
    fn one_letter_element_per_cell() {
        let puzzle = sample_puzzle(12);
        let svg = render_svg(&puzzle, &SvgOptions::default());

        assert_eq!(svg.matches(r#"class="grid-text""#).count(), 12 * 12);
        assert_eq!(svg.matches(r#"class="grid-cell""#).count(), 12 * 12);
    }

    #[test]
    fn one_checklist_entry_per_placed_word() {
        let puzzle = sample_puzzle(15);
        let svg = render_svg(&puzzle, &SvgOptions::default());

        assert_eq!(
            svg.matches(r#"class="word-list""#).count(),
            puzzle.words.len()
        );
        for placed in &puzzle.words {
            assert!(svg.contains(&placed.word));
        }
    }

    #[test]
    fn title_names_theme_and_difficulty() {
        let puzzle = sample_puzzle(15);
        let svg = render_svg(&puzzle, &SvgOptions::default());

        assert!(svg.contains("ANIMALS Word Search - MEDIUM"));
    }

    #[test]
    fn dimensions_follow_cell_size() {
        let puzzle = sample_puzzle(12);
        let options = SvgOptions {
            cell_size: 40,
            font_size: 20,
        };
        let svg = render_svg(&puzzle, &options);

        // width = 12 * 40 + 100, height = 12 * 40 + 200
        assert!(svg.contains(r#"width="580" height="680""#));
    }

    #[test]
    fn words_appear_in_placement_order() {
        let puzzle = sample_puzzle(15);
        let svg = render_svg(&puzzle, &SvgOptions::default());

        let mut last = 0;
        for placed in &puzzle.words {
            let marker = format!("&#8226; {}", placed.word);
            let pos = svg[last..]
                .find(&marker)
                .unwrap_or_else(|| panic!("missing checklist entry for {}", placed.word));
            last += pos;
        }
    }
}
