//! Single-puzzle generation command.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordgrid_gen::{render_svg, Puzzle, PuzzleConfig, PuzzleGenerator, SvgOptions};

/// Run the gen command: generate one puzzle and print it to stdout.
pub fn run(
    theme: String,
    difficulty: String,
    grid_size: usize,
    seed: Option<u64>,
    svg: Option<PathBuf>,
) -> Result<()> {
    let config = PuzzleConfig {
        grid_size,
        theme,
        difficulty,
    };
    let generator = PuzzleGenerator::new(config);

    let puzzle = match seed {
        Some(seed) => generator.generate_with(&mut StdRng::seed_from_u64(seed)),
        None => generator.generate(),
    };

    print_puzzle(&puzzle);

    if let Some(path) = svg {
        let rendered = render_svg(&puzzle, &SvgOptions::default());
        fs::write(&path, rendered)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
        tracing::info!("Wrote SVG to {}", path.display());
    }

    Ok(())
}

fn print_puzzle(puzzle: &Puzzle) {
    println!(
        "{} / {} ({}x{})\n",
        puzzle.theme, puzzle.difficulty, puzzle.size, puzzle.size
    );

    for row in puzzle.grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| cell.unwrap_or(' ').to_string())
            .collect();
        println!("{}", line.join(" "));
    }

    println!("\nFind these words:");
    for placed in &puzzle.words {
        println!(
            "  {} at ({}, {}) direction ({}, {})",
            placed.word,
            placed.start_row,
            placed.start_col,
            placed.direction.d_row(),
            placed.direction.d_col()
        );
    }
}
