//! Word-search puzzle generator.
//!
//! This crate places themed word lists into a square letter grid along eight
//! directions, fills the remaining cells with random letters, and can render
//! the result as an SVG document.

pub mod bank;
pub mod config;
pub mod generator;
pub mod grid;
pub mod svg;

pub use bank::WordBank;
pub use config::PuzzleConfig;
pub use generator::{Direction, PlacedWord, Puzzle, PuzzleGenerator, DIRECTIONS};
pub use grid::Grid;
pub use svg::{render_svg, SvgOptions};
