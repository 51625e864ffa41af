//! Static artifact builder for wordgrid puzzles.
//!
//! Generates a batch of puzzles and writes their JSON data, SVG images, and
//! site metadata (index, sitemap, robots.txt) into an output directory.

pub mod builder;
pub mod index;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use index::{slug, IndexEntry, PuzzleIndex};
