//! Puzzle site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;
use rayon::prelude::*;
use serde::Serialize;

use wordgrid_gen::{render_svg, Puzzle, PuzzleConfig, PuzzleGenerator, SvgOptions};

use crate::index::{capitalize, slug, IndexEntry, PuzzleIndex};

/// Configuration for building the puzzle site artifacts.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Base URL for the site
    pub base_url: String,

    /// Site title
    pub site_title: String,

    /// Puzzle batch to generate
    pub configs: Vec<PuzzleConfig>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            base_url: "/".to_string(),
            site_title: "Word Search Puzzles".to_string(),
            configs: default_batch(),
        }
    }
}

/// The standard ten-puzzle batch: every difficulty for the two headline
/// themes, plus a medium or easy puzzle for each remaining theme.
pub fn default_batch() -> Vec<PuzzleConfig> {
    let mut configs = Vec::new();
    for theme in ["animals", "food"] {
        for (difficulty, grid_size) in [("easy", 12), ("medium", 15), ("hard", 18)] {
            configs.push(PuzzleConfig {
                grid_size,
                theme: theme.to_string(),
                difficulty: difficulty.to_string(),
            });
        }
    }
    for theme in ["nature", "school", "sports"] {
        configs.push(PuzzleConfig {
            grid_size: 15,
            theme: theme.to_string(),
            difficulty: "medium".to_string(),
        });
    }
    configs.push(PuzzleConfig {
        grid_size: 12,
        theme: "colors".to_string(),
        difficulty: "easy".to_string(),
    });
    configs
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of puzzles generated
    pub puzzles: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Failed to serialize puzzle data: {0}")]
    Serialize(String),
}

/// Per-puzzle JSON document: the puzzle plus descriptive metadata.
#[derive(Debug, Serialize)]
struct PuzzleDoc<'a> {
    #[serde(flatten)]
    puzzle: &'a Puzzle,
    metadata: Metadata,
}

#[derive(Debug, Serialize)]
struct Metadata {
    title: String,
    description: String,
    keywords: String,
    generated: String,
}

impl Metadata {
    fn for_puzzle(config: &PuzzleConfig, puzzle: &Puzzle, generated: String) -> Self {
        Self {
            title: format!("{} Word Search", capitalize(&config.theme)),
            description: format!(
                "Find all the {} related words in this {} difficulty puzzle.",
                config.theme, config.difficulty
            ),
            keywords: puzzle
                .words
                .iter()
                .map(|w| w.word.to_lowercase())
                .collect::<Vec<_>>()
                .join(", "),
            generated,
        }
    }
}

/// Puzzle site builder.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build all puzzle artifacts.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        tracing::info!(
            "Building '{}': {} puzzles",
            self.config.site_title,
            self.config.configs.len()
        );

        let puzzles_dir = self.config.output_dir.join("puzzles");
        let images_dir = self.config.output_dir.join("images");
        fs::create_dir_all(&puzzles_dir).map_err(|e| BuildError::Write(e.to_string()))?;
        fs::create_dir_all(&images_dir).map_err(|e| BuildError::Write(e.to_string()))?;

        let generated = Utc::now().to_rfc3339();

        // One generator instance per config; instances are not reentrant
        let results: Vec<Result<IndexEntry, BuildError>> = self
            .config
            .configs
            .par_iter()
            .map(|config| self.build_puzzle(config, &generated))
            .collect();

        let mut entries = Vec::with_capacity(results.len());
        for result in results {
            entries.push(result?);
        }

        self.write_index(&entries, &generated)?;
        self.write_sitemap(&entries)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            puzzles: entries.len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Generate one puzzle and write its JSON and SVG artifacts.
    fn build_puzzle(
        &self,
        config: &PuzzleConfig,
        generated: &str,
    ) -> Result<IndexEntry, BuildError> {
        let name = slug(&config.theme, &config.difficulty);

        let generator = PuzzleGenerator::new(config.clone());
        let puzzle = generator.generate();

        tracing::info!(
            "generated {}: {} words placed on a {}x{} grid",
            name,
            puzzle.words.len(),
            puzzle.size,
            puzzle.size
        );

        let doc = PuzzleDoc {
            puzzle: &puzzle,
            metadata: Metadata::for_puzzle(config, &puzzle, generated.to_string()),
        };
        let json =
            serde_json::to_string_pretty(&doc).map_err(|e| BuildError::Serialize(e.to_string()))?;
        fs::write(
            self.config
                .output_dir
                .join("puzzles")
                .join(format!("{name}.json")),
            json,
        )
        .map_err(|e| BuildError::Write(e.to_string()))?;

        let svg = render_svg(&puzzle, &SvgOptions::default());
        fs::write(
            self.config
                .output_dir
                .join("images")
                .join(format!("{name}.svg")),
            svg,
        )
        .map_err(|e| BuildError::Write(e.to_string()))?;

        Ok(IndexEntry::new(
            &config.theme,
            &config.difficulty,
            config.grid_size,
        ))
    }

    /// Write `puzzle-index.json`.
    fn write_index(&self, entries: &[IndexEntry], generated: &str) -> Result<(), BuildError> {
        let index = PuzzleIndex::new(entries.to_vec(), generated.to_string());

        let json = serde_json::to_string_pretty(&index)
            .map_err(|e| BuildError::Serialize(e.to_string()))?;

        fs::write(self.config.output_dir.join("puzzle-index.json"), json)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        Ok(())
    }

    /// Write `sitemap.xml` and `robots.txt`.
    fn write_sitemap(&self, entries: &[IndexEntry]) -> Result<(), BuildError> {
        let base = self.config.base_url.trim_end_matches('/');

        let urls: Vec<String> =
            std::iter::once(format!("  <url>\n    <loc>{base}/</loc>\n  </url>"))
                .chain(entries.iter().map(|entry| {
                    format!(
                        "  <url>\n    <loc>{base}/puzzles/{}/</loc>\n  </url>",
                        entry.slug
                    )
                }))
                .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn small_batch() -> Vec<PuzzleConfig> {
        vec![
            PuzzleConfig {
                grid_size: 12,
                theme: "animals".to_string(),
                difficulty: "easy".to_string(),
            },
            PuzzleConfig {
                grid_size: 12,
                theme: "colors".to_string(),
                difficulty: "easy".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn builds_all_artifacts() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            configs: small_batch(),
            ..Default::default()
        });
        let result = builder.build().await.unwrap();

        assert_eq!(result.puzzles, 2);
        assert!(out.join("puzzles/animals-easy.json").exists());
        assert!(out.join("puzzles/colors-easy.json").exists());
        assert!(out.join("images/animals-easy.svg").exists());
        assert!(out.join("images/colors-easy.svg").exists());
        assert!(out.join("puzzle-index.json").exists());
        assert!(out.join("sitemap.xml").exists());
        assert!(out.join("robots.txt").exists());
    }

    #[tokio::test]
    async fn puzzle_json_carries_grid_and_metadata() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            configs: small_batch(),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        let json = fs::read_to_string(out.join("puzzles/animals-easy.json")).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(doc["size"], 12);
        assert_eq!(doc["theme"], "animals");
        assert_eq!(doc["grid"].as_array().unwrap().len(), 12);
        assert_eq!(doc["metadata"]["title"], "Animals Word Search");
        assert!(doc["metadata"]["description"]
            .as_str()
            .unwrap()
            .contains("easy difficulty"));
        assert!(!doc["words"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn index_lists_every_slug() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            configs: small_batch(),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        let json = fs::read_to_string(out.join("puzzle-index.json")).unwrap();
        let index: PuzzleIndex = serde_json::from_str(&json).unwrap();

        assert_eq!(index.total_count, 2);
        let slugs: Vec<&str> = index.puzzles.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["animals-easy", "colors-easy"]);
        assert_eq!(index.themes, vec!["animals", "colors"]);
    }

    #[tokio::test]
    async fn sitemap_points_at_puzzle_pages() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            base_url: "https://example.com/".to_string(),
            configs: small_batch(),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://example.com/puzzles/animals-easy/</loc>"));

        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn default_batch_is_the_standard_ten() {
        let batch = default_batch();

        assert_eq!(batch.len(), 10);
        assert_eq!(batch[0].theme, "animals");
        assert_eq!(batch[0].difficulty, "easy");
        assert_eq!(batch[0].grid_size, 12);
        assert!(batch.iter().any(|c| c.theme == "colors"));
    }
}
