//! Batch build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use wordgrid_gen::PuzzleConfig;
use wordgrid_static::{builder::default_batch, BuildConfig, SiteBuilder};

/// Configuration file structure (wordgrid.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteSettings,

    /// Puzzle batch; omitted means the standard ten-puzzle batch
    #[serde(default, rename = "puzzle")]
    puzzles: Vec<PuzzleConfig>,
}

#[derive(Debug, Deserialize)]
struct SiteSettings {
    #[serde(default = "default_output")]
    output: String,

    #[serde(default = "default_base_url")]
    base_url: String,

    #[serde(default = "default_title")]
    title: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            base_url: default_base_url(),
            title: default_title(),
        }
    }
}

fn default_output() -> String {
    "dist".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_title() -> String {
    "Word Search Puzzles".to_string()
}

/// Load configuration from wordgrid.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building puzzle site artifacts...");

    let file_config = load_config(config_path)?;

    let configs = if file_config.puzzles.is_empty() {
        default_batch()
    } else {
        file_config.puzzles
    };

    let config = BuildConfig {
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        base_url: file_config.site.base_url,
        site_title: file_config.site.title,
        configs,
    };

    let result = SiteBuilder::new(config).build().await?;

    tracing::info!(
        "Built {} puzzles in {}ms",
        result.puzzles,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config_file() {
        let config: ConfigFile = toml::from_str(
            r#"
[site]
output = "public"
base_url = "https://puzzles.example.com/"

[[puzzle]]
theme = "animals"
difficulty = "easy"
grid_size = 12

[[puzzle]]
theme = "food"
"#,
        )
        .unwrap();

        assert_eq!(config.site.output, "public");
        assert_eq!(config.site.title, "Word Search Puzzles");
        assert_eq!(config.puzzles.len(), 2);
        assert_eq!(config.puzzles[0].grid_size, 12);
        // Partial puzzle entries pick up the documented defaults.
        assert_eq!(config.puzzles[1].difficulty, "medium");
        assert_eq!(config.puzzles[1].grid_size, 15);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();

        assert_eq!(config.site.output, "dist");
        assert_eq!(config.site.base_url, "/");
        assert!(config.puzzles.is_empty());
    }

    #[test]
    fn missing_config_file_is_fine() {
        let config = load_config(Path::new("/nonexistent/wordgrid.toml")).unwrap();

        assert_eq!(config.site.output, "dist");
        assert!(config.puzzles.is_empty());
    }
}
