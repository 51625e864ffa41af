//! Wordgrid CLI - word-search puzzle site generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(about = "Word-search puzzle site generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to wordgrid.toml config file
    #[arg(short, long, default_value = "wordgrid.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full puzzle batch and site artifacts
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a single puzzle and print it
    Gen {
        /// Word bank theme
        #[arg(short, long, default_value = "animals")]
        theme: String,

        /// Difficulty within the theme
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Grid dimension
        #[arg(short, long, default_value = "15")]
        grid_size: usize,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also write an SVG rendering to this path
        #[arg(long)]
        svg: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Build { output } => {
            commands::build::run(&cli.config, output).await?;
        }
        Commands::Gen {
            theme,
            difficulty,
            grid_size,
            seed,
            svg,
        } => {
            commands::gen::run(theme, difficulty, grid_size, seed, svg)?;
        }
    }

    Ok(())
}
