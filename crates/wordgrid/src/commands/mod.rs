//! CLI subcommands.

pub mod build;
pub mod gen;
