//! CLI argument definitions and composition root for the `seedpress`
//! binary.

pub mod bootstrap;
pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Import a seed bundle into a blog content store, at most once per
/// environment.
#[derive(Parser, Debug)]
#[command(name = "seedpress", version, about)]
pub struct Cli {
    /// Seed bundle directory containing data.json and uploads/
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// SQLite database path
    #[arg(long, env = "SEEDPRESS_DATABASE", default_value = "seedpress.db")]
    pub database: PathBuf,

    /// Environment namespace for the setup flag
    #[arg(long, env = "SEEDPRESS_ENV", default_value = "development")]
    pub environment: String,

    /// Directory where uploaded media file content is stored
    #[arg(long, default_value = "public/uploads")]
    pub uploads_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Import the seed bundle (no-op when already imported)
    Seed,
    /// Show whether seeding has already run for this environment
    Status,
}
