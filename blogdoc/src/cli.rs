//! Command-line interface definitions for blogdoc

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the build command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Standalone HTML pages, one per article
    Html,
    /// Block-tree JSON files, one per article
    Json,
}

/// CLI structure for the blogdoc application
#[derive(Parser)]
#[command(name = "blogdoc")]
#[command(version)]
#[command(about = "Blog article rendering tool", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for blogdoc
#[derive(Subcommand)]
pub enum Commands {
    /// Render all articles to HTML or JSON output
    Build {
        /// Input directory (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "site")]
        output: PathBuf,

        /// Output format (html or json)
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check articles for markup the renderer silently drops
    Check {
        /// Input directory (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print one article's rendered block tree as JSON
    Inspect {
        /// Path to the article file
        article: PathBuf,
    },
}
