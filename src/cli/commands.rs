//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse the character/planet catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "catalog-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the number of items per page
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List characters page by page
    Characters {
        /// Stop after this many pages (0 = until the last page)
        #[arg(long, default_value = "1")]
        pages: u32,

        /// First page to request
        #[arg(long, default_value = "1")]
        start_page: u32,
    },

    /// List planets page by page
    Planets {
        /// Stop after this many pages (0 = until the last page)
        #[arg(long, default_value = "1")]
        pages: u32,

        /// First page to request
        #[arg(long, default_value = "1")]
        start_page: u32,
    },

    /// Show one character with its origin planet and transformations
    Character {
        /// Character id
        id: u64,
    },

    /// Show one planet
    Planet {
        /// Planet id
        id: u64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Indented JSON
    Pretty,
}
