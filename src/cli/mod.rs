//! CLI module
//!
//! Command-line interface for browsing the catalog.
//!
//! # Commands
//!
//! - `characters` - Page through characters
//! - `planets` - Page through planets
//! - `character <id>` - Show one character
//! - `planet <id>` - Show one planet

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
