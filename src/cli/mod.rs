//! CLI module
//!
//! Command-line interface for computing pagination links.
//!
//! # Commands
//!
//! - `info` - Current page, page count and offset
//! - `links` - Links of the pagination widget
//! - `link` - URI of a single page
//! - `render` - HTML of the pagination widget

mod commands;
mod runner;

pub use commands::{Cli, Commands, OptionArgs, OutputFormat};
pub use runner::Runner;
