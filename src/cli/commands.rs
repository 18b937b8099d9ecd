//! CLI commands and argument parsing

use crate::config::PaginationOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pagination links from the command line
#[derive(Parser, Debug)]
#[command(name = "page-links")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Options file (YAML, or JSON with a .json extension)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Pagination settings, overriding the options file
#[derive(Args, Debug, Default, Clone)]
pub struct OptionArgs {
    /// Total number of items
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub items: Option<i64>,

    /// Items per page
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub per_page: Option<i64>,

    /// Current page (read from the URI when omitted)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Pages linked on each side of the current page
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub proximity: Option<i64>,

    /// URI of the current request (defaults to $REQUEST_URI, then "/")
    #[arg(short, long, global = true)]
    pub uri: Option<String>,

    /// Page pattern, e.g. "page={page}" or "page/{page}"
    #[arg(long, global = true)]
    pub pattern: Option<String>,

    /// Label of the previous page arrow
    #[arg(long, global = true)]
    pub label_prev: Option<String>,

    /// Label of the next page arrow
    #[arg(long, global = true)]
    pub label_next: Option<String>,

    /// Hide the arrows on the first and last page
    #[arg(long, global = true, conflicts_with = "show_arrows")]
    pub hide_arrows: bool,

    /// Show disabled arrows on the first and last page
    #[arg(long, global = true)]
    pub show_arrows: bool,
}

impl OptionArgs {
    /// Options set on the command line
    pub fn to_options(&self) -> PaginationOptions {
        PaginationOptions {
            items: self.items,
            page: self.page,
            per_page: self.per_page,
            uri: self.uri.clone(),
            pattern: self.pattern.clone(),
            proximity: self.proximity,
            label_prev: self.label_prev.clone(),
            label_next: self.label_next.clone(),
            show_arrows_always: match (self.show_arrows, self.hide_arrows) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current page, page count and offset
    Info,

    /// List the links of the pagination widget
    Links,

    /// Print the URI of one page
    Link {
        /// Target page
        target: u64,
    },

    /// Render the pagination widget as HTML
    Render,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
