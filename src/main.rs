//! page-links CLI
//!
//! Command-line interface for computing pagination links

use clap::Parser;
use page_links::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    // The request URI comes from the environment, as for a CGI script
    let runner = Runner::new(cli).with_request_uri(std::env::var("REQUEST_URI").ok());

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
