//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PaginationOptions;
use crate::error::{Error, Result};
use crate::pagination::{LinkSet, PageSummary, PaginationModel};
use serde_json::json;

/// CLI runner
pub struct Runner {
    cli: Cli,
    request_uri: Option<String>,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            request_uri: None,
        }
    }

    /// URI of the request being served, used when no URI is configured
    pub fn with_request_uri(mut self, uri: Option<String>) -> Self {
        self.request_uri = uri.filter(|u| !u.is_empty());
        self
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        let model = self.build_model()?;
        match &self.cli.command {
            Commands::Info => self.info(&model),
            Commands::Links => self.links(&model),
            Commands::Link { target } => self.link(&model, *target),
            Commands::Render => Ok(model.render()),
        }
    }

    /// Options from the options file, overridden by the command line
    pub fn options(&self) -> Result<PaginationOptions> {
        let file_options = match &self.cli.config {
            Some(path) => PaginationOptions::load(path)?,
            None => PaginationOptions::default(),
        };

        let mut options = file_options.overlay(self.cli.options.to_options());
        if options.uri.is_none() {
            if let Some(uri) = &self.request_uri {
                tracing::debug!(uri = %uri, "using request URI");
                options.uri = Some(uri.clone());
            }
        }
        Ok(options)
    }

    /// Build the pagination model
    pub fn build_model(&self) -> Result<PaginationModel> {
        PaginationModel::from_options(&self.options()?)
    }

    fn info(&self, model: &PaginationModel) -> Result<String> {
        let summary = model.summary();
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
            OutputFormat::Pretty => Ok(format_summary(&summary)),
        }
    }

    fn links(&self, model: &PaginationModel) -> Result<String> {
        let links = model.link_set();
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&links)?),
            OutputFormat::Pretty => Ok(format_links(&links)),
        }
    }

    fn link(&self, model: &PaginationModel, target: u64) -> Result<String> {
        if target < 1 {
            return Err(Error::invalid_argument(
                "page",
                format!("must be at least 1, got {target}"),
            ));
        }

        let uri = model.create_link(target);
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &json!({ "page": target, "uri": uri }),
            )?),
            OutputFormat::Pretty => Ok(uri),
        }
    }
}

fn format_summary(summary: &PageSummary) -> String {
    let mut lines = vec![format!("Page {} of {}", summary.page, summary.total_pages)];
    lines.push(format!("  Items:    {}", summary.total_items));
    lines.push(format!("  Per page: {}", summary.items_per_page));
    lines.push(format!("  Offset:   {}", summary.offset));
    lines.join("\n")
}

fn format_links(links: &LinkSet) -> String {
    links
        .iter()
        .map(|link| {
            if link.is_truncation() {
                return format!("{:<7} \u{2026}", link.key.to_string());
            }
            let mut flags = Vec::new();
            if link.is_current {
                flags.push("current");
            }
            if link.is_disabled {
                flags.push("disabled");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };
            format!(
                "{:<7} {:<10} {}{}",
                link.key.to_string(),
                link.label,
                link.uri,
                flags
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
