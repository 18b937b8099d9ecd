//! URI patterns for page links
//!
//! A pattern is a string holding the literal `{page}` token, e.g. `page={page}`
//! for `?page=5` style links or `page/{page}` for `/posts/page/5` style links.
//! The same pattern is used to find the current page inside a URI and to
//! rewrite (or extend) that URI so it points at another page.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::sync::LazyLock;

/// Token replaced by the page number
pub const PAGE_TOKEN: &str = "{page}";

/// Pattern used when none is configured
pub const DEFAULT_PATTERN: &str = "page={page}";

/// Page numbers never start with a zero
const PAGE_CAPTURE: &str = "([1-9][0-9]*)";

static DEFAULT_URI_PATTERN: LazyLock<UriPattern> =
    LazyLock::new(|| UriPattern::new(DEFAULT_PATTERN).unwrap());

/// How a pattern is spliced into a URI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternStyle {
    /// Query parameter, e.g. `page={page}`
    Query,
    /// Path segment, e.g. `page/{page}`
    Path,
}

impl PatternStyle {
    /// Detect the style of a pattern: anything with a `=` is a query parameter
    pub fn of(template: &str) -> Self {
        if template.contains('=') {
            Self::Query
        } else {
            Self::Path
        }
    }
}

/// A compiled `{page}` pattern
#[derive(Debug, Clone)]
pub struct UriPattern {
    template: String,
    style: PatternStyle,
    matcher: Regex,
}

impl UriPattern {
    /// Compile a pattern
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        let style = PatternStyle::of(&template);
        let matcher = build_matcher(&template, style)?;
        Ok(Self {
            template,
            style,
            matcher,
        })
    }

    /// The pattern as configured
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Query or path style
    pub fn style(&self) -> PatternStyle {
        self.style
    }

    /// The pattern with `{page}` replaced by a page number
    pub fn substitute(&self, page: u64) -> String {
        self.template.replace(PAGE_TOKEN, &page.to_string())
    }

    /// Page number found in the URI, if the pattern occurs in it
    pub fn extract_page(&self, uri: &str) -> Option<u64> {
        self.matcher
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Build the URI of `page` from the current URI
    pub fn create_link(&self, uri: &str, page: u64) -> String {
        // Rewrite the page number in place when the URI already carries one
        if let Some(found) = self.matcher.captures(uri).and_then(|caps| caps.get(1)) {
            tracing::trace!(uri, page, "replacing page number in URI");
            let mut link = String::with_capacity(uri.len() + 4);
            link.push_str(&uri[..found.start()]);
            link.push_str(&page.to_string());
            link.push_str(&uri[found.end()..]);
            return link;
        }

        let segment = self.substitute(page);
        match self.style {
            PatternStyle::Query => {
                let separator = if uri.contains('?') { '&' } else { '?' };
                format!("{uri}{separator}{segment}")
            }
            PatternStyle::Path => match uri.split_once('?') {
                Some((path, query)) => format!("{path}/{segment}?{query}"),
                None => format!("{uri}/{segment}"),
            },
        }
    }
}

impl Default for UriPattern {
    fn default() -> Self {
        DEFAULT_URI_PATTERN.clone()
    }
}

impl PartialEq for UriPattern {
    fn eq(&self, other: &Self) -> bool {
        self.template == other.template
    }
}

impl Eq for UriPattern {}

impl fmt::Display for UriPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// Build the regex for a pattern.
///
/// Query patterns must follow `&` or `?` and end the URI or precede `&`.
/// Path patterns must follow `/` and end the URI or precede `/` or `?`.
fn build_matcher(template: &str, style: PatternStyle) -> Result<Regex> {
    let body = template
        .split(PAGE_TOKEN)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(PAGE_CAPTURE);

    let source = match style {
        PatternStyle::Query => format!(r"[&?]{body}(?:&|\z)"),
        PatternStyle::Path => format!(r"/{body}(?:/|\?|\z)"),
    };

    RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::invalid_pattern(template, e.to_string()))
}
