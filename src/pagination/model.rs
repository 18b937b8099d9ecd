//! Pagination model
//!
//! Holds the pagination settings and derives page counts, offsets and
//! page links from them. Nothing is cached: every derived value is
//! recomputed from the current settings.

use super::types::PageSummary;
use crate::config::PaginationOptions;
use crate::error::{Error, Result};
use crate::uri::UriPattern;

/// Items per page when not configured
pub const DEFAULT_ITEMS_PER_PAGE: u64 = 20;

/// Pages shown on each side of the current page when not configured
pub const DEFAULT_PROXIMITY: u64 = 2;

/// URI used when no request URI is known
pub const DEFAULT_URI: &str = "/";

/// Label of the previous page arrow
pub const DEFAULT_LABEL_PREV: &str = "&laquo;";

/// Label of the next page arrow
pub const DEFAULT_LABEL_NEXT: &str = "&raquo;";

/// Pagination settings for one listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationModel {
    total_items: u64,
    items_per_page: u64,
    proximity: u64,
    page: Option<u64>,
    uri: Option<String>,
    pattern: UriPattern,
    label_prev: String,
    label_next: String,
    show_arrows_always: bool,
}

impl Default for PaginationModel {
    fn default() -> Self {
        Self {
            total_items: 0,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            proximity: DEFAULT_PROXIMITY,
            page: None,
            uri: None,
            pattern: UriPattern::default(),
            label_prev: DEFAULT_LABEL_PREV.to_string(),
            label_next: DEFAULT_LABEL_NEXT.to_string(),
            show_arrows_always: true,
        }
    }
}

impl PaginationModel {
    /// Create a model with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model from options, starting from the defaults
    pub fn from_options(options: &PaginationOptions) -> Result<Self> {
        let mut model = Self::default();
        model.apply(options)?;
        Ok(model)
    }

    /// Apply every option that is set.
    ///
    /// Either all options are applied or, on the first invalid one, none.
    pub fn apply(&mut self, options: &PaginationOptions) -> Result<&mut Self> {
        let mut next = self.clone();

        if let Some(items) = options.items {
            next.set_total_items(items)?;
        }
        if let Some(per_page) = options.per_page {
            next.set_items_per_page(per_page)?;
        }
        if let Some(page) = options.page {
            next.set_page(page)?;
        }
        if let Some(proximity) = options.proximity {
            next.set_proximity(proximity)?;
        }
        if let Some(uri) = &options.uri {
            next.set_uri(uri.clone());
        }
        if let Some(pattern) = &options.pattern {
            next.set_pattern(pattern)?;
        }
        if let Some(label) = &options.label_prev {
            next.set_label_prev(label.clone());
        }
        if let Some(label) = &options.label_next {
            next.set_label_next(label.clone());
        }
        if let Some(show) = options.show_arrows_always {
            next.set_show_arrows_always(show);
        }

        *self = next;
        Ok(self)
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Set the total number of items
    pub fn set_total_items(&mut self, total_items: i64) -> Result<&mut Self> {
        self.total_items = at_least("total_items", total_items, 0)?;
        Ok(self)
    }

    /// Total number of items
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Set the number of items per page
    pub fn set_items_per_page(&mut self, items_per_page: i64) -> Result<&mut Self> {
        self.items_per_page = at_least("items_per_page", items_per_page, 1)?;
        Ok(self)
    }

    /// Number of items per page
    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    /// Set the current page
    pub fn set_page(&mut self, page: i64) -> Result<&mut Self> {
        self.page = Some(at_least("page", page, 1)?);
        Ok(self)
    }

    /// Forget the current page so it is read from the URI again
    pub fn clear_page(&mut self) -> &mut Self {
        self.page = None;
        self
    }

    /// Page set with [`set_page`](Self::set_page), if any
    pub fn explicit_page(&self) -> Option<u64> {
        self.page
    }

    /// Current page.
    ///
    /// The page set explicitly, else the page found in the URI through the
    /// pattern, else 1.
    pub fn page(&self) -> u64 {
        self.page
            .or_else(|| self.pattern.extract_page(self.uri()))
            .unwrap_or(1)
    }

    /// Set how many pages are linked on each side of the current page
    pub fn set_proximity(&mut self, proximity: i64) -> Result<&mut Self> {
        self.proximity = at_least("proximity", proximity, 0)?;
        Ok(self)
    }

    /// Pages linked on each side of the current page
    pub fn proximity(&self) -> u64 {
        self.proximity
    }

    /// Set the URI of the current request
    pub fn set_uri(&mut self, uri: impl Into<String>) -> &mut Self {
        self.uri = Some(uri.into());
        self
    }

    /// Forget the request URI
    pub fn clear_uri(&mut self) -> &mut Self {
        self.uri = None;
        self
    }

    /// URI of the current request, `/` when none was given
    pub fn uri(&self) -> &str {
        match self.uri.as_deref() {
            Some(uri) if !uri.is_empty() => uri,
            _ => DEFAULT_URI,
        }
    }

    /// Set the page pattern, e.g. `page={page}` or `page/{page}`
    pub fn set_pattern(&mut self, pattern: &str) -> Result<&mut Self> {
        self.pattern = UriPattern::new(pattern)?;
        Ok(self)
    }

    /// Page pattern
    pub fn pattern(&self) -> &UriPattern {
        &self.pattern
    }

    /// Set the label of the previous page arrow
    pub fn set_label_prev(&mut self, label: impl Into<String>) -> &mut Self {
        self.label_prev = label.into();
        self
    }

    /// Label of the previous page arrow
    pub fn label_prev(&self) -> &str {
        &self.label_prev
    }

    /// Set the label of the next page arrow
    pub fn set_label_next(&mut self, label: impl Into<String>) -> &mut Self {
        self.label_next = label.into();
        self
    }

    /// Label of the next page arrow
    pub fn label_next(&self) -> &str {
        &self.label_next
    }

    /// Keep disabled arrows on the first and last page instead of hiding them
    pub fn set_show_arrows_always(&mut self, show: bool) -> &mut Self {
        self.show_arrows_always = show;
        self
    }

    /// Whether disabled arrows are shown
    pub fn show_arrows_always(&self) -> bool {
        self.show_arrows_always
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// Number of pages, 0 when there are no items
    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Index of the first item of the current page
    pub fn offset(&self) -> u64 {
        (self.page() - 1).saturating_mul(self.items_per_page)
    }

    /// URI of a page, derived from the current URI
    pub fn create_link(&self, page: u64) -> String {
        self.pattern.create_link(self.uri(), page)
    }

    /// Numeric facts about the current page
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            page: self.page(),
            total_pages: self.total_pages(),
            offset: self.offset(),
            total_items: self.total_items,
            items_per_page: self.items_per_page,
        }
    }
}

/// Validate a setting against its lower bound
fn at_least(field: &str, value: i64, min: i64) -> Result<u64> {
    if value < min {
        tracing::debug!(field, value, min, "rejected out-of-range setting");
        return Err(Error::invalid_argument(
            field,
            format!("must be at least {min}, got {value}"),
        ));
    }
    Ok(value as u64)
}
