//! Pagination types
//!
//! Link descriptors and the ordered link set produced by the builder.

use serde::{Serialize, Serializer};
use std::fmt;

/// Label of the truncation markers
pub const ELLIPSIS_LABEL: &str = "&hellip;";

/// Target of links that lead nowhere
pub const DEAD_URI: &str = "#";

/// CSS class of the current page
pub const CLASS_CURRENT: &str = "current";

/// CSS class of an enabled arrow
pub const CLASS_ARROW: &str = "arrow";

/// CSS class of a disabled arrow
pub const CLASS_ARROW_UNAVAILABLE: &str = "arrow unavailable";

/// CSS class of a truncation marker
pub const CLASS_UNAVAILABLE: &str = "unavailable";

// ============================================================================
// Slot Keys
// ============================================================================

/// Position of a descriptor in the link set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKey {
    /// Previous page arrow
    Prev,
    /// Truncation marker after the first page
    Less,
    /// Page number link
    Page(u64),
    /// Current page when the window has no width
    Current,
    /// Truncation marker before the last page
    More,
    /// Next page arrow
    Next,
}

impl SlotKey {
    /// Page number of a `Page` slot
    pub fn page(&self) -> Option<u64> {
        match self {
            Self::Page(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prev => f.write_str("prev"),
            Self::Less => f.write_str("less"),
            Self::Page(n) => write!(f, "{n}"),
            Self::Current => f.write_str("current"),
            Self::More => f.write_str("more"),
            Self::Next => f.write_str("next"),
        }
    }
}

/// Named slots serialize as strings, page slots as numbers
impl Serialize for SlotKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u64(*n),
            other => serializer.collect_str(other),
        }
    }
}

// ============================================================================
// Link Descriptor
// ============================================================================

/// One entry of a pagination widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDescriptor {
    /// Slot this descriptor occupies
    pub key: SlotKey,
    /// Target page (`false` when serialized and there is none)
    #[serde(serialize_with = "page_or_false")]
    pub page: Option<u64>,
    /// Target URI
    pub uri: String,
    /// Whether this is the page being viewed
    pub is_current: bool,
    /// Whether the link should be rendered inactive
    pub is_disabled: bool,
    /// Text of the link
    pub label: String,
    /// CSS class of the list item
    #[serde(rename = "class")]
    pub css_class: String,
}

impl LinkDescriptor {
    /// First or last page link, disabled while it is the current page
    pub fn boundary(page: u64, uri: impl Into<String>, current: u64) -> Self {
        let is_current = page == current;
        Self {
            is_disabled: is_current,
            ..Self::page_link(page, uri, current)
        }
    }

    /// Link to a page inside the window
    pub fn page_link(page: u64, uri: impl Into<String>, current: u64) -> Self {
        let is_current = page == current;
        Self {
            key: SlotKey::Page(page),
            page: Some(page),
            uri: uri.into(),
            is_current,
            is_disabled: false,
            label: page.to_string(),
            css_class: if is_current { CLASS_CURRENT } else { "" }.to_string(),
        }
    }

    /// The current page in its own slot
    pub fn current_page(page: u64, uri: impl Into<String>) -> Self {
        Self {
            key: SlotKey::Current,
            ..Self::page_link(page, uri, page)
        }
    }

    /// Enabled arrow pointing at `page`
    pub fn arrow(
        key: SlotKey,
        page: u64,
        uri: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            key,
            page: Some(page),
            uri: uri.into(),
            is_current: false,
            is_disabled: false,
            label: label.into(),
            css_class: CLASS_ARROW.to_string(),
        }
    }

    /// Arrow shown on the first or last page
    pub fn unavailable_arrow(key: SlotKey, label: impl Into<String>) -> Self {
        Self {
            key,
            page: None,
            uri: DEAD_URI.to_string(),
            is_current: false,
            is_disabled: true,
            label: label.into(),
            css_class: CLASS_ARROW_UNAVAILABLE.to_string(),
        }
    }

    /// "…" marker standing for skipped pages
    pub fn truncation(key: SlotKey) -> Self {
        Self {
            key,
            page: None,
            uri: DEAD_URI.to_string(),
            is_current: false,
            is_disabled: true,
            label: ELLIPSIS_LABEL.to_string(),
            css_class: CLASS_UNAVAILABLE.to_string(),
        }
    }

    /// Whether this is a truncation marker
    pub fn is_truncation(&self) -> bool {
        matches!(self.key, SlotKey::Less | SlotKey::More)
    }
}

fn page_or_false<S: Serializer>(page: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    match page {
        Some(n) => serializer.serialize_u64(*n),
        None => serializer.serialize_bool(false),
    }
}

// ============================================================================
// Link Set
// ============================================================================

/// Ordered mapping from slot to descriptor
///
/// Iteration order is rendering order. Inserting a key that is already
/// present replaces that descriptor without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkSet {
    links: Vec<LinkDescriptor>,
}

impl LinkSet {
    /// Create an empty link set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor, replacing any descriptor with the same key
    pub fn insert(&mut self, link: LinkDescriptor) {
        match self.links.iter_mut().find(|l| l.key == link.key) {
            Some(existing) => *existing = link,
            None => self.links.push(link),
        }
    }

    /// Descriptor in a slot
    pub fn get(&self, key: SlotKey) -> Option<&LinkDescriptor> {
        self.links.iter().find(|l| l.key == key)
    }

    /// Whether a slot is present
    pub fn contains(&self, key: SlotKey) -> bool {
        self.get(key).is_some()
    }

    /// Slots in rendering order
    pub fn keys(&self) -> Vec<SlotKey> {
        self.links.iter().map(|l| l.key).collect()
    }

    /// Page numbers of the page slots, in rendering order
    pub fn page_numbers(&self) -> Vec<u64> {
        self.links.iter().filter_map(|l| l.key.page()).collect()
    }

    /// Iterate over descriptors
    pub fn iter(&self) -> std::slice::Iter<'_, LinkDescriptor> {
        self.links.iter()
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<'a> IntoIterator for &'a LinkSet {
    type Item = &'a LinkDescriptor;
    type IntoIter = std::slice::Iter<'a, LinkDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

impl IntoIterator for LinkSet {
    type Item = LinkDescriptor;
    type IntoIter = std::vec::IntoIter<LinkDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Numeric facts about the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// Current page
    pub page: u64,
    /// Number of pages
    pub total_pages: u64,
    /// Index of the first item on the current page
    pub offset: u64,
    /// Number of items
    pub total_items: u64,
    /// Items per page
    pub items_per_page: u64,
}
