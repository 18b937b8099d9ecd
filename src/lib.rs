// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # page-links
//!
//! Pagination metadata and navigational links for paged listings.
//!
//! ## Features
//!
//! - **Page math**: total pages and item offsets from an item count and page size
//! - **Link sets**: ordered `prev, 1, …, window, …, last, next` slots with
//!   current/disabled flags, labels and CSS classes, ready for any template
//! - **URI patterns**: query (`page={page}`) or path (`page/{page}`) style links
//!   derived from the current request URI, which also yields the current page
//! - **HTML**: a default `<ul class="pagination">` renderer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use page_links::{PaginationModel, Result};
//!
//! fn main() -> Result<()> {
//!     let mut pager = PaginationModel::new();
//!     pager
//!         .set_total_items(1000)?
//!         .set_uri("/posts?page=25");
//!
//!     assert_eq!(pager.total_pages(), 50);
//!     assert_eq!(pager.offset(), 480);
//!
//!     for link in &pager.link_set() {
//!         println!("{} -> {}", link.label, link.uri);
//!     }
//!
//!     println!("{}", pager.render());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Page patterns and URI rewriting
pub mod uri;

/// Pagination model and link sets
pub mod pagination;

/// Options structures and file loading
pub mod config;

/// HTML rendering
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PaginationOptions;
pub use error::{Error, Result};
pub use pagination::{LinkDescriptor, LinkSet, PageSummary, PaginationModel, SlotKey};
pub use uri::{PatternStyle, UriPattern};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
