//! Pagination module
//!
//! Page counts, offsets and the links of a pagination widget.
//!
//! # Overview
//!
//! A [`PaginationModel`] holds the settings of one listing (item count, page
//! size, current page, request URI and page pattern). From those it derives
//! the number of pages, the offset of the current page and a [`LinkSet`]:
//! the ordered slots `prev, 1, [less], window…, [more], last, next`, ready to
//! be rendered by any template.

mod builder;
mod model;
mod types;

pub use model::{
    PaginationModel, DEFAULT_ITEMS_PER_PAGE, DEFAULT_LABEL_NEXT, DEFAULT_LABEL_PREV,
    DEFAULT_PROXIMITY, DEFAULT_URI,
};
pub use types::{
    LinkDescriptor, LinkSet, PageSummary, SlotKey, CLASS_ARROW, CLASS_ARROW_UNAVAILABLE,
    CLASS_CURRENT, CLASS_UNAVAILABLE, DEAD_URI, ELLIPSIS_LABEL,
};
