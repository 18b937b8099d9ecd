//! HTML rendering
//!
//! Default markup for a link set, in the Foundation pagination style:
//!
//! ```html
//! <ul class="pagination"><li class="current"><a href="/posts?page=1">1</a></li>…</ul>
//! ```
//!
//! Labels are written as-is since the default labels are HTML entities.
//! Attribute values are escaped, so a query-style link such as
//! `/posts?q=x&page=2` is written as `href="/posts?q=x&amp;page=2"`. Browsers
//! decode the entity, so the followed URI is unchanged.

use crate::pagination::{LinkSet, PaginationModel};
use maud::{html, Markup, PreEscaped};

/// Render the pagination widget of a model, empty when there is only one page
pub fn render(model: &PaginationModel) -> String {
    if model.total_pages() <= 1 {
        return String::new();
    }
    render_links(&model.link_set()).into_string()
}

/// Render a link set as an unordered list
pub fn render_links(links: &LinkSet) -> Markup {
    html! {
        ul.pagination {
            @for link in links {
                li class=(link.css_class) {
                    a href=(link.uri) { (PreEscaped(&link.label)) }
                }
            }
        }
    }
}

impl PaginationModel {
    /// Render the pagination widget as HTML
    pub fn render(&self) -> String {
        render(self)
    }
}
