//! Link set construction
//!
//! Slots are emitted in the order `prev, 1, [less], window…, [current], [more],
//! last, next`.
//! The window holds `proximity` pages on each side of the current page and is
//! pushed away from the first and last page so it keeps its width near the
//! ends of the listing.

use super::model::PaginationModel;
use super::types::{LinkDescriptor, LinkSet, SlotKey};

impl PaginationModel {
    /// Build the links of the pagination widget
    pub fn link_set(&self) -> LinkSet {
        let page = self.page();
        let last = self.total_pages();
        let proximity = self.proximity();
        let max_window = proximity.saturating_mul(2).saturating_add(1);

        let mut links = LinkSet::new();

        if page == 1 {
            if self.show_arrows_always() {
                links.insert(LinkDescriptor::unavailable_arrow(
                    SlotKey::Prev,
                    self.label_prev(),
                ));
            }
        } else {
            links.insert(LinkDescriptor::arrow(
                SlotKey::Prev,
                page - 1,
                self.create_link(page - 1),
                self.label_prev(),
            ));
        }

        if self.total_items() > 0 {
            links.insert(LinkDescriptor::boundary(1, self.create_link(1), page));
        }

        if last > 0 {
            let (mut from, mut to) = if last <= max_window {
                (2, last - 1)
            } else {
                widen(
                    page.saturating_sub(proximity).max(2),
                    page.saturating_add(proximity).min(last - 1),
                    max_window - 1,
                    last,
                )
            };

            // The marker takes the slot of the page next to it
            if from > 2 && proximity > 0 {
                links.insert(LinkDescriptor::truncation(SlotKey::Less));
                from += 1;
            }

            let show_more = to < last - 1;
            if show_more {
                to -= 1;
            }

            for i in from..=to {
                links.insert(LinkDescriptor::page_link(i, self.create_link(i), page));
            }

            // A zero-width window has no page between first and last. The
            // current page gets its own slot, unless the window already ends
            // next to the last page, which then stands in for it.
            let end = if from <= to { to + 1 } else { from };
            if proximity == 0 && (last <= 1 || end != last) {
                links.insert(LinkDescriptor::current_page(page, self.create_link(page)));
            }

            if show_more && proximity > 0 {
                links.insert(LinkDescriptor::truncation(SlotKey::More));
            }
        }

        if last > 1 {
            links.insert(LinkDescriptor::boundary(last, self.create_link(last), page));
        }

        if page >= last {
            if self.show_arrows_always() {
                links.insert(LinkDescriptor::unavailable_arrow(
                    SlotKey::Next,
                    self.label_next(),
                ));
            }
        } else {
            links.insert(LinkDescriptor::arrow(
                SlotKey::Next,
                page + 1,
                self.create_link(page + 1),
                self.label_next(),
            ));
        }

        tracing::debug!(
            page,
            last,
            proximity,
            slots = links.len(),
            "built pagination links"
        );

        links
    }
}

/// Grow `[from, to]` until it spans `width` steps.
///
/// `from` moves down towards page 2 first, then `to` moves up towards
/// `last - 1`. Growth stops at those bounds.
fn widen(from: u64, to: u64, width: u64, last: u64) -> (u64, u64) {
    if to >= from.saturating_add(width) {
        return (from, to);
    }
    let from = to.saturating_sub(width).max(2).min(from);
    let to = from.saturating_add(width).min(last - 1).max(to);
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::widen;

    #[test]
    fn test_widen_already_wide() {
        assert_eq!(widen(23, 27, 4, 50), (23, 27));
    }

    #[test]
    fn test_widen_moves_from_first() {
        // current page 49 of 50, proximity 2
        assert_eq!(widen(47, 49, 4, 50), (45, 49));
    }

    #[test]
    fn test_widen_then_moves_to() {
        // current page 1 of 50, proximity 2
        assert_eq!(widen(2, 3, 4, 50), (2, 6));
    }

    #[test]
    fn test_widen_stops_at_bounds() {
        assert_eq!(widen(2, 1, 0, 2), (2, 1));
        assert_eq!(widen(3, 4, 10, 6), (2, 5));
    }

    #[test]
    fn test_widen_page_past_the_end() {
        // current page 100 of 50, proximity 2
        assert_eq!(widen(98, 49, 4, 50), (45, 49));
    }

    /// Window grown one step at a time, left side first
    fn widen_stepwise(page: i64, proximity: i64, last: i64) -> (i64, i64) {
        let max_window = proximity * 2 + 1;
        let mut from = (page - proximity).max(2);
        let mut to = (page + proximity).min(last - 1);
        while to - from < max_window - 1 {
            if from > 2 {
                from -= 1;
            } else if to < last - 1 {
                to += 1;
            } else {
                break;
            }
        }
        (from, to)
    }

    #[test]
    fn test_widen_matches_stepwise_growth() {
        for proximity in 0..=6_u64 {
            let max_window = proximity * 2 + 1;
            for last in (max_window + 1)..=40 {
                for page in 1..=45_u64 {
                    let from = page.saturating_sub(proximity).max(2);
                    let to = page.saturating_add(proximity).min(last - 1);
                    let (from, to) = widen(from, to, max_window - 1, last);

                    let expected = widen_stepwise(page as i64, proximity as i64, last as i64);
                    assert_eq!(
                        (from as i64, to as i64),
                        expected,
                        "page {page} of {last}, proximity {proximity}"
                    );
                }
            }
        }
    }
}
