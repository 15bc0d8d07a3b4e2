//! Page-index bookkeeping for long lists, plus the prev/next control.

use dioxus::prelude::*;

/// Restaurants and bookings shown per page.
pub const PAGE_SIZE: usize = 6;

/// A list split into fixed-size pages. Page indices are zero-based and always
/// clamped into range; an empty list still has one (empty) page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    total: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
        }
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn clamp(&self, page: usize) -> usize {
        page.min(self.page_count() - 1)
    }

    /// Index range of `page` into the underlying list.
    pub fn range(&self, page: usize) -> std::ops::Range<usize> {
        let start = (self.clamp(page) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn items<'a, T>(&self, list: &'a [T], page: usize) -> &'a [T] {
        let range = self.range(page);
        list.get(range).unwrap_or(&[])
    }

    pub fn has_previous(&self, page: usize) -> bool {
        self.clamp(page) > 0
    }

    pub fn has_next(&self, page: usize) -> bool {
        self.clamp(page) + 1 < self.page_count()
    }
}

/// Previous / next buttons around a "Page x of y" label.
#[component]
pub fn Pager(pagination: Pagination, page: Signal<usize>) -> Element {
    let mut page = page;
    let current = pagination.clamp(page());
    if pagination.page_count() <= 1 {
        return rsx! {};
    }

    rsx! {
        div {
            class: "pager",
            button {
                class: "pager-btn",
                disabled: !pagination.has_previous(current),
                onclick: move |_| page.set(current.saturating_sub(1)),
                "Previous"
            }
            span {
                class: "pager-label",
                "Page {current + 1} of {pagination.page_count()}"
            }
            button {
                class: "pager-btn",
                disabled: !pagination.has_next(current),
                onclick: move |_| page.set(pagination.clamp(current + 1)),
                "Next"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_one_page() {
        let pages = Pagination::new(0, PAGE_SIZE);
        assert_eq!(pages.page_count(), 1);
        assert_eq!(pages.range(0), 0..0);
        assert!(!pages.has_next(0));
        assert!(!pages.has_previous(0));
    }

    #[test]
    fn test_last_page_is_partial() {
        let list: Vec<u32> = (0..14).collect();
        let pages = Pagination::new(list.len(), 6);

        assert_eq!(pages.page_count(), 3);
        assert_eq!(pages.items(&list, 0), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(pages.items(&list, 2), &[12, 13]);
        assert!(pages.has_next(1));
        assert!(!pages.has_next(2));
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let list: Vec<u32> = (0..7).collect();
        let pages = Pagination::new(list.len(), 6);

        assert_eq!(pages.clamp(10), 1);
        assert_eq!(pages.items(&list, 10), &[6]);
        assert!(pages.has_previous(10));
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let pages = Pagination::new(3, 0);
        assert_eq!(pages.page_count(), 3);
        assert_eq!(pages.range(2), 2..3);
    }
}
