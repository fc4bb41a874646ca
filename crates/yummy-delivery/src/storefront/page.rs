use serde::Serialize;

/// One page of a longer, already ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Cuts page `page` out of `all`. Page numbers start at 1; 0 is read as 1. A page past the
    /// end is empty but still reports the totals.
    pub fn of(all: Vec<T>, page: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_items = all.len();
        let items = all
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(page_size),
        }
    }
}
