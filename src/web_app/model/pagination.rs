// web_app/model/pagination.rs - Page-number control state
//
// The control strip shows a sliding window of up to three page numbers
// around the current page, with the first and last page pinned on either
// side and an ellipsis wherever pages are skipped.

/// Number of consecutive page numbers in the sliding window
pub const WINDOW_SPAN: usize = 3;

/// One entry in the page-number strip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Everything the prev/next buttons and the number strip need to render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationControls {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub items: Vec<PageItem>,
}

impl PaginationControls {
    /// Both buttons disabled, no numbers
    pub fn single_page() -> Self {
        Self {
            prev_disabled: true,
            next_disabled: true,
            items: Vec::new(),
        }
    }

    /// Page numbers shown in the strip, in order
    pub fn page_numbers(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter_map(|item| match item {
                PageItem::Page { number, .. } => Some(*number),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    pub fn ellipsis_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, PageItem::Ellipsis))
            .count()
    }
}

/// Number of pages needed for `total_items`, never less than one
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}

/// Inclusive `(start, end)` of the sliding window for `current_page`
pub fn window_bounds(current_page: usize, page_count: usize) -> (usize, usize) {
    let mut start = current_page.saturating_sub(1).max(1);
    let end = page_count.min(start + (WINDOW_SPAN - 1));

    // Near the last page the window would come up short; widen it leftward.
    if end.saturating_sub(start) < WINDOW_SPAN - 1 {
        start = end.saturating_sub(WINDOW_SPAN - 1).max(1);
    }

    (start, end)
}

/// Build the controls for `current_page` out of `page_count` pages
pub fn pagination_controls(current_page: usize, page_count: usize) -> PaginationControls {
    if page_count <= 1 {
        return PaginationControls::single_page();
    }

    let (start, end) = window_bounds(current_page, page_count);
    let mut items = Vec::with_capacity(WINDOW_SPAN + 4);

    if start > 1 {
        items.push(PageItem::Page { number: 1, active: false });
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    for number in start..=end {
        items.push(PageItem::Page {
            number,
            active: number == current_page,
        });
    }

    if end < page_count {
        if end < page_count - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page { number: page_count, active: false });
    }

    PaginationControls {
        prev_disabled: current_page == 1,
        next_disabled: current_page == page_count,
        items,
    }
}
