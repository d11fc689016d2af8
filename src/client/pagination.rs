//! Pagination window: which page buttons a list view shows

/// One entry of the page button row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Everything needed to render the page controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControl {
    pub current: u32,
    pub pages: u32,
    pub items: Vec<PageItem>,
}

impl PaginationControl {
    /// Target of the "previous" button; `None` means disabled
    pub fn prev(&self) -> Option<u32> {
        (self.current > 1).then(|| self.current - 1)
    }

    /// Target of the "next" button; `None` means disabled
    pub fn next(&self) -> Option<u32> {
        (self.current < self.pages).then(|| self.current + 1)
    }
}

/// Page buttons for `current` out of `pages`.
///
/// First and last page are always shown, plus the current page and its
/// direct neighbours. Each gap collapses into one ellipsis.
pub fn page_window(current: u32, pages: u32) -> Vec<PageItem> {
    let pages = pages.max(1);
    let mut visible: Vec<u32> = [
        1,
        current.saturating_sub(1),
        current,
        current.saturating_add(1),
        pages,
    ]
    .into_iter()
    .filter(|page| (1..=pages).contains(page))
    .collect();
    visible.sort_unstable();
    visible.dedup();

    let mut items = Vec::with_capacity(visible.len() + 2);
    let mut last_shown = 0;
    for page in visible {
        if page > last_shown + 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(page));
        last_shown = page;
    }

    items
}

/// Page controls, or `None` when everything fits on one page
pub fn pagination_control(current: u32, pages: u32) -> Option<PaginationControl> {
    if pages <= 1 {
        return None;
    }
    Some(PaginationControl {
        current,
        pages,
        items: page_window(current, pages),
    })
}
