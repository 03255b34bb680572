//! Pagination engine: page slicing, page sizes and the compacted page window.

use std::fmt;
use std::ops::Range;

use crate::error::TableError;

/// Pages with at most this many pages list every page number.
const MAX_VISIBLE_PAGES: usize = 5;

/// Supported rows-per-page settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
    Forty,
}

impl PageSize {
    /// Every page size, smallest first.
    pub const ALL: [PageSize; 4] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Forty,
    ];

    /// Number of rows per page.
    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Forty => 40,
        }
    }

    /// The next larger size, wrapping back to the smallest.
    pub fn next(self) -> Self {
        match self {
            PageSize::Five => PageSize::Ten,
            PageSize::Ten => PageSize::Twenty,
            PageSize::Twenty => PageSize::Forty,
            PageSize::Forty => PageSize::Five,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TableError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(TableError::InvalidPageSize(value))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per page", self.get())
    }
}

/// Number of pages needed for `total_rows`; zero rows means zero pages.
pub fn total_pages(total_rows: usize, page_size: PageSize) -> usize {
    total_rows.div_ceil(page_size.get())
}

/// Slice out one 1-based page of `rows`.
///
/// Returns the page's rows and the total page count. A page outside
/// `[1, total_pages]` reads as page 1.
pub fn paginate<T>(rows: &[T], page: usize, page_size: PageSize) -> (&[T], usize) {
    let total = total_pages(rows.len(), page_size);
    let page = if page == 0 || page > total { 1 } else { page };
    let start = (page - 1) * page_size.get();
    let end = (start + page_size.get()).min(rows.len());
    (&rows[start.min(end)..end], total)
}

/// Snapshot of a table's pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current 1-based page.
    pub page: usize,
    pub page_size: PageSize,
    pub total_rows: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(page: usize, page_size: PageSize, total_rows: usize) -> Self {
        Self {
            page,
            page_size,
            total_rows,
            total_pages: total_pages(total_rows, page_size),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Row indices covered by the current page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page.saturating_sub(1) * self.page_size.get()).min(self.total_rows);
        let end = (start + self.page_size.get()).min(self.total_rows);
        start..end
    }

    /// 1-based number of the first row on the page, 0 when empty.
    pub fn first_row(&self) -> usize {
        let range = self.range();
        if range.is_empty() { 0 } else { range.start + 1 }
    }

    /// 1-based number of the last row on the page, 0 when empty.
    pub fn last_row(&self) -> usize {
        self.range().end
    }

    /// Compacted page-number window for this pagination.
    pub fn window(&self) -> Vec<PageMarker> {
        page_window(self.page, self.total_pages)
    }
}

/// One entry of the page-number window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{}", n),
            PageMarker::Ellipsis => f.write_str("..."),
        }
    }
}

/// Page numbers to display for `current` out of `total` pages.
///
/// Small page counts list every page. Otherwise the first and last page are
/// always shown together with the neighbours of `current`; the window grows
/// to four interior pages near either end, and gaps become ellipses.
///
/// ```
/// use casebook_table::{PageMarker::*, page_window};
///
/// assert_eq!(
///     page_window(5, 10),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// ```
pub fn page_window(current: usize, total: usize) -> Vec<PageMarker> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total - 1);

    if current <= 3 {
        end = (total - 1).min(4);
    }
    if current >= total - 2 {
        start = (total - 3).max(2);
    }

    let mut pages = vec![PageMarker::Page(1)];
    if start > 2 {
        pages.push(PageMarker::Ellipsis);
    }
    pages.extend((start..=end).map(PageMarker::Page));
    if end < total - 1 {
        pages.push(PageMarker::Ellipsis);
    }
    pages.push(PageMarker::Page(total));
    pages
}
