//! Composed output of a table render.

use crate::cell::CellContent;
use crate::column::{Alignment, DetailLine};
use crate::page::{PageMarker, PageSize};
use crate::value::RowKey;

/// Sort marker shown next to a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Column is not sortable.
    None,
    /// Sortable but not the active sort column.
    Inactive,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn symbol(self) -> &'static str {
        match self {
            SortIndicator::None => "",
            SortIndicator::Inactive => "▲▼",
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub width: u16,
    pub align: Alignment,
    pub sort: SortIndicator,
    /// Data cells are drawn emphasised.
    pub emphasis: bool,
}

/// One line of the table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyRow {
    /// A data row, one cell per column.
    Data {
        key: RowKey,
        /// Position within the rendered page.
        index: usize,
        cells: Vec<CellContent>,
        expanded: bool,
        /// Alternate shading for striped tables.
        alternate: bool,
    },
    /// Detail block spanning every column, directly below its data row.
    Detail { key: RowKey, lines: Vec<DetailLine> },
    /// Placeholder when there is nothing to show.
    Empty { message: String },
}

/// Pagination controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub window: Vec<PageMarker>,
    pub page_size: PageSize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Everything needed to draw a table once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub columns: Vec<HeaderCell>,
    pub body: Vec<BodyRow>,
    /// Present when pagination is enabled and there is at least one page.
    pub pagination: Option<PaginationBar>,
    pub striped: bool,
}

impl TableView {
    /// Data rows in display order.
    pub fn data_rows(&self) -> impl Iterator<Item = (&RowKey, &[CellContent])> {
        self.body.iter().filter_map(|row| match row {
            BodyRow::Data { key, cells, .. } => Some((key, cells.as_slice())),
            _ => None,
        })
    }

    /// Keys of the data rows in display order.
    pub fn row_keys(&self) -> Vec<RowKey> {
        self.data_rows().map(|(key, _)| key.clone()).collect()
    }

    /// Plain text of one column for every data row.
    pub fn column_text(&self, column: usize) -> Vec<String> {
        self.data_rows()
            .filter_map(|(_, cells)| cells.get(column).map(CellContent::plain_text))
            .collect()
    }

    /// Detail lines of `key`, if it is expanded on this page.
    pub fn detail(&self, key: &RowKey) -> Option<&[DetailLine]> {
        self.body.iter().find_map(|row| match row {
            BodyRow::Detail { key: k, lines } if k == key => Some(lines.as_slice()),
            _ => None,
        })
    }

    /// Empty-state message, if the table rendered no rows.
    pub fn empty_message(&self) -> Option<&str> {
        self.body.iter().find_map(|row| match row {
            BodyRow::Empty { message } => Some(message.as_str()),
            _ => None,
        })
    }

    /// Sum of column widths.
    pub fn total_width(&self) -> u16 {
        self.columns.iter().map(|c| c.width).sum()
    }
}
