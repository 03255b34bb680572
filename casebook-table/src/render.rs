//! Text rendering of a [`TableView`] into styled lines.
//!
//! The output is front-end agnostic: each [`Line`] is a list of [`Span`]s
//! tagged with a [`SpanStyle`] that a terminal (or a test) maps to colours.

use crate::cell::CellContent;
use crate::column::{Alignment, DetailLine};
use crate::page::PageMarker;
use crate::text::{align_to_width, display_width, wrap_words};
use crate::view::{BodyRow, HeaderCell, PaginationBar, TableView};

/// Gap between columns.
const COLUMN_GAP: &str = " ";
/// Indent of detail blocks under their row.
const DETAIL_INDENT: usize = 4;

/// Semantic style of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Normal,
    Header,
    Link,
    Status,
    Muted,
    /// Current page, focused elements.
    Active,
    Badge,
    /// Emphasised data and expansion toggles.
    Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// What a rendered line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Pagination,
    Header,
    Rule,
    /// Data row at this position of the page.
    Row(usize),
    /// Detail block line belonging to the row at this position.
    Detail(usize),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub spans: Vec<Span>,
    /// Alternate shading for striped tables.
    pub alternate: bool,
}

impl Line {
    fn new(kind: LineKind) -> Self {
        Self {
            kind,
            spans: Vec::new(),
            alternate: false,
        }
    }

    fn push(&mut self, text: impl Into<String>, style: SpanStyle) {
        self.spans.push(Span::new(text, style));
    }

    /// Concatenated text of every span.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Render `view` as lines no wider than `width` columns.
///
/// Column widths come from the view; when they add up to more than
/// `width` the trailing columns are cut off.
pub fn render_lines(view: &TableView, width: u16) -> Vec<Line> {
    let width = width as usize;
    let table_width = table_width(&view.columns).min(width);
    let mut lines = Vec::new();

    if let Some(bar) = &view.pagination {
        lines.push(pagination_line(bar));
    }

    lines.push(header_line(&view.columns, width));

    let mut rule = Line::new(LineKind::Rule);
    rule.push("─".repeat(table_width), SpanStyle::Muted);
    lines.push(rule);

    let mut position = 0;
    for row in &view.body {
        match row {
            BodyRow::Data {
                index,
                cells,
                alternate,
                ..
            } => {
                position = *index;
                let mut line = data_line(&view.columns, cells, *index, width);
                line.alternate = *alternate;
                lines.push(line);
            }
            BodyRow::Detail { lines: detail, .. } => {
                lines.extend(detail_lines(detail, position, table_width));
            }
            BodyRow::Empty { message } => {
                let mut line = Line::new(LineKind::Empty);
                line.push(
                    align_to_width(message, table_width.max(display_width(message)), Alignment::Center),
                    SpanStyle::Muted,
                );
                lines.push(line);
            }
        }
    }

    lines
}

fn table_width(columns: &[HeaderCell]) -> usize {
    let cells: usize = columns.iter().map(|c| c.width as usize).sum();
    cells + columns.len().saturating_sub(1) * COLUMN_GAP.len()
}

/// Column (index, width) pairs that fit within `max_width`.
fn fitting_columns(columns: &[HeaderCell], max_width: usize) -> Vec<(usize, usize)> {
    let mut used = 0;
    let mut fitting = Vec::new();
    for (i, column) in columns.iter().enumerate() {
        let gap = if i == 0 { 0 } else { COLUMN_GAP.len() };
        let remaining = max_width.saturating_sub(used + gap);
        if remaining == 0 {
            break;
        }
        let w = (column.width as usize).min(remaining);
        fitting.push((i, w));
        used += gap + w;
    }
    fitting
}

fn pagination_line(bar: &PaginationBar) -> Line {
    let mut line = Line::new(LineKind::Pagination);
    let prev_style = if bar.has_prev {
        SpanStyle::Normal
    } else {
        SpanStyle::Muted
    };
    let next_style = if bar.has_next {
        SpanStyle::Normal
    } else {
        SpanStyle::Muted
    };

    line.push("← Prev", prev_style);
    for marker in &bar.window {
        line.push(" ", SpanStyle::Normal);
        match marker {
            PageMarker::Page(n) if *n == bar.page => line.push(format!("[{}]", n), SpanStyle::Active),
            PageMarker::Page(n) => line.push(n.to_string(), SpanStyle::Normal),
            PageMarker::Ellipsis => line.push("...", SpanStyle::Muted),
        }
    }
    line.push(" ", SpanStyle::Normal);
    line.push("Next →", next_style);
    line.push(format!("   {}", bar.page_size), SpanStyle::Muted);
    line
}

fn header_line(columns: &[HeaderCell], width: usize) -> Line {
    let mut line = Line::new(LineKind::Header);
    for (n, (i, w)) in fitting_columns(columns, width).into_iter().enumerate() {
        if n > 0 {
            line.push(COLUMN_GAP, SpanStyle::Normal);
        }
        let column = &columns[i];
        let symbol = column.sort.symbol();
        let label = if symbol.is_empty() {
            column.label.clone()
        } else {
            format!("{} {}", column.label, symbol)
        };
        line.push(align_to_width(&label, w, column.align), SpanStyle::Header);
    }
    line
}

fn data_line(columns: &[HeaderCell], cells: &[CellContent], index: usize, width: usize) -> Line {
    let mut line = Line::new(LineKind::Row(index));
    for (n, (i, w)) in fitting_columns(columns, width).into_iter().enumerate() {
        if n > 0 {
            line.push(COLUMN_GAP, SpanStyle::Normal);
        }
        let Some(cell) = cells.get(i) else {
            line.push(" ".repeat(w), SpanStyle::Normal);
            continue;
        };
        let style = match cell {
            CellContent::Text(_) if columns[i].emphasis => SpanStyle::Accent,
            CellContent::Text(_) => SpanStyle::Normal,
            CellContent::Placeholder => SpanStyle::Muted,
            CellContent::Status(_) => SpanStyle::Status,
            CellContent::Link(_) => SpanStyle::Link,
            CellContent::Toggle { .. } => SpanStyle::Accent,
            CellContent::Actions(_) => SpanStyle::Link,
            CellContent::Badges(_) => SpanStyle::Badge,
        };
        line.push(align_to_width(&cell.plain_text(), w, columns[i].align), style);
    }
    line
}

fn detail_lines(detail: &[DetailLine], position: usize, table_width: usize) -> Vec<Line> {
    let indent = " ".repeat(DETAIL_INDENT);
    let inner_width = table_width.saturating_sub(DETAIL_INDENT).max(10);
    let mut lines = Vec::new();

    for entry in detail {
        match entry {
            DetailLine::Field { label, value } => {
                let mut line = Line::new(LineKind::Detail(position));
                line.push(indent.clone(), SpanStyle::Normal);
                line.push(format!("{}: ", label), SpanStyle::Muted);
                line.push(value.clone(), SpanStyle::Normal);
                lines.push(line);
            }
            DetailLine::Text(text) => {
                for wrapped in wrap_words(text, inner_width) {
                    let mut line = Line::new(LineKind::Detail(position));
                    line.push(indent.clone(), SpanStyle::Normal);
                    line.push(wrapped, SpanStyle::Normal);
                    lines.push(line);
                }
            }
        }
    }

    let mut collapse = Line::new(LineKind::Detail(position));
    collapse.push(indent, SpanStyle::Normal);
    collapse.push("▲ Collapse", SpanStyle::Link);
    lines.push(collapse);
    lines
}
