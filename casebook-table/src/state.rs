//! Table state and the composed view.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, trace, warn};

use crate::cell::{CellContext, render_cell};
use crate::column::Column;
use crate::config::TableConfig;
use crate::error::TableError;
use crate::expansion::Expansion;
use crate::page::{PageMarker, PageSize, Pagination, page_window, paginate};
use crate::sort::{SortDirection, SortState, sort_indices};
use crate::value::{Row, RowKey};
use crate::view::{BodyRow, HeaderCell, PaginationBar, SortIndicator, TableView};

/// Unique identifier for a Table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Whether `key` identifies a row of the unpaginated dataset.
fn dataset_has_key(rows: &[Row], key_field: &str, key: &RowKey) -> bool {
    match key {
        RowKey::Position(pos) => *pos < rows.len(),
        _ => rows
            .iter()
            .any(|row| row.get(key_field).and_then(RowKey::of_value).as_ref() == Some(key)),
    }
}

/// Keys of every keyed row in the unpaginated dataset.
fn dataset_keys(rows: &[Row], key_field: &str) -> HashSet<RowKey> {
    rows.iter()
        .filter_map(|row| row.get(key_field).and_then(RowKey::of_value))
        .collect()
}

/// Internal state for the Table.
#[derive(Debug)]
pub(crate) struct TableInner {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub config: TableConfig,
    pub sort: Option<SortState>,
    /// Current 1-based page.
    pub page: usize,
    pub page_size: PageSize,
    pub expansion: Expansion,
    /// Row indices in sorted order.
    pub order: Vec<usize>,
}

impl TableInner {
    fn new(columns: Vec<Column>, config: TableConfig) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            page: 1,
            page_size: config.default_page_size,
            config,
            sort: None,
            expansion: Expansion::new(),
            order: Vec::new(),
        }
    }

    fn resort(&mut self) {
        self.order = match &self.sort {
            Some(sort) => sort_indices(&self.rows, &sort.key, sort.direction),
            None => (0..self.rows.len()).collect(),
        };
    }

    pub fn total_pages(&self) -> usize {
        crate::page::total_pages(self.rows.len(), self.page_size)
    }

    /// Reset to page 1 if the current page no longer exists.
    fn reset_page_if_out_of_range(&mut self) {
        let total = self.total_pages();
        if self.page > total {
            self.page = 1;
        }
    }

    /// Row indices shown on the current page, in display order.
    pub fn visible(&self) -> &[usize] {
        if self.config.paginated {
            paginate(&self.order, self.page, self.page_size).0
        } else {
            &self.order
        }
    }

    /// Row index displayed at `position` of the current page.
    pub fn row_index_at(&self, position: usize) -> Option<usize> {
        self.visible().get(position).copied()
    }

    pub fn key_at(&self, position: usize) -> Option<RowKey> {
        let index = self.row_index_at(position)?;
        Some(RowKey::resolve(
            &self.rows[index],
            &self.config.key_field,
            position,
        ))
    }

    fn contains_key(&self, key: &RowKey) -> bool {
        dataset_has_key(&self.rows, &self.config.key_field, key)
    }

    fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size, self.rows.len())
    }

    fn view(&self) -> TableView {
        let columns = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                label: column.header.clone(),
                width: column.width,
                align: column.align,
                sort: match &self.sort {
                    _ if !column.sortable => SortIndicator::None,
                    Some(sort) if sort.key == column.key => match sort.direction {
                        SortDirection::Ascending => SortIndicator::Ascending,
                        SortDirection::Descending => SortIndicator::Descending,
                    },
                    _ => SortIndicator::Inactive,
                },
                emphasis: column.emphasis,
            })
            .collect();

        let expandable = self.config.detail.is_some();
        let mut body = Vec::new();

        for (position, &index) in self.visible().iter().enumerate() {
            let row = &self.rows[index];
            let key = RowKey::resolve(row, &self.config.key_field, position);
            let expanded = self.expansion.is_expanded(&key);
            let ctx = CellContext {
                expanded,
                expandable,
            };
            let cells = self
                .columns
                .iter()
                .map(|column| render_cell(row, column, ctx))
                .collect();

            body.push(BodyRow::Data {
                key: key.clone(),
                index: position,
                cells,
                expanded,
                alternate: self.config.striped && position % 2 == 1,
            });

            if expanded && let Some(detail) = &self.config.detail {
                body.push(BodyRow::Detail {
                    key,
                    lines: detail.render(row),
                });
            }
        }

        if body.is_empty() {
            body.push(BodyRow::Empty {
                message: self.config.empty_message.clone(),
            });
        }

        let pagination = self.pagination();
        let pagination = (self.config.paginated && pagination.total_pages > 0).then(|| {
            PaginationBar {
                page: pagination.page,
                total_pages: pagination.total_pages,
                total_rows: pagination.total_rows,
                window: pagination.window(),
                page_size: pagination.page_size,
                has_prev: pagination.has_prev(),
                has_next: pagination.has_next(),
            }
        });

        TableView {
            columns,
            body,
            pagination,
            striped: self.config.striped,
        }
    }
}

/// A sortable, paginated table with expandable rows.
///
/// `Table` owns the interaction state (sort, page, page size, expanded
/// rows) while the caller owns the data: rows and columns are handed in
/// again whenever they change and the table keeps its state consistent
/// with them.
///
/// Clones share the same state.
#[derive(Debug, Clone)]
pub struct Table {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    pub(crate) inner: Arc<RwLock<TableInner>>,
    /// Dirty flag for re-render.
    pub(crate) dirty: Arc<AtomicBool>,
}

impl Table {
    /// Create an empty table.
    pub fn new(columns: Vec<Column>, config: TableConfig) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(columns, config))),
            dirty: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column>, config: TableConfig, rows: Vec<Row>) -> Self {
        let table = Self::new(columns, config);
        table.set_rows(rows);
        table
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Check if the table changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// The table's configuration.
    pub fn config(&self) -> TableConfig {
        self.inner
            .read()
            .map(|g| g.config.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Replace the rows.
    ///
    /// Re-applies the active sort, drops expanded keys whose rows are gone
    /// and resets to page 1 if the current page no longer exists. Supplying
    /// the rows the table already holds is a no-op and leaves it clean.
    pub fn set_rows(&self, rows: Vec<Row>) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.rows == rows {
                return;
            }

            let key_field = guard.config.key_field.clone();
            let unkeyed = rows.iter().filter(|row| row.is_blank(&key_field)).count();
            if unkeyed > 0 {
                warn!(
                    "{}: {} of {} rows lack key field '{}', expansion falls back to position",
                    self.id,
                    unkeyed,
                    rows.len(),
                    key_field
                );
            }

            guard.rows = rows;
            guard.resort();

            let inner = &mut *guard;
            let present = dataset_keys(&inner.rows, &inner.config.key_field);
            let row_count = inner.rows.len();
            let removed = inner.expansion.retain(|key| match key {
                RowKey::Position(pos) => *pos < row_count,
                _ => present.contains(key),
            });
            if !removed.is_empty() {
                debug!("{}: collapsed {} vanished rows", self.id, removed.len());
            }

            guard.reset_page_if_out_of_range();
            self.mark_dirty();
        }
    }

    /// Replace the columns.
    ///
    /// Clears the sort if its column is gone.
    pub fn set_columns(&self, columns: Vec<Column>) {
        if let Ok(mut guard) = self.inner.write() {
            let sort_column_gone = guard
                .sort
                .as_ref()
                .is_some_and(|s| !columns.iter().any(|c| c.key == s.key && c.sortable));
            guard.columns = columns;
            if sort_column_gone {
                debug!("{}: sort column removed, clearing sort", self.id);
                guard.sort = None;
                guard.page = 1;
                guard.resort();
            }
            self.mark_dirty();
        }
    }

    /// Get column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.inner.read().map(|g| g.columns.len()).unwrap_or(0)
    }

    /// Number of rows in the unpaginated dataset.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rows on the current page.
    pub fn visible_len(&self) -> usize {
        self.inner.read().map(|g| g.visible().len()).unwrap_or(0)
    }

    /// Row displayed at `position` of the current page.
    pub fn row(&self, position: usize) -> Option<Row> {
        self.inner.read().ok().and_then(|g| {
            g.row_index_at(position)
                .and_then(|index| g.rows.get(index).cloned())
        })
    }

    /// Key of the row displayed at `position` of the current page.
    pub fn key_at(&self, position: usize) -> Option<RowKey> {
        self.inner.read().ok().and_then(|g| g.key_at(position))
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Current sort state.
    pub fn sort_state(&self) -> Option<SortState> {
        self.inner.read().ok().and_then(|g| g.sort.clone())
    }

    /// Select `key` as the sort column.
    ///
    /// Selecting the active column flips the direction; any other column
    /// sorts ascending. Always returns to page 1.
    pub fn sort_by(&self, key: &str) -> Result<SortState, TableError> {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let column = guard
            .columns
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
        if !column.sortable {
            return Err(TableError::NotSortable(key.to_string()));
        }

        let next = SortState::next(guard.sort.as_ref(), key);
        debug!("{}: sort {} {:?}", self.id, next.key, next.direction);
        guard.sort = Some(next.clone());
        guard.page = 1;
        guard.resort();
        self.mark_dirty();
        Ok(next)
    }

    /// Return to input order.
    pub fn clear_sort(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.sort.is_some()
        {
            guard.sort = None;
            guard.page = 1;
            guard.resort();
            self.mark_dirty();
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.inner.read().map(|g| g.page).unwrap_or(1)
    }

    pub fn page_size(&self) -> PageSize {
        self.inner.read().map(|g| g.page_size).unwrap_or_default()
    }

    pub fn total_pages(&self) -> usize {
        self.inner.read().map(|g| g.total_pages()).unwrap_or(0)
    }

    /// Go to `page`, clamped into `[1, total_pages]`. Returns the page shown.
    pub fn set_page(&self, page: usize) -> usize {
        if let Ok(mut guard) = self.inner.write() {
            let clamped = page.clamp(1, guard.total_pages().max(1));
            if clamped != page {
                trace!("{}: page {} clamped to {}", self.id, page, clamped);
            }
            if clamped != guard.page {
                guard.page = clamped;
                self.mark_dirty();
            }
            return guard.page;
        }
        1
    }

    /// Advance one page. Returns `false` on the last page.
    pub fn next_page(&self) -> bool {
        let page = self.page();
        page < self.total_pages() && self.set_page(page + 1) != page
    }

    /// Go back one page. Returns `false` on the first page.
    pub fn prev_page(&self) -> bool {
        let page = self.page();
        page > 1 && self.set_page(page - 1) != page
    }

    /// Change the page size and return to page 1.
    pub fn set_page_size(&self, size: PageSize) {
        if let Ok(mut guard) = self.inner.write() {
            debug!("{}: page size {}", self.id, size.get());
            guard.page_size = size;
            guard.page = 1;
            self.mark_dirty();
        }
    }

    /// Pagination snapshot, `None` for non-paginated tables.
    pub fn pagination(&self) -> Option<Pagination> {
        self.inner
            .read()
            .ok()
            .filter(|g| g.config.paginated)
            .map(|g| g.pagination())
    }

    /// Compacted page-number window for the current page.
    pub fn page_window(&self) -> Vec<PageMarker> {
        self.inner
            .read()
            .map(|g| page_window(g.page, g.total_pages()))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    /// Flip the expansion of `key`. Returns the new state.
    ///
    /// Keys that match no row in the dataset are ignored.
    pub fn toggle_expanded(&self, key: &RowKey) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.contains_key(key) {
                debug!("{}: ignoring expansion of unknown row {}", self.id, key);
                return false;
            }
            let expanded = guard.expansion.toggle(key);
            debug!("{}: row {} expanded={}", self.id, key, expanded);
            self.mark_dirty();
            return expanded;
        }
        false
    }

    pub fn is_expanded(&self, key: &RowKey) -> bool {
        self.inner
            .read()
            .map(|g| g.expansion.is_expanded(key))
            .unwrap_or(false)
    }

    /// All expanded keys (sorted).
    pub fn expanded_keys(&self) -> Vec<RowKey> {
        self.inner
            .read()
            .map(|g| g.expansion.expanded())
            .unwrap_or_default()
    }

    /// Collapse every expanded row.
    pub fn collapse_all(&self) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.expansion.collapse_all().is_empty()
        {
            self.mark_dirty();
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Compose the current view: sort, paginate, render cells and
    /// interleave detail rows.
    pub fn view(&self) -> TableView {
        let guard = match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        trace!(
            "{}: view page {} of {} ({} rows)",
            self.id,
            guard.page,
            guard.total_pages(),
            guard.rows.len()
        );
        guard.view()
    }
}

