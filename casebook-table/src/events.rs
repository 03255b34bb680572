//! Click handling for the Table.
//!
//! Clicks are resolved innermost first: a header, a cell, then the row.
//! Interactive cells (links, actions, expansion toggles) consume the click
//! so the row's own handler never fires for them; anything else bubbles up
//! to [`Table::on_row_click`].

use log::debug;

use crate::cell::{CellContext, CellContent, render_cell};
use crate::column::{ColumnKind, RowHandler};
use crate::page::{PageMarker, PageSize};
use crate::state::Table;
use crate::value::{Row, RowKey};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// What a cell click resolved to, captured while the state lock is held.
enum CellTarget {
    Handler(RowHandler, Row),
    Toggle(RowKey),
    /// Interactive cell with nothing to invoke.
    Swallow,
    Bubble,
}

impl Table {
    /// Handle a click on the header of column `column`.
    pub fn on_header_click(&self, column: usize) -> EventResult {
        let Some(key) = self.columns().get(column).filter(|c| c.sortable).map(|c| c.key.clone())
        else {
            return EventResult::Ignored;
        };

        match self.sort_by(&key) {
            Ok(_) => EventResult::Consumed,
            Err(e) => {
                debug!("{}: header click ignored: {}", self.id(), e);
                EventResult::Ignored
            }
        }
    }

    /// Handle a click on the cell at `row` (position on the current page)
    /// and `column`, bubbling to the row when the cell is not interactive.
    pub fn on_cell_click(&self, row: usize, column: usize) -> EventResult {
        let target = self.cell_target(row, column);

        match target {
            Some(CellTarget::Handler(handler, row)) => {
                handler.call(&row);
                EventResult::Consumed
            }
            Some(CellTarget::Toggle(key)) => {
                self.toggle_expanded(&key);
                EventResult::Consumed
            }
            Some(CellTarget::Swallow) => EventResult::Consumed,
            Some(CellTarget::Bubble) => self.on_row_click(row),
            None => EventResult::Ignored,
        }
    }

    fn cell_target(&self, position: usize, column: usize) -> Option<CellTarget> {
        let guard = self.inner.read().ok()?;
        let index = guard.row_index_at(position)?;
        let row = &guard.rows[index];
        let column = guard.columns.get(column)?;
        let key = guard.key_at(position)?;

        let ctx = CellContext {
            expanded: guard.expansion.is_expanded(&key),
            expandable: guard.config.detail.is_some(),
        };

        // Custom renderers decide interactivity through the content they produce.
        let target = match render_cell(row, column, ctx) {
            CellContent::Link(_) => match &column.on_click {
                Some(handler) => CellTarget::Handler(handler.clone(), row.clone()),
                None => CellTarget::Swallow,
            },
            CellContent::Toggle { .. } => CellTarget::Toggle(key),
            // Individual icons are reached through `on_action_click`.
            CellContent::Actions(_) => CellTarget::Swallow,
            _ => CellTarget::Bubble,
        };
        Some(target)
    }

    /// Handle a click on action `action` of the actions cell at `row`/`column`.
    ///
    /// Never bubbles to the row handler.
    pub fn on_action_click(&self, row: usize, column: usize, action: usize) -> EventResult {
        let target = self.inner.read().ok().and_then(|g| {
            let index = g.row_index_at(row)?;
            let column = g.columns.get(column)?;
            if !matches!(column.kind, ColumnKind::Actions(_)) || column.render.is_some() {
                return None;
            }
            let action = column.actions().get(action)?;
            Some((action.on_click.clone(), g.rows[index].clone()))
        });

        match target {
            Some((handler, row)) => {
                handler.call(&row);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Handle a click on the data row at `row`.
    pub fn on_row_click(&self, row: usize) -> EventResult {
        let target = self.inner.read().ok().and_then(|g| {
            let handler = g.config.on_row_click.clone()?;
            let index = g.row_index_at(row)?;
            Some((handler, g.rows[index].clone()))
        });

        match target {
            Some((handler, row)) => {
                handler.call(&row);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Handle the collapse control inside the detail block of `row`.
    pub fn on_collapse_click(&self, row: usize) -> EventResult {
        match self.key_at(row) {
            Some(key) if self.is_expanded(&key) => {
                self.toggle_expanded(&key);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Handle a click on an entry of the page-number window.
    ///
    /// Out-of-range pages clamp; a click that leaves the page unchanged
    /// (including an ellipsis) is ignored.
    pub fn on_page_click(&self, marker: PageMarker) -> EventResult {
        let PageMarker::Page(page) = marker else {
            return EventResult::Ignored;
        };
        let before = self.page();
        if self.set_page(page) != before {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Handle the "Prev" control.
    pub fn on_prev_click(&self) -> EventResult {
        if self.prev_page() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Handle the "Next" control.
    pub fn on_next_click(&self) -> EventResult {
        if self.next_page() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Handle a page-size selection.
    pub fn on_page_size_select(&self, size: PageSize) -> EventResult {
        self.set_page_size(size);
        EventResult::Consumed
    }
}
