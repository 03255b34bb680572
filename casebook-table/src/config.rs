//! Table configuration.

use crate::column::{DetailLine, DetailRenderer, RowHandler};
use crate::page::PageSize;
use crate::value::Row;

/// Per-table configuration.
///
/// Fixed for the lifetime of a [`Table`](crate::Table); rows and columns
/// change per render, configuration does not.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Row field used as the row's identity.
    pub key_field: String,

    /// Alternate row shading (visual only).
    pub striped: bool,

    /// Message shown when there are no rows.
    pub empty_message: String,

    /// Show one page at a time. When false every sorted row is shown.
    pub paginated: bool,

    /// Page size a fresh table starts with.
    pub default_page_size: PageSize,

    /// Invoked when a row is clicked outside any interactive cell.
    pub on_row_click: Option<RowHandler>,

    /// Content shown beneath expanded rows. Without it rows cannot expand.
    pub detail: Option<DetailRenderer>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            key_field: "id".to_string(),
            striped: false,
            empty_message: "No results found.".to_string(),
            paginated: true,
            default_page_size: PageSize::default(),
            on_row_click: None,
            detail: None,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key field.
    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = field.into();
        self
    }

    /// Enable striped rows.
    pub fn striped(mut self) -> Self {
        self.striped = true;
        self
    }

    /// Set the empty-state message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Enable or disable pagination.
    pub fn paginated(mut self, paginated: bool) -> Self {
        self.paginated = paginated;
        self
    }

    /// Set the initial page size.
    pub fn default_page_size(mut self, size: PageSize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Set the row click handler.
    pub fn on_row_click(mut self, f: impl Fn(&Row) + Send + Sync + 'static) -> Self {
        self.on_row_click = Some(RowHandler::new(f));
        self
    }

    /// Set the expanded detail renderer.
    pub fn detail(mut self, f: impl Fn(&Row) -> Vec<DetailLine> + Send + Sync + 'static) -> Self {
        self.detail = Some(DetailRenderer::new(f));
        self
    }
}
