//! Tabular view engine for the casebook dashboard.
//!
//! A [`Table`] takes schema-less [`Row`]s and a list of [`Column`]s and
//! produces a sorted, paginated, row-expandable [`TableView`]:
//!
//! - Sorting by any sortable column, nulls always last
//! - Pagination over a fixed set of page sizes with a compacted page window
//! - Inline detail rows, tracked by row identity across sorts and pages
//! - Kind-driven cell rendering with click containment for links and actions
//!
//! # Example
//!
//! ```
//! use casebook_table::{Column, ColumnKind, Row, Table, TableConfig};
//!
//! let columns = vec![
//!     Column::new("id", "INVOICE NO.", 14).kind(ColumnKind::Link).sortable(),
//!     Column::new("amount", "AMOUNT", 12).sortable(),
//!     Column::new("status", "STATUS", 10).kind(ColumnKind::Status),
//! ];
//!
//! let table = Table::new(columns, TableConfig::default());
//! table.set_rows(vec![
//!     Row::new().set("id", "INV-1").set("amount", 300).set("status", "Pending"),
//!     Row::new().set("id", "INV-2").set("amount", 50).set("status", "Approved"),
//! ]);
//!
//! table.sort_by("amount").unwrap();
//! let view = table.view();
//! assert_eq!(view.data_rows().count(), 2);
//! ```

pub mod cell;
pub mod column;
pub mod config;
pub mod error;
pub mod events;
pub mod expansion;
pub mod page;
pub mod render;
pub mod sort;
pub mod text;
pub mod value;
pub mod view;

mod state;

pub use cell::{ActionIcon, CellContent, CellContext, PLACEHOLDER, render_cell};
pub use column::{
    Action, Alignment, Badge, CellRenderer, Column, ColumnKind, DetailLine, DetailRenderer,
    RowHandler,
};
pub use config::TableConfig;
pub use error::TableError;
pub use events::EventResult;
pub use expansion::Expansion;
pub use page::{PageMarker, PageSize, Pagination, page_window, paginate, total_pages};
pub use sort::{SortDirection, SortState, compare_values, sort, sort_indices};
pub use state::{Table, TableId};
pub use value::{Row, RowKey, Value};
pub use view::{BodyRow, HeaderCell, PaginationBar, SortIndicator, TableView};
