//! Column descriptors: which field a column reads and how it displays.

use std::fmt;
use std::sync::Arc;

use crate::cell::CellContent;
use crate::value::Row;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Callback invoked with the full row when a cell or row is activated.
#[derive(Clone)]
pub struct RowHandler(Arc<dyn Fn(&Row) + Send + Sync>);

impl RowHandler {
    pub fn new(f: impl Fn(&Row) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, row: &Row) {
        (self.0)(row)
    }
}

impl fmt::Debug for RowHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowHandler(..)")
    }
}

/// Custom cell render function, overriding kind-based rendering.
#[derive(Clone)]
pub struct CellRenderer(Arc<dyn Fn(&Row) -> CellContent + Send + Sync>);

impl CellRenderer {
    pub fn new(f: impl Fn(&Row) -> CellContent + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn render(&self, row: &Row) -> CellContent {
        (self.0)(row)
    }
}

impl fmt::Debug for CellRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellRenderer(..)")
    }
}

/// One line of an expanded detail block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    /// A labelled value, e.g. `Phone: 555-0100`.
    Field { label: String, value: String },
    /// Free text such as a message body.
    Text(String),
}

impl DetailLine {
    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        DetailLine::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        DetailLine::Text(text.into())
    }
}

/// Produces the detail block shown beneath an expanded row.
#[derive(Clone)]
pub struct DetailRenderer(Arc<dyn Fn(&Row) -> Vec<DetailLine> + Send + Sync>);

impl DetailRenderer {
    pub fn new(f: impl Fn(&Row) -> Vec<DetailLine> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn render(&self, row: &Row) -> Vec<DetailLine> {
        (self.0)(row)
    }
}

impl fmt::Debug for DetailRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DetailRenderer(..)")
    }
}

/// A small clickable affordance in an `Actions` column.
#[derive(Debug, Clone)]
pub struct Action {
    /// Icon shown in the cell.
    pub icon: String,
    /// Tooltip/label describing the action.
    pub title: String,
    /// Invoked with the row when the icon is clicked.
    pub on_click: RowHandler,
}

impl Action {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        on_click: impl Fn(&Row) + Send + Sync + 'static,
    ) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            on_click: RowHandler::new(on_click),
        }
    }
}

/// An icon shown in a `Badges` column when its flag field is truthy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Flag field read from the row.
    pub field: String,
    /// Icon shown when the flag is set.
    pub icon: String,
}

impl Badge {
    pub fn new(field: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            icon: icon.into(),
        }
    }
}

/// How a column renders its field by default.
#[derive(Debug, Clone, Default)]
pub enum ColumnKind {
    /// Raw value, placeholder when blank.
    #[default]
    Plain,
    /// Clickable reference to a related record; invokes the column's `on_click`.
    Link,
    /// Value wrapped in a status badge.
    Status,
    /// A fixed list of independently clickable icons.
    Actions(Vec<Action>),
    /// Value rendered as the expand/collapse toggle for the row.
    ExpandableLink,
    /// Icons for each truthy flag field.
    Badges(Vec<Badge>),
}

/// Column configuration.
///
/// Columns define which row field is read, the header text, layout hints
/// and how cells render and react to clicks. Width and alignment are opaque
/// to sorting and pagination.
///
/// # Examples
///
/// ```
/// use casebook_table::{Alignment, Column, ColumnKind};
///
/// let columns = vec![
///     Column::new("id", "INVOICE NO.", 14).kind(ColumnKind::Link).sortable(),
///     Column::new("firmName", "FIRM / COMPANY", 28).sortable(),
///     Column::new("amount", "AMOUNT", 14).align(Alignment::Right),
///     Column::new("status", "STATUS", 10).kind(ColumnKind::Status),
/// ];
/// assert!(columns[0].sortable);
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Field name read from each row.
    pub key: String,
    /// Column header text.
    pub header: String,
    /// Column width in terminal columns.
    pub width: u16,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Default rendering kind.
    pub kind: ColumnKind,
    /// Handler for `Link` cells.
    pub on_click: Option<RowHandler>,
    /// Custom renderer, checked before `kind`.
    pub render: Option<CellRenderer>,
    /// Render data cells emphasised (bold/accent).
    pub emphasis: bool,
}

impl Column {
    /// Create a new column reading `key`, with explicit width.
    pub fn new(key: impl Into<String>, header: impl Into<String>, width: u16) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width,
            align: Alignment::Left,
            sortable: false,
            kind: ColumnKind::Plain,
            on_click: None,
            render: None,
            emphasis: false,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the rendering kind.
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    /// Make this a link column invoking `f` with the row when activated.
    pub fn link(mut self, f: impl Fn(&Row) + Send + Sync + 'static) -> Self {
        self.kind = ColumnKind::Link;
        self.on_click = Some(RowHandler::new(f));
        self
    }

    /// Override rendering with a custom function.
    pub fn render(mut self, f: impl Fn(&Row) -> CellContent + Send + Sync + 'static) -> Self {
        self.render = Some(CellRenderer::new(f));
        self
    }

    /// Emphasise data cells.
    pub fn emphasis(mut self) -> Self {
        self.emphasis = true;
        self
    }

    /// Actions of an `Actions` column, empty for other kinds.
    pub fn actions(&self) -> &[Action] {
        match &self.kind {
            ColumnKind::Actions(actions) => actions,
            _ => &[],
        }
    }
}
