//! Cell renderer: turns a row field into displayable content.

use crate::column::{Column, ColumnKind};
use crate::value::Row;

/// Shown in place of null, absent or empty values.
pub const PLACEHOLDER: &str = "-";

const EXPANDED_INDICATOR: &str = "▼";
const COLLAPSED_INDICATOR: &str = "▶";

/// One icon of an actions cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionIcon {
    pub icon: String,
    pub title: String,
}

/// Rendered content of one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Raw field text.
    Text(String),
    /// Stand-in for a blank value.
    Placeholder,
    /// Value shown as a status badge.
    Status(String),
    /// Clickable reference to a related record.
    Link(String),
    /// Expand/collapse toggle with its direction indicator.
    Toggle { label: String, expanded: bool },
    /// Independently clickable action icons.
    Actions(Vec<ActionIcon>),
    /// Icons for set flags.
    Badges(Vec<String>),
}

impl CellContent {
    pub fn text(text: impl Into<String>) -> Self {
        CellContent::Text(text.into())
    }

    /// Whether clicking this cell is handled by the cell itself.
    ///
    /// Clicks on interactive cells never reach the row's click handler.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            CellContent::Link(_) | CellContent::Toggle { .. } | CellContent::Actions(_)
        )
    }

    /// Plain-text rendition.
    pub fn plain_text(&self) -> String {
        match self {
            CellContent::Text(text) | CellContent::Link(text) => text.clone(),
            CellContent::Placeholder => PLACEHOLDER.to_string(),
            CellContent::Status(label) => format!("[{}]", label),
            CellContent::Toggle { label, expanded } => {
                let indicator = if *expanded {
                    EXPANDED_INDICATOR
                } else {
                    COLLAPSED_INDICATOR
                };
                format!("{} {}", label, indicator)
            }
            CellContent::Actions(icons) => icons
                .iter()
                .map(|a| a.icon.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            CellContent::Badges(icons) => icons.join(" "),
        }
    }
}

/// Per-row state the renderer needs beyond the row itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellContext {
    /// The row is currently expanded.
    pub expanded: bool,
    /// The table can show detail rows at all.
    pub expandable: bool,
}

/// Render the `column` cell of `row`.
///
/// A custom renderer wins outright; otherwise the column kind decides.
/// Expandable columns only render a toggle when the table has detail
/// content to show, and fall back to plain text otherwise.
pub fn render_cell(row: &Row, column: &Column, ctx: CellContext) -> CellContent {
    if let Some(render) = &column.render {
        return render.render(row);
    }

    let value = row.get(&column.key).filter(|v| !v.is_blank());

    match &column.kind {
        ColumnKind::Status => match value {
            Some(v) => CellContent::Status(v.to_string()),
            None => CellContent::Placeholder,
        },
        ColumnKind::ExpandableLink if ctx.expandable => CellContent::Toggle {
            label: value.map(|v| v.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string()),
            expanded: ctx.expanded,
        },
        ColumnKind::Link => match value {
            Some(v) => CellContent::Link(v.to_string()),
            None => CellContent::Placeholder,
        },
        ColumnKind::Actions(actions) => CellContent::Actions(
            actions
                .iter()
                .map(|a| ActionIcon {
                    icon: a.icon.clone(),
                    title: a.title.clone(),
                })
                .collect(),
        ),
        ColumnKind::Badges(badges) => CellContent::Badges(
            badges
                .iter()
                .filter(|b| row.get(&b.field).is_some_and(|v| v.is_truthy()))
                .map(|b| b.icon.clone())
                .collect(),
        ),
        ColumnKind::Plain | ColumnKind::ExpandableLink => match value {
            Some(v) => CellContent::Text(v.to_string()),
            None => CellContent::Placeholder,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Action, Badge};

    fn row() -> Row {
        Row::new()
            .set("id", "INV-1")
            .set("status", "Pending")
            .set("note", "")
            .set("email", true)
            .set("star", false)
    }

    #[test]
    fn test_blank_values_render_placeholder() {
        let ctx = CellContext::default();
        for key in ["note", "missing"] {
            let column = Column::new(key, "X", 10);
            assert_eq!(render_cell(&row(), &column, ctx), CellContent::Placeholder);
        }
    }

    #[test]
    fn test_custom_render_wins_over_kind() {
        let column = Column::new("status", "STATUS", 10)
            .kind(ColumnKind::Status)
            .render(|r| CellContent::text(format!("<{}>", r.get_str("id").unwrap_or("?"))));
        assert_eq!(
            render_cell(&row(), &column, CellContext::default()),
            CellContent::text("<INV-1>")
        );
    }

    #[test]
    fn test_status_badge() {
        let column = Column::new("status", "STATUS", 10).kind(ColumnKind::Status);
        let content = render_cell(&row(), &column, CellContext::default());
        assert_eq!(content, CellContent::Status("Pending".into()));
        assert_eq!(content.plain_text(), "[Pending]");
    }

    #[test]
    fn test_expandable_link_needs_detail_content() {
        let column = Column::new("id", "ID", 10).kind(ColumnKind::ExpandableLink);

        let plain = render_cell(&row(), &column, CellContext::default());
        assert_eq!(plain, CellContent::text("INV-1"));

        let ctx = CellContext {
            expanded: true,
            expandable: true,
        };
        let toggle = render_cell(&row(), &column, ctx);
        assert_eq!(toggle.plain_text(), "INV-1 ▼");
        assert!(toggle.is_interactive());
    }

    #[test]
    fn test_actions_and_badges() {
        let actions = Column::new("actions", "", 6).kind(ColumnKind::Actions(vec![
            Action::new("✎", "Edit", |_| {}),
            Action::new("✕", "Delete", |_| {}),
        ]));
        assert_eq!(
            render_cell(&row(), &actions, CellContext::default()).plain_text(),
            "✎ ✕"
        );

        let badges = Column::new("badges", "BADGES", 10).kind(ColumnKind::Badges(vec![
            Badge::new("email", "✉"),
            Badge::new("star", "★"),
        ]));
        assert_eq!(
            render_cell(&row(), &badges, CellContext::default()),
            CellContent::Badges(vec!["✉".into()])
        );
    }

    #[test]
    fn test_blank_link_is_not_interactive() {
        let column = Column::new("matterId", "MATTER", 12).link(|_| {});
        let content = render_cell(&row(), &column, CellContext::default());
        assert_eq!(content, CellContent::Placeholder);
        assert!(!content.is_interactive());
    }
}
