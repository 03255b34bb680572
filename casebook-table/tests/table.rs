use std::sync::{Arc, Mutex};

use casebook_table::{
    Action, Badge, BodyRow, CellContent, Column, ColumnKind, DetailLine, EventResult, PageSize,
    Row, RowKey, SortDirection, SortIndicator, Table, TableConfig, TableError, Value,
};

/// Records the ids of the rows a handler was called with.
#[derive(Clone, Default)]
struct Clicks(Arc<Mutex<Vec<String>>>);

impl Clicks {
    fn handler(&self) -> impl Fn(&Row) + Send + Sync + 'static {
        let clicks = self.0.clone();
        move |row: &Row| {
            let id = row.get_str("id").unwrap_or_default().to_string();
            clicks.lock().unwrap().push(id);
        }
    }

    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

fn invoices(count: usize) -> Vec<Row> {
    (1..=count)
        .map(|n| {
            Row::new()
                .set("id", format!("inv-{}", n))
                .set("firm", format!("Firm {}", n % 3))
                .set("amount", (n * 100) as i64)
                .set("status", if n % 2 == 0 { "Approved" } else { "Pending" })
        })
        .collect()
}

fn detail(row: &Row) -> Vec<DetailLine> {
    vec![
        DetailLine::field("Firm", row.get_str("firm").unwrap_or_default()),
        DetailLine::text("Line items follow."),
    ]
}

struct Fixture {
    table: Table,
    row_clicks: Clicks,
    link_clicks: Clicks,
    action_clicks: Clicks,
}

fn fixture(rows: Vec<Row>) -> Fixture {
    let row_clicks = Clicks::default();
    let link_clicks = Clicks::default();
    let action_clicks = Clicks::default();

    let columns = vec![
        Column::new("id", "INVOICE NO.", 12)
            .kind(ColumnKind::ExpandableLink)
            .sortable(),
        Column::new("firm", "FIRM", 12)
            .sortable()
            .link(link_clicks.handler()),
        Column::new("amount", "AMOUNT", 8).sortable(),
        Column::new("status", "STATUS", 10).kind(ColumnKind::Status),
        Column::new("actions", "", 6).kind(ColumnKind::Actions(vec![
            Action::new("✎", "Edit", action_clicks.handler()),
            Action::new("⎘", "Copy", |_: &Row| {}),
        ])),
    ];
    let config = TableConfig::default()
        .on_row_click(row_clicks.handler())
        .detail(detail);

    Fixture {
        table: Table::with_rows(columns, config, rows),
        row_clicks,
        link_clicks,
        action_clicks,
    }
}

fn ids(table: &Table) -> Vec<String> {
    table.view().row_keys().iter().map(|k| k.to_string()).collect()
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_header_click_sorts_then_flips() {
    let f = fixture(vec![
        Row::new().set("id", "a").set("amount", 300),
        Row::new().set("id", "b").set("amount", 50),
        Row::new().set("id", "c").set("amount", 200),
    ]);

    assert_eq!(f.table.on_header_click(2), EventResult::Consumed);
    assert_eq!(f.table.view().column_text(2), vec!["50", "200", "300"]);

    f.table.on_header_click(2);
    assert_eq!(f.table.view().column_text(2), vec!["300", "200", "50"]);
}

#[test]
fn test_new_sort_column_starts_ascending() {
    let f = fixture(invoices(4));
    f.table.sort_by("amount").unwrap();
    f.table.sort_by("amount").unwrap();
    assert_eq!(
        f.table.sort_state().map(|s| s.direction),
        Some(SortDirection::Descending)
    );

    let state = f.table.sort_by("firm").unwrap();
    assert_eq!(state.key, "firm");
    assert_eq!(state.direction, SortDirection::Ascending);
}

#[test]
fn test_sort_rejects_unknown_and_unsortable_columns() {
    let f = fixture(invoices(2));
    assert_eq!(
        f.table.sort_by("nope"),
        Err(TableError::UnknownColumn("nope".into()))
    );
    assert_eq!(
        f.table.sort_by("status"),
        Err(TableError::NotSortable("status".into()))
    );
    assert_eq!(f.table.on_header_click(3), EventResult::Ignored);
    assert!(f.table.sort_state().is_none());
}

#[test]
fn test_header_indicators() {
    let f = fixture(invoices(2));
    f.table.sort_by("amount").unwrap();
    let sorts: Vec<_> = f.table.view().columns.iter().map(|c| c.sort).collect();
    assert_eq!(
        sorts,
        vec![
            SortIndicator::Inactive,
            SortIndicator::Inactive,
            SortIndicator::Ascending,
            SortIndicator::None,
            SortIndicator::None,
        ]
    );
}

#[test]
fn test_removing_sort_column_clears_sort() {
    let f = fixture(invoices(3));
    f.table.sort_by("amount").unwrap();
    f.table.sort_by("amount").unwrap();

    f.table.set_columns(vec![Column::new("id", "ID", 10)]);
    assert!(f.table.sort_state().is_none());
    assert_eq!(ids(&f.table), vec!["inv-1", "inv-2", "inv-3"]);
}

#[test]
fn test_new_rows_keep_active_sort() {
    let f = fixture(invoices(3));
    f.table.sort_by("amount").unwrap();
    f.table.sort_by("amount").unwrap();

    f.table.set_rows(invoices(5));
    assert_eq!(ids(&f.table), vec!["inv-5", "inv-4", "inv-3", "inv-2", "inv-1"]);
}

// ============================================================================
// Expansion
// ============================================================================

#[test]
fn test_expanded_row_survives_page_size_change() {
    let f = fixture(invoices(10));
    let key = RowKey::from("inv-7");

    assert!(f.table.toggle_expanded(&key));
    assert!(f.table.view().detail(&key).is_some());

    // inv-7 moves to page 2.
    f.table.set_page_size(PageSize::Five);
    assert!(f.table.is_expanded(&key));
    assert!(f.table.view().detail(&key).is_none());

    f.table.set_page(2);
    let view = f.table.view();
    assert_eq!(
        view.detail(&key),
        Some(detail(&invoices(10)[6]).as_slice())
    );
}

#[test]
fn test_detail_row_follows_its_data_row() {
    let f = fixture(invoices(3));
    f.table.toggle_expanded(&RowKey::from("inv-2"));

    let body = f.table.view().body;
    assert_eq!(body.len(), 4);
    assert!(matches!(&body[1], BodyRow::Data { key, expanded: true, .. } if key == &RowKey::from("inv-2")));
    assert!(matches!(&body[2], BodyRow::Detail { key, .. } if key == &RowKey::from("inv-2")));
}

#[test]
fn test_expansion_survives_sorting() {
    let f = fixture(invoices(3));
    f.table.toggle_expanded(&RowKey::from("inv-1"));
    f.table.sort_by("amount").unwrap();
    f.table.sort_by("amount").unwrap();

    let view = f.table.view();
    assert_eq!(view.row_keys().last(), Some(&RowKey::from("inv-1")));
    assert!(view.detail(&RowKey::from("inv-1")).is_some());
}

#[test]
fn test_expansion_is_independent_per_row() {
    let f = fixture(invoices(3));
    f.table.toggle_expanded(&RowKey::from("inv-1"));
    f.table.toggle_expanded(&RowKey::from("inv-3"));
    f.table.toggle_expanded(&RowKey::from("inv-1"));
    assert_eq!(f.table.expanded_keys(), vec![RowKey::from("inv-3")]);
}

#[test]
fn test_unknown_key_is_not_expanded() {
    let f = fixture(invoices(3));
    assert!(!f.table.toggle_expanded(&RowKey::from("inv-99")));
    assert!(f.table.expanded_keys().is_empty());
}

#[test]
fn test_vanished_rows_are_collapsed() {
    let f = fixture(invoices(5));
    f.table.toggle_expanded(&RowKey::from("inv-5"));
    f.table.set_rows(invoices(3));
    assert!(f.table.expanded_keys().is_empty());
}

#[test]
fn test_number_and_text_keys_expand_separately() {
    let rows = vec![
        Row::new().set("id", 7).set("firm", "Numeric"),
        Row::new().set("id", "7").set("firm", "Textual"),
    ];
    let f = fixture(rows);
    let text_key = f.table.key_at(1).unwrap();
    assert_ne!(f.table.key_at(0), Some(text_key.clone()));

    assert!(f.table.toggle_expanded(&text_key));
    let details = f
        .table
        .view()
        .body
        .iter()
        .filter(|row| matches!(row, BodyRow::Detail { .. }))
        .count();
    assert_eq!(details, 1);
    assert_eq!(f.table.expanded_keys(), vec![RowKey::from("7")]);
}

#[test]
fn test_collapse_all() {
    let f = fixture(invoices(4));
    f.table.toggle_expanded(&RowKey::from("inv-1"));
    f.table.toggle_expanded(&RowKey::from("inv-4"));
    f.table.clear_dirty();

    f.table.collapse_all();
    assert!(f.table.expanded_keys().is_empty());
    assert!(f.table.is_dirty());

    f.table.clear_dirty();
    f.table.collapse_all();
    assert!(!f.table.is_dirty(), "nothing was expanded");
}

#[test]
fn test_toggle_cell_and_collapse_control() {
    let f = fixture(invoices(3));

    assert_eq!(f.table.on_cell_click(0, 0), EventResult::Consumed);
    assert!(f.table.is_expanded(&RowKey::from("inv-1")));
    let view = f.table.view();
    let (_, cells) = view.data_rows().next().unwrap();
    assert_eq!(
        cells[0],
        CellContent::Toggle {
            label: "inv-1".into(),
            expanded: true
        }
    );

    assert_eq!(f.table.on_collapse_click(0), EventResult::Consumed);
    assert!(!f.table.is_expanded(&RowKey::from("inv-1")));
    assert_eq!(f.table.on_collapse_click(0), EventResult::Ignored);
    assert!(f.row_clicks.take().is_empty());
}

#[test]
fn test_without_detail_rows_never_expand() {
    let table = Table::with_rows(
        vec![Column::new("id", "ID", 8).kind(ColumnKind::ExpandableLink)],
        TableConfig::default(),
        invoices(2),
    );
    let view = table.view();
    let (_, cells) = view.data_rows().next().unwrap();
    assert_eq!(cells[0], CellContent::text("inv-1"));
    assert!(table.toggle_expanded(&RowKey::from("inv-1")));
    assert!(table.view().detail(&RowKey::from("inv-1")).is_none());
}

#[test]
fn test_rows_without_key_fall_back_to_position() {
    let rows = vec![
        Row::new().set("amount", 10),
        Row::new().set("amount", 20),
    ];
    let f = fixture(rows);
    assert_eq!(f.table.key_at(1), Some(RowKey::Position(1)));

    f.table.on_cell_click(1, 0);
    let view = f.table.view();
    assert!(view.detail(&RowKey::Position(1)).is_some());
}

// ============================================================================
// Click containment
// ============================================================================

#[test]
fn test_link_click_does_not_fire_row_click() {
    let f = fixture(invoices(2));
    assert_eq!(f.table.on_cell_click(1, 1), EventResult::Consumed);
    assert_eq!(f.link_clicks.take(), vec!["inv-2"]);
    assert!(f.row_clicks.take().is_empty());
}

#[test]
fn test_action_click_does_not_fire_row_click() {
    let f = fixture(invoices(2));
    assert_eq!(f.table.on_action_click(0, 4, 0), EventResult::Consumed);
    assert_eq!(f.action_clicks.take(), vec!["inv-1"]);

    // Second action has its own handler; the cell itself swallows clicks.
    assert_eq!(f.table.on_action_click(0, 4, 1), EventResult::Consumed);
    assert_eq!(f.table.on_cell_click(0, 4), EventResult::Consumed);
    assert!(f.action_clicks.take().is_empty());
    assert!(f.row_clicks.take().is_empty());

    assert_eq!(f.table.on_action_click(0, 4, 9), EventResult::Ignored);
    assert_eq!(f.table.on_action_click(0, 2, 0), EventResult::Ignored);
}

#[test]
fn test_plain_cell_click_bubbles_to_row() {
    let f = fixture(invoices(2));
    assert_eq!(f.table.on_cell_click(1, 2), EventResult::Consumed);
    assert_eq!(f.table.on_cell_click(0, 3), EventResult::Consumed);
    assert_eq!(f.row_clicks.take(), vec!["inv-2", "inv-1"]);
    assert!(f.link_clicks.take().is_empty());
}

#[test]
fn test_blank_link_bubbles_to_row() {
    let f = fixture(vec![Row::new().set("id", "inv-1")]);
    let view = f.table.view();
    let (_, cells) = view.data_rows().next().unwrap();
    assert_eq!(cells[1], CellContent::Placeholder);

    f.table.on_cell_click(0, 1);
    assert!(f.link_clicks.take().is_empty());
    assert_eq!(f.row_clicks.take(), vec!["inv-1"]);
}

#[test]
fn test_clicks_outside_page_are_ignored() {
    let f = fixture(invoices(2));
    assert_eq!(f.table.on_cell_click(5, 0), EventResult::Ignored);
    assert_eq!(f.table.on_row_click(5), EventResult::Ignored);
    assert_eq!(f.table.on_header_click(42), EventResult::Ignored);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_cells_render_by_kind() {
    let badges = Column::new("flags", "", 6).kind(ColumnKind::Badges(vec![
        Badge::new("email", "✉"),
        Badge::new("star", "★"),
    ]));
    let table = Table::with_rows(
        vec![
            Column::new("status", "STATUS", 10).kind(ColumnKind::Status),
            Column::new("note", "NOTE", 10),
            badges,
        ],
        TableConfig::default(),
        vec![
            Row::new()
                .set("id", "m-1")
                .set("status", "Open")
                .set("note", Value::Null)
                .set("email", true)
                .set("star", false),
        ],
    );

    let view = table.view();
    let (_, cells) = view.data_rows().next().unwrap();
    assert_eq!(cells[0], CellContent::Status("Open".into()));
    assert_eq!(cells[1], CellContent::Placeholder);
    assert_eq!(cells[2], CellContent::Badges(vec!["✉".into()]));
}

#[test]
fn test_custom_renderer_wins() {
    let table = Table::with_rows(
        vec![Column::new("amount", "AMOUNT", 10).render(|row| {
            CellContent::text(format!("${}", row.get("amount").map(|v| v.to_string()).unwrap_or_default()))
        })],
        TableConfig::default(),
        vec![Row::new().set("id", "a").set("amount", 1250)],
    );
    assert_eq!(table.view().column_text(0), vec!["$1250"]);
}

#[test]
fn test_empty_table_shows_message() {
    let table = Table::new(
        vec![Column::new("id", "ID", 10)],
        TableConfig::default().empty_message("No invoices."),
    );
    let view = table.view();
    assert_eq!(view.empty_message(), Some("No invoices."));
    assert_eq!(view.data_rows().count(), 0);
    assert!(view.pagination.is_none());
}

#[test]
fn test_striped_rows_alternate() {
    let table = Table::with_rows(
        vec![Column::new("id", "ID", 10)],
        TableConfig::default().striped(),
        invoices(3),
    );
    let shading: Vec<_> = table
        .view()
        .body
        .iter()
        .filter_map(|row| match row {
            BodyRow::Data { alternate, .. } => Some(*alternate),
            _ => None,
        })
        .collect();
    assert_eq!(shading, vec![false, true, false]);
}

#[test]
fn test_state_changes_mark_dirty() {
    let f = fixture(invoices(12));
    f.table.clear_dirty();
    f.table.next_page();
    assert!(f.table.is_dirty());

    f.table.clear_dirty();
    f.table.next_page();
    assert!(!f.table.is_dirty(), "already on the last page");
}

#[test]
fn test_resupplying_same_rows_stays_clean() {
    let f = fixture(invoices(12));
    f.table.sort_by("amount").unwrap();
    f.table.set_page(2);
    f.table.toggle_expanded(&RowKey::from("inv-11"));
    f.table.clear_dirty();

    f.table.set_rows(invoices(12));
    assert!(!f.table.is_dirty());
    assert_eq!(f.table.page(), 2);
    assert!(f.table.is_expanded(&RowKey::from("inv-11")));

    f.table.set_rows(invoices(13));
    assert!(f.table.is_dirty());
    assert_eq!(f.table.len(), 13);
}

#[test]
fn test_clones_share_state() {
    let f = fixture(invoices(12));
    let other = f.table.clone();
    other.set_page(2);
    assert_eq!(f.table.page(), 2);
    assert_eq!(f.table.id(), other.id());
}
