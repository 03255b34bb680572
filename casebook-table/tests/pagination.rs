use casebook_table::{
    Column, EventResult, PageMarker, PageSize, Pagination, Row, Table, TableConfig, page_window,
    paginate, total_pages,
};

fn numbered(count: usize) -> Vec<Row> {
    (1..=count)
        .map(|n| Row::new().set("id", format!("row-{}", n)).set("n", n))
        .collect()
}

fn table(count: usize) -> Table {
    Table::with_rows(
        vec![
            Column::new("id", "ID", 10).sortable(),
            Column::new("n", "N", 4).sortable(),
        ],
        TableConfig::default(),
        numbered(count),
    )
}

fn visible_ids(table: &Table) -> Vec<String> {
    table
        .view()
        .row_keys()
        .into_iter()
        .map(|key| key.to_string())
        .collect()
}

// ============================================================================
// Slicing
// ============================================================================

#[test]
fn test_twenty_three_rows_in_pages_of_ten() {
    let rows: Vec<usize> = (1..=23).collect();
    assert_eq!(total_pages(rows.len(), PageSize::Ten), 3);

    let (first, page) = paginate(&rows, 1, PageSize::Ten);
    assert_eq!(page, 1);
    assert_eq!(first, &rows[0..10]);

    let (last, page) = paginate(&rows, 3, PageSize::Ten);
    assert_eq!(page, 3);
    assert_eq!(last, &[21, 22, 23]);
}

#[test]
fn test_pages_concatenate_to_dataset_for_every_size() {
    for count in [0, 1, 5, 9, 23, 40, 41] {
        let rows: Vec<usize> = (0..count).collect();
        for size in PageSize::ALL {
            let pages = total_pages(count, size);
            let mut rebuilt = Vec::new();
            for page in 1..=pages {
                let (slice, _) = paginate(&rows, page, size);
                assert!(slice.len() <= size.get());
                rebuilt.extend_from_slice(slice);
            }
            assert_eq!(rebuilt, rows, "{} rows at {}", count, size);
        }
    }
}

#[test]
fn test_out_of_range_page_reads_first_page() {
    let rows: Vec<usize> = (1..=12).collect();
    let (slice, page) = paginate(&rows, 9, PageSize::Five);
    assert_eq!(page, 1);
    assert_eq!(slice, &[1, 2, 3, 4, 5]);
}

#[test]
fn test_pagination_row_range() {
    let p = Pagination::new(3, PageSize::Ten, 23);
    assert_eq!(p.total_pages, 3);
    assert_eq!(p.first_row(), 21);
    assert_eq!(p.last_row(), 23);
    assert!(p.has_prev());
    assert!(!p.has_next());
}

// ============================================================================
// Page window
// ============================================================================

#[test]
fn test_window_lists_all_pages_when_few() {
    assert_eq!(
        page_window(2, 4),
        (1..=4).map(PageMarker::Page).collect::<Vec<_>>()
    );
    assert!(page_window(1, 0).is_empty());
}

#[test]
fn test_window_near_the_ends() {
    use PageMarker::*;
    assert_eq!(
        page_window(1, 10),
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
    );
    assert_eq!(
        page_window(10, 10),
        vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
    );
}

#[test]
fn test_window_always_shows_first_last_and_current() {
    for total in 1..=30 {
        for current in 1..=total {
            let window = page_window(current, total);
            assert_eq!(window.first(), Some(&PageMarker::Page(1)));
            assert_eq!(window.last(), Some(&PageMarker::Page(total)));
            assert!(window.contains(&PageMarker::Page(current)));
            assert!(window.len() <= 7, "window {:?}", window);
        }
    }
}

// ============================================================================
// Table navigation
// ============================================================================

#[test]
fn test_next_and_prev_stop_at_bounds() {
    let table = table(23);
    assert!(!table.prev_page());
    assert!(table.next_page());
    assert!(table.next_page());
    assert_eq!(table.page(), 3);
    assert!(!table.next_page());
    assert_eq!(visible_ids(&table), vec!["row-21", "row-22", "row-23"]);
}

#[test]
fn test_set_page_clamps() {
    let table = table(23);
    assert_eq!(table.set_page(99), 3);
    assert_eq!(table.set_page(0), 1);
}

#[test]
fn test_page_window_click_jumps() {
    let table = table(23);
    assert_eq!(table.on_page_click(PageMarker::Page(3)), EventResult::Consumed);
    assert_eq!(table.page(), 3);
    assert_eq!(table.visible_len(), 3);
    assert_eq!(visible_ids(&table), vec!["row-21", "row-22", "row-23"]);

    // Current page and gaps do nothing.
    assert_eq!(table.on_page_click(PageMarker::Page(3)), EventResult::Ignored);
    assert_eq!(table.on_page_click(PageMarker::Ellipsis), EventResult::Ignored);
    assert_eq!(table.page(), 3);

    assert_eq!(table.on_page_click(PageMarker::Page(1)), EventResult::Consumed);
    assert_eq!(visible_ids(&table)[0], "row-1");
}

#[test]
fn test_page_click_beyond_last_clamps() {
    let table = table(23);
    assert_eq!(table.on_page_click(PageMarker::Page(9)), EventResult::Consumed);
    assert_eq!(table.page(), 3);
    assert_eq!(table.on_page_click(PageMarker::Page(9)), EventResult::Ignored);
}

#[test]
fn test_clicking_window_markers_from_middle() {
    let table = table(95);
    table.set_page(5);
    let window = table.page_window();
    assert!(window.contains(&PageMarker::Ellipsis));

    let last = window
        .iter()
        .rev()
        .find_map(|m| match m {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Ellipsis => None,
        })
        .unwrap();
    assert_eq!(table.on_page_click(PageMarker::Page(last)), EventResult::Consumed);
    assert_eq!(table.page(), 10);
    assert_eq!(table.visible_len(), 5);
}

#[test]
fn test_page_size_change_resets_to_first_page() {
    let table = table(23);
    table.set_page(3);
    table.set_page_size(PageSize::Five);
    assert_eq!(table.page(), 1);
    assert_eq!(table.total_pages(), 5);
    assert_eq!(table.visible_len(), 5);
}

#[test]
fn test_sort_resets_to_first_page() {
    let table = table(23);
    table.set_page(2);
    table.sort_by("n").unwrap();
    assert_eq!(table.page(), 1);
}

#[test]
fn test_shrinking_data_resets_out_of_range_page() {
    let table = table(23);
    table.set_page(3);
    table.set_rows(numbered(12));
    assert_eq!(table.page(), 1);

    // A page that still exists is kept.
    table.set_page(2);
    table.set_rows(numbered(15));
    assert_eq!(table.page(), 2);
}

#[test]
fn test_pagination_bar_hidden_without_rows() {
    let table = table(0);
    let view = table.view();
    assert!(view.pagination.is_none());
    assert_eq!(view.empty_message(), Some("No results found."));
}

#[test]
fn test_unpaginated_table_shows_every_row() {
    let table = Table::with_rows(
        vec![Column::new("n", "N", 4).sortable()],
        TableConfig::default().paginated(false),
        numbered(23),
    );
    let view = table.view();
    assert!(view.pagination.is_none());
    assert!(table.pagination().is_none());
    assert_eq!(view.data_rows().count(), 23);
}
