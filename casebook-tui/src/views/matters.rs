//! Matter lists.

use casebook_data::{Dataset, MatterStatus};
use casebook_table::{Column, ColumnKind, Row, Table};

use super::{TablePage, ViewContext, columns, table_config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Open,
    Closed,
}

impl Filter {
    fn admits(self, status: MatterStatus) -> bool {
        match self {
            Filter::All => true,
            Filter::Open => status == MatterStatus::Open,
            Filter::Closed => status == MatterStatus::Closed,
        }
    }
}

pub fn matter_columns(ctx: &ViewContext) -> Vec<Column> {
    vec![
        Column::new("name", "MATTER NAME", 34)
            .kind(ColumnKind::Link)
            .sortable()
            .link(ctx.outbox.open_matter("id")),
        Column::new("id", "MATTER ID", 12).sortable(),
        Column::new("client", "CLIENT", 20).sortable(),
        Column::new("areaOfLaw", "AREA OF LAW", 16).sortable(),
        columns::currency("amount", "AMOUNT"),
        Column::new("status", "STATUS", 8).kind(ColumnKind::Status).sortable(),
    ]
}

pub fn rows(data: &Dataset, filter: Filter) -> Vec<Row> {
    data.matters
        .iter()
        .filter(|matter| filter.admits(matter.status))
        .map(|matter| matter.to_row(data))
        .collect()
}

pub fn page(ctx: &ViewContext, filter: Filter) -> TablePage {
    let table = Table::new(matter_columns(ctx), table_config(ctx));
    TablePage::new(table, move |data| rows(data, filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_partition_matters() {
        let data = Dataset::load().unwrap();
        let open = rows(&data, Filter::Open).len();
        let closed = rows(&data, Filter::Closed).len();
        assert_eq!(open, 10);
        assert_eq!(open + closed, rows(&data, Filter::All).len());
    }
}
