//! Message lists.

use casebook_data::{Dataset, TextRecord};
use casebook_table::{Column, ColumnKind, DetailLine, PLACEHOLDER, Row, Table};

use super::{TablePage, ViewContext, columns, table_config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    /// Neither matter nor invoice attached.
    Team,
    Invoice,
    Matter,
}

impl Filter {
    fn admits(self, message: &TextRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Team => message.is_team_message(),
            Filter::Invoice => message.invoice_id.is_some(),
            Filter::Matter => message.matter_id.is_some(),
        }
    }
}

pub fn message_columns(ctx: &ViewContext) -> Vec<Column> {
    vec![
        columns::date("date", "DATE"),
        Column::new("subject", "SUBJECT", 26)
            .kind(ColumnKind::ExpandableLink)
            .sortable(),
        Column::new("employeeName", "FROM", 18).sortable(),
        Column::new("employeeType", "TYPE", 10).sortable(),
        Column::new("matterId", "MATTER", 12)
            .kind(ColumnKind::Link)
            .emphasis()
            .link(ctx.outbox.open_matter("matterId")),
        Column::new("invoiceId", "INVOICE", 11)
            .kind(ColumnKind::Link)
            .link(ctx.outbox.open_invoice("invoiceId")),
    ]
}

/// Recipient and body beneath an expanded message.
pub fn message_detail(row: &Row) -> Vec<DetailLine> {
    vec![
        DetailLine::field("To", row.get_str("recipientName").unwrap_or(PLACEHOLDER)),
        DetailLine::field("Message Body", ""),
        DetailLine::text(row.get_str("body").unwrap_or_default()),
    ]
}

pub fn rows(data: &Dataset, filter: Filter) -> Vec<Row> {
    data.messages
        .iter()
        .filter(|message| filter.admits(message))
        .map(|message| message.to_row(data))
        .collect()
}

pub fn page(ctx: &ViewContext, filter: Filter) -> TablePage {
    let config = table_config(ctx).detail(message_detail);
    let table = Table::new(message_columns(ctx), config);
    TablePage::new(table, move |data| rows(data, filter))
}
