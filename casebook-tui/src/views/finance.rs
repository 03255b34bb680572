//! Invoice lists.

use casebook_data::{Dataset, InvoiceStatus};
use casebook_table::{Action, Column, ColumnKind, Row, Table};

use super::{TablePage, ViewContext, columns, table_config};

pub fn invoice_columns(ctx: &ViewContext) -> Vec<Column> {
    vec![
        Column::new("id", "INVOICE NO.", 11)
            .kind(ColumnKind::Link)
            .sortable()
            .link(ctx.outbox.open_invoice("id")),
        Column::new("firmName", "FIRM / COMPANY", 24).sortable(),
        columns::date("date", "INVOICE DATE"),
        Column::new("matterDisplay", "MATTER", 30)
            .kind(ColumnKind::Link)
            .sortable()
            .link(ctx.outbox.open_matter("matterId")),
        columns::currency("amount", "AMOUNT"),
        Column::new("status", "STATUS", 10).kind(ColumnKind::Status).sortable(),
        Column::new("actions", "", 5).kind(ColumnKind::Actions(vec![
            Action::new("⊙", "View invoice", ctx.outbox.open_invoice("id")),
            Action::new("§", "Open matter", ctx.outbox.open_matter("matterId")),
        ])),
    ]
}

pub fn rows(data: &Dataset, status: Option<InvoiceStatus>) -> Vec<Row> {
    data.invoices
        .iter()
        .filter(|invoice| status.is_none_or(|s| invoice.status == s))
        .map(|invoice| invoice.to_row(data))
        .collect()
}

pub fn page(ctx: &ViewContext, status: Option<InvoiceStatus>) -> TablePage {
    let table = Table::new(invoice_columns(ctx), table_config(ctx));
    TablePage::new(table, move |data| rows(data, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter() {
        let data = Dataset::load().unwrap();
        assert_eq!(rows(&data, None).len(), 24);
        let rejected = rows(&data, Some(InvoiceStatus::Rejected));
        assert_eq!(rejected.len(), 4);
        assert!(rejected.iter().all(|r| r.get_str("status") == Some("Rejected")));
    }
}
