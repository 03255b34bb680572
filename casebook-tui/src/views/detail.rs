//! Invoice and matter detail views, opened from links and actions.

use casebook_data::amounts::matter_total;
use casebook_data::format::{format_currency, format_date};
use casebook_data::{Dataset, Invoice, Matter, invoice_amounts};
use casebook_table::{Column, ColumnKind, Row, Table};
use chrono::NaiveDate;

use super::{ReportLine, TablePage, ViewContext, columns, table_config};

/// A record summary above a table of related rows.
#[derive(Debug)]
pub struct DetailView {
    pub title: String,
    pub summary: Vec<ReportLine>,
    pub page: TablePage,
}

fn field(label: &str, value: impl AsRef<str>) -> ReportLine {
    ReportLine::item(format!("{:<18} {}", format!("{}:", label), value.as_ref()))
}

fn date_field(label: &str, date: Option<NaiveDate>) -> Option<ReportLine> {
    date.map(|d| field(label, format_date(d)))
}

pub fn invoice_detail(id: &str, ctx: &ViewContext) -> Option<DetailView> {
    let invoice = ctx.data.invoice(id)?;
    let summary = invoice_summary(invoice, &ctx.data);

    let columns = vec![
        Column::new("id", "CODE", 6).sortable(),
        Column::new("name", "NAME", 34).sortable().emphasis(),
        Column::new("type", "TYPE", 13).sortable(),
        columns::currency("rate", "AMOUNT"),
    ];
    let config = table_config(ctx).empty_message("No line items on this invoice.");
    let invoice_id = invoice.id.clone();
    let page = TablePage::new(Table::new(columns, config), move |data| line_item_rows(data, &invoice_id));

    Some(DetailView {
        title: format!("DETAILED INVOICE: {}", invoice.id),
        summary,
        page,
    })
}

fn invoice_summary(invoice: &Invoice, data: &Dataset) -> Vec<ReportLine> {
    let amounts = invoice_amounts(invoice, &data.line_items);
    let phone = invoice
        .entity_id
        .as_deref()
        .and_then(|id| data.entity(id))
        .and_then(|e| e.phone.as_deref())
        .unwrap_or("-");

    vec![
        field("Firm", invoice.firm_name(data)),
        field("Phone", phone),
        field("Matter", invoice.matter_display()),
        field("Invoice date", format_date(invoice.date)),
        field("Status", invoice.status.as_str()),
        field("Total amount", format_currency(invoice.amount)),
        field("Original amount", format_currency(invoice.original_amount)),
        field("Fees", format_currency(amounts.fees)),
        field("Disbursements", format_currency(amounts.disbursements)),
        field("Adjustment", format_currency(amounts.adjustment)),
        field("Messages", data.messages_for_invoice(&invoice.id).count().to_string()),
    ]
}

fn line_item_rows(data: &Dataset, invoice_id: &str) -> Vec<Row> {
    let Some(invoice) = data.invoice(invoice_id) else {
        return Vec::new();
    };
    invoice_amounts(invoice, &data.line_items)
        .line_items
        .into_iter()
        .map(|item| item.to_row())
        .collect()
}

pub fn matter_detail(id: &str, ctx: &ViewContext) -> Option<DetailView> {
    let matter = ctx.data.matter(id)?;
    let summary = matter_summary(matter, &ctx.data);

    let columns = vec![
        Column::new("id", "INVOICE NO.", 11)
            .kind(ColumnKind::Link)
            .sortable()
            .link(ctx.outbox.open_invoice("id")),
        Column::new("firmName", "FIRM / COMPANY", 24).sortable(),
        columns::date("date", "INVOICE DATE"),
        columns::currency("amount", "AMOUNT"),
        Column::new("status", "STATUS", 10).kind(ColumnKind::Status).sortable(),
    ];
    let config = table_config(ctx).empty_message("No invoices billed to this matter.");
    let matter_id = matter.id.clone();
    let page = TablePage::new(Table::new(columns, config), move |data| {
        data.invoices_for_matter(&matter_id)
            .map(|invoice| invoice.to_row(data))
            .collect()
    });

    Some(DetailView {
        title: format!("{}  {}", matter.id, matter.name),
        summary,
        page,
    })
}

fn matter_summary(matter: &Matter, data: &Dataset) -> Vec<ReportLine> {
    let mut lines = vec![
        field("Client", &matter.client),
        field("Status", matter.status.as_str()),
        field("Area of law", &matter.area_of_law),
        field("Priority", matter.priority.to_string()),
        field("Jurisdiction", matter.fed_state.as_deref().unwrap_or("-")),
        field("Total billed", format_currency(matter_total(matter, &data.invoices))),
        field("Messages", data.messages_for_matter(&matter.id).count().to_string()),
    ];
    lines.extend(
        [
            ("Date opened", Some(matter.date_opened)),
            ("Date closed", matter.date_closed),
            ("Last update", Some(matter.last_update_date)),
            ("Court date", matter.court_date),
            ("Review date", matter.review_date),
        ]
        .into_iter()
        .filter_map(|(label, date)| date_field(label, date)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use casebook_table::PageSize;

    use super::*;
    use crate::nav::Outbox;

    fn ctx() -> ViewContext {
        ViewContext {
            data: Arc::new(Dataset::load().unwrap()),
            outbox: Outbox::new(),
            page_size: PageSize::Ten,
            today: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        }
    }

    #[test]
    fn test_invoice_detail() {
        let ctx = ctx();
        let view = invoice_detail("INV-24001", &ctx).unwrap();
        assert_eq!(view.title, "DETAILED INVOICE: INV-24001");

        let text: Vec<&str> = view.summary.iter().map(|l| l.text.as_str()).collect();
        assert!(text.contains(&"  Fees:              $1,000.00"));
        assert!(text.contains(&"  Adjustment:        $205.00"));

        view.page.refresh(&ctx.data);
        assert_eq!(view.page.table.len(), 4);
    }

    #[test]
    fn test_matter_detail_lists_invoices() {
        let ctx = ctx();
        let view = matter_detail("LIT-001204", &ctx).unwrap();
        view.page.refresh(&ctx.data);
        assert_eq!(view.page.table.len(), 4);

        let text: Vec<&str> = view.summary.iter().map(|l| l.text.as_str()).collect();
        assert!(text.contains(&"  Total billed:      $4,650.00"));
    }

    #[test]
    fn test_unknown_records() {
        let ctx = ctx();
        assert!(invoice_detail("INV-0", &ctx).is_none());
        assert!(matter_detail("NOPE-1", &ctx).is_none());
    }
}
