//! Page content: one table or report per tab, plus record detail views.
//!
//! Every tab gets a fresh [`Table`] when it is opened. The table keeps its
//! sort, page and expansion state while the tab stays open; its rows are
//! re-supplied from the dataset on every frame through the page's row source.

mod columns;
pub mod detail;
mod finance;
mod home;
mod matters;
mod messages;
mod people;
pub mod reports;

use std::sync::Arc;

use casebook_data::{Dataset, EntityType, InvoiceStatus};
use casebook_table::render::SpanStyle;
use casebook_table::{PageSize, Row, Table};
use chrono::NaiveDate;
use log::debug;

use crate::nav::Outbox;
use crate::section::Tab;

pub use detail::DetailView;

/// Everything a page needs to build its table.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub data: Arc<Dataset>,
    pub outbox: Outbox,
    /// Page size of freshly opened tables.
    pub page_size: PageSize,
    pub today: NaiveDate,
}

type RowSource = Box<dyn Fn(&Dataset) -> Vec<Row>>;

/// A table together with the query that fills it.
pub struct TablePage {
    pub table: Table,
    source: RowSource,
}

impl TablePage {
    pub fn new(table: Table, source: impl Fn(&Dataset) -> Vec<Row> + 'static) -> Self {
        Self {
            table,
            source: Box::new(source),
        }
    }

    /// Re-run the row query against `data`.
    pub fn refresh(&self, data: &Dataset) {
        self.table.set_rows((self.source)(data));
    }
}

impl std::fmt::Debug for TablePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TablePage").field("table", &self.table.id()).finish()
    }
}

/// One line of a text report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub text: String,
    pub style: SpanStyle,
}

impl ReportLine {
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Header,
        }
    }

    pub fn item(text: impl Into<String>) -> Self {
        Self {
            text: format!("  {}", text.into()),
            style: SpanStyle::Normal,
        }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Muted,
        }
    }

    pub fn blank() -> Self {
        Self {
            text: String::new(),
            style: SpanStyle::Normal,
        }
    }
}

#[derive(Debug)]
pub enum Content {
    Table(TablePage),
    Report(Vec<ReportLine>),
}

impl Content {
    pub fn table(&self) -> Option<&TablePage> {
        match self {
            Content::Table(page) => Some(page),
            Content::Report(_) => None,
        }
    }
}

/// Build the content of `tab`.
pub fn open_tab(tab: Tab, ctx: &ViewContext) -> Content {
    debug!("opening tab {}", tab.label());
    let content = match tab {
        Tab::Announcements => Content::Report(home::announcements(&ctx.data, ctx.today)),
        Tab::ActionReport => Content::Table(home::action_report(ctx)),
        Tab::AllMatters => Content::Table(matters::page(ctx, matters::Filter::All)),
        Tab::OpenMatters => Content::Table(matters::page(ctx, matters::Filter::Open)),
        Tab::ClosedMatters => Content::Table(matters::page(ctx, matters::Filter::Closed)),
        Tab::InvoiceList => Content::Table(finance::page(ctx, None)),
        Tab::PendingInvoices => Content::Table(finance::page(ctx, Some(InvoiceStatus::Pending))),
        Tab::ApprovedInvoices => Content::Table(finance::page(ctx, Some(InvoiceStatus::Approved))),
        Tab::RejectedInvoices => Content::Table(finance::page(ctx, Some(InvoiceStatus::Rejected))),
        Tab::AllMessages => Content::Table(messages::page(ctx, messages::Filter::All)),
        Tab::TeamMessages => Content::Table(messages::page(ctx, messages::Filter::Team)),
        Tab::InvoiceMessages => Content::Table(messages::page(ctx, messages::Filter::Invoice)),
        Tab::MatterMessages => Content::Table(messages::page(ctx, messages::Filter::Matter)),
        Tab::InHouse => Content::Table(people::in_house(ctx)),
        Tab::Firms => Content::Table(people::entities(ctx, EntityType::Firm)),
        Tab::Vendors => Content::Table(people::entities(ctx, EntityType::Vendor)),
        Tab::Individuals => Content::Table(people::individuals(ctx)),
        Tab::FinancialReport => Content::Report(reports::financial(&ctx.data)),
        Tab::MattersReport => Content::Report(reports::matters(&ctx.data, ctx.today)),
        Tab::OperationsReport => Content::Report(reports::operations(&ctx.data)),
        Tab::InvoicesReport => Content::Report(reports::invoices(&ctx.data)),
        Tab::PeopleReport => Content::Report(reports::people(&ctx.data)),
        Tab::AnomaliesReport => Content::Report(reports::anomalies(&ctx.data, ctx.today)),
    };
    if let Content::Table(page) = &content {
        page.refresh(&ctx.data);
    }
    content
}

/// Config shared by every dashboard table.
fn table_config(ctx: &ViewContext) -> casebook_table::TableConfig {
    casebook_table::TableConfig::new()
        .striped()
        .default_page_size(ctx.page_size)
}
