use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::amounts::to_f64;
use crate::dataset::Dataset;
use crate::model::InvoiceStatus;

use super::{percent, round_to};

const TOP_LINE_ITEMS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct FirmLineItems {
    pub firm: String,
    /// Mean line items per invoice, two decimals.
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemUsage {
    pub code: String,
    /// Catalogue name, `"Unknown"` for codes missing from it.
    pub name: String,
    pub kind: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusAmounts {
    pub status: InvoiceStatus,
    pub count: usize,
    pub total: Decimal,
    pub average: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FirmRejections {
    pub firm: String,
    /// Rejected percentage, one decimal.
    pub rate: f64,
    pub invoices: usize,
}

/// Invoice and line-item usage.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceMetrics {
    pub total_invoices: usize,
    /// Highest average first.
    pub line_items_by_firm: Vec<FirmLineItems>,
    /// Most used first, at most ten.
    pub top_line_items: Vec<LineItemUsage>,
    pub amounts_by_status: Vec<StatusAmounts>,
    /// Billed line items per type; codes missing from the catalogue count as `"Other"`.
    pub line_item_types: BTreeMap<String, usize>,
    /// Firms with more than one invoice, highest rate first.
    pub rejections_by_firm: Vec<FirmRejections>,
}

#[derive(Default)]
struct FirmTally {
    invoices: usize,
    line_items: usize,
    rejected: usize,
}

pub fn invoice_metrics(data: &Dataset) -> InvoiceMetrics {
    let mut firms: BTreeMap<&str, FirmTally> = BTreeMap::new();
    let mut statuses: BTreeMap<InvoiceStatus, (usize, Decimal)> = BTreeMap::new();
    let mut codes: BTreeMap<&str, usize> = BTreeMap::new();
    let mut line_item_types: BTreeMap<String, usize> = BTreeMap::new();

    for invoice in &data.invoices {
        let tally = firms.entry(invoice.firm.as_str()).or_default();
        tally.invoices += 1;
        tally.line_items += invoice.line_items.len();
        if invoice.status == InvoiceStatus::Rejected {
            tally.rejected += 1;
        }

        let (count, total) = statuses.entry(invoice.status).or_default();
        *count += 1;
        *total += invoice.amount;

        for code in &invoice.line_items {
            *codes.entry(code.as_str()).or_default() += 1;
            let kind = data
                .line_items
                .iter()
                .find(|item| item.code == *code)
                .map(|item| item.kind.to_string())
                .unwrap_or_else(|| "Other".to_string());
            *line_item_types.entry(kind).or_default() += 1;
        }
    }

    let mut line_items_by_firm: Vec<FirmLineItems> = firms
        .iter()
        .map(|(firm, tally)| FirmLineItems {
            firm: firm.to_string(),
            average: round_to(tally.line_items as f64 / tally.invoices as f64, 2),
        })
        .collect();
    line_items_by_firm.sort_by(|a, b| b.average.total_cmp(&a.average));

    let mut top_line_items: Vec<LineItemUsage> = codes
        .iter()
        .map(|(code, count)| {
            let item = data.line_items.iter().find(|item| item.code == *code);
            LineItemUsage {
                code: code.to_string(),
                name: item.map_or_else(|| "Unknown".to_string(), |i| i.name.clone()),
                kind: item.map_or_else(|| "Unknown".to_string(), |i| i.kind.to_string()),
                count: *count,
            }
        })
        .collect();
    top_line_items.sort_by(|a, b| b.count.cmp(&a.count));
    top_line_items.truncate(TOP_LINE_ITEMS);

    let amounts_by_status = statuses
        .into_iter()
        .map(|(status, (count, total))| StatusAmounts {
            status,
            count,
            total,
            average: (total / Decimal::from(count)).round_dp(2),
        })
        .collect();

    let mut rejections_by_firm: Vec<FirmRejections> = firms
        .iter()
        .filter(|(_, tally)| tally.invoices > 1)
        .map(|(firm, tally)| FirmRejections {
            firm: firm.to_string(),
            rate: round_to(percent(tally.rejected, tally.invoices), 1),
            invoices: tally.invoices,
        })
        .collect();
    rejections_by_firm.sort_by(|a, b| b.rate.total_cmp(&a.rate));

    InvoiceMetrics {
        total_invoices: data.invoices.len(),
        line_items_by_firm,
        top_line_items,
        amounts_by_status,
        line_item_types,
        rejections_by_firm,
    }
}

impl StatusAmounts {
    pub fn average_f64(&self) -> f64 {
        to_f64(self.average)
    }
}
