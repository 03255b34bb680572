use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::dataset::Dataset;
use crate::model::InvoiceStatus;

use super::{count_by, percent};

/// Spend, savings and rejections across all invoices.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialMetrics {
    /// Billed amounts after review.
    pub total_spend: Decimal,
    /// Amounts as originally submitted.
    pub total_original: Decimal,
    /// Reductions won in review.
    pub savings: Decimal,
    /// Savings as a percentage of the original amounts.
    pub savings_rate: f64,
    /// Percentage of invoices rejected.
    pub rejection_rate: f64,
    pub spend_by_firm: BTreeMap<String, Decimal>,
    /// How often each line-item type is billed; unknown codes count as `"Unknown"`.
    pub line_items_by_type: BTreeMap<String, usize>,
}

pub fn financial_metrics(data: &Dataset) -> FinancialMetrics {
    let mut total_spend = Decimal::ZERO;
    let mut total_original = Decimal::ZERO;
    let mut rejected = 0;
    let mut spend_by_firm: BTreeMap<String, Decimal> = BTreeMap::new();

    for invoice in &data.invoices {
        total_spend += invoice.amount;
        total_original += invoice.original_amount;
        if invoice.status == InvoiceStatus::Rejected {
            rejected += 1;
        }
        *spend_by_firm
            .entry(invoice.firm_name(data).to_string())
            .or_default() += invoice.amount;
    }

    let line_items_by_type = count_by(
        data.invoices.iter().flat_map(|i| i.line_items.iter()),
        |code| {
            data.line_items
                .iter()
                .find(|item| item.code == *code)
                .map(|item| item.kind.to_string())
                .unwrap_or_else(|| "Unknown".to_string())
        },
    );

    let savings = total_original - total_spend;
    let savings_rate = if total_original.is_zero() {
        0.0
    } else {
        crate::amounts::to_f64(savings / total_original * Decimal::ONE_HUNDRED)
    };

    FinancialMetrics {
        total_spend,
        total_original,
        savings,
        savings_rate,
        rejection_rate: percent(rejected, data.invoices.len()),
        spend_by_firm,
        line_items_by_type,
    }
}
