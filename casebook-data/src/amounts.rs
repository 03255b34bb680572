//! Amounts derived from invoices and their line items.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::model::{Invoice, LineItem, Matter};

/// Totals recomputed from an invoice's line items.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceAmounts<'a> {
    /// Line items found for the invoice's codes, in invoice order.
    pub line_items: Vec<&'a LineItem>,
    /// Everything that is not a disbursement.
    pub fees: Decimal,
    pub disbursements: Decimal,
    pub total: Decimal,
    /// Billed amount minus the recomputed total.
    pub adjustment: Decimal,
}

/// Recompute fees and disbursements for `invoice` from the line-item catalogue.
///
/// Codes with no catalogue entry are skipped.
pub fn invoice_amounts<'a>(invoice: &Invoice, catalogue: &'a [LineItem]) -> InvoiceAmounts<'a> {
    let line_items: Vec<&LineItem> = invoice
        .line_items
        .iter()
        .filter_map(|code| catalogue.iter().find(|item| item.code.trim() == code.trim()))
        .collect();

    let (disbursements, fees): (Vec<&LineItem>, Vec<&LineItem>) =
        line_items.iter().copied().partition(|item| item.is_disbursement());
    let fees: Decimal = fees.iter().map(|item| item.rate).sum();
    let disbursements: Decimal = disbursements.iter().map(|item| item.rate).sum();
    let total = fees + disbursements;

    InvoiceAmounts {
        line_items,
        fees,
        disbursements,
        total,
        adjustment: invoice.amount - total,
    }
}

/// Billed total of every invoice referencing `matter`.
pub fn matter_total(matter: &Matter, invoices: &[Invoice]) -> Decimal {
    invoices
        .iter()
        .filter(|invoice| invoice.references_matter(&matter.id))
        .map(|invoice| invoice.amount)
        .sum()
}

/// Billed totals keyed by matter id.
pub fn matter_amounts(matters: &[Matter], invoices: &[Invoice]) -> BTreeMap<String, Decimal> {
    matters
        .iter()
        .map(|matter| (matter.id.clone(), matter_total(matter, invoices)))
        .collect()
}

/// Lossy conversion for row fields, which sort numerically as floats.
pub fn to_f64(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}
