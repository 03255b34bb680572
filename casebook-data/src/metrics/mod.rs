//! Reporting metrics.
//!
//! Every reducer is a pure function of the dataset. Anything that depends
//! on the current date takes `today` explicitly. Grouped results use
//! `BTreeMap` so they iterate in a stable order.

mod anomalies;
mod finance;
mod invoices;
mod matters;
mod operations;
mod people;

use std::collections::BTreeMap;

pub use anomalies::{Anomaly, AnomalyKind, HIGH_ADJUSTMENT_RATIO, Severity, anomalies};
pub use finance::{FinancialMetrics, financial_metrics};
pub use invoices::{FirmLineItems, FirmRejections, InvoiceMetrics, LineItemUsage, StatusAmounts, invoice_metrics};
pub use matters::{DatedMatter, MatterMetrics, STALE_AFTER_DAYS, StaleMatter, UPCOMING_WINDOW_DAYS, matter_metrics};
pub use operations::{OperationalMetrics, operational_metrics};
pub use people::{ComplianceProfile, Geography, PeopleMetrics, RiskLevel, people_metrics};

/// Count items per key.
pub(crate) fn count_by<T, K: Ord>(items: impl IntoIterator<Item = T>, key: impl Fn(T) -> K) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// The `n` largest counts, largest first; ties keep key order.
pub(crate) fn top_n<K: Clone + Ord>(counts: &BTreeMap<K, usize>, n: usize) -> Vec<(K, usize)> {
    let mut entries: Vec<(K, usize)> = counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

/// `part / whole` as a percentage, zero for an empty whole.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Round to `places` decimals.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
