use std::fmt;

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::dataset::Dataset;

/// Review adjustments larger than this share of the original amount are flagged.
pub const HIGH_ADJUSTMENT_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnomalyKind {
    /// Invoice linked to no matter.
    DataGap,
    /// Invoice adjusted by more than [`HIGH_ADJUSTMENT_RATIO`].
    HighAdjustment,
    /// Open matter without updates for a year.
    StaleMatter,
}

impl AnomalyKind {
    pub fn severity(self) -> Severity {
        match self {
            AnomalyKind::DataGap => Severity::Medium,
            AnomalyKind::HighAdjustment => Severity::High,
            AnomalyKind::StaleMatter => Severity::Low,
        }
    }
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AnomalyKind::DataGap => "Data Gap",
            AnomalyKind::HighAdjustment => "High Adjustment",
            AnomalyKind::StaleMatter => "Stale Matter",
        })
    }
}

/// A data-quality finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub severity: Severity,
    /// Id of the offending invoice or matter.
    pub subject: String,
    pub message: String,
}

impl Anomaly {
    fn new(kind: AnomalyKind, subject: &str, message: String) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            subject: subject.to_string(),
            message,
        }
    }
}

/// Find data gaps, outsized adjustments and stale open matters as of `today`.
pub fn anomalies(data: &Dataset, today: NaiveDate) -> Vec<Anomaly> {
    let mut found = Vec::new();

    for invoice in data.invoices.iter().filter(|i| i.matters.is_empty()) {
        found.push(Anomaly::new(
            AnomalyKind::DataGap,
            &invoice.id,
            format!("Invoice {} has no linked matters.", invoice.id),
        ));
    }

    for invoice in &data.invoices {
        if invoice.original_amount <= Decimal::ZERO {
            continue;
        }
        let ratio = ((invoice.original_amount - invoice.amount) / invoice.original_amount)
            .to_f64()
            .unwrap_or_default();
        if ratio.abs() > HIGH_ADJUSTMENT_RATIO {
            found.push(Anomaly::new(
                AnomalyKind::HighAdjustment,
                &invoice.id,
                format!(
                    "Invoice {} from {} adjusted by {}%.",
                    invoice.id,
                    invoice.firm,
                    (ratio * 100.0).round()
                ),
            ));
        }
    }

    let year_ago = today.checked_sub_months(Months::new(12)).unwrap_or(NaiveDate::MIN);
    for matter in data
        .matters
        .iter()
        .filter(|m| m.is_open() && m.last_update_date < year_ago)
    {
        found.push(Anomaly::new(
            AnomalyKind::StaleMatter,
            &matter.id,
            format!("Matter {} ({}) has no recent updates.", matter.id, matter.name),
        ));
    }

    found
}
