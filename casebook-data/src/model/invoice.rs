//! Invoices and their line items.

use std::fmt;

use casebook_table::Row;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amounts::to_f64;
use crate::dataset::Dataset;
use crate::format::{row_date, serde_fmt};
use crate::model::matter_id_from_display;

/// Shown for invoices that reference no matter.
pub const NO_MATTER: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Pending,
    Approved,
    Rejected,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Pending,
        InvoiceStatus::Approved,
        InvoiceStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Approved => "Approved",
            InvoiceStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invoice submitted by a firm or vendor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice number.
    pub id: String,
    /// Billing firm or vendor, when known.
    #[serde(default)]
    pub entity_id: Option<String>,
    /// Firm name as written on the invoice.
    pub firm: String,
    #[serde(deserialize_with = "serde_fmt::date")]
    pub date: NaiveDate,
    /// Matter display strings, e.g. `"CON-000793 Paperworks Inc. v. Ashworthy"`.
    #[serde(default)]
    pub matters: Vec<String>,
    /// Billed amount after review adjustments.
    #[serde(deserialize_with = "serde_fmt::amount")]
    pub amount: Decimal,
    /// Amount originally submitted.
    #[serde(deserialize_with = "serde_fmt::amount")]
    pub original_amount: Decimal,
    pub status: InvoiceStatus,
    /// Line item codes.
    #[serde(default)]
    pub line_items: Vec<String>,
}

impl Invoice {
    /// First referenced matter, as displayed in invoice lists.
    pub fn matter_display(&self) -> &str {
        self.matters.first().map(String::as_str).unwrap_or(NO_MATTER)
    }

    /// Matter number of the first referenced matter.
    pub fn matter_id(&self) -> Option<&str> {
        self.matters.first().and_then(|m| matter_id_from_display(m))
    }

    /// Whether any referenced matter string mentions `matter_id`.
    pub fn references_matter(&self, matter_id: &str) -> bool {
        self.matters.iter().any(|m| m.contains(matter_id))
    }

    /// Name of the billing entity, falling back to the firm on the invoice.
    pub fn firm_name<'a>(&'a self, data: &'a Dataset) -> &'a str {
        self.entity_id
            .as_deref()
            .and_then(|id| data.entity(id))
            .map(|e| e.name.as_str())
            .unwrap_or(&self.firm)
    }

    /// Table row for invoice lists.
    pub fn to_row(&self, data: &Dataset) -> Row {
        let line_items = if self.line_items.is_empty() {
            None
        } else {
            Some(self.line_items.join(", "))
        };

        Row::new()
            .set("id", self.id.as_str())
            .set("firmName", self.firm_name(data))
            .set("date", row_date(self.date))
            .set("matterDisplay", self.matter_display())
            .set("matterId", self.matter_id())
            .set("lineItemsDisplay", line_items)
            .set("amount", to_f64(self.amount))
            .set("originalAmount", to_f64(self.original_amount))
            .set("status", self.status.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LineItemType {
    Fee,
    Disbursement,
    #[serde(other)]
    Other,
}

impl LineItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineItemType::Fee => "Fee",
            LineItemType::Disbursement => "Disbursement",
            LineItemType::Other => "Other",
        }
    }
}

impl fmt::Display for LineItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A billable task or expense code (UTBMS style).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItem {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LineItemType,
    /// Flat rate billed per use.
    pub rate: Decimal,
}

impl LineItem {
    pub fn is_disbursement(&self) -> bool {
        self.kind == LineItemType::Disbursement
    }

    pub fn to_row(&self) -> Row {
        Row::new()
            .set("id", self.code.as_str())
            .set("name", self.name.as_str())
            .set("type", self.kind.as_str())
            .set("rate", to_f64(self.rate))
    }
}
