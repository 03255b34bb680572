//! Text messages exchanged about matters and invoices.

use casebook_table::Row;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::dataset::Dataset;
use crate::format::{row_date, serde_fmt};
use crate::model::EmployeeType;

/// A message (text record).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRecord {
    pub id: String,
    #[serde(deserialize_with = "serde_fmt::date")]
    pub date: NaiveDate,
    pub subject: String,
    #[serde(default)]
    pub body: String,
    /// Sender.
    pub employee_id: String,
    pub employee_name: String,
    pub employee_type: EmployeeType,
    #[serde(default)]
    pub recipient_id: Option<String>,
    #[serde(default)]
    pub matter_id: Option<String>,
    #[serde(default)]
    pub invoice_id: Option<String>,
}

impl TextRecord {
    /// Internal team chatter, tied to neither a matter nor an invoice.
    pub fn is_team_message(&self) -> bool {
        self.matter_id.is_none() && self.invoice_id.is_none()
    }

    /// Table row for message lists.
    pub fn to_row(&self, data: &Dataset) -> Row {
        let recipient = self
            .recipient_id
            .as_deref()
            .and_then(|id| data.employee(id))
            .map(|e| e.name.as_str());

        Row::new()
            .set("id", self.id.as_str())
            .set("date", row_date(self.date))
            .set("subject", self.subject.as_str())
            .set("body", self.body.as_str())
            .set("employeeName", self.employee_name.as_str())
            .set("employeeType", self.employee_type.as_str())
            .set("recipientName", recipient)
            .set("matterId", self.matter_id.clone())
            .set("invoiceId", self.invoice_id.clone())
    }
}
