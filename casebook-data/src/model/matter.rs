//! Legal matters.

use std::fmt;

use casebook_table::Row;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amounts::matter_total;
use crate::dataset::Dataset;
use crate::format::{row_date, serde_fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatterStatus {
    Open,
    Closed,
}

impl MatterStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatterStatus::Open => "Open",
            MatterStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for MatterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matter priority, A being the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    A,
    B,
    C,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::A => "A",
            Priority::B => "B",
            Priority::C => "C",
        })
    }
}

/// A legal matter (case) handled by the department.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matter {
    /// Matter number such as `CON-000793`.
    pub id: String,
    pub name: String,
    pub client: String,
    pub status: MatterStatus,
    pub area_of_law: String,
    pub priority: Priority,
    /// Federal or state jurisdiction.
    #[serde(default)]
    pub fed_state: Option<String>,
    #[serde(deserialize_with = "serde_fmt::date")]
    pub date_opened: NaiveDate,
    #[serde(deserialize_with = "serde_fmt::date")]
    pub last_update_date: NaiveDate,
    #[serde(default, deserialize_with = "serde_fmt::optional_date")]
    pub date_closed: Option<NaiveDate>,
    #[serde(default, deserialize_with = "serde_fmt::optional_date")]
    pub court_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "serde_fmt::optional_date")]
    pub review_date: Option<NaiveDate>,
    /// Ids of the firms and vendors working the matter.
    #[serde(default)]
    pub entities: Vec<String>,
}

impl Matter {
    pub fn is_open(&self) -> bool {
        self.status == MatterStatus::Open
    }

    /// Days the matter has been (or was) active as of `today`.
    pub fn days_active(&self, today: NaiveDate) -> i64 {
        let end = self.date_closed.unwrap_or(today);
        (end - self.date_opened).num_days()
    }

    /// Table row for matter lists.
    ///
    /// `amount` is the billed total of every invoice referencing the matter.
    pub fn to_row(&self, data: &Dataset) -> Row {
        Row::new()
            .set("id", self.id.as_str())
            .set("name", self.name.as_str())
            .set("client", self.client.as_str())
            .set("areaOfLaw", self.area_of_law.as_str())
            .set("priority", self.priority.to_string())
            .set("fedState", self.fed_state.clone())
            .set("dateOpened", row_date(self.date_opened))
            .set("lastUpdateDate", row_date(self.last_update_date))
            .set("reviewDate", self.review_date.map(row_date))
            .set("amount", crate::amounts::to_f64(matter_total(self, &data.invoices)))
            .set("status", self.status.as_str())
    }
}

/// Extract the matter number from a display string such as
/// `"CON-000793 Paperworks Inc. v. Ashworthy"`.
///
/// The number is an upper-case prefix, a dash and digits.
pub fn matter_id_from_display(display: &str) -> Option<&str> {
    let token = display.split_whitespace().next()?;
    let (prefix, digits) = token.split_once('-')?;
    let valid = !prefix.is_empty()
        && prefix.chars().all(|c| c.is_ascii_uppercase())
        && !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit());
    valid.then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matter_id_from_display() {
        assert_eq!(
            matter_id_from_display("CON-000793 Paperworks Inc. v. Ashworthy"),
            Some("CON-000793")
        );
        assert_eq!(matter_id_from_display("ADR-000011"), Some("ADR-000011"));
        assert_eq!(matter_id_from_display("N/A"), None);
        assert_eq!(matter_id_from_display("con-12 lower"), None);
        assert_eq!(matter_id_from_display("CON- missing"), None);
        assert_eq!(matter_id_from_display(""), None);
    }
}
