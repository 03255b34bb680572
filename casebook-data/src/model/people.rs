//! Firms, vendors and the people who work for them.

use std::fmt;

use casebook_table::Row;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityType {
    Firm,
    Vendor,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Firm => "Firm",
            EntityType::Vendor => "Vendor",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a person works for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EmployeeType {
    #[serde(rename = "In-House")]
    InHouse,
    Firm,
    Vendor,
    Individual,
}

impl EmployeeType {
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeType::InHouse => "In-House",
            EmployeeType::Firm => "Firm",
            EmployeeType::Vendor => "Vendor",
            EmployeeType::Individual => "Individual",
        }
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compliance paperwork on file for a party.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Compliance {
    /// Email address verified.
    #[serde(default)]
    pub email: bool,
    /// Background check completed.
    #[serde(default)]
    pub check: bool,
    /// Approved for engagement.
    #[serde(default)]
    pub thumb: bool,
    /// Engagement documents signed.
    #[serde(default)]
    pub doc: bool,
    /// Preferred provider.
    #[serde(default)]
    pub star: bool,
}

impl Compliance {
    /// Number of the four compliance items on file.
    pub fn score(&self) -> u8 {
        [self.email, self.check, self.thumb, self.doc]
            .into_iter()
            .filter(|&set| set)
            .count() as u8
    }

    fn write_flags(&self, row: Row) -> Row {
        row.set("email", self.email)
            .set("star", self.star)
            .set("check", self.check)
            .set("thumb", self.thumb)
            .set("doc", self.doc)
    }
}

/// A law firm or vendor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntityType,
    /// Free-form address ending in `"<state> <zip>"`.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub compliance: Compliance,
}

impl Entity {
    pub fn to_row(&self) -> Row {
        let row = Row::new()
            .set("id", self.id.as_str())
            .set("name", self.name.as_str())
            .set("type", self.kind.as_str())
            .set("location", self.location.clone())
            .set("phone", self.phone.clone());
        self.compliance.write_flags(row)
    }
}

/// A person: in-house staff, firm or vendor employee, or an individual party.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Employer; `None` for in-house staff and individuals.
    #[serde(default)]
    pub entity_id: Option<String>,
    pub employee_type: EmployeeType,
    #[serde(flatten)]
    pub compliance: Compliance,
}

impl Employee {
    /// Table row for people lists, joined with the employer.
    pub fn to_row(&self, data: &Dataset) -> Row {
        let entity = self.entity_id.as_deref().and_then(|id| data.entity(id));
        let row = Row::new()
            .set("id", self.id.as_str())
            .set("name", self.name.as_str())
            .set("title", self.title.clone())
            .set("location", self.location.clone())
            .set("phone", self.phone.clone())
            .set("employeeType", self.employee_type.as_str())
            .set("entityName", entity.map(|e| e.name.as_str()))
            .set("entityType", entity.map(|e| e.kind.as_str()));
        self.compliance.write_flags(row)
    }
}

/// State abbreviation from a location such as `"Austin, TX 78701"`.
///
/// Takes the second-to-last word; `"Unknown"` when there is none.
pub fn state_of(location: Option<&str>) -> &str {
    let words: Vec<&str> = location.unwrap_or_default().split_whitespace().collect();
    match words.len() {
        n if n >= 2 => words[n - 2],
        _ => "Unknown",
    }
}
