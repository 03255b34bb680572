//! The bundled dataset.

use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::error::DataError;
use crate::model::{Employee, Entity, Invoice, LineItem, Matter, TextRecord};

const MATTERS: &str = include_str!("../fixtures/matters.json");
const INVOICES: &str = include_str!("../fixtures/invoices.json");
const LINE_ITEMS: &str = include_str!("../fixtures/line_items.json");
const ENTITIES: &str = include_str!("../fixtures/entities.json");
const EMPLOYEES: &str = include_str!("../fixtures/employees.json");
const MESSAGES: &str = include_str!("../fixtures/messages.json");

/// Every record the dashboard shows.
///
/// The data is static: loaded once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub matters: Vec<Matter>,
    pub invoices: Vec<Invoice>,
    pub line_items: Vec<LineItem>,
    pub entities: Vec<Entity>,
    pub employees: Vec<Employee>,
    pub messages: Vec<TextRecord>,
}

fn parse<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<Vec<T>, DataError> {
    let records: Vec<T> =
        serde_json::from_str(json).map_err(|source| DataError::Fixture { name, source })?;
    debug!("loaded {} {}", records.len(), name);
    Ok(records)
}

impl Dataset {
    /// Load and cross-check the bundled fixtures.
    pub fn load() -> Result<Self, DataError> {
        let data = Self {
            matters: parse("matters", MATTERS)?,
            invoices: parse("invoices", INVOICES)?,
            line_items: parse("line_items", LINE_ITEMS)?,
            entities: parse("entities", ENTITIES)?,
            employees: parse("employees", EMPLOYEES)?,
            messages: parse("messages", MESSAGES)?,
        };
        data.validate()?;
        info!(
            "dataset: {} matters, {} invoices, {} messages, {} people",
            data.matters.len(),
            data.invoices.len(),
            data.messages.len(),
            data.employees.len() + data.entities.len()
        );
        Ok(data)
    }

    /// Check that entity and employee references resolve.
    ///
    /// Invoices without matters and unknown line-item codes are tolerated;
    /// they surface as anomalies and skipped line items respectively.
    pub fn validate(&self) -> Result<(), DataError> {
        for invoice in &self.invoices {
            if let Some(id) = &invoice.entity_id
                && self.entity(id).is_none()
            {
                return Err(DataError::DanglingReference {
                    kind: "invoice",
                    id: invoice.id.clone(),
                    target: "entity",
                    reference: id.clone(),
                });
            }
        }
        for employee in &self.employees {
            if let Some(id) = &employee.entity_id
                && self.entity(id).is_none()
            {
                return Err(DataError::DanglingReference {
                    kind: "employee",
                    id: employee.id.clone(),
                    target: "entity",
                    reference: id.clone(),
                });
            }
        }
        for message in &self.messages {
            if self.employee(&message.employee_id).is_none() {
                return Err(DataError::DanglingReference {
                    kind: "message",
                    id: message.id.clone(),
                    target: "employee",
                    reference: message.employee_id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn matter(&self, id: &str) -> Option<&Matter> {
        self.matters.iter().find(|m| m.id == id)
    }

    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|i| i.id == id)
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Invoices referencing `matter_id`.
    pub fn invoices_for_matter<'a>(&'a self, matter_id: &'a str) -> impl Iterator<Item = &'a Invoice> {
        self.invoices
            .iter()
            .filter(move |i| i.references_matter(matter_id))
    }

    /// Employees working for entity `entity_id`.
    pub fn employees_of<'a>(&'a self, entity_id: &'a str) -> impl Iterator<Item = &'a Employee> {
        self.employees
            .iter()
            .filter(move |e| e.entity_id.as_deref() == Some(entity_id))
    }

    /// Messages about `matter_id`.
    pub fn messages_for_matter<'a>(&'a self, matter_id: &'a str) -> impl Iterator<Item = &'a TextRecord> {
        self.messages
            .iter()
            .filter(move |m| m.matter_id.as_deref() == Some(matter_id))
    }

    /// Messages about `invoice_id`.
    pub fn messages_for_invoice<'a>(&'a self, invoice_id: &'a str) -> impl Iterator<Item = &'a TextRecord> {
        self.messages
            .iter()
            .filter(move |m| m.invoice_id.as_deref() == Some(invoice_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_fixture_names_the_file() {
        let err = parse::<Matter>("matters", "[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, DataError::Fixture { name: "matters", .. }));
        assert!(err.to_string().starts_with("failed to parse fixture 'matters'"));
    }

    #[test]
    fn test_dangling_entity_is_rejected() {
        let mut data = Dataset::load().unwrap();
        data.employees[0].entity_id = Some("ENT-MISSING".into());
        let err = data.validate().unwrap_err();
        assert!(matches!(err, DataError::DanglingReference { target: "entity", .. }));
    }
}
