use std::collections::BTreeMap;

use crate::model::{EmployeeType, TextRecord};

use super::count_by;

/// Label for messages not tied to a matter.
const UNASSIGNED: &str = "Unassigned";

/// Message activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationalMetrics {
    pub total_messages: usize,
    /// Messages per matter id, `"Unassigned"` for the rest.
    pub by_matter: BTreeMap<String, usize>,
    /// Messages per sender type. In-house, firm and vendor senders are always
    /// present, even at zero.
    pub by_employee_type: BTreeMap<EmployeeType, usize>,
    pub by_subject: BTreeMap<String, usize>,
}

pub fn operational_metrics(messages: &[TextRecord]) -> OperationalMetrics {
    let mut by_employee_type: BTreeMap<EmployeeType, usize> =
        [EmployeeType::InHouse, EmployeeType::Firm, EmployeeType::Vendor]
            .into_iter()
            .map(|t| (t, 0))
            .collect();
    for (kind, count) in count_by(messages, |m| m.employee_type) {
        *by_employee_type.entry(kind).or_default() += count;
    }

    OperationalMetrics {
        total_messages: messages.len(),
        by_matter: count_by(messages, |m| {
            m.matter_id.clone().unwrap_or_else(|| UNASSIGNED.to_string())
        }),
        by_employee_type,
        by_subject: count_by(messages, |m| m.subject.clone()),
    }
}
