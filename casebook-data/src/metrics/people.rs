use std::collections::BTreeMap;

use crate::model::{Compliance, Employee, Entity, EntityType, state_of};

use super::{count_by, round_to, top_n};

/// Compliance risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    /// Zero or one compliance items on file.
    High,
    /// Two or three.
    Medium,
    /// All four.
    Low,
}

impl RiskLevel {
    pub fn of(compliance: &Compliance) -> Self {
        match compliance.score() {
            0 | 1 => RiskLevel::High,
            2 | 3 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }
}

/// Parties per state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Geography {
    pub firms: BTreeMap<String, usize>,
    pub vendors: BTreeMap<String, usize>,
    pub employees: BTreeMap<String, usize>,
}

/// Entities grouped by compliance risk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplianceProfile {
    /// Entity names per risk band.
    pub by_risk: BTreeMap<RiskLevel, Vec<String>>,
    /// Mean score across entities, one decimal.
    pub average_score: f64,
}

impl ComplianceProfile {
    pub fn count(&self, level: RiskLevel) -> usize {
        self.by_risk.get(&level).map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeopleMetrics {
    pub geography: Geography,
    pub compliance: ComplianceProfile,
    /// Most common employee titles, at most five.
    pub top_titles: Vec<(String, usize)>,
    pub total_entities: usize,
    pub total_employees: usize,
}

pub fn people_metrics(entities: &[Entity], employees: &[Employee]) -> PeopleMetrics {
    let geography = Geography {
        firms: count_by(
            entities.iter().filter(|e| e.kind == EntityType::Firm),
            |e| state_of(e.location.as_deref()).to_string(),
        ),
        vendors: count_by(
            entities.iter().filter(|e| e.kind == EntityType::Vendor),
            |e| state_of(e.location.as_deref()).to_string(),
        ),
        employees: count_by(employees, |e| state_of(e.location.as_deref()).to_string()),
    };

    let mut compliance = ComplianceProfile::default();
    let mut total_score = 0usize;
    for entity in entities {
        total_score += entity.compliance.score() as usize;
        compliance
            .by_risk
            .entry(RiskLevel::of(&entity.compliance))
            .or_default()
            .push(entity.name.clone());
    }
    if !entities.is_empty() {
        compliance.average_score = round_to(total_score as f64 / entities.len() as f64, 1);
    }

    let titles = count_by(employees.iter().filter_map(|e| e.title.as_deref()), str::to_string);

    PeopleMetrics {
        geography,
        compliance,
        top_titles: top_n(&titles, 5),
        total_entities: entities.len(),
        total_employees: employees.len(),
    }
}
