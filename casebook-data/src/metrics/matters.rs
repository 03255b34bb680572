use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::format::days_between;
use crate::model::{Matter, MatterStatus, Priority};

use super::{count_by, top_n};

/// Open matters untouched for longer than this are stale.
pub const STALE_AFTER_DAYS: i64 = 60;
/// Court and review dates this many days ahead count as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

const TOP: usize = 5;

/// A matter with a date of interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedMatter {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleMatter {
    pub id: String,
    pub name: String,
    pub days_since_update: i64,
}

/// Caseload, deadlines and risk indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct MatterMetrics {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    pub by_status: BTreeMap<MatterStatus, usize>,
    pub by_area_of_law: BTreeMap<String, usize>,
    pub top_areas_of_law: Vec<(String, usize)>,
    pub by_priority: BTreeMap<Priority, usize>,
    /// Keyed by federal/state jurisdiction, `"Unknown"` when unset.
    pub by_jurisdiction: BTreeMap<String, usize>,
    /// Mean age of open matters in days, rounded.
    pub avg_open_age_days: i64,
    pub oldest_open_age_days: i64,
    /// Soonest first, at most five.
    pub upcoming_court_dates: Vec<DatedMatter>,
    pub upcoming_review_dates: Vec<DatedMatter>,
    /// Longest-neglected first, at most five.
    pub stale: Vec<StaleMatter>,
    pub top_clients: Vec<(String, usize)>,
    /// Matters opened per year, latest five years first.
    pub opened_by_year: Vec<(i32, usize)>,
}

impl MatterMetrics {
    pub fn priority_count(&self, priority: Priority) -> usize {
        self.by_priority.get(&priority).copied().unwrap_or(0)
    }
}

fn upcoming(matters: &[Matter], today: NaiveDate, date: impl Fn(&Matter) -> Option<NaiveDate>) -> Vec<DatedMatter> {
    let mut dated: Vec<DatedMatter> = matters
        .iter()
        .filter_map(|m| {
            let when = date(m)?;
            let ahead = days_between(today, when);
            (0..=UPCOMING_WINDOW_DAYS).contains(&ahead).then(|| DatedMatter {
                id: m.id.clone(),
                name: m.name.clone(),
                date: when,
            })
        })
        .collect();
    dated.sort_by_key(|d| d.date);
    dated.truncate(TOP);
    dated
}

pub fn matter_metrics(matters: &[Matter], today: NaiveDate) -> MatterMetrics {
    let by_status = count_by(matters, |m| m.status);
    let by_area_of_law = count_by(matters, |m| m.area_of_law.clone());
    let by_priority = count_by(matters, |m| m.priority);
    let by_jurisdiction = count_by(matters, |m| {
        m.fed_state.clone().unwrap_or_else(|| "Unknown".to_string())
    });
    let by_client = count_by(matters, |m| m.client.clone());
    let by_year = count_by(matters, |m| m.date_opened.year());

    let open_ages: Vec<i64> = matters
        .iter()
        .filter(|m| m.is_open())
        .map(|m| days_between(m.date_opened, today))
        .collect();
    let avg_open_age_days = if open_ages.is_empty() {
        0
    } else {
        (open_ages.iter().sum::<i64>() as f64 / open_ages.len() as f64).round() as i64
    };

    let mut stale: Vec<StaleMatter> = matters
        .iter()
        .filter(|m| m.is_open())
        .map(|m| StaleMatter {
            id: m.id.clone(),
            name: m.name.clone(),
            days_since_update: days_between(m.last_update_date, today),
        })
        .filter(|s| s.days_since_update > STALE_AFTER_DAYS)
        .collect();
    stale.sort_by(|a, b| b.days_since_update.cmp(&a.days_since_update));
    stale.truncate(TOP);

    let mut opened_by_year: Vec<(i32, usize)> = by_year.into_iter().collect();
    opened_by_year.reverse();
    opened_by_year.truncate(TOP);

    MatterMetrics {
        total: matters.len(),
        open: by_status.get(&MatterStatus::Open).copied().unwrap_or(0),
        closed: by_status.get(&MatterStatus::Closed).copied().unwrap_or(0),
        top_areas_of_law: top_n(&by_area_of_law, TOP),
        top_clients: top_n(&by_client, TOP),
        by_status,
        by_area_of_law,
        by_priority,
        by_jurisdiction,
        avg_open_age_days,
        oldest_open_age_days: open_ages.iter().copied().max().unwrap_or(0),
        upcoming_court_dates: upcoming(matters, today, |m| m.court_date),
        upcoming_review_dates: upcoming(matters, today, |m| m.review_date),
        stale,
        opened_by_year,
    }
}
