//! Reporting tabs rendered as text.

use std::collections::BTreeMap;
use std::fmt::Display;

use casebook_data::Dataset;
use casebook_data::format::{format_currency, format_date};
use casebook_data::metrics::{
    RiskLevel, Severity, anomalies as find_anomalies, financial_metrics, invoice_metrics,
    matter_metrics, operational_metrics, people_metrics,
};
use chrono::NaiveDate;

use super::ReportLine;

/// One `label  value` line per map entry.
fn counts<K: Display>(lines: &mut Vec<ReportLine>, title: &str, map: &BTreeMap<K, usize>) {
    lines.push(ReportLine::heading(title));
    if map.is_empty() {
        lines.push(ReportLine::note("  none"));
    }
    for (key, count) in map {
        lines.push(ReportLine::item(format!("{:<28} {:>5}", key.to_string(), count)));
    }
    lines.push(ReportLine::blank());
}

fn ranked<K: Display>(lines: &mut Vec<ReportLine>, title: &str, entries: &[(K, usize)]) {
    lines.push(ReportLine::heading(title));
    for (n, (key, count)) in entries.iter().enumerate() {
        lines.push(ReportLine::item(format!("{}. {:<25} {:>5}", n + 1, key.to_string(), count)));
    }
    lines.push(ReportLine::blank());
}

pub fn financial(data: &Dataset) -> Vec<ReportLine> {
    let m = financial_metrics(data);
    let mut lines = vec![
        ReportLine::heading("SPEND"),
        ReportLine::item(format!("Total billed      {}", format_currency(m.total_spend))),
        ReportLine::item(format!("Originally billed {}", format_currency(m.total_original))),
        ReportLine::item(format!(
            "Review savings    {} ({:.1}%)",
            format_currency(m.savings),
            m.savings_rate
        )),
        ReportLine::item(format!("Rejection rate    {:.1}%", m.rejection_rate)),
        ReportLine::blank(),
        ReportLine::heading("SPEND BY FIRM"),
    ];
    for (firm, amount) in &m.spend_by_firm {
        lines.push(ReportLine::item(format!("{:<28} {:>14}", firm, format_currency(*amount))));
    }
    lines.push(ReportLine::blank());
    counts(&mut lines, "LINE ITEMS BY TYPE", &m.line_items_by_type);
    lines
}

pub fn matters(data: &Dataset, today: NaiveDate) -> Vec<ReportLine> {
    let m = matter_metrics(&data.matters, today);
    let mut lines = vec![
        ReportLine::heading("PORTFOLIO"),
        ReportLine::item(format!("{} matters, {} open, {} closed", m.total, m.open, m.closed)),
        ReportLine::item(format!(
            "Open matters average {} days, oldest {} days",
            m.avg_open_age_days, m.oldest_open_age_days
        )),
        ReportLine::blank(),
    ];

    counts(&mut lines, "BY PRIORITY", &m.by_priority);
    ranked(&mut lines, "TOP AREAS OF LAW", &m.top_areas_of_law);
    counts(&mut lines, "BY JURISDICTION", &m.by_jurisdiction);
    ranked(&mut lines, "TOP CLIENTS", &m.top_clients);
    ranked(&mut lines, "OPENED BY YEAR", &m.opened_by_year);

    lines.push(ReportLine::heading("UPCOMING COURT DATES"));
    for matter in &m.upcoming_court_dates {
        lines.push(ReportLine::item(format!("{}  {}", format_date(matter.date), matter.name)));
    }
    lines.push(ReportLine::blank());

    lines.push(ReportLine::heading("UPCOMING REVIEWS"));
    for matter in &m.upcoming_review_dates {
        lines.push(ReportLine::item(format!("{}  {}", format_date(matter.date), matter.name)));
    }
    lines.push(ReportLine::blank());

    lines.push(ReportLine::heading("NO RECENT ACTIVITY"));
    for matter in &m.stale {
        lines.push(ReportLine::item(format!(
            "{:<12} {:>5} days  {}",
            matter.id, matter.days_since_update, matter.name
        )));
    }
    lines
}

pub fn operations(data: &Dataset) -> Vec<ReportLine> {
    let m = operational_metrics(&data.messages);
    let mut lines = vec![
        ReportLine::heading("MESSAGES"),
        ReportLine::item(format!("{} messages", m.total_messages)),
        ReportLine::blank(),
    ];
    counts(&mut lines, "BY SENDER TYPE", &m.by_employee_type);
    counts(&mut lines, "BY MATTER", &m.by_matter);
    counts(&mut lines, "BY SUBJECT", &m.by_subject);
    lines
}

pub fn invoices(data: &Dataset) -> Vec<ReportLine> {
    let m = invoice_metrics(data);
    let mut lines = vec![ReportLine::heading("INVOICES BY STATUS")];
    for status in &m.amounts_by_status {
        lines.push(ReportLine::item(format!(
            "{:<10} {:>3} invoices  {:>14} total  {:>12} avg",
            status.status.as_str(),
            status.count,
            format_currency(status.total),
            format_currency(status.average)
        )));
    }
    lines.push(ReportLine::blank());

    lines.push(ReportLine::heading("MOST BILLED LINE ITEMS"));
    for item in &m.top_line_items {
        lines.push(ReportLine::item(format!(
            "{:<6} {:<32} {:<13} {:>4}",
            item.code, item.name, item.kind, item.count
        )));
    }
    lines.push(ReportLine::blank());

    lines.push(ReportLine::heading("LINE ITEMS PER INVOICE"));
    for firm in &m.line_items_by_firm {
        lines.push(ReportLine::item(format!("{:<28} {:>6.2}", firm.firm, firm.average)));
    }
    lines.push(ReportLine::blank());

    lines.push(ReportLine::heading("REJECTION RATE BY FIRM"));
    for firm in &m.rejections_by_firm {
        lines.push(ReportLine::item(format!(
            "{:<28} {:>5.1}% of {}",
            firm.firm, firm.rate, firm.invoices
        )));
    }
    lines.push(ReportLine::blank());

    counts(&mut lines, "LINE ITEM TYPES", &m.line_item_types);
    lines
}

pub fn people(data: &Dataset) -> Vec<ReportLine> {
    let m = people_metrics(&data.entities, &data.employees);
    let mut lines = vec![
        ReportLine::heading("DIRECTORY"),
        ReportLine::item(format!(
            "{} organisations, {} people",
            m.total_entities, m.total_employees
        )),
        ReportLine::blank(),
        ReportLine::heading("COMPLIANCE RISK"),
    ];
    for level in [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low] {
        let names = m.compliance.by_risk.get(&level).map(|n| n.join(", ")).unwrap_or_default();
        lines.push(ReportLine::item(format!(
            "{:<7} {:>2}  {}",
            level.as_str(),
            m.compliance.count(level),
            names
        )));
    }
    lines.push(ReportLine::item(format!("Average score {:.1} of 4", m.compliance.average_score)));
    lines.push(ReportLine::blank());

    counts(&mut lines, "FIRMS BY STATE", &m.geography.firms);
    counts(&mut lines, "VENDORS BY STATE", &m.geography.vendors);
    counts(&mut lines, "PEOPLE BY STATE", &m.geography.employees);
    ranked(&mut lines, "COMMON TITLES", &m.top_titles);
    lines
}

pub fn anomalies(data: &Dataset, today: NaiveDate) -> Vec<ReportLine> {
    let found = find_anomalies(data, today);
    let mut lines = vec![ReportLine::heading(format!("{} FINDINGS", found.len()))];

    for severity in [Severity::High, Severity::Medium, Severity::Low] {
        let group: Vec<_> = found.iter().filter(|a| a.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        lines.push(ReportLine::blank());
        lines.push(ReportLine::heading(format!("{} SEVERITY", severity.to_string().to_uppercase())));
        for anomaly in group {
            lines.push(ReportLine::item(format!("{:<16} {}", anomaly.kind.to_string(), anomaly.message)));
        }
    }
    lines
}
