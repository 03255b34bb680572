//! Home section: announcements and the action report.

use casebook_data::Dataset;
use casebook_data::metrics::{AnomalyKind, anomalies, matter_metrics};
use casebook_table::{Column, ColumnKind, Row, Table};
use chrono::NaiveDate;

use super::{ReportLine, TablePage, ViewContext, table_config};
use crate::nav::Navigate;

const ANNOUNCEMENTS: &[(&str, &str, &str, &str)] = &[
    (
        "GENERAL ANNOUNCEMENTS",
        "Thursday, December 8, 2016",
        "Happy Holidays",
        "Happy Holidays to everyone in the organization. The offices will be closed \
         from December to January. Everyone please enjoy the holidays and be safe.",
    ),
    (
        "INSTRUCTIONS",
        "Tuesday, September 24, 2013",
        "Term: Reminders",
        "Short Term Reminder: sends an email shortly before the event to everyone \
         assigned to the matter. Long Term Reminder: sends an email in the distant \
         future to the people named in the reminder module for a matter.",
    ),
    (
        "GENERAL ANNOUNCEMENT",
        "Friday, July 22, 2011",
        "Blood Drive",
        "This year's Blood Drive will be kicking off on Tuesday. All employees are \
         encouraged to help out in this most worthwhile cause.",
    ),
];

/// Announcements followed by the review dates due in the next thirty days.
pub fn announcements(data: &Dataset, today: NaiveDate) -> Vec<ReportLine> {
    let mut lines = Vec::new();
    for (kind, date, title, body) in ANNOUNCEMENTS {
        lines.push(ReportLine::heading(format!("{}  ({})", kind, date)));
        lines.push(ReportLine::item(*title));
        lines.push(ReportLine::note(*body));
        lines.push(ReportLine::blank());
    }

    lines.push(ReportLine::heading("NEXT THIRTY DAYS:"));
    let upcoming = matter_metrics(&data.matters, today).upcoming_review_dates;
    if upcoming.is_empty() {
        lines.push(ReportLine::note("No matter events scheduled."));
    }
    for matter in upcoming {
        lines.push(ReportLine::item(format!(
            "{}  {}",
            matter.date.format("%m/%d"),
            matter.name
        )));
    }
    lines
}

/// Anomalies as rows; the subject links to the offending record.
pub fn action_rows(data: &Dataset, today: NaiveDate) -> Vec<Row> {
    anomalies(data, today)
        .into_iter()
        .map(|anomaly| {
            let target = match anomaly.kind {
                AnomalyKind::StaleMatter => "matter",
                AnomalyKind::DataGap | AnomalyKind::HighAdjustment => "invoice",
            };
            Row::new()
                .set("key", format!("{}:{}", anomaly.kind, anomaly.subject))
                .set("severity", anomaly.severity.to_string())
                .set("kind", anomaly.kind.to_string())
                .set("subject", anomaly.subject)
                .set("target", target)
                .set("message", anomaly.message)
        })
        .collect()
}

pub fn action_report(ctx: &ViewContext) -> TablePage {
    let outbox = ctx.outbox.clone();
    let columns = vec![
        Column::new("severity", "SEVERITY", 10).kind(ColumnKind::Status).sortable(),
        Column::new("kind", "TYPE", 16).sortable(),
        Column::new("subject", "RECORD", 12)
            .kind(ColumnKind::Link)
            .sortable()
            .link(move |row| {
                let Some(id) = row.get_str("subject") else { return };
                match row.get_str("target") {
                    Some("matter") => outbox.push(Navigate::Matter(id.to_string())),
                    _ => outbox.push(Navigate::Invoice(id.to_string())),
                }
            }),
        Column::new("message", "FINDING", 52),
    ];

    let today = ctx.today;
    let config = table_config(ctx)
        .key_field("key")
        .empty_message("No anomalies found.");
    TablePage::new(Table::new(columns, config), move |data| action_rows(data, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_action_rows_have_unique_keys() {
        let data = Dataset::load().unwrap();
        let rows = action_rows(&data, today());
        let mut keys: Vec<&str> = rows.iter().filter_map(|r| r.get_str("key")).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), rows.len());
    }

    #[test]
    fn test_announcements_list_review_dates() {
        let data = Dataset::load().unwrap();
        let lines = announcements(&data, today());
        let upcoming = lines
            .iter()
            .skip_while(|l| l.text != "NEXT THIRTY DAYS:")
            .skip(1)
            .count();
        assert_eq!(upcoming, 5);
    }

    #[test]
    fn test_announcements_without_events() {
        let lines = announcements(&Dataset::default(), today());
        assert_eq!(lines.last().unwrap().text, "No matter events scheduled.");
    }
}
