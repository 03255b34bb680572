use casebook_data::metrics::{
    AnomalyKind, RiskLevel, Severity, anomalies, financial_metrics, invoice_metrics, matter_metrics,
    operational_metrics, people_metrics,
};
use casebook_data::{Dataset, EmployeeType, InvoiceStatus, matter_amounts};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn data() -> Dataset {
    Dataset::load().expect("bundled fixtures load")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

// ============================================================================
// Financial
// ============================================================================

#[test]
fn test_financial_totals() {
    let finance = financial_metrics(&data());
    assert_eq!(finance.total_spend, Decimal::new(20210, 0));
    assert_eq!(finance.total_original, Decimal::new(21110, 0));
    assert_eq!(finance.savings, Decimal::new(900, 0));
    assert!((finance.savings_rate - 4.263).abs() < 0.01);
    assert!((finance.rejection_rate - 16.667).abs() < 0.01);
}

#[test]
fn test_spend_by_firm_covers_total() {
    let finance = financial_metrics(&data());
    assert_eq!(finance.spend_by_firm.len(), 8);
    assert_eq!(
        finance.spend_by_firm.values().copied().sum::<Decimal>(),
        finance.total_spend
    );
}

#[test]
fn test_line_items_by_type_marks_unknown_codes() {
    let finance = financial_metrics(&data());
    assert_eq!(finance.line_items_by_type.get("Fee"), Some(&38));
    assert_eq!(finance.line_items_by_type.get("Disbursement"), Some(&19));
    assert_eq!(finance.line_items_by_type.get("Unknown"), Some(&1));
}

#[test]
fn test_matter_amounts() {
    let data = data();
    let amounts = matter_amounts(&data.matters, &data.invoices);
    assert_eq!(amounts.len(), 14);
    assert_eq!(amounts["CON-000793"], Decimal::new(2200, 0));
    assert_eq!(amounts["LIT-001204"], Decimal::new(4650, 0));
    assert_eq!(amounts["ADR-000019"], Decimal::ZERO);
}

// ============================================================================
// Matters
// ============================================================================

#[test]
fn test_matter_counts() {
    let data = data();
    let metrics = matter_metrics(&data.matters, today());
    assert_eq!(metrics.total, 14);
    assert_eq!(metrics.open, 10);
    assert_eq!(metrics.closed, 4);
    assert_eq!(metrics.by_status.values().sum::<usize>(), 14);
    assert_eq!(metrics.by_priority.values().sum::<usize>(), 14);
}

#[test]
fn test_upcoming_dates_within_window() {
    let data = data();
    let metrics = matter_metrics(&data.matters, today());

    let court: Vec<&str> = metrics.upcoming_court_dates.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(court, vec!["CON-000793", "LIT-001231", "LIT-001204"]);

    assert_eq!(metrics.upcoming_review_dates.len(), 5);
    assert!(
        metrics
            .upcoming_review_dates
            .windows(2)
            .all(|pair| pair[0].date <= pair[1].date)
    );
}

#[test]
fn test_stale_matters_oldest_first() {
    let data = data();
    let metrics = matter_metrics(&data.matters, today());
    let stale: Vec<&str> = metrics.stale.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(stale, vec!["ADR-000011", "REG-000071", "EMP-000318", "REG-000066"]);
    assert_eq!(metrics.stale[1].days_since_update, 165);
}

// ============================================================================
// Invoices
// ============================================================================

#[test]
fn test_invoice_status_breakdown() {
    let metrics = invoice_metrics(&data());
    assert_eq!(metrics.total_invoices, 24);

    let counts: Vec<(InvoiceStatus, usize)> = metrics
        .amounts_by_status
        .iter()
        .map(|s| (s.status, s.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            (InvoiceStatus::Pending, 10),
            (InvoiceStatus::Approved, 10),
            (InvoiceStatus::Rejected, 4),
        ]
    );
}

#[test]
fn test_top_line_items() {
    let metrics = invoice_metrics(&data());
    assert_eq!(metrics.top_line_items.len(), 10);
    assert_eq!(metrics.top_line_items[0].code, "L120");
    assert_eq!(metrics.top_line_items[0].count, 8);
    assert_eq!(metrics.top_line_items[1].code, "L110");
    assert_eq!(metrics.line_item_types.get("Other"), Some(&1));
}

#[test]
fn test_rejections_by_firm() {
    let metrics = invoice_metrics(&data());
    let worst = &metrics.rejections_by_firm[0];
    assert_eq!(worst.firm, "Paperworks Inc.");
    assert_eq!(worst.rate, 50.0);
    assert!(metrics.rejections_by_firm.iter().all(|f| f.invoices > 1));
}

// ============================================================================
// People and operations
// ============================================================================

#[test]
fn test_compliance_profile() {
    let data = data();
    let people = people_metrics(&data.entities, &data.employees);
    assert_eq!(people.compliance.count(RiskLevel::High), 2);
    assert_eq!(people.compliance.count(RiskLevel::Medium), 4);
    assert_eq!(people.compliance.count(RiskLevel::Low), 2);
    assert_eq!(people.compliance.average_score, 2.4);
    assert_eq!(people.top_titles[0], ("Partner".to_string(), 4));
    assert_eq!(people.geography.employees.get("CA"), Some(&3));
}

#[test]
fn test_message_activity() {
    let data = data();
    let ops = operational_metrics(&data.messages);
    assert_eq!(ops.total_messages, 16);
    assert_eq!(ops.by_matter.get("Unassigned"), Some(&8));
    assert_eq!(ops.by_employee_type[&EmployeeType::InHouse], 9);
    assert_eq!(ops.by_employee_type[&EmployeeType::Vendor], 2);
}

#[test]
fn test_no_messages_still_lists_sender_types() {
    let ops = operational_metrics(&[]);
    assert_eq!(ops.by_employee_type.len(), 3);
    assert!(ops.by_employee_type.values().all(|&n| n == 0));
}

// ============================================================================
// Anomalies
// ============================================================================

#[test]
fn test_anomalies() {
    let found = anomalies(&data(), today());
    assert_eq!(found.len(), 5);

    let of = |kind| -> Vec<&str> {
        found
            .iter()
            .filter(|a| a.kind == kind)
            .map(|a| a.subject.as_str())
            .collect()
    };
    assert_eq!(of(AnomalyKind::DataGap), vec!["INV-24008", "INV-24017"]);
    assert_eq!(of(AnomalyKind::HighAdjustment), vec!["INV-24007", "INV-24012"]);
    assert_eq!(of(AnomalyKind::StaleMatter), vec!["ADR-000011"]);
}

#[test]
fn test_anomaly_messages() {
    let found = anomalies(&data(), today());
    let gap = found.iter().find(|a| a.subject == "INV-24008").unwrap();
    assert_eq!(gap.severity, Severity::Medium);
    assert_eq!(gap.message, "Invoice INV-24008 has no linked matters.");

    let adjusted = found.iter().find(|a| a.subject == "INV-24007").unwrap();
    assert_eq!(adjusted.severity, Severity::High);
    assert!(adjusted.message.ends_with("adjusted by 45%."));
}

#[test]
fn test_stale_anomaly_depends_on_today() {
    let data = data();
    let early = NaiveDate::from_ymd_opt(2017, 6, 1).unwrap();
    assert!(
        anomalies(&data, early)
            .iter()
            .all(|a| a.kind != AnomalyKind::StaleMatter)
    );
}
