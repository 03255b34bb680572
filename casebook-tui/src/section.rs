//! Top-level sections and their tabs.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Matters,
    Finance,
    Messages,
    People,
    Reporting,
}

impl Section {
    /// Sections in navigation order; digit `n` selects `ALL[n - 1]`.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Matters,
        Section::Finance,
        Section::Messages,
        Section::People,
        Section::Reporting,
    ];

    /// Section selected by a digit key, `1`-based.
    pub fn from_digit(digit: u32) -> Option<Self> {
        let index = (digit as usize).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::Matters => "MATTERS",
            Section::Finance => "FINANCE",
            Section::Messages => "MESSAGES",
            Section::People => "PEOPLE",
            Section::Reporting => "REPORTING",
        }
    }

    pub fn tabs(self) -> &'static [Tab] {
        match self {
            Section::Home => &[Tab::Announcements, Tab::ActionReport],
            Section::Matters => &[Tab::AllMatters, Tab::OpenMatters, Tab::ClosedMatters],
            Section::Finance => &[
                Tab::InvoiceList,
                Tab::PendingInvoices,
                Tab::ApprovedInvoices,
                Tab::RejectedInvoices,
            ],
            Section::Messages => &[
                Tab::AllMessages,
                Tab::TeamMessages,
                Tab::InvoiceMessages,
                Tab::MatterMessages,
            ],
            Section::People => &[Tab::InHouse, Tab::Firms, Tab::Vendors, Tab::Individuals],
            Section::Reporting => &[
                Tab::FinancialReport,
                Tab::MattersReport,
                Tab::OperationsReport,
                Tab::InvoicesReport,
                Tab::PeopleReport,
                Tab::AnomaliesReport,
            ],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Announcements,
    ActionReport,
    AllMatters,
    OpenMatters,
    ClosedMatters,
    InvoiceList,
    PendingInvoices,
    ApprovedInvoices,
    RejectedInvoices,
    AllMessages,
    TeamMessages,
    InvoiceMessages,
    MatterMessages,
    InHouse,
    Firms,
    Vendors,
    Individuals,
    FinancialReport,
    MattersReport,
    OperationsReport,
    InvoicesReport,
    PeopleReport,
    AnomaliesReport,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Announcements => "Announcements",
            Tab::ActionReport => "Action Report",
            Tab::AllMatters => "All Matters",
            Tab::OpenMatters => "Open Matters",
            Tab::ClosedMatters => "Closed Matters",
            Tab::InvoiceList => "Invoice List",
            Tab::PendingInvoices => "Pending Invoices",
            Tab::ApprovedInvoices => "Approved Invoices",
            Tab::RejectedInvoices => "Rejected Invoices",
            Tab::AllMessages => "All Messages",
            Tab::TeamMessages => "Team Messages",
            Tab::InvoiceMessages => "Invoice Messages",
            Tab::MatterMessages => "Matter Messages",
            Tab::InHouse => "In-House",
            Tab::Firms => "Firms",
            Tab::Vendors => "Vendors",
            Tab::Individuals => "Individuals",
            Tab::FinancialReport => "Financial",
            Tab::MattersReport => "Matters",
            Tab::OperationsReport => "Operations",
            Tab::InvoicesReport => "Invoices",
            Tab::PeopleReport => "People",
            Tab::AnomaliesReport => "Anomalies",
        }
    }
}
