//! People and organisation lists.

use casebook_data::{Dataset, EmployeeType, EntityType};
use casebook_table::{Column, ColumnKind, DetailLine, PLACEHOLDER, Row, Table};

use super::{TablePage, ViewContext, columns, table_config};

/// Contact card beneath an expanded person.
pub fn person_detail(row: &Row) -> Vec<DetailLine> {
    let value = |field: &str| row.get_str(field).filter(|s| !s.is_empty());

    let mut lines = vec![DetailLine::field("Full Name", value("name").unwrap_or(PLACEHOLDER))];
    if let Some(title) = value("title") {
        lines.push(DetailLine::field("Title", title));
    }
    lines.push(DetailLine::field("Location", value("location").unwrap_or(PLACEHOLDER)));
    lines.push(DetailLine::field("Phone", value("phone").unwrap_or(PLACEHOLDER)));
    if let Some(entity) = value("entityName") {
        lines.push(DetailLine::field(
            "Associated Entity",
            format!("{} ({})", entity, value("entityType").unwrap_or(PLACEHOLDER)),
        ));
    }
    lines
}

/// Staff list beneath an expanded firm or vendor.
pub fn entity_detail(data: &Dataset, row: &Row) -> Vec<DetailLine> {
    let id = row.get_str("id").unwrap_or_default();
    let staff: Vec<_> = data.employees_of(id).collect();

    if staff.is_empty() {
        let kind = row.get_str("type").unwrap_or("entity").to_lowercase();
        return vec![DetailLine::text(format!("No employees associated with this {}.", kind))];
    }

    let mut lines = vec![DetailLine::text(format!("Employees ({})", staff.len()))];
    for employee in staff {
        let contact = [employee.title.as_deref(), employee.location.as_deref(), employee.phone.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" · ");
        lines.push(DetailLine::field(employee.name.clone(), contact));
    }
    lines
}

fn name_column(header: &str) -> Column {
    Column::new("name", header, 24)
        .kind(ColumnKind::ExpandableLink)
        .sortable()
}

pub fn in_house(ctx: &ViewContext) -> TablePage {
    let columns = vec![
        name_column("NAME"),
        Column::new("title", "JOB TITLE", 24).sortable().emphasis(),
        Column::new("location", "LOCATION", 26).sortable(),
        Column::new("phone", "PHONE", 14),
        columns::badges(),
    ];
    let table = Table::new(columns, table_config(ctx).detail(person_detail));
    TablePage::new(table, |data| employee_rows(data, |t| t == EmployeeType::InHouse))
}

/// Everyone outside the legal department.
pub fn individuals(ctx: &ViewContext) -> TablePage {
    let columns = vec![
        name_column("NAME"),
        Column::new("location", "LOCATION", 26).sortable(),
        Column::new("phone", "PHONE", 14),
        Column::new("entityName", "ENTITY", 24).sortable(),
        Column::new("employeeType", "TYPE", 10).sortable(),
        columns::badges(),
    ];
    let table = Table::new(columns, table_config(ctx).detail(person_detail));
    TablePage::new(table, |data| employee_rows(data, |t| t != EmployeeType::InHouse))
}

pub fn entities(ctx: &ViewContext, kind: EntityType) -> TablePage {
    let header = match kind {
        EntityType::Firm => "FIRM NAME",
        EntityType::Vendor => "VENDOR NAME",
    };
    let columns = vec![
        name_column(header),
        Column::new("location", "LOCATION", 30).sortable(),
        Column::new("phone", "PHONE", 14),
        columns::badges(),
    ];

    let data = ctx.data.clone();
    let config = table_config(ctx).detail(move |row| entity_detail(&data, row));
    let table = Table::new(columns, config);
    TablePage::new(table, move |data| entity_rows(data, kind))
}

fn employee_rows(data: &Dataset, admit: impl Fn(EmployeeType) -> bool) -> Vec<Row> {
    data.employees
        .iter()
        .filter(|employee| admit(employee.employee_type))
        .map(|employee| employee.to_row(data))
        .collect()
}

fn entity_rows(data: &Dataset, kind: EntityType) -> Vec<Row> {
    data.entities
        .iter()
        .filter(|entity| entity.kind == kind)
        .map(|entity| entity.to_row())
        .collect()
}
