//! Dashboard records.
//!
//! Each record deserializes from the bundled fixtures and projects itself
//! into a table [`Row`](casebook_table::Row) with `to_row`, joining display
//! fields (firm names, recipients, employers) from the [`Dataset`](crate::Dataset).
//! Dates in rows use `YYYY-MM-DD` so they sort chronologically.

mod invoice;
mod matter;
mod message;
mod people;

pub use invoice::{Invoice, InvoiceStatus, LineItem, LineItemType, NO_MATTER};
pub use matter::{Matter, MatterStatus, Priority, matter_id_from_display};
pub use message::TextRecord;
pub use people::{Compliance, Employee, EmployeeType, Entity, EntityType, state_of};
