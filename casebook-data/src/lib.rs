//! Records, derived amounts and reporting metrics for the casebook dashboard.
//!
//! The dataset is bundled with the crate and loaded with [`Dataset::load`].
//! Models project into [`casebook_table::Row`]s for display; metrics reduce
//! the dataset into summaries for the reporting views.
//!
//! ```
//! use casebook_data::{Dataset, metrics};
//!
//! let data = Dataset::load().unwrap();
//! let finance = metrics::financial_metrics(&data);
//! assert_eq!(finance.spend_by_firm.values().sum::<rust_decimal::Decimal>(), finance.total_spend);
//! ```

pub mod amounts;
pub mod format;
pub mod metrics;
pub mod model;

mod dataset;
mod error;

pub use amounts::{InvoiceAmounts, invoice_amounts, matter_amounts};
pub use dataset::Dataset;
pub use error::DataError;
pub use model::{
    Employee, EmployeeType, Entity, EntityType, Invoice, InvoiceStatus, LineItem, LineItemType,
    Matter, MatterStatus, Priority, TextRecord,
};
