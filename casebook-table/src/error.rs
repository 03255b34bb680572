//! Table error types.

use thiserror::Error;

/// Errors returned by table operations that take caller input.
///
/// Rendering never fails: missing values, out-of-range pages and rows
/// without a key all degrade silently. These errors only cover requests
/// that would break a table invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The sort key does not name a column of this table.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// The column exists but is not marked sortable.
    #[error("column '{0}' is not sortable")]
    NotSortable(String),

    /// Page size outside the supported set.
    #[error("unsupported page size {0} (expected one of 5, 10, 20, 40)")]
    InvalidPageSize(usize),
}
