//! Data loading errors.

use thiserror::Error;

/// Errors raised while loading the bundled dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// A fixture file is not valid JSON for its model.
    #[error("failed to parse fixture '{name}': {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A record points at another record that does not exist.
    #[error("{kind} '{id}' references unknown {target} '{reference}'")]
    DanglingReference {
        kind: &'static str,
        id: String,
        target: &'static str,
        reference: String,
    },
}
