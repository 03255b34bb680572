//! Dashboard error types.

use std::io;

use casebook_data::DataError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end a dashboard session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load dataset: {0}")]
    Data(#[from] DataError),

    /// Terminal or log file I/O.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
