//! Terminal dashboard over the casebook dataset.
//!
//! Sections and tabs map to [`views`], each either a [`casebook_table::Table`]
//! or a text report. [`app::App`] turns key commands into table events and
//! navigation; [`terminal`] draws the composed frame with crossterm.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod nav;
pub mod paths;
pub mod section;
pub mod terminal;
pub mod views;

pub use app::App;
pub use config::DashboardConfig;
pub use error::AppError;
