//! Dashboard configuration.

use casebook_data::format::parse_date;
use casebook_table::PageSize;
use chrono::NaiveDate;
use log::LevelFilter;
use thiserror::Error;

/// Date every date-relative metric is computed against.
pub const ENV_TODAY: &str = "CASEBOOK_TODAY";
/// Log level filter (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub const ENV_LOG: &str = "CASEBOOK_LOG";
/// Rows per page for freshly opened tables.
pub const ENV_PAGE_SIZE: &str = "CASEBOOK_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not a date (expected YYYY-MM-DD or MM/DD/YYYY)")]
    InvalidDate { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a log level")]
    InvalidLogLevel { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a page size (expected 5, 10, 20 or 40)")]
    InvalidPageSize { var: &'static str, value: String },
}

/// Settings for one dashboard session.
///
/// # Example
///
/// ```
/// use casebook_tui::config::DashboardConfig;
/// use casebook_table::PageSize;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// let config = DashboardConfig::new(today).page_size(PageSize::Twenty);
/// assert_eq!(config.page_size, PageSize::Twenty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Reference date for upcoming, stale and anomaly reports.
    pub today: NaiveDate,
    pub log_level: LevelFilter,
    pub page_size: PageSize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

impl DashboardConfig {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            log_level: LevelFilter::Debug,
            page_size: PageSize::default(),
        }
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(Self::default(), |var| std::env::var(var).ok())
    }

    /// Apply overrides found through `lookup` on top of `base`.
    ///
    /// Unset and empty variables keep the base value.
    pub fn from_lookup(
        base: Self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = base;

        if let Some(value) = read(ENV_TODAY) {
            config.today = parse_date(&value).ok_or(ConfigError::InvalidDate {
                var: ENV_TODAY,
                value,
            })?;
        }

        if let Some(value) = read(ENV_LOG) {
            config.log_level = value
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel { var: ENV_LOG, value })?;
        }

        if let Some(value) = read(ENV_PAGE_SIZE) {
            config.page_size = value
                .parse::<usize>()
                .ok()
                .and_then(|n| PageSize::try_from(n).ok())
                .ok_or(ConfigError::InvalidPageSize {
                    var: ENV_PAGE_SIZE,
                    value,
                })?;
        }

        Ok(config)
    }
}
