//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::features::life_calendar::DEFAULT_CURRENT_YEAR_COLUMNS;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// UI appearance and refresh settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between clock ticks, used to notice the date rolling over.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Columns in the current-year grid.
    #[serde(default = "default_current_year_columns")]
    pub current_year_columns: u16,
    #[serde(default = "default_true")]
    pub show_week_numbers: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            current_year_columns: default_current_year_columns(),
            show_week_numbers: true,
        }
    }
}

/// Where settings and goals are persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Diagnostic log file settings. A TUI owns stdout, so logs always go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

/// Values used before the user has picked their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_life_expectancy")]
    pub life_expectancy: u32,
    /// The default birthday is this many years before today.
    #[serde(default = "default_birthday_years_ago")]
    pub birthday_years_ago: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            life_expectancy: default_life_expectancy(),
            birthday_years_ago: default_birthday_years_ago(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate_ms() -> u64 {
    1000
}
fn default_current_year_columns() -> u16 {
    DEFAULT_CURRENT_YEAR_COLUMNS
}
fn default_data_dir() -> String {
    "~/.local/share/lifegrid".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/lifegrid/logs".to_string()
}
fn default_life_expectancy() -> u32 {
    80
}
fn default_birthday_years_ago() -> u32 {
    28
}
