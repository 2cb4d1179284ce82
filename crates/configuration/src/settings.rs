use core_types::Horizon;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub journal: JournalSettings,
    #[serde(default)]
    pub projection: ProjectionDefaults,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where trades come from and how many buckets the dashboard shows.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JournalSettings {
    /// Path to the JSON journal file.
    pub path: PathBuf,
    /// Number of most recent buckets kept by the aggregator.
    pub bucket_window: usize,
}

/// Values the calculator starts from when no flag overrides them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectionDefaults {
    pub capital: Decimal,
    /// Percentage of capital risked per period (1 means 1%).
    pub risk_pct: Decimal,
    /// A positive value replaces the percentage-derived risk amount.
    pub fixed_risk: Decimal,
    pub horizon: Horizon,
    pub daily_rate_pct: Decimal,
    pub schedule_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---
// These allow a user to omit any section from their toml.

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("trades.json"),
            bucket_window: 12,
        }
    }
}

impl Default for ProjectionDefaults {
    fn default() -> Self {
        Self {
            capital: dec!(10000),
            risk_pct: dec!(1),
            fixed_risk: Decimal::ZERO,
            horizon: Horizon::Weekly,
            daily_rate_pct: dec!(1),
            schedule_days: 20,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Checks the values that cannot be expressed through types alone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.journal.bucket_window == 0 {
            return Err(ConfigError::ValidationError(
                "journal.bucket_window must be at least 1".to_string(),
            ));
        }
        let p = &self.projection;
        if p.capital < Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "projection.capital must not be negative".to_string(),
            ));
        }
        if p.risk_pct < Decimal::ZERO || p.risk_pct > dec!(100) {
            return Err(ConfigError::ValidationError(
                "projection.risk_pct must be between 0 and 100".to_string(),
            ));
        }
        if p.fixed_risk < Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "projection.fixed_risk must not be negative".to_string(),
            ));
        }
        if p.schedule_days <= 0 {
            return Err(ConfigError::ValidationError(
                "projection.schedule_days must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
