//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Reporting configuration.
///
/// The status cutoffs are a product decision with no documented rationale,
/// so they live in configuration rather than code.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Utilization percentage at or above which a budget counts as on track.
    #[serde(default = "default_on_track_percent")]
    pub on_track_percent: Decimal,
    /// Utilization percentage at or above which an approaching-limit alert fires.
    #[serde(default = "default_alert_percent")]
    pub alert_percent: Decimal,
}

fn default_on_track_percent() -> Decimal {
    Decimal::from(90)
}

fn default_alert_percent() -> Decimal {
    Decimal::from(80)
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            on_track_percent: default_on_track_percent(),
            alert_percent: default_alert_percent(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LUSTRE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
