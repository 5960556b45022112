use crate::domain::chart::DisplayConfig;
use crate::domain::errors::ConfigError;
use crate::domain::market_data::{Instrument, LookbackPeriod, TimeInterval};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Accepted refresh intervals in seconds
pub const REFRESH_RANGE_SECS: RangeInclusive<u64> = 30..=300;

/// Periodic reload driven by a timer owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoRefresh {
    pub enabled: bool,
    pub interval_secs: u64,
}

impl Default for AutoRefresh {
    fn default() -> Self {
        Self { enabled: false, interval_secs: 60 }
    }
}

/// Settings of a whole dashboard page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub instruments: Vec<Instrument>,
    pub period: LookbackPeriod,
    /// Overrides the period's default sampling interval
    pub interval: Option<TimeInterval>,
    pub display: DisplayConfig,
    pub auto_refresh: AutoRefresh,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            instruments: Instrument::default_selection(),
            period: LookbackPeriod::default(),
            interval: None,
            display: DisplayConfig::default(),
            auto_refresh: AutoRefresh::default(),
        }
    }
}

impl DashboardConfig {
    /// Parses and validates a JSON document; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auto_refresh.enabled && !REFRESH_RANGE_SECS.contains(&self.auto_refresh.interval_secs) {
            return Err(ConfigError::RefreshOutOfRange(self.auto_refresh.interval_secs));
        }
        self.display.validate()?;
        Ok(())
    }

    pub fn interval(&self) -> TimeInterval {
        self.interval.unwrap_or_else(|| self.period.default_interval())
    }

    /// Display settings labelled for one instrument
    pub fn display_for(&self, instrument: &Instrument) -> DisplayConfig {
        DisplayConfig {
            instrument: instrument.name.clone(),
            currency: instrument.currency.clone(),
            ..self.display.clone()
        }
    }

    /// Delay before the host should reload, `None` when auto-refresh is off
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.auto_refresh
            .enabled
            .then(|| Duration::from_secs(self.auto_refresh.interval_secs))
    }
}
