//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading wage
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, PublicHoliday};

use super::types::{HolidaysConfig, PremiumConfig, WageConfig};

/// Loads and provides access to wage configuration.
///
/// # Directory Structure
///
/// ```text
/// config/ch/
/// ├── premiums.yaml   # Night window, premium rates, overtime threshold
/// └── holidays.yaml   # Public holiday calendar
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_wage_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/ch")?;
/// let date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
/// if let Some(holiday) = loader.holiday_on(date) {
///     println!("{} is {}", date, holiday.name);
/// }
/// # Ok::<(), shift_wage_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: WageConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let premiums = Self::load_yaml::<PremiumConfig>(&path.join("premiums.yaml"))?;
        let holidays = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;

        tracing::debug!(
            path = %path.display(),
            holidays = holidays.holidays.len(),
            "Loaded wage configuration"
        );

        let config = WageConfig::new(premiums, HolidayCalendar::new(holidays.holidays));
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: WageConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying wage configuration.
    pub fn config(&self) -> &WageConfig {
        &self.config
    }

    /// Returns the premium configuration.
    pub fn premiums(&self) -> &PremiumConfig {
        self.config.premiums()
    }

    /// Returns the configured public holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        self.config.holidays().holiday_on(date)
    }
}
