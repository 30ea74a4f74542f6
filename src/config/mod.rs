//! Configuration loading and management for the Shift Wage Engine.
//!
//! This module provides functionality to load wage configurations from YAML files,
//! including the night window, premium rates, overtime settings and the public
//! holiday calendar.
//!
//! # Example
//!
//! ```no_run
//! use shift_wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ch").unwrap();
//! println!("Currency: {}", config.premiums().currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub(crate) use types::minute_of_day_of;
pub use types::{
    HolidaysConfig, NightWindow, OvertimeConfig, PremiumConfig, PremiumRates, WageConfig,
};
