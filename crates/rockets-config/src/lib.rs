//! # rockets-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ROCKETS_*` prefix, `__` as separator)
//! 2. Project-level `.rockets/config.toml`
//! 3. User-level `~/.config/rockets/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ROCKETS_GENERAL__DATA_PATH` -> `general.data_path`,
//! `ROCKETS_REPORT__COUNTRIES` -> `report.countries`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rockets_config::RocketsConfig;
//!
//! let config = RocketsConfig::load_with_dotenv().expect("config");
//! println!("default k = {}", config.general.default_limit);
//! ```

mod error;
mod general;
mod report;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RocketsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl RocketsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if the merged values are out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if there is one.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer more providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".rockets/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ROCKETS_").split("__"))
    }

    /// Check merged values that serde cannot reject on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero default limit or a blank
    /// country entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.report.countries.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "report.countries".to_string(),
                reason: "entries must not be blank".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rockets").join("config.toml"))
    }
}
