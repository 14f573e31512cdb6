//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default `k` for ranking commands.
const fn default_limit() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Dataset file (JSON) the repository is loaded from.
    #[serde(default)]
    pub data_path: String,

    /// Optional preparation file with prices and payloads to apply before reports.
    #[serde(default)]
    pub enrichment_path: String,

    /// Default result limit for ranking commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl GeneralConfig {
    #[must_use]
    pub fn has_data_path(&self) -> bool {
        !self.data_path.trim().is_empty()
    }

    /// The configured dataset path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` if no path is set.
    pub fn data_path(&self) -> Result<PathBuf, ConfigError> {
        if !self.has_data_path() {
            return Err(ConfigError::NotConfigured {
                section: "general.data_path".to_string(),
            });
        }
        Ok(PathBuf::from(&self.data_path))
    }

    #[must_use]
    pub fn enrichment_path(&self) -> Option<PathBuf> {
        let trimmed = self.enrichment_path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_path: String::new(),
            enrichment_path: String::new(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.data_path.is_empty());
        assert!(config.enrichment_path().is_none());
        assert_eq!(config.default_limit, 10);
    }

    #[test]
    fn missing_data_path_is_not_configured() {
        let err = GeneralConfig::default().data_path().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { .. }));
    }
}
