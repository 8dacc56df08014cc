//! Runtime configuration.
//!
//! Values come from defaults, then environment variables (a `.env` file is
//! loaded by the binary before this runs), then CLI flags.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Directory where saved datasets live (relative to current dir)
pub const DEFAULT_DATASETS_DIR: &str = "datasets";

pub const DATASETS_DIR_ENV: &str = "FIFA_DATASETS_DIR";
pub const REFERENCE_YEAR_ENV: &str = "FIFA_REFERENCE_YEAR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Flat directory holding `<name>.csv` datasets.
    pub datasets_dir: PathBuf,
    /// Year contracts must reach to be kept. `None` uses the current year at call time.
    pub reference_year: Option<i32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            datasets_dir: PathBuf::from(DEFAULT_DATASETS_DIR),
            reference_year: None,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `FIFA_DATASETS_DIR` and `FIFA_REFERENCE_YEAR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATASETS_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            config.datasets_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(REFERENCE_YEAR_ENV) {
            let year = raw.trim().parse::<i32>().map_err(|e| ConfigError::InvalidValue {
                key: REFERENCE_YEAR_ENV.to_string(),
                value: raw.clone(),
                message: e.to_string(),
            })?;
            config.reference_year = Some(year);
        }

        Ok(config)
    }

    pub fn with_datasets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.datasets_dir = dir.into();
        self
    }

    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.datasets_dir, PathBuf::from("datasets"));
        assert_eq!(config.reference_year, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (DATASETS_DIR_ENV, "/srv/fifa"),
            (REFERENCE_YEAR_ENV, " 2024 "),
        ]))
        .unwrap();
        assert_eq!(config.datasets_dir, PathBuf::from("/srv/fifa"));
        assert_eq!(config.reference_year, Some(2024));
    }

    #[test]
    fn test_invalid_year_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(REFERENCE_YEAR_ENV, "next")])).unwrap_err();
        assert!(err.to_string().contains(REFERENCE_YEAR_ENV));
        assert!(err.to_string().contains("next"));
    }
}
