//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dsalab/dsalab.toml`
//! 3. Environment variables: `DSALAB_*` prefix

use std::fs;
use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{LabError, LabResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Cap on values stored in the BST history
    pub max_values: usize,
    /// Parking spots per garage
    pub garage_capacity: usize,
    /// Longest accepted plate number
    pub plate_max_len: usize,
    /// Playback interval for watch mode, in milliseconds
    pub tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_values: 30,
            garage_capacity: 10,
            plate_max_len: 11,
            tick_ms: 1000,
        }
    }
}

impl Settings {
    /// Path of the global config file, if a config directory exists.
    pub fn config_file() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dsalab").map(|dirs| dirs.config_dir().join("dsalab.toml"))
    }

    /// Loads settings with layered precedence.
    pub fn load() -> LabResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = Self::config_file() {
            if path.exists() {
                debug!("loading config file: {}", path.display());
                builder = builder.add_source(File::from(path));
            }
        }
        builder = builder.add_source(Environment::with_prefix("DSALAB").try_parsing(true));

        let config = builder.build()?;
        let settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Writes the compiled defaults to the global config file and returns
    /// its path.
    pub fn write_default() -> LabResult<PathBuf> {
        let path = Self::config_file().ok_or(LabError::ConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = toml::to_string_pretty(&Settings::default())?;
        fs::write(&path, body)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_overrides_when_defaulting_then_matches_display_policy() {
        let settings = Settings::default();
        assert_eq!(settings.max_values, 30);
        assert_eq!(settings.garage_capacity, 10);
        assert_eq!(settings.plate_max_len, 11);
        assert_eq!(settings.tick_ms, 1000);
    }

    #[test]
    fn given_toml_fragment_when_parsing_then_missing_keys_keep_defaults() {
        let settings: Settings = toml::from_str("tick_ms = 250\n").unwrap();
        assert_eq!(settings.tick_ms, 250);
        assert_eq!(settings.max_values, 30);
    }

    #[test]
    fn given_defaults_when_serializing_then_roundtrips() {
        let body = toml::to_string_pretty(&Settings::default()).unwrap();
        let parsed: Settings = toml::from_str(&body).unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
