//! Display configuration for list endpoints.
//!
//! # Responsibility
//! - Load the per-resource display toggles from a JSON file.
//! - Tolerate a missing file by falling back to defaults.
//!
//! # Invariants
//! - Callers re-read the file per request; nothing here is cached.
//! - Defaults are conservative: no filtering, summaries only.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "config file unreadable: {err}"),
            Self::Parse(err) => write!(f, "config file malformed: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Display toggles for one resource collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Restrict list responses to records with stock on hand.
    pub show_available_only: bool,
    /// Return full records (identifier included) instead of summaries.
    pub show_full_information: bool,
}

/// Per-resource display configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub bicycles: DisplaySettings,
    pub bike_parts: DisplaySettings,
}

impl DisplayConfig {
    /// Reads and parses the configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Reads the configuration file, falling back to defaults when the
    /// file is missing or unreadable.
    ///
    /// Malformed content is logged and ignored rather than failing the
    /// request that triggered the read.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    "event=config_load module=config status=error path={} error={err}",
                    path.display()
                );
                Self::default()
            }
        }
    }
}
