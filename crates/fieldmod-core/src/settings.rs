//! Engine settings
//!
//! This module handles loading and merging engine settings from:
//! - Default values
//! - Settings files (TOML/JSON)
//! - Environment variables
//!
//! The defaults reproduce the established behavior of the engine; the
//! alternatives are opt-in.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Environment variable overriding [`EngineSettings::map_policy`]
pub const MAP_POLICY_ENV: &str = "FIELDMOD_MAP_POLICY";

/// Environment variable overriding [`EngineSettings::size_units`]
pub const SIZE_UNITS_ENV: &str = "FIELDMOD_SIZE_UNITS";

/// How map traversal rebuilds its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapPolicy {
    /// Only transformed keys survive; every payload becomes `true`
    #[default]
    KeySet,
    /// Payloads are carried over untouched under their transformed key
    PreserveValues,
}

/// Unit factor table for `FORMAT` on the `size` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeUnits {
    /// `GB` scales by 2^20, the same factor as `MB`
    #[default]
    Legacy,
    /// `GB` scales by 2^30
    Binary,
}

impl SizeUnits {
    /// Scale factor for a unit name, matched case-insensitively
    pub fn factor(&self, unit: &str) -> Option<f64> {
        let factor: u64 = match unit.to_ascii_uppercase().as_str() {
            "B" => 1,
            "KB" => 1 << 10,
            "MB" => 1 << 20,
            "GB" => match self {
                SizeUnits::Legacy => 1 << 20,
                SizeUnits::Binary => 1 << 30,
            },
            _ => return None,
        };
        Some(factor as f64)
    }
}

impl FromStr for MapPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "key_set" | "keyset" => Ok(MapPolicy::KeySet),
            "preserve_values" => Ok(MapPolicy::PreserveValues),
            _ => Err(Error::Configuration {
                message: format!("Invalid map policy: {}", s),
                source: None,
            }),
        }
    }
}

impl FromStr for SizeUnits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(SizeUnits::Legacy),
            "binary" => Ok(SizeUnits::Binary),
            _ => Err(Error::Configuration {
                message: format!("Invalid size units: {}", s),
                source: None,
            }),
        }
    }
}

impl fmt::Display for MapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapPolicy::KeySet => write!(f, "key_set"),
            MapPolicy::PreserveValues => write!(f, "preserve_values"),
        }
    }
}

impl fmt::Display for SizeUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeUnits::Legacy => write!(f, "legacy"),
            SizeUnits::Binary => write!(f, "binary"),
        }
    }
}

/// Settings shared by every call made through one engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Map traversal policy
    pub map_policy: MapPolicy,

    /// Size unit table
    pub size_units: SizeUnits,
}

impl EngineSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse settings from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load settings from a file, choosing the format by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Apply overrides from the process environment
    pub fn merge_with_env(&mut self) {
        self.merge_with_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source
    ///
    /// Invalid values are logged and leave the current setting in place.
    pub fn merge_with_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup(MAP_POLICY_ENV) {
            match policy.parse() {
                Ok(policy) => self.map_policy = policy,
                Err(e) => log::warn!("Ignoring {}: {}", MAP_POLICY_ENV, e),
            }
        }

        if let Some(units) = lookup(SIZE_UNITS_ENV) {
            match units.parse() {
                Ok(units) => self.size_units = units,
                Err(e) => log::warn!("Ignoring {}: {}", SIZE_UNITS_ENV, e),
            }
        }
    }

    /// Set the map policy
    pub fn with_map_policy(mut self, map_policy: MapPolicy) -> Self {
        self.map_policy = map_policy;
        self
    }

    /// Set the size unit table
    pub fn with_size_units(mut self, size_units: SizeUnits) -> Self {
        self.size_units = size_units;
        self
    }
}
