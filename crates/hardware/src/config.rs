//! Configuration system for the virtual memory simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Every field has a default, so an empty JSON object is a valid config.
//! 2. **Structures:** Hierarchical config for general and output settings.
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! The page, frame and TLB geometry is fixed (see [`crate::common::constants`]) and is not configurable.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::AccessType;
use crate::common::error::Result;

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use vmsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.access, vmsim_core::common::AccessType::Write);
/// assert!(config.output.translations);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use vmsim_core::common::AccessType;
/// use vmsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "access": "Read" },
///     "output": { "translations": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.access, AccessType::Read);
/// assert!(!config.output.translations);
/// assert!(config.output.summary);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Report settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`](crate::common::SimError::Config) for malformed JSON
    /// or unknown fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Access type issued for every trace record (defaults to `Write`).
    #[serde(default)]
    pub access: AccessType,
}

/// Report settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Print one line per translation.
    #[serde(default = "OutputConfig::default_enabled")]
    pub translations: bool,

    /// Print the end-of-run summary.
    #[serde(default = "OutputConfig::default_enabled")]
    pub summary: bool,
}

impl OutputConfig {
    /// Both report sections are on unless turned off.
    const fn default_enabled() -> bool {
        true
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            translations: true,
            summary: true,
        }
    }
}
