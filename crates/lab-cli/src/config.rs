//! TOML configuration for the command-line front end.
//!
//! ```toml
//! [thresholds]
//! low_yield = 55.0
//! target_yield = 85.0
//!
//! [output]
//! include_originals = false
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use lab_model::AnalysisThresholds;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub thresholds: AnalysisThresholds,
    pub output: OutputSettings,
}

/// Options for exported files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Add `original_*` columns next to cleaned date, equipment and shift.
    pub include_originals: bool,
    /// Indent JSON reports.
    pub pretty_json: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            include_originals: true,
            pretty_json: true,
        }
    }
}

impl LabConfig {
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: LabConfig = toml::from_str(contents).context("parse configuration")?;
        config
            .thresholds
            .validate()
            .context("invalid [thresholds] section")?;
        Ok(config)
    }
}

/// Loads configuration from `path`, or defaults when no path is given or
/// the file does not exist.
pub fn load_config(path: Option<&Path>) -> Result<LabConfig> {
    let Some(path) = path else {
        return Ok(LabConfig::default());
    };
    match fs::read_to_string(path) {
        Ok(contents) => {
            let config = LabConfig::from_toml(&contents)
                .with_context(|| format!("load config: {}", path.display()))?;
            info!(path = %path.display(), "loaded configuration");
            Ok(config)
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "configuration file not found, using defaults");
            Ok(LabConfig::default())
        }
        Err(error) => Err(error).with_context(|| format!("read config: {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_sections_keep_defaults() {
        let config = LabConfig::from_toml("[thresholds]\nlow_yield = 55.0\n").expect("parse");
        assert_eq!(config.thresholds.low_yield, 55.0);
        assert_eq!(config.thresholds.target_yield, 80.0);
        assert_eq!(config.output, OutputSettings::default());
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(LabConfig::from_toml("").expect("parse"), LabConfig::default());
    }

    #[test]
    fn inconsistent_thresholds_rejected() {
        let result = LabConfig::from_toml("[thresholds]\nlow_yield = 95.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = load_config(Some(&dir.path().join("absent.toml"))).expect("defaults");
        assert_eq!(config, LabConfig::default());
    }
}
