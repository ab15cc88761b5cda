//! Analysis thresholds.
//!
//! The defaults are the domain values used by the laboratory; a
//! configuration file may restate them.

use serde::{Deserialize, Serialize};

use crate::error::{LabError, Result};

/// Cut-offs used by bucketing, trend classification, outlier rules and
/// recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisThresholds {
    /// Yields below this are "low" performance.
    pub low_yield: f64,
    /// Yields at or above this are "high"; the overall mean should reach it.
    pub target_yield: f64,
    /// Absolute slope (yield points per day) separating stable from trending.
    pub trend_slope: f64,
    /// Tukey fence multiplier applied to the interquartile range.
    pub iqr_multiplier: f64,
    /// Standard deviations from the mean before a sample count is extreme.
    pub sample_sigma: f64,
    /// Missing-value ratio above which a column gets a data-quality alert.
    pub missing_ratio: f64,
}

impl Default for AnalysisThresholds {
    fn default() -> Self {
        Self {
            low_yield: 60.0,
            target_yield: 80.0,
            trend_slope: 0.1,
            iqr_multiplier: 1.5,
            sample_sigma: 3.0,
            missing_ratio: 0.10,
        }
    }
}

impl AnalysisThresholds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects threshold sets that would make the buckets or fences
    /// meaningless.
    pub fn validate(&self) -> Result<()> {
        let ordered = self.low_yield < self.target_yield;
        if !ordered {
            return Err(LabError::InvalidThreshold {
                name: "low_yield",
                message: format!(
                    "must be below target_yield ({} >= {})",
                    self.low_yield, self.target_yield
                ),
            });
        }
        let non_negative = [
            ("trend_slope", self.trend_slope),
            ("iqr_multiplier", self.iqr_multiplier),
            ("sample_sigma", self.sample_sigma),
        ];
        for (name, value) in non_negative {
            let valid = value >= 0.0;
            if !valid {
                return Err(LabError::InvalidThreshold {
                    name,
                    message: format!("must be non-negative, got {value}"),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.missing_ratio) {
            return Err(LabError::InvalidThreshold {
                name: "missing_ratio",
                message: format!("must be within 0..=1, got {}", self.missing_ratio),
            });
        }
        Ok(())
    }
}
