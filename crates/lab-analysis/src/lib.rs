//! Statistical analysis of cleaned laboratory production data.
//!
//! [`analyze`] runs every section over one dataset snapshot. Sections that
//! need an absent column report it through [`lab_model::Section`] and the
//! rest of the analysis still runs.
//!
//! - **stats**: mean, sample deviation, interpolated quantiles, slope
//! - **summary**: record counts, date range, missing values
//! - **performance**: yield distribution, buckets and daily trend
//! - **grouping**: per-equipment and per-shift aggregates
//! - **temporal**: weekday, ISO week and month patterns
//! - **anomalies**: Tukey fences on yields, sigma band on sample counts
//! - **quality**: completeness and consistency
//! - **recommendations**: rule-based follow-up actions

pub mod anomalies;
mod engine;
pub mod grouping;
pub mod performance;
pub mod quality;
pub mod recommendations;
pub mod stats;
pub mod summary;
pub mod temporal;

pub use engine::{analyze, analyze_with};
pub use performance::classify;
