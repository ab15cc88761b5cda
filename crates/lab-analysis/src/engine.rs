use lab_model::{AnalysisResult, AnalysisThresholds, Dataset, Result};
use tracing::{debug, info, info_span};

use crate::anomalies::detect_anomalies;
use crate::grouping::{equipment_analysis, shift_analysis};
use crate::performance::performance_analysis;
use crate::quality::quality_metrics;
use crate::recommendations::recommendations;
use crate::summary::summarize;
use crate::temporal::temporal_analysis;

/// Analyzes a cleaned dataset with the default thresholds.
pub fn analyze(dataset: &Dataset) -> AnalysisResult {
    run(dataset, &AnalysisThresholds::default())
}

/// Analyzes a cleaned dataset with custom thresholds.
///
/// Fails only when the thresholds themselves are inconsistent.
pub fn analyze_with(dataset: &Dataset, thresholds: &AnalysisThresholds) -> Result<AnalysisResult> {
    thresholds.validate()?;
    Ok(run(dataset, thresholds))
}

fn run(dataset: &Dataset, thresholds: &AnalysisThresholds) -> AnalysisResult {
    let span = info_span!("analyze", records = dataset.len());
    let _guard = span.enter();
    info!(records = dataset.len(), "starting statistical analysis");

    let summary = summarize(dataset);
    debug!("computed summary");
    let performance = performance_analysis(dataset, thresholds);
    debug!(computed = performance.is_computed(), "computed performance");
    let equipment = equipment_analysis(dataset);
    let shifts = shift_analysis(dataset);
    debug!(
        equipment = equipment.is_computed(),
        shifts = shifts.is_computed(),
        "computed group statistics"
    );
    let temporal = temporal_analysis(dataset);
    let anomalies = detect_anomalies(dataset, thresholds);
    let quality = quality_metrics(dataset);
    let recommendations = recommendations(&summary, &performance, &equipment, thresholds);

    info!(
        anomalies = anomalies.total(),
        recommendations = recommendations.len(),
        "statistical analysis complete"
    );
    AnalysisResult {
        summary,
        performance,
        equipment,
        shifts,
        temporal,
        anomalies,
        quality,
        recommendations,
    }
}
