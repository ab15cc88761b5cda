//! Rule-based recommendations derived from the other sections.

use lab_model::{
    AnalysisThresholds, EquipmentAnalysis, PerformanceAnalysis, Priority, Recommendation,
    RecommendationKind, Section, Summary,
};

use crate::grouping::worst_by_mean_yield;

/// Recommendations in rule order: overall performance, worst equipment,
/// then one entry per column with too many missing values.
pub fn recommendations(
    summary: &Summary,
    performance: &Section<PerformanceAnalysis>,
    equipment: &Section<EquipmentAnalysis>,
    thresholds: &AnalysisThresholds,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    let overall_mean = performance
        .computed()
        .and_then(|analysis| analysis.statistics)
        .map(|stats| stats.mean);
    if let Some(mean) = overall_mean
        && mean < thresholds.target_yield
    {
        out.push(Recommendation {
            kind: RecommendationKind::Performance,
            priority: Priority::High,
            title: "Overall yield below target".to_string(),
            description: format!(
                "Mean yield is {mean:.1}%, below the {:.1}% target.",
                thresholds.target_yield
            ),
            action: "Review process parameters and operator procedures on low-yield runs."
                .to_string(),
        });
    }

    let worst = equipment
        .computed()
        .and_then(|analysis| worst_by_mean_yield(&analysis.stats));
    if let Some((id, mean)) = worst
        && mean < thresholds.low_yield
    {
        out.push(Recommendation {
            kind: RecommendationKind::Equipment,
            priority: Priority::Medium,
            title: format!("Equipment {id} underperforming"),
            description: format!(
                "Equipment {id} averages {mean:.1}% yield, below the {:.1}% low-performance threshold.",
                thresholds.low_yield
            ),
            action: format!("Schedule maintenance and calibration for {id}."),
        });
    }

    if summary.total_records > 0 {
        for (column, &missing) in &summary.missing_values {
            let ratio = missing as f64 / summary.total_records as f64;
            if ratio > thresholds.missing_ratio {
                out.push(Recommendation {
                    kind: RecommendationKind::DataQuality,
                    priority: Priority::Low,
                    title: format!("Missing data in {column}"),
                    description: format!(
                        "Column {column} has {missing} missing values ({:.1}%).",
                        ratio * 100.0
                    ),
                    action: "Review the data capture process.".to_string(),
                });
            }
        }
    }

    out
}
