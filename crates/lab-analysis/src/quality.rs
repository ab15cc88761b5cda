//! Completeness and consistency metrics.

use std::collections::BTreeMap;

use lab_model::{Column, Consistency, Dataset, QualityMetrics};

use crate::stats::percentage;

pub fn quality_metrics(dataset: &Dataset) -> QualityMetrics {
    let total = dataset.len();
    let completeness: BTreeMap<Column, f64> = dataset
        .columns
        .present()
        .into_iter()
        .filter_map(|column| {
            let missing = dataset.missing_count(column)?;
            Some((column, percentage(total - missing, total)))
        })
        .collect();
    let consistency: BTreeMap<Column, Consistency> = Column::TEXT
        .into_iter()
        .filter_map(|column| {
            let unique_values = dataset.text_column(column)?.distinct().len();
            let uniqueness_ratio = if total == 0 {
                0.0
            } else {
                unique_values as f64 / total as f64
            };
            Some((
                column,
                Consistency {
                    unique_values,
                    uniqueness_ratio,
                },
            ))
        })
        .collect();
    QualityMetrics {
        completeness,
        consistency,
    }
}
