//! Outlier detection on yields (Tukey fences) and sample counts (sigma band).

use lab_model::{
    AnalysisThresholds, Anomalies, AnomalyDirection, Column, Dataset, PerformanceAnomalies,
    PerformanceAnomaly, SampleAnomalies, SampleAnomaly, SampleBounds, Section, TukeyFences,
};

use crate::stats::{mean, quantile, sample_std};

/// Fences at `multiplier` interquartile ranges beyond Q1 and Q3.
pub fn tukey_fences(values: &[f64], multiplier: f64) -> Option<TukeyFences> {
    let q1 = quantile(values, 0.25)?;
    let q3 = quantile(values, 0.75)?;
    let iqr = q3 - q1;
    Some(TukeyFences {
        q1,
        q3,
        iqr,
        lower: q1 - multiplier * iqr,
        upper: q3 + multiplier * iqr,
    })
}

/// Band of `sigma` sample standard deviations around the mean, floored at 0.
pub fn sample_bounds(values: &[f64], sigma: f64) -> Option<SampleBounds> {
    let mean = mean(values)?;
    let std = sample_std(values);
    Some(SampleBounds {
        mean,
        std,
        lower: (mean - sigma * std).max(0.0),
        upper: mean + sigma * std,
    })
}

/// Direction of a value strictly outside `[lower, upper]`.
fn outside(value: f64, lower: f64, upper: f64) -> Option<AnomalyDirection> {
    if value < lower {
        Some(AnomalyDirection::Low)
    } else if value > upper {
        Some(AnomalyDirection::High)
    } else {
        None
    }
}

pub fn performance_anomalies(
    dataset: &Dataset,
    thresholds: &AnalysisThresholds,
) -> Section<PerformanceAnomalies> {
    let Some(yields) = dataset.yields() else {
        return Section::missing(Column::YieldPercent);
    };
    let fences = tukey_fences(&yields.present(), thresholds.iqr_multiplier);
    let records = fences
        .map(|fences| {
            dataset
                .records
                .iter()
                .enumerate()
                .filter_map(|(index, record)| {
                    let value = yields.value_of(record)?;
                    Some(PerformanceAnomaly {
                        index,
                        date: record.date,
                        equipment: record.equipment.clone(),
                        yield_percent: value,
                        direction: outside(value, fences.lower, fences.upper)?,
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    Section::Computed(PerformanceAnomalies { fences, records })
}

pub fn sample_anomalies(
    dataset: &Dataset,
    thresholds: &AnalysisThresholds,
) -> Section<SampleAnomalies> {
    let Some(samples) = dataset.samples() else {
        return Section::missing(Column::SamplesProcessed);
    };
    let bounds = sample_bounds(&samples.present(), thresholds.sample_sigma);
    let records = bounds
        .map(|bounds| {
            dataset
                .records
                .iter()
                .enumerate()
                .filter_map(|(index, record)| {
                    let value = samples.value_of(record)?;
                    Some(SampleAnomaly {
                        index,
                        date: record.date,
                        equipment: record.equipment.clone(),
                        samples_processed: value,
                        direction: outside(value, bounds.lower, bounds.upper)?,
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    Section::Computed(SampleAnomalies { bounds, records })
}

pub fn detect_anomalies(dataset: &Dataset, thresholds: &AnalysisThresholds) -> Anomalies {
    Anomalies {
        performance: performance_anomalies(dataset, thresholds),
        samples: sample_anomalies(dataset, thresholds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fences_for_reference_yields() {
        let fences = tukey_fences(&[10.0, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 90.0], 1.5)
            .expect("fences");
        assert!((fences.q1 - 20.75).abs() < 1e-9);
        assert!((fences.q3 - 24.25).abs() < 1e-9);
        assert!((fences.lower - 15.5).abs() < 1e-9);
        assert!((fences.upper - 29.5).abs() < 1e-9);
    }

    #[test]
    fn sample_lower_bound_is_floored() {
        let bounds = sample_bounds(&[1.0, 50.0, 100.0], 3.0).expect("bounds");
        assert_eq!(bounds.lower, 0.0);
        assert!(bounds.upper > 100.0);
    }

    #[test]
    fn values_on_bound_are_not_outliers() {
        assert_eq!(outside(15.5, 15.5, 29.5), None);
        assert_eq!(outside(29.5, 15.5, 29.5), None);
        assert_eq!(outside(15.4, 15.5, 29.5), Some(AnomalyDirection::Low));
    }
}
