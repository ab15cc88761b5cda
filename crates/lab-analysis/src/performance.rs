//! Yield distribution, performance buckets and the daily trend.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use lab_model::{
    AnalysisThresholds, BucketCounts, BucketPercentages, Column, DailyAverage, Dataset,
    PerformanceAnalysis, PerformanceBucket, Section, Trend, TrendDirection, TrendEstimate,
};
use tracing::debug;

use crate::stats::{describe, mean, percentage, sample_std, slope};

/// Buckets a yield: below `low_yield` is low, below `target_yield` medium,
/// anything else high.
pub fn classify(yield_percent: f64, thresholds: &AnalysisThresholds) -> PerformanceBucket {
    if yield_percent < thresholds.low_yield {
        PerformanceBucket::Low
    } else if yield_percent < thresholds.target_yield {
        PerformanceBucket::Medium
    } else {
        PerformanceBucket::High
    }
}

pub fn performance_analysis(
    dataset: &Dataset,
    thresholds: &AnalysisThresholds,
) -> Section<PerformanceAnalysis> {
    let Some(yields) = dataset.yields() else {
        return Section::missing(Column::YieldPercent);
    };
    let values = yields.present();

    let mut distribution = BucketCounts::default();
    for &value in &values {
        distribution.add(classify(value, thresholds));
    }
    let total = distribution.total();
    let distribution_percentage = (total > 0).then(|| BucketPercentages {
        low: percentage(distribution.low, total),
        medium: percentage(distribution.medium, total),
        high: percentage(distribution.high, total),
    });

    Section::Computed(PerformanceAnalysis {
        statistics: describe(&values),
        distribution,
        distribution_percentage,
        trend: trend(dataset, thresholds),
    })
}

/// Mean yield per calendar day, ascending by date. Days without any yield
/// are left out.
pub fn daily_averages(dataset: &Dataset) -> Option<Vec<DailyAverage>> {
    let yields = dataset.yields()?;
    let dates = dataset.dates()?;
    let mut by_day: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for (date, value) in dates.values().zip(yields.values()) {
        if let (Some(date), Some(value)) = (date, value) {
            by_day.entry(date).or_default().push(value);
        }
    }
    Some(
        by_day
            .into_iter()
            .filter_map(|(date, values)| {
                Some(DailyAverage {
                    date,
                    mean_yield: mean(&values)?,
                })
            })
            .collect(),
    )
}

pub fn trend(dataset: &Dataset, thresholds: &AnalysisThresholds) -> Section<Trend> {
    let Some(daily_average) = daily_averages(dataset) else {
        let column = if dataset.has(Column::Date) {
            Column::YieldPercent
        } else {
            Column::Date
        };
        return Section::missing(column);
    };
    let means: Vec<f64> = daily_average.iter().map(|day| day.mean_yield).collect();
    let Some(slope) = slope(&means) else {
        debug!(days = means.len(), "not enough days for a trend");
        return Section::Computed(Trend::InsufficientData { days: means.len() });
    };
    Section::Computed(Trend::Estimated(TrendEstimate {
        slope,
        direction: direction(slope, thresholds.trend_slope),
        volatility: sample_std(&means),
        daily_average,
    }))
}

fn direction(slope: f64, threshold: f64) -> TrendDirection {
    if slope > threshold {
        TrendDirection::Increasing
    } else if slope < -threshold {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}
