//! Day-of-week, ISO week and monthly patterns.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use lab_model::{Column, Dataset, PeriodStats, Section, TemporalAnalysis};

use crate::stats::{mean, sample_std};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar grouping applied to record dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Monday = 1 through Sunday = 7.
    DayOfWeek,
    IsoWeek,
    Month,
}

impl Period {
    pub fn key(self, date: NaiveDate) -> u32 {
        match self {
            Period::DayOfWeek => date.weekday().number_from_monday(),
            Period::IsoWeek => date.iso_week().week(),
            Period::Month => date.month(),
        }
    }

    pub fn label(self, key: u32) -> String {
        let index = key.saturating_sub(1) as usize;
        match self {
            Period::DayOfWeek => WEEKDAYS.get(index).copied().unwrap_or("?").to_string(),
            Period::IsoWeek => format!("W{key:02}"),
            Period::Month => MONTHS.get(index).copied().unwrap_or("?").to_string(),
        }
    }
}

#[derive(Default)]
struct Bucket {
    records: usize,
    yields: Vec<f64>,
    samples: Vec<f64>,
}

/// Aggregates records by `period`, ascending by period key.
pub fn period_stats(dataset: &Dataset, period: Period) -> Vec<PeriodStats> {
    let Some(dates) = dataset.dates() else {
        return Vec::new();
    };
    let yields = dataset.yields();
    let samples = dataset.samples();
    let mut buckets: BTreeMap<u32, Bucket> = BTreeMap::new();
    for (record, date) in dataset.records.iter().zip(dates.values()) {
        let Some(date) = date else {
            continue;
        };
        let bucket = buckets.entry(period.key(date)).or_default();
        bucket.records += 1;
        if let Some(value) = yields.and_then(|column| column.value_of(record)) {
            bucket.yields.push(value);
        }
        if let Some(value) = samples.and_then(|column| column.value_of(record)) {
            bucket.samples.push(value);
        }
    }
    let has_samples = samples.is_some();
    buckets
        .into_iter()
        .map(|(key, bucket)| PeriodStats {
            period: key,
            label: period.label(key),
            records: bucket.records,
            mean_yield: mean(&bucket.yields),
            std_yield: (!bucket.yields.is_empty()).then(|| sample_std(&bucket.yields)),
            total_samples: has_samples.then(|| bucket.samples.iter().sum()),
            mean_samples: mean(&bucket.samples),
        })
        .collect()
}

pub fn temporal_analysis(dataset: &Dataset) -> Section<TemporalAnalysis> {
    if !dataset.has(Column::Date) {
        return Section::missing(Column::Date);
    }
    Section::Computed(TemporalAnalysis {
        daily: period_stats(dataset, Period::DayOfWeek),
        weekly: period_stats(dataset, Period::IsoWeek),
        monthly: period_stats(dataset, Period::Month),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Period::DayOfWeek.label(1), "Monday");
        assert_eq!(Period::DayOfWeek.label(7), "Sunday");
        assert_eq!(Period::IsoWeek.label(7), "W07");
        assert_eq!(Period::Month.label(2), "February");
    }

    #[test]
    fn keys() {
        // 2024-02-17 is a Saturday in ISO week 7.
        let date = NaiveDate::from_ymd_opt(2024, 2, 17).expect("valid date");
        assert_eq!(Period::DayOfWeek.key(date), 6);
        assert_eq!(Period::IsoWeek.key(date), 7);
        assert_eq!(Period::Month.key(date), 2);
    }
}
