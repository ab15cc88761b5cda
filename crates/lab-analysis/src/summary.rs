//! Dataset summary section.

use std::collections::BTreeMap;

use lab_model::{Dataset, DateRange, Summary};

pub fn summarize(dataset: &Dataset) -> Summary {
    let date_range = dataset
        .dates()
        .map(|dates| DateRange::new(dates.min(), dates.max()))
        .unwrap_or_default();
    let columns = dataset.columns.present();
    let missing_values: BTreeMap<_, _> = columns
        .iter()
        .filter_map(|&column| Some((column, dataset.missing_count(column)?)))
        .collect();
    Summary {
        total_records: dataset.len(),
        days_covered: date_range.days_covered(),
        date_range,
        columns,
        missing_values,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use lab_model::{Column, ColumnSet, Record};

    use super::*;

    #[test]
    fn summary_counts_missing_per_present_column() {
        let records = vec![
            Record {
                date: NaiveDate::from_ymd_opt(2024, 1, 1),
                yield_percent: Some(70.0),
                ..Record::default()
            },
            Record {
                date: NaiveDate::from_ymd_opt(2024, 1, 5),
                ..Record::default()
            },
        ];
        let columns = ColumnSet::none()
            .with(Column::Date)
            .with(Column::YieldPercent);
        let summary = summarize(&Dataset::new(columns, records));
        assert_eq!(summary.total_records, 2);
        assert_eq!(summary.days_covered, Some(5));
        assert_eq!(summary.missing_values.get(&Column::YieldPercent), Some(&1));
        assert_eq!(summary.missing_values.get(&Column::Date), Some(&0));
        assert!(!summary.missing_values.contains_key(&Column::Equipment));
    }

    #[test]
    fn empty_dataset_has_no_range() {
        let summary = summarize(&Dataset::new(ColumnSet::all(), Vec::new()));
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.days_covered, None);
    }
}
