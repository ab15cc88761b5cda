use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::column::Column;

/// Inclusive calendar range covered by a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Days spanned, counting both ends.
    pub fn days_covered(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((end - start).num_days() + 1),
            _ => None,
        }
    }
}

/// What changed between a raw dataset and its cleaned counterpart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub original_records: usize,
    pub cleaned_records: usize,
    pub records_removed: usize,
    pub removal_percentage: f64,
    pub columns_processed: Vec<Column>,
    pub unique_equipment: usize,
    pub unique_shifts: usize,
    pub date_range: DateRange,
}
