//! Raw and cleaned production records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::column::Column;

/// An uncleaned row as read from a source file.
///
/// Every field is the raw cell text; `None` marks an empty or absent cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: Option<String>,
    pub equipment: Option<String>,
    pub shift: Option<String>,
    pub samples_processed: Option<String>,
    pub yield_percent: Option<String>,
    pub comment: Option<String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw cell text for a column.
    pub fn get(&self, column: Column) -> Option<&str> {
        match column {
            Column::Date => self.date.as_deref(),
            Column::Equipment => self.equipment.as_deref(),
            Column::Shift => self.shift.as_deref(),
            Column::SamplesProcessed => self.samples_processed.as_deref(),
            Column::YieldPercent => self.yield_percent.as_deref(),
            Column::Comment => self.comment.as_deref(),
        }
    }

    /// Sets a cell, treating blank text as missing.
    pub fn set(&mut self, column: Column, value: Option<String>) {
        let value = value.filter(|text| !text.trim().is_empty());
        match column {
            Column::Date => self.date = value,
            Column::Equipment => self.equipment = value,
            Column::Shift => self.shift = value,
            Column::SamplesProcessed => self.samples_processed = value,
            Column::YieldPercent => self.yield_percent = value,
            Column::Comment => self.comment = value,
        }
    }

    #[must_use]
    pub fn with(mut self, column: Column, value: &str) -> Self {
        self.set(column, Some(value.to_string()));
        self
    }
}

/// One cleaned equipment/shift/day observation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: Option<NaiveDate>,
    pub original_date: Option<String>,
    pub equipment: Option<String>,
    pub original_equipment: Option<String>,
    pub shift: Option<String>,
    pub original_shift: Option<String>,
    pub samples_processed: Option<f64>,
    pub yield_percent: Option<f64>,
    pub comment: Option<String>,
}

impl Record {
    /// Whether the value of `column` is missing in this record.
    pub fn is_missing(&self, column: Column) -> bool {
        match column {
            Column::Date => self.date.is_none(),
            Column::Equipment => self.equipment.is_none(),
            Column::Shift => self.shift.is_none(),
            Column::SamplesProcessed => self.samples_processed.is_none(),
            Column::YieldPercent => self.yield_percent.is_none(),
            Column::Comment => self.comment.is_none(),
        }
    }

    /// Renders the cleaned values back into raw cell text.
    ///
    /// Dates use `YYYY-MM-DD` and numbers their shortest decimal form, both
    /// of which the cleaner reads back to the same values.
    pub fn to_raw(&self) -> RawRecord {
        RawRecord {
            date: self.date.map(|date| date.format("%Y-%m-%d").to_string()),
            equipment: self.equipment.clone(),
            shift: self.shift.clone(),
            samples_processed: self.samples_processed.map(|value| value.to_string()),
            yield_percent: self.yield_percent.map(|value| value.to_string()),
            comment: self.comment.clone(),
        }
    }
}
