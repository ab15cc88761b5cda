//! Datasets and typed column views.
//!
//! Column access goes through views that only exist when the column is
//! present, so a computation that needs a column has to handle its absence.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnSet};
use crate::record::{RawRecord, Record};

/// An uncleaned batch of rows over the fixed schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDataset {
    pub columns: ColumnSet,
    pub records: Vec<RawRecord>,
}

impl RawDataset {
    pub fn new(columns: ColumnSet, records: Vec<RawRecord>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A cleaned batch of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: ColumnSet,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: ColumnSet, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has(&self, column: Column) -> bool {
        self.columns.contains(column)
    }

    pub fn dates(&self) -> Option<DateColumn<'_>> {
        self.columns.date.then_some(DateColumn {
            records: &self.records,
        })
    }

    pub fn equipment(&self) -> Option<TextColumn<'_>> {
        self.text_column(Column::Equipment)
    }

    pub fn shifts(&self) -> Option<TextColumn<'_>> {
        self.text_column(Column::Shift)
    }

    pub fn comments(&self) -> Option<TextColumn<'_>> {
        self.text_column(Column::Comment)
    }

    /// Text view for a categorical column; `None` for non-text columns too.
    pub fn text_column(&self, column: Column) -> Option<TextColumn<'_>> {
        let get: fn(&Record) -> Option<&str> = match column {
            Column::Equipment => |record| record.equipment.as_deref(),
            Column::Shift => |record| record.shift.as_deref(),
            Column::Comment => |record| record.comment.as_deref(),
            _ => return None,
        };
        self.columns.contains(column).then_some(TextColumn {
            column,
            records: &self.records,
            get,
        })
    }

    pub fn samples(&self) -> Option<NumericColumn<'_>> {
        self.columns.samples_processed.then_some(NumericColumn {
            column: Column::SamplesProcessed,
            records: &self.records,
            get: |record| record.samples_processed,
        })
    }

    pub fn yields(&self) -> Option<NumericColumn<'_>> {
        self.columns.yield_percent.then_some(NumericColumn {
            column: Column::YieldPercent,
            records: &self.records,
            get: |record| record.yield_percent,
        })
    }

    /// Missing-value count for a present column.
    pub fn missing_count(&self, column: Column) -> Option<usize> {
        self.columns.contains(column).then(|| {
            self.records
                .iter()
                .filter(|record| record.is_missing(column))
                .count()
        })
    }

    /// Converts back into raw form so the cleaner can be re-applied.
    pub fn to_raw(&self) -> RawDataset {
        RawDataset {
            columns: self.columns,
            records: self.records.iter().map(Record::to_raw).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DateColumn<'a> {
    records: &'a [Record],
}

impl<'a> DateColumn<'a> {
    pub fn values(self) -> impl Iterator<Item = Option<NaiveDate>> + 'a {
        self.records.iter().map(|record| record.date)
    }

    pub fn present(self) -> impl Iterator<Item = NaiveDate> + 'a {
        self.values().flatten()
    }

    pub fn min(self) -> Option<NaiveDate> {
        self.present().min()
    }

    pub fn max(self) -> Option<NaiveDate> {
        self.present().max()
    }
}

#[derive(Clone, Copy)]
pub struct TextColumn<'a> {
    column: Column,
    records: &'a [Record],
    get: fn(&Record) -> Option<&str>,
}

impl<'a> TextColumn<'a> {
    pub fn column(self) -> Column {
        self.column
    }

    pub fn values(self) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.records.iter().map(self.get)
    }

    /// Distinct non-missing values, sorted.
    pub fn distinct(self) -> BTreeSet<&'a str> {
        self.values().flatten().collect()
    }
}

#[derive(Clone, Copy)]
pub struct NumericColumn<'a> {
    column: Column,
    records: &'a [Record],
    get: fn(&Record) -> Option<f64>,
}

impl<'a> NumericColumn<'a> {
    pub fn column(self) -> Column {
        self.column
    }

    pub fn values(self) -> impl Iterator<Item = Option<f64>> + 'a {
        self.records.iter().map(self.get)
    }

    /// Non-missing values in record order.
    pub fn present(self) -> Vec<f64> {
        self.values().flatten().collect()
    }

    /// Reads this column from a single record.
    pub fn value_of(self, record: &Record) -> Option<f64> {
        (self.get)(record)
    }
}
