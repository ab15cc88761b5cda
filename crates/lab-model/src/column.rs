//! Fixed column schema for laboratory production records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed columns a production dataset may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Date,
    Equipment,
    Shift,
    SamplesProcessed,
    YieldPercent,
    Comment,
}

impl Column {
    /// All columns in schema order.
    pub const ALL: [Column; 6] = [
        Column::Date,
        Column::Equipment,
        Column::Shift,
        Column::SamplesProcessed,
        Column::YieldPercent,
        Column::Comment,
    ];

    /// Text columns, reported in consistency metrics.
    pub const TEXT: [Column; 3] = [Column::Equipment, Column::Shift, Column::Comment];

    pub fn as_str(self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Equipment => "equipment",
            Column::Shift => "shift",
            Column::SamplesProcessed => "samples_processed",
            Column::YieldPercent => "yield_percent",
            Column::Comment => "comment",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence flags for each column of a dataset.
///
/// A dataset may lack any column entirely. Cleaning steps and analysis
/// sections that depend on a missing column are skipped instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnSet {
    pub date: bool,
    pub equipment: bool,
    pub shift: bool,
    pub samples_processed: bool,
    pub yield_percent: bool,
    pub comment: bool,
}

impl ColumnSet {
    /// Every column present.
    pub fn all() -> Self {
        Self {
            date: true,
            equipment: true,
            shift: true,
            samples_processed: true,
            yield_percent: true,
            comment: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, column: Column) -> bool {
        match column {
            Column::Date => self.date,
            Column::Equipment => self.equipment,
            Column::Shift => self.shift,
            Column::SamplesProcessed => self.samples_processed,
            Column::YieldPercent => self.yield_percent,
            Column::Comment => self.comment,
        }
    }

    #[must_use]
    pub fn with(mut self, column: Column) -> Self {
        self.set(column, true);
        self
    }

    #[must_use]
    pub fn without(mut self, column: Column) -> Self {
        self.set(column, false);
        self
    }

    pub fn set(&mut self, column: Column, present: bool) {
        let flag = match column {
            Column::Date => &mut self.date,
            Column::Equipment => &mut self.equipment,
            Column::Shift => &mut self.shift,
            Column::SamplesProcessed => &mut self.samples_processed,
            Column::YieldPercent => &mut self.yield_percent,
            Column::Comment => &mut self.comment,
        };
        *flag = present;
    }

    /// Present columns in schema order.
    pub fn present(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|column| self.contains(*column))
            .collect()
    }
}
