//! Record cleaning pipeline.
//!
//! Steps run in a fixed order because validation depends on the missing
//! values the earlier steps detect:
//!
//! 1. dates
//! 2. equipment
//! 3. shifts
//! 4. numeric columns
//! 5. comments
//! 6. validation (drops records without date, equipment or shift)

use lab_model::{Column, ColumnSet, Dataset, RawDataset, Record};
use tracing::{debug, info, info_span, warn};

use crate::normalization::{
    COMMENT, CanonicalTable, DateParse, EQUIPMENT, NumericParse, SHIFT, canonicalize,
    coerce_numeric, is_known, is_valid_percentage, parse_optional_date,
};

/// Aggregate counts collected while cleaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningStats {
    pub unparsed_dates: usize,
    pub unmapped_equipment: usize,
    pub unmapped_shifts: usize,
    pub invalid_samples: usize,
    pub invalid_yields: usize,
    pub out_of_range_yields: usize,
    pub removed_missing_date: usize,
    pub removed_missing_equipment: usize,
    pub removed_missing_shift: usize,
}

impl CleaningStats {
    pub fn records_removed(&self) -> usize {
        self.removed_missing_date + self.removed_missing_equipment + self.removed_missing_shift
    }
}

/// Why validation dropped a record. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    MissingDate,
    MissingEquipment,
    MissingShift,
}

/// Cleans a raw dataset into a new one, leaving the input untouched.
pub fn clean(raw: &RawDataset) -> Dataset {
    clean_with_stats(raw).0
}

/// Cleans a raw dataset and returns the counts gathered on the way.
pub fn clean_with_stats(raw: &RawDataset) -> (Dataset, CleaningStats) {
    let span = info_span!("clean", records = raw.len());
    let _guard = span.enter();
    info!(records = raw.len(), "starting data cleaning");

    let mut stats = CleaningStats::default();
    let mut records: Vec<Record> = vec![Record::default(); raw.len()];

    clean_dates(raw, &mut records, &mut stats);
    if raw.columns.equipment {
        clean_categorical(
            raw,
            &mut records,
            Categorical::Equipment,
            &mut stats.unmapped_equipment,
        );
    }
    if raw.columns.shift {
        clean_categorical(
            raw,
            &mut records,
            Categorical::Shift,
            &mut stats.unmapped_shifts,
        );
    }
    clean_numeric(raw, &mut records, &mut stats);
    if raw.columns.comment {
        clean_comments(raw, &mut records);
    }
    let records = validate(raw.columns, records, &mut stats);

    info!(
        records = records.len(),
        removed = stats.records_removed(),
        "data cleaning complete"
    );
    (Dataset::new(raw.columns, records), stats)
}

fn clean_dates(raw: &RawDataset, records: &mut [Record], stats: &mut CleaningStats) {
    if !raw.columns.date {
        warn!("date column not found; every record will be removed");
        return;
    }
    debug!("cleaning dates");
    for (source, record) in raw.records.iter().zip(records.iter_mut()) {
        record.original_date = source.date.clone();
        match parse_optional_date(source.date.as_deref()) {
            DateParse::Parsed { date, format } => {
                debug!(%format, %date, "parsed date");
                record.date = Some(date);
            }
            DateParse::Unparsed(original) => {
                debug!(value = %original, "could not parse date");
                stats.unparsed_dates += 1;
            }
            DateParse::Empty => {}
        }
    }
    if stats.unparsed_dates > 0 {
        warn!(count = stats.unparsed_dates, "found unparseable dates");
    }
}

/// Categorical columns that carry a preserved original value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Categorical {
    Equipment,
    Shift,
}

impl Categorical {
    fn column(self) -> Column {
        match self {
            Categorical::Equipment => Column::Equipment,
            Categorical::Shift => Column::Shift,
        }
    }

    fn table(self) -> &'static CanonicalTable {
        match self {
            Categorical::Equipment => &EQUIPMENT,
            Categorical::Shift => &SHIFT,
        }
    }

    fn store(self, record: &mut Record, original: Option<String>, canonical: Option<String>) {
        match self {
            Categorical::Equipment => {
                record.original_equipment = original;
                record.equipment = canonical;
            }
            Categorical::Shift => {
                record.original_shift = original;
                record.shift = canonical;
            }
        }
    }
}

fn clean_categorical(
    raw: &RawDataset,
    records: &mut [Record],
    kind: Categorical,
    unmapped: &mut usize,
) {
    let column = kind.column();
    let table = kind.table();
    debug!(%column, "cleaning categorical column");
    for (source, record) in raw.records.iter().zip(records.iter_mut()) {
        let original = source.get(column).map(str::to_string);
        let canonical = original
            .as_deref()
            .map(|text| canonicalize(text, table))
            .filter(|value| !value.is_empty());
        if let (Some(text), Some(_)) = (original.as_deref(), canonical.as_ref())
            && !is_known(text, table)
        {
            *unmapped += 1;
        }
        kind.store(record, original, canonical);
    }
    if *unmapped > 0 {
        debug!(
            %column,
            count = *unmapped,
            "values kept without canonical mapping"
        );
    }
}

fn clean_numeric(raw: &RawDataset, records: &mut [Record], stats: &mut CleaningStats) {
    debug!("cleaning numeric values");
    for (source, record) in raw.records.iter().zip(records.iter_mut()) {
        if raw.columns.samples_processed {
            let parsed = coerce_numeric(source.samples_processed.as_deref());
            if parsed == NumericParse::Invalid {
                stats.invalid_samples += 1;
            }
            record.samples_processed = parsed.value();
        }
        if raw.columns.yield_percent {
            let parsed = coerce_numeric(source.yield_percent.as_deref());
            if parsed == NumericParse::Invalid {
                stats.invalid_yields += 1;
            }
            if let NumericParse::Number(value) = parsed
                && !is_valid_percentage(value)
            {
                stats.out_of_range_yields += 1;
            }
            record.yield_percent = parsed.value();
        }
    }
    if stats.invalid_samples > 0 {
        warn!(
            count = stats.invalid_samples,
            column = %Column::SamplesProcessed,
            "non-numeric values set to missing"
        );
    }
    if stats.invalid_yields > 0 {
        warn!(
            count = stats.invalid_yields,
            column = %Column::YieldPercent,
            "non-numeric values set to missing"
        );
    }
    if stats.out_of_range_yields > 0 {
        warn!(
            count = stats.out_of_range_yields,
            "yield values outside 0-100% kept for anomaly detection"
        );
    }
}

fn clean_comments(raw: &RawDataset, records: &mut [Record]) {
    debug!("cleaning comments");
    for (source, record) in raw.records.iter().zip(records.iter_mut()) {
        record.comment = source
            .comment
            .as_deref()
            .map(|text| canonicalize(text, &COMMENT))
            .filter(|value| !value.is_empty());
    }
}

/// First rule a record breaks, if any.
pub fn removal_reason(columns: ColumnSet, record: &Record) -> Option<RemovalReason> {
    if record.date.is_none() {
        Some(RemovalReason::MissingDate)
    } else if columns.equipment && record.equipment.is_none() {
        Some(RemovalReason::MissingEquipment)
    } else if columns.shift && record.shift.is_none() {
        Some(RemovalReason::MissingShift)
    } else {
        None
    }
}

fn validate(columns: ColumnSet, records: Vec<Record>, stats: &mut CleaningStats) -> Vec<Record> {
    debug!("validating records");
    let initial = records.len();
    let kept: Vec<Record> = records
        .into_iter()
        .filter(|record| match removal_reason(columns, record) {
            None => true,
            Some(RemovalReason::MissingDate) => {
                stats.removed_missing_date += 1;
                false
            }
            Some(RemovalReason::MissingEquipment) => {
                stats.removed_missing_equipment += 1;
                false
            }
            Some(RemovalReason::MissingShift) => {
                stats.removed_missing_shift += 1;
                false
            }
        })
        .collect();
    let removed = initial - kept.len();
    if removed > 0 {
        warn!(
            removed,
            missing_date = stats.removed_missing_date,
            missing_equipment = stats.removed_missing_equipment,
            missing_shift = stats.removed_missing_shift,
            "removed invalid records"
        );
    }
    kept
}
