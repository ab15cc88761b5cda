//! Cleaning report generation.

use lab_model::{CleaningReport, Dataset, DateRange, RawDataset};

/// Summarizes what cleaning changed between `original` and `cleaned`.
pub fn cleaning_report(original: &RawDataset, cleaned: &Dataset) -> CleaningReport {
    let original_records = original.len();
    let cleaned_records = cleaned.len();
    let records_removed = original_records.saturating_sub(cleaned_records);
    let removal_percentage = if original_records == 0 {
        0.0
    } else {
        records_removed as f64 / original_records as f64 * 100.0
    };
    let date_range = cleaned
        .dates()
        .map(|dates| DateRange::new(dates.min(), dates.max()))
        .unwrap_or_default();
    CleaningReport {
        original_records,
        cleaned_records,
        records_removed,
        removal_percentage,
        columns_processed: cleaned.columns.present(),
        unique_equipment: cleaned.equipment().map_or(0, |column| column.distinct().len()),
        unique_shifts: cleaned.shifts().map_or(0, |column| column.distinct().len()),
        date_range,
    }
}
