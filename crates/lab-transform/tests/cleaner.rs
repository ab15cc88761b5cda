//! Tests for the cleaning pipeline and cleaning report.

use chrono::NaiveDate;
use lab_model::{Column, ColumnSet, RawDataset, RawRecord};
use lab_transform::{RemovalReason, clean, clean_with_stats, cleaning_report, removal_reason};

fn row(date: &str, equipment: &str, shift: &str, samples: &str, yield_percent: &str) -> RawRecord {
    let mut record = RawRecord::new();
    record.set(Column::Date, Some(date.to_string()));
    record.set(Column::Equipment, Some(equipment.to_string()));
    record.set(Column::Shift, Some(shift.to_string()));
    record.set(Column::SamplesProcessed, Some(samples.to_string()));
    record.set(Column::YieldPercent, Some(yield_percent.to_string()));
    record
}

fn lab_columns() -> ColumnSet {
    ColumnSet::all().without(Column::Comment)
}

#[test]
fn cleans_every_field() {
    let raw = RawDataset::new(
        ColumnSet::all(),
        vec![
            row("17/02/2024", "pH Metro", "Mañana", "45", "87.5")
                .with(Column::Comment, "Bien"),
        ],
    );
    let cleaned = clean(&raw);
    assert_eq!(cleaned.len(), 1);
    let record = &cleaned.records[0];
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 2, 17));
    assert_eq!(record.original_date.as_deref(), Some("17/02/2024"));
    assert_eq!(record.equipment.as_deref(), Some("phmetro"));
    assert_eq!(record.original_equipment.as_deref(), Some("pH Metro"));
    assert_eq!(record.shift.as_deref(), Some("manana"));
    assert_eq!(record.original_shift.as_deref(), Some("Mañana"));
    assert_eq!(record.samples_processed, Some(45.0));
    assert_eq!(record.yield_percent, Some(87.5));
    assert_eq!(record.comment.as_deref(), Some("ok"));
}

#[test]
fn padded_cells_keep_their_original_text() {
    let raw = RawDataset::new(
        lab_columns(),
        vec![row(" 17/02/2024 ", " Balanza ", " Tarde ", " 45 ", " 87.5 ")],
    );
    let cleaned = clean(&raw);
    let record = &cleaned.records[0];
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 2, 17));
    assert_eq!(record.original_date.as_deref(), Some(" 17/02/2024 "));
    assert_eq!(record.equipment.as_deref(), Some("balanza"));
    assert_eq!(record.original_equipment.as_deref(), Some(" Balanza "));
    assert_eq!(record.shift.as_deref(), Some("tarde"));
    assert_eq!(record.original_shift.as_deref(), Some(" Tarde "));
    assert_eq!(record.samples_processed, Some(45.0));
    assert_eq!(record.yield_percent, Some(87.5));
}

#[test]
fn input_is_not_mutated() {
    let raw = RawDataset::new(
        lab_columns(),
        vec![row("17/02/2024", "PHMETRO", "tarde", "10", "70")],
    );
    let before = raw.clone();
    let _ = clean(&raw);
    assert_eq!(raw, before);
}

#[test]
fn missing_date_removes_record() {
    let mut no_date = row("", "balanza", "tarde", "10", "90");
    no_date.set(Column::Date, None);
    let raw = RawDataset::new(
        lab_columns(),
        vec![no_date, row("not a date", "balanza", "tarde", "10", "90")],
    );
    let (cleaned, stats) = clean_with_stats(&raw);
    assert!(cleaned.is_empty());
    assert_eq!(stats.removed_missing_date, 2);
    assert_eq!(stats.unparsed_dates, 1);
}

#[test]
fn missing_yield_is_retained() {
    let mut record = row("2024-01-10", "balanza", "noche", "12", "");
    record.set(Column::YieldPercent, None);
    let raw = RawDataset::new(lab_columns(), vec![record]);
    let cleaned = clean(&raw);
    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned.records[0].yield_percent, None);
}

#[test]
fn missing_equipment_or_shift_removes_only_when_column_present() {
    let mut no_equipment = row("2024-01-10", "", "noche", "12", "80");
    no_equipment.set(Column::Equipment, None);
    let mut no_shift = row("2024-01-10", "balanza", "", "12", "80");
    no_shift.set(Column::Shift, None);

    let raw = RawDataset::new(lab_columns(), vec![no_equipment.clone(), no_shift.clone()]);
    let (cleaned, stats) = clean_with_stats(&raw);
    assert!(cleaned.is_empty());
    assert_eq!(stats.removed_missing_equipment, 1);
    assert_eq!(stats.removed_missing_shift, 1);

    let without_categoricals = lab_columns()
        .without(Column::Equipment)
        .without(Column::Shift);
    let raw = RawDataset::new(without_categoricals, vec![no_equipment, no_shift]);
    assert_eq!(clean(&raw).len(), 2);
}

#[test]
fn absent_date_column_removes_everything() {
    let raw = RawDataset::new(
        lab_columns().without(Column::Date),
        vec![row("2024-01-10", "balanza", "noche", "12", "80")],
    );
    assert!(clean(&raw).is_empty());
}

#[test]
fn non_numeric_values_become_missing() {
    let raw = RawDataset::new(
        lab_columns(),
        vec![row("2024-01-10", "balanza", "noche", "doce", "n/a")],
    );
    let (cleaned, stats) = clean_with_stats(&raw);
    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned.records[0].samples_processed, None);
    assert_eq!(cleaned.records[0].yield_percent, None);
    assert_eq!(stats.invalid_samples, 1);
    assert_eq!(stats.invalid_yields, 1);
}

#[test]
fn out_of_range_yield_is_kept() {
    let raw = RawDataset::new(
        lab_columns(),
        vec![
            row("2024-01-10", "balanza", "noche", "12", "150"),
            row("2024-01-11", "balanza", "noche", "12", "-5"),
        ],
    );
    let (cleaned, stats) = clean_with_stats(&raw);
    assert_eq!(cleaned.len(), 2);
    assert_eq!(cleaned.records[0].yield_percent, Some(150.0));
    assert_eq!(stats.out_of_range_yields, 2);
}

#[test]
fn unmapped_categoricals_pass_through_normalized() {
    let raw = RawDataset::new(
        ColumnSet::all(),
        vec![
            row("2024-01-10", "Cromatógrafo", "Vespertino", "12", "80")
                .with(Column::Comment, "Revisar Filtro"),
        ],
    );
    let (cleaned, stats) = clean_with_stats(&raw);
    let record = &cleaned.records[0];
    assert_eq!(record.equipment.as_deref(), Some("cromatografo"));
    assert_eq!(record.shift.as_deref(), Some("vespertino"));
    assert_eq!(record.comment.as_deref(), Some("revisar filtro"));
    assert_eq!(stats.unmapped_equipment, 1);
    assert_eq!(stats.unmapped_shifts, 1);
}

#[test]
fn cleaning_is_idempotent_on_cleaned_output() {
    let raw = RawDataset::new(
        ColumnSet::all(),
        vec![
            row("17/02/2024", "PH-METRO", "madrugada", "45", "87.25")
                .with(Column::Comment, "fallo"),
            row("11-26-2024", "Centrífuga", "Tarde", "30", "55"),
            row("bad", "balanza", "tarde", "1", "1"),
        ],
    );
    let once = clean(&raw);
    let twice = clean(&once.to_raw());
    assert_eq!(once.len(), twice.len());
    for (first, second) in once.records.iter().zip(&twice.records) {
        assert_eq!(first.date, second.date);
        assert_eq!(first.equipment, second.equipment);
        assert_eq!(first.shift, second.shift);
        assert_eq!(first.samples_processed, second.samples_processed);
        assert_eq!(first.yield_percent, second.yield_percent);
        assert_eq!(first.comment, second.comment);
    }
}

#[test]
fn removal_reason_checks_date_first() {
    let record = lab_model::Record::default();
    assert_eq!(
        removal_reason(lab_columns(), &record),
        Some(RemovalReason::MissingDate)
    );
}

#[test]
fn report_counts_and_range() {
    let mut no_date = row("", "balanza", "tarde", "10", "90");
    no_date.set(Column::Date, None);
    let raw = RawDataset::new(
        lab_columns(),
        vec![
            row("2024-03-01", "phmetro", "manana", "10", "90"),
            row("05/03/2024", "ph metro", "tarde", "10", "90"),
            row("2024-03-03", "balanza", "tarde", "10", "90"),
            no_date,
        ],
    );
    let cleaned = clean(&raw);
    let report = cleaning_report(&raw, &cleaned);
    assert_eq!(report.original_records, 4);
    assert_eq!(report.cleaned_records, 3);
    assert_eq!(report.records_removed, 1);
    assert!((report.removal_percentage - 25.0).abs() < 1e-9);
    assert_eq!(report.unique_equipment, 2);
    assert_eq!(report.unique_shifts, 2);
    assert_eq!(report.date_range.start, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(report.date_range.end, NaiveDate::from_ymd_opt(2024, 3, 5));
    assert_eq!(
        report.columns_processed,
        vec![
            Column::Date,
            Column::Equipment,
            Column::Shift,
            Column::SamplesProcessed,
            Column::YieldPercent,
        ]
    );
}

#[test]
fn report_on_empty_input_is_neutral() {
    let raw = RawDataset::new(ColumnSet::all(), Vec::new());
    let report = cleaning_report(&raw, &clean(&raw));
    assert_eq!(report.records_removed, 0);
    assert_eq!(report.removal_percentage, 0.0);
    assert_eq!(report.date_range.start, None);
}
