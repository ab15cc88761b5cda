//! Cleaned CSV and JSON report writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use lab_model::{Column, Dataset, RawRecord, Record};
use serde::Serialize;
use tracing::info;

/// Output header for each present column, with `original_*` companions when
/// requested.
fn csv_columns(dataset: &Dataset, include_originals: bool) -> Vec<(&'static str, CsvField)> {
    let mut fields = Vec::new();
    for column in dataset.columns.present() {
        fields.push((column.as_str(), CsvField::Clean(column)));
        if !include_originals {
            continue;
        }
        match column {
            Column::Date => fields.push(("original_date", CsvField::OriginalDate)),
            Column::Equipment => fields.push(("original_equipment", CsvField::OriginalEquipment)),
            Column::Shift => fields.push(("original_shift", CsvField::OriginalShift)),
            _ => {}
        }
    }
    fields
}

#[derive(Debug, Clone, Copy)]
enum CsvField {
    Clean(Column),
    OriginalDate,
    OriginalEquipment,
    OriginalShift,
}

impl CsvField {
    fn render(self, record: &Record, cleaned: &RawRecord) -> String {
        match self {
            CsvField::Clean(column) => cleaned.get(column).unwrap_or_default().to_string(),
            CsvField::OriginalDate => record.original_date.clone().unwrap_or_default(),
            CsvField::OriginalEquipment => record.original_equipment.clone().unwrap_or_default(),
            CsvField::OriginalShift => record.original_shift.clone().unwrap_or_default(),
        }
    }
}

/// Writes the cleaned dataset as CSV; missing values are empty cells.
pub fn write_cleaned_csv<W: Write>(
    dataset: &Dataset,
    include_originals: bool,
    writer: W,
) -> Result<()> {
    let fields = csv_columns(dataset, include_originals);
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer
        .write_record(fields.iter().map(|(header, _)| *header))
        .context("write csv header")?;
    for record in &dataset.records {
        let cleaned = record.to_raw();
        writer
            .write_record(fields.iter().map(|(_, field)| field.render(record, &cleaned)))
            .context("write csv record")?;
    }
    writer.flush().context("flush csv")?;
    Ok(())
}

pub fn write_cleaned_csv_file(
    dataset: &Dataset,
    include_originals: bool,
    path: &Path,
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_cleaned_csv(dataset, include_originals, BufWriter::new(file))
        .with_context(|| format!("write cleaned data: {}", path.display()))?;
    info!(path = %path.display(), records = dataset.len(), "wrote cleaned data");
    Ok(())
}

pub fn write_json_report<T: Serialize>(report: &T, pretty: bool, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)
    } else {
        serde_json::to_writer(&mut writer, report)
    }
    .with_context(|| format!("serialize report: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    info!(path = %path.display(), "wrote JSON report");
    Ok(())
}
