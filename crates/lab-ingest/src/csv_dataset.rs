//! CSV file to raw dataset.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use lab_model::{Column, ColumnSet, RawDataset, RawRecord};
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::headers::{column_for_header, normalize_cell};

/// Reads a production CSV file into a raw dataset.
///
/// Headers may use the Spanish or English column names in any case. Fully
/// blank rows are skipped, short rows are padded with missing cells, and
/// unrecognized columns are ignored. Cell text is kept as read; blank cells
/// become missing.
pub fn read_csv_dataset(path: &Path) -> Result<RawDataset> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_csv_from(file, path)?;
    info!(
        path = %path.display(),
        records = dataset.len(),
        columns = dataset.columns.present().len(),
        "loaded production data"
    );
    Ok(dataset)
}

/// Reads CSV content from any reader; `origin` is only used in errors.
pub fn read_csv_from<R: Read>(reader: R, origin: &Path) -> Result<RawDataset> {
    let parse_error = |source| IngestError::CsvParse {
        path: origin.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = reader.records();

    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyCsv {
            path: origin.to_path_buf(),
        });
    };
    let header_row = header_row.map_err(parse_error)?;
    let mapping = map_headers(header_row.iter());
    let columns = mapping
        .iter()
        .flatten()
        .fold(ColumnSet::none(), |columns, &column| columns.with(column));
    if columns.present().is_empty() {
        let headers: Vec<&str> = header_row.iter().map(normalize_cell).collect();
        return Err(IngestError::NoKnownColumns {
            path: origin.to_path_buf(),
            headers: headers.join(", "),
        });
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in rows {
        let row = row.map_err(parse_error)?;
        if row.iter().all(|cell| normalize_cell(cell).is_empty()) {
            skipped += 1;
            continue;
        }
        let mut record = RawRecord::new();
        for (index, column) in mapping.iter().enumerate() {
            let Some(column) = column else {
                continue;
            };
            let value = row.get(index).unwrap_or("");
            record.set(*column, Some(value.to_string()));
        }
        records.push(record);
    }
    if skipped > 0 {
        debug!(skipped, "skipped blank rows");
    }
    Ok(RawDataset::new(columns, records))
}

/// Column for each header position; a repeated column keeps its first
/// position.
fn map_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<Option<Column>> {
    let mut seen = ColumnSet::none();
    headers
        .map(|header| {
            let Some(column) = column_for_header(header) else {
                debug!(header = normalize_cell(header), "ignoring unrecognized column");
                return None;
            };
            if seen.contains(column) {
                debug!(%column, header = normalize_cell(header), "ignoring duplicate column");
                return None;
            }
            seen.set(column, true);
            Some(column)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_headers_keep_first() {
        let mapping = map_headers(["fecha", "date", "equipo"].into_iter());
        assert_eq!(
            mapping,
            vec![Some(Column::Date), None, Some(Column::Equipment)]
        );
    }
}
