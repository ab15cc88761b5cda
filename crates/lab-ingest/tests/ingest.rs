//! Integration tests for CSV ingestion.

use std::io::Write;
use std::path::Path;

use lab_ingest::{IngestError, read_csv_dataset, read_csv_from};
use lab_model::Column;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn reads_spanish_headers() {
    let file = write_csv(
        "\u{feff}Fecha,Equipo,Turno,Muestras_Procesadas,Rendimiento,Comentario\n\
         17/02/2024,pH Metro,Mañana,45,87.5,Bien\n\
         2024-02-18, Balanza ,tarde,,72,\n",
    );
    let dataset = read_csv_dataset(file.path()).expect("read csv");
    assert_eq!(dataset.columns.present(), Column::ALL.to_vec());
    assert_eq!(dataset.len(), 2);

    let first = &dataset.records[0];
    assert_eq!(first.date.as_deref(), Some("17/02/2024"));
    assert_eq!(first.shift.as_deref(), Some("Mañana"));
    assert_eq!(first.comment.as_deref(), Some("Bien"));

    let second = &dataset.records[1];
    assert_eq!(second.equipment.as_deref(), Some(" Balanza "));
    assert_eq!(second.samples_processed, None);
    assert_eq!(second.comment, None);
}

#[test]
fn reads_english_headers_and_ignores_unknown_columns() {
    let csv = "date,operator,yield_percent\n2024-01-01,Ana,80\n";
    let dataset = read_csv_from(csv.as_bytes(), Path::new("inline.csv")).expect("read csv");
    assert_eq!(
        dataset.columns.present(),
        vec![Column::Date, Column::YieldPercent]
    );
    assert_eq!(dataset.records[0].yield_percent.as_deref(), Some("80"));
    assert_eq!(dataset.records[0].equipment, None);
}

#[test]
fn skips_blank_rows_and_pads_short_rows() {
    let csv = "fecha,equipo,turno\n,,\n2024-01-01,balanza\n\n2024-01-02,autoclave,noche\n";
    let dataset = read_csv_from(csv.as_bytes(), Path::new("inline.csv")).expect("read csv");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records[0].shift, None);
    assert_eq!(dataset.records[1].shift.as_deref(), Some("noche"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");
    let err = read_csv_dataset(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn empty_file_is_reported() {
    let file = write_csv("");
    let err = read_csv_dataset(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn unrecognized_headers_are_rejected() {
    let csv = "a,b\n1,2\n";
    let err = read_csv_from(csv.as_bytes(), Path::new("inline.csv")).unwrap_err();
    assert!(matches!(err, IngestError::NoKnownColumns { .. }));
}
