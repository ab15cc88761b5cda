//! Error types for production data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a production file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// None of the headers name a known column.
    #[error("no recognized columns in {path} (headers: {headers})")]
    NoKnownColumns { path: PathBuf, headers: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/produccion.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/produccion.csv");
    }

    #[test]
    fn test_unknown_columns_display() {
        let err = IngestError::NoKnownColumns {
            path: PathBuf::from("lab.csv"),
            headers: "a, b".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no recognized columns in lab.csv (headers: a, b)"
        );
    }
}
