//! Loading of laboratory production files.
//!
//! - **csv_dataset**: CSV to [`lab_model::RawDataset`]
//! - **headers**: header normalization and Spanish/English aliases
//! - **error**: ingestion errors

pub mod csv_dataset;
pub mod error;
pub mod headers;

pub use csv_dataset::{read_csv_dataset, read_csv_from};
pub use error::{IngestError, Result};
pub use headers::{column_for_header, normalize_header};
