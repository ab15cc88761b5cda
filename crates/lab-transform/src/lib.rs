//! Cleaning of raw laboratory production records.
//!
//! - **normalization**: text folding and canonical tables, date parsing,
//!   numeric coercion
//! - **cleaner**: the ordered cleaning and validation pipeline
//! - **report**: cleaning report generation

pub mod cleaner;
pub mod normalization;
pub mod report;

pub use cleaner::{CleaningStats, RemovalReason, clean, clean_with_stats, removal_reason};
pub use report::cleaning_report;
