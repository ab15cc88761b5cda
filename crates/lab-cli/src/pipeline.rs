//! Load, clean and analyze one production file.

use std::path::Path;

use anyhow::{Context, Result};
use lab_analysis::analyze_with;
use lab_ingest::read_csv_dataset;
use lab_model::{AnalysisResult, AnalysisThresholds, CleaningReport, Dataset};
use lab_transform::{CleaningStats, clean_with_stats, cleaning_report};
use serde::Serialize;
use tracing::{info, info_span};

/// Cleaned data plus what cleaning changed.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub dataset: Dataset,
    pub report: CleaningReport,
    pub stats: CleaningStats,
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub cleaning: CleanOutcome,
    pub result: AnalysisResult,
}

/// JSON document written by `analyze --report`.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub source: String,
    pub cleaning: &'a CleaningReport,
    pub analysis: &'a AnalysisResult,
}

impl AnalysisOutcome {
    pub fn report(&self, source: &Path) -> AnalysisReport<'_> {
        AnalysisReport {
            source: source.display().to_string(),
            cleaning: &self.cleaning.report,
            analysis: &self.result,
        }
    }
}

pub fn clean_file(input: &Path) -> Result<CleanOutcome> {
    let raw = {
        let _span = info_span!("ingest", path = %input.display()).entered();
        read_csv_dataset(input).with_context(|| format!("ingest {}", input.display()))?
    };
    let (dataset, stats) = clean_with_stats(&raw);
    let report = cleaning_report(&raw, &dataset);
    info!(
        original = report.original_records,
        cleaned = report.cleaned_records,
        removed = report.records_removed,
        "cleaning finished"
    );
    Ok(CleanOutcome {
        dataset,
        report,
        stats,
    })
}

pub fn analyze_file(input: &Path, thresholds: &AnalysisThresholds) -> Result<AnalysisOutcome> {
    let cleaning = clean_file(input)?;
    let result = analyze_with(&cleaning.dataset, thresholds).context("analyze dataset")?;
    Ok(AnalysisOutcome { cleaning, result })
}
