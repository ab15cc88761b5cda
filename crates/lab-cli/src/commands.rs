use anyhow::Result;
use tracing::info_span;

use lab_cli::config::LabConfig;
use lab_cli::output::{write_cleaned_csv_file, write_json_report};
use lab_cli::pipeline::{AnalysisOutcome, CleanOutcome, analyze_file, clean_file};

use crate::cli::{AnalyzeArgs, CleanArgs};

pub fn run_clean(args: &CleanArgs, config: &LabConfig) -> Result<CleanOutcome> {
    let span = info_span!("clean_command", input = %args.input.display());
    let _guard = span.enter();
    let outcome = clean_file(&args.input)?;
    if let Some(path) = &args.output {
        write_cleaned_csv_file(&outcome.dataset, config.output.include_originals, path)?;
    }
    Ok(outcome)
}

pub fn run_analyze(args: &AnalyzeArgs, config: &LabConfig) -> Result<AnalysisOutcome> {
    let span = info_span!("analyze_command", input = %args.input.display());
    let _guard = span.enter();
    let outcome = analyze_file(&args.input, &config.thresholds)?;
    if let Some(path) = &args.output {
        write_cleaned_csv_file(
            &outcome.cleaning.dataset,
            config.output.include_originals,
            path,
        )?;
    }
    if let Some(path) = &args.report {
        write_json_report(
            &outcome.report(&args.input),
            config.output.pretty_json,
            path,
        )?;
    }
    Ok(outcome)
}
