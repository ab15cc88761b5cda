//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lab-analytics",
    version,
    about = "Clean and analyze laboratory production records",
    long_about = "Clean and analyze laboratory production records.\n\n\
                  Normalizes dates, equipment, shifts and comments, removes\n\
                  incomplete records, and reports yield statistics, outliers\n\
                  and recommendations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML file with [thresholds] and [output] settings.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a production CSV file and report what changed.
    Clean(CleanArgs),

    /// Clean a production CSV file and run the statistical analysis.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Production data CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the cleaned records to this CSV file.
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Production data CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the cleaned records to this CSV file.
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Write the cleaning report and analysis result to this JSON file.
    #[arg(long = "report", value_name = "JSON")]
    pub report: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
