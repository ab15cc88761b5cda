//! Analysis result structure.
//!
//! Every section that depends on an optional column is wrapped in
//! [`Section`], which reports the missing column instead of failing the
//! whole analysis.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::report::DateRange;

/// Result of a sub-analysis that needs one or more optional columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Section<T> {
    Computed(T),
    ColumnNotFound { column: Column },
}

impl<T> Section<T> {
    pub fn missing(column: Column) -> Self {
        Section::ColumnNotFound { column }
    }

    pub fn computed(&self) -> Option<&T> {
        match self {
            Section::Computed(value) => Some(value),
            Section::ColumnNotFound { .. } => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Section::Computed(_))
    }

    pub fn missing_column(&self) -> Option<Column> {
        match self {
            Section::Computed(_) => None,
            Section::ColumnNotFound { column } => Some(*column),
        }
    }
}

/// The complete report produced for one cleaned dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: Summary,
    pub performance: Section<PerformanceAnalysis>,
    pub equipment: Section<EquipmentAnalysis>,
    pub shifts: Section<ShiftAnalysis>,
    pub temporal: Section<TemporalAnalysis>,
    pub anomalies: Anomalies,
    pub quality: QualityMetrics,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_records: usize,
    pub date_range: DateRange,
    pub days_covered: Option<i64>,
    pub columns: Vec<Column>,
    pub missing_values: BTreeMap<Column, usize>,
}

/// Location and spread of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub q25: f64,
    pub q75: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBucket {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl BucketCounts {
    pub fn add(&mut self, bucket: PerformanceBucket) {
        match bucket {
            PerformanceBucket::Low => self.low += 1,
            PerformanceBucket::Medium => self.medium += 1,
            PerformanceBucket::High => self.high += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketPercentages {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    /// `None` when every yield is missing.
    pub statistics: Option<DescriptiveStats>,
    pub distribution: BucketCounts,
    /// `None` when there are no yields to bucket.
    pub distribution_percentage: Option<BucketPercentages>,
    pub trend: Section<Trend>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trend {
    /// Fewer than two days carry a yield.
    InsufficientData { days: usize },
    Estimated(TrendEstimate),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEstimate {
    pub slope: f64,
    pub direction: TrendDirection,
    pub daily_average: Vec<DailyAverage>,
    pub volatility: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub date: NaiveDate,
    pub mean_yield: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleStats {
    pub mean: f64,
    pub total: f64,
    pub std: f64,
}

/// Aggregates for one equipment id or shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub total_records: usize,
    pub usage_percentage: f64,
    pub yield_stats: Option<YieldStats>,
    pub sample_stats: Option<SampleStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub id: String,
    pub mean_yield: f64,
    pub total_records: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentAnalysis {
    pub stats: BTreeMap<String, GroupStats>,
    /// Descending mean yield, ties by ascending id.
    pub ranking: Vec<RankingEntry>,
    pub total_equipment: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAnalysis {
    pub stats: BTreeMap<String, GroupStats>,
    pub best_shift: Option<String>,
}

/// Aggregates for one day of week, ISO week or month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// 1-based weekday (Monday = 1), ISO week number or month number.
    pub period: u32,
    pub label: String,
    pub records: usize,
    pub mean_yield: Option<f64>,
    /// Sample standard deviation of the yields; `None` when there are none.
    pub std_yield: Option<f64>,
    pub total_samples: Option<f64>,
    pub mean_samples: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalAnalysis {
    pub daily: Vec<PeriodStats>,
    pub weekly: Vec<PeriodStats>,
    pub monthly: Vec<PeriodStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyDirection {
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TukeyFences {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnomaly {
    /// Position of the record in the cleaned dataset.
    pub index: usize,
    pub date: Option<NaiveDate>,
    pub equipment: Option<String>,
    pub yield_percent: f64,
    pub direction: AnomalyDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnomalies {
    pub fences: Option<TukeyFences>,
    pub records: Vec<PerformanceAnomaly>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleBounds {
    pub mean: f64,
    pub std: f64,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleAnomaly {
    pub index: usize,
    pub date: Option<NaiveDate>,
    pub equipment: Option<String>,
    pub samples_processed: f64,
    pub direction: AnomalyDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleAnomalies {
    pub bounds: Option<SampleBounds>,
    pub records: Vec<SampleAnomaly>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomalies {
    pub performance: Section<PerformanceAnomalies>,
    pub samples: Section<SampleAnomalies>,
}

impl Anomalies {
    pub fn total(&self) -> usize {
        self.performance
            .computed()
            .map_or(0, |found| found.records.len())
            + self.samples.computed().map_or(0, |found| found.records.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Consistency {
    pub unique_values: usize,
    /// Distinct values divided by total records.
    pub uniqueness_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Percentage of non-missing values per present column.
    pub completeness: BTreeMap<Column, f64>,
    pub consistency: BTreeMap<Column, Consistency>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Performance,
    Equipment,
    DataQuality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
}
