//! Data model for laboratory production analytics.
//!
//! - **column**: the fixed column schema and presence flags
//! - **record**: raw and cleaned records
//! - **dataset**: datasets and typed column views
//! - **report**: cleaning report
//! - **analysis**: analysis result sections
//! - **options**: analysis thresholds

pub mod analysis;
pub mod column;
pub mod dataset;
pub mod error;
pub mod options;
pub mod record;
pub mod report;

pub use analysis::{
    AnalysisResult, Anomalies, AnomalyDirection, BucketCounts, BucketPercentages, Consistency,
    DailyAverage, DescriptiveStats, EquipmentAnalysis, GroupStats, PerformanceAnalysis,
    PerformanceAnomalies, PerformanceAnomaly, PerformanceBucket, PeriodStats, Priority,
    QualityMetrics, RankingEntry, Recommendation, RecommendationKind, SampleAnomalies,
    SampleAnomaly, SampleBounds, SampleStats, Section, ShiftAnalysis, Summary, TemporalAnalysis,
    Trend, TrendDirection, TrendEstimate, TukeyFences, YieldStats,
};
pub use column::{Column, ColumnSet};
pub use dataset::{Dataset, DateColumn, NumericColumn, RawDataset, TextColumn};
pub use error::{LabError, Result};
pub use options::AnalysisThresholds;
pub use record::{RawRecord, Record};
pub use report::{CleaningReport, DateRange};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_section_serializes_column_marker() {
        let section: Section<BucketCounts> = Section::missing(Column::YieldPercent);
        let json = serde_json::to_value(&section).expect("serialize section");
        assert_eq!(json["status"], "column_not_found");
        assert_eq!(json["data"]["column"], "yield_percent");
    }

    #[test]
    fn report_serializes() {
        let report = CleaningReport {
            original_records: 4,
            cleaned_records: 3,
            records_removed: 1,
            removal_percentage: 25.0,
            columns_processed: vec![Column::Date, Column::Equipment],
            unique_equipment: 2,
            unique_shifts: 0,
            date_range: DateRange::default(),
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: CleaningReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }
}
