//! Per-equipment and per-shift aggregates.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use lab_model::{
    Column, Dataset, EquipmentAnalysis, GroupStats, RankingEntry, Section, ShiftAnalysis,
    TextColumn,
};

use crate::stats::{percentage, sample_stats, yield_stats};

#[derive(Default)]
struct Group {
    records: usize,
    yields: Vec<f64>,
    samples: Vec<f64>,
}

/// Aggregates every record under its value of `key`, keyed by that value.
///
/// Records with a missing key are skipped.
pub fn group_stats(dataset: &Dataset, key: TextColumn<'_>) -> BTreeMap<String, GroupStats> {
    let yields = dataset.yields();
    let samples = dataset.samples();
    let mut groups: BTreeMap<&str, Group> = BTreeMap::new();
    for (record, id) in dataset.records.iter().zip(key.values()) {
        let Some(id) = id else {
            continue;
        };
        let group = groups.entry(id).or_default();
        group.records += 1;
        if let Some(value) = yields.and_then(|column| column.value_of(record)) {
            group.yields.push(value);
        }
        if let Some(value) = samples.and_then(|column| column.value_of(record)) {
            group.samples.push(value);
        }
    }
    let total = dataset.len();
    groups
        .into_iter()
        .map(|(id, group)| {
            let stats = GroupStats {
                total_records: group.records,
                usage_percentage: percentage(group.records, total),
                yield_stats: yield_stats(&group.yields),
                sample_stats: sample_stats(&group.samples),
            };
            (id.to_string(), stats)
        })
        .collect()
}

/// Descending mean yield, then ascending id.
fn by_mean_yield_desc(a: (&str, f64), b: (&str, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Groups with yield data, best first.
pub fn ranking(stats: &BTreeMap<String, GroupStats>) -> Vec<RankingEntry> {
    let mut ranking: Vec<RankingEntry> = stats
        .iter()
        .filter_map(|(id, group)| {
            Some(RankingEntry {
                id: id.clone(),
                mean_yield: group.yield_stats?.mean,
                total_records: group.total_records,
            })
        })
        .collect();
    ranking.sort_by(|a, b| {
        by_mean_yield_desc((a.id.as_str(), a.mean_yield), (b.id.as_str(), b.mean_yield))
    });
    ranking
}

pub fn equipment_analysis(dataset: &Dataset) -> Section<EquipmentAnalysis> {
    let Some(equipment) = dataset.equipment() else {
        return Section::missing(Column::Equipment);
    };
    let stats = group_stats(dataset, equipment);
    Section::Computed(EquipmentAnalysis {
        ranking: ranking(&stats),
        total_equipment: stats.len(),
        stats,
    })
}

pub fn shift_analysis(dataset: &Dataset) -> Section<ShiftAnalysis> {
    let Some(shifts) = dataset.shifts() else {
        return Section::missing(Column::Shift);
    };
    let stats = group_stats(dataset, shifts);
    let best_shift = ranking(&stats).into_iter().next().map(|entry| entry.id);
    Section::Computed(ShiftAnalysis { stats, best_shift })
}

/// Group with the lowest mean yield; ties go to the smaller id.
pub fn worst_by_mean_yield(stats: &BTreeMap<String, GroupStats>) -> Option<(&str, f64)> {
    stats
        .iter()
        .filter_map(|(id, group)| Some((id.as_str(), group.yield_stats?.mean)))
        .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)))
}
