use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lab_model::{AnalysisResult, CleaningReport, Priority, Section};
use lab_transform::CleaningStats;

pub fn print_cleaning_summary(report: &CleaningReport, stats: &CleaningStats) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Cleaning"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Original records"), Cell::new(report.original_records)]);
    table.add_row(vec![Cell::new("Cleaned records"), Cell::new(report.cleaned_records)]);
    table.add_row(vec![
        Cell::new("Removed records"),
        count_cell(report.records_removed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Removal rate"),
        Cell::new(format!("{:.1}%", report.removal_percentage)),
    ]);
    table.add_row(vec![
        Cell::new("Unparsed dates"),
        count_cell(stats.unparsed_dates, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Non-numeric values"),
        count_cell(stats.invalid_samples + stats.invalid_yields, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Yields outside 0-100%"),
        count_cell(stats.out_of_range_yields, Color::Yellow),
    ]);
    table.add_row(vec![Cell::new("Equipment"), Cell::new(report.unique_equipment)]);
    table.add_row(vec![Cell::new("Shifts"), Cell::new(report.unique_shifts)]);
    let range = match (report.date_range.start, report.date_range.end) {
        (Some(start), Some(end)) => format!("{start} .. {end}"),
        _ => "-".to_string(),
    };
    table.add_row(vec![Cell::new("Date range"), Cell::new(range)]);
    println!("{table}");
}

pub fn print_analysis_summary(result: &AnalysisResult) {
    print_performance(result);
    print_equipment_ranking(result);
    print_recommendations(result);
}

fn print_performance(result: &AnalysisResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Performance"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    match &result.performance {
        Section::Computed(performance) => {
            match performance.statistics {
                Some(stats) => {
                    table.add_row(vec![
                        Cell::new("Mean yield"),
                        Cell::new(format!("{:.1}%", stats.mean)),
                    ]);
                    table.add_row(vec![
                        Cell::new("Median yield"),
                        Cell::new(format!("{:.1}%", stats.median)),
                    ]);
                    table.add_row(vec![
                        Cell::new("Std deviation"),
                        Cell::new(format!("{:.2}", stats.std)),
                    ]);
                }
                None => {
                    table.add_row(vec![Cell::new("Mean yield"), dim_cell("-")]);
                }
            }
            let counts = performance.distribution;
            table.add_row(vec![
                Cell::new("Low / medium / high"),
                Cell::new(format!("{} / {} / {}", counts.low, counts.medium, counts.high)),
            ]);
        }
        Section::ColumnNotFound { column } => {
            table.add_row(vec![
                Cell::new("Yield"),
                dim_cell(format!("column {column} not found")),
            ]);
        }
    }
    table.add_row(vec![
        Cell::new("Anomalies"),
        count_cell(result.anomalies.total(), Color::Red),
    ]);
    println!("{table}");
}

fn print_equipment_ranking(result: &AnalysisResult) {
    let Some(equipment) = result.equipment.computed() else {
        return;
    };
    if equipment.ranking.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Equipment"),
        header_cell("Mean yield"),
        header_cell("Records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (position, entry) in equipment.ranking.iter().enumerate() {
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(&entry.id),
            Cell::new(format!("{:.1}%", entry.mean_yield)),
            Cell::new(entry.total_records),
        ]);
    }
    println!("{table}");
}

fn print_recommendations(result: &AnalysisResult) {
    if result.recommendations.is_empty() {
        println!("No recommendations.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Priority"),
        header_cell("Recommendation"),
        header_cell("Action"),
    ]);
    apply_table_style(&mut table);
    for recommendation in &result.recommendations {
        table.add_row(vec![
            priority_cell(recommendation.priority),
            Cell::new(format!(
                "{}\n{}",
                recommendation.title, recommendation.description
            )),
            Cell::new(&recommendation.action),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn priority_cell(priority: Priority) -> Cell {
    let (label, color) = match priority {
        Priority::High => ("high", Color::Red),
        Priority::Medium => ("medium", Color::Yellow),
        Priority::Low => ("low", Color::Blue),
    };
    Cell::new(label).fg(color).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
