use chrono::Datelike;
use contracts::shared::analytics::{HeatmapCell, TransactionRecord};
use std::collections::BTreeMap;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Sales per (weekday, month) pair. Pairs without records are omitted.
pub fn weekday_month_heatmap(records: &[TransactionRecord]) -> Vec<HeatmapCell> {
    let mut cells: BTreeMap<(u32, u32), i64> = BTreeMap::new();

    for record in records {
        let weekday = record.date.weekday().num_days_from_monday();
        *cells.entry((weekday, record.date.month())).or_insert(0) += record.sales;
    }

    cells
        .into_iter()
        .map(|((weekday, month), sales)| HeatmapCell {
            month,
            weekday: WEEKDAY_NAMES[weekday as usize].to_string(),
            sales,
        })
        .collect()
}
