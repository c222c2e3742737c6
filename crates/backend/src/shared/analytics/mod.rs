//! Aggregation engine.
//!
//! Pure functions from a slice of [`TransactionRecord`]s to summary tables.
//! Nothing here keeps state between calls or touches I/O, so every page
//! handler can call into it concurrently on the shared data snapshot.
//!
//! [`TransactionRecord`]: contracts::shared::analytics::TransactionRecord

pub mod dimensions;
pub mod error;
pub mod filter;
pub mod heatmap;
pub mod kpi;
pub mod map_points;
pub mod moving_average;
pub mod paginate;
pub mod time_buckets;

pub use dimensions::{aggregate_by_dimension, margin_pct};
pub use error::AnalyticsError;
pub use filter::{filter_records, sort_records};
pub use heatmap::weekday_month_heatmap;
pub use kpi::summarize_kpis;
pub use map_points::to_map_points;
pub use moving_average::moving_average;
pub use paginate::{paginate, total_pages};
pub use time_buckets::{aggregate_by_time, aggregate_by_time_unit, parse_time_unit};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use contracts::enums::{Category, Region};
    use contracts::shared::analytics::TransactionRecord;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn record(
        date: NaiveDate,
        category: Category,
        region: Region,
        sales: i64,
        profit: f64,
    ) -> TransactionRecord {
        TransactionRecord {
            date,
            category,
            region,
            sales,
            profit,
        }
    }

    /// Small fixed data set spanning two quarters
    pub fn sample() -> Vec<TransactionRecord> {
        vec![
            record(date(2023, 1, 1), Category::ProductA, Region::North, 1000, 100.0),
            record(date(2023, 1, 2), Category::ProductB, Region::South, 2000, 400.0),
            record(date(2023, 1, 2), Category::ProductA, Region::North, 3000, 600.0),
            record(date(2023, 1, 9), Category::ProductC, Region::East, 4000, 1200.0),
            record(date(2023, 2, 14), Category::ProductD, Region::West, 5000, 500.0),
            record(date(2023, 3, 31), Category::ProductA, Region::Central, 6000, 1800.0),
            record(date(2023, 4, 1), Category::ProductB, Region::North, 7000, 1400.0),
        ]
    }
}
