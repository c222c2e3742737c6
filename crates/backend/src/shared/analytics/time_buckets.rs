use chrono::{Datelike, Duration, NaiveDate};
use contracts::shared::analytics::{TimeBucket, TimeUnit, TransactionRecord};
use std::collections::BTreeMap;

use super::error::AnalyticsError;

/// Bucket records by calendar period, `unit` given as text.
///
/// Accepts "day", "week", "month", "quarter" and the Korean labels.
pub fn aggregate_by_time(
    records: &[TransactionRecord],
    unit: &str,
) -> Result<Vec<TimeBucket>, AnalyticsError> {
    let unit = parse_time_unit(unit)?;
    Ok(aggregate_by_time_unit(records, unit))
}

pub fn parse_time_unit(value: &str) -> Result<TimeUnit, AnalyticsError> {
    TimeUnit::parse(value).ok_or_else(|| AnalyticsError::InvalidUnit(value.to_string()))
}

/// One bucket per distinct period present in `records`, ascending by start.
pub fn aggregate_by_time_unit(records: &[TransactionRecord], unit: TimeUnit) -> Vec<TimeBucket> {
    let mut buckets: BTreeMap<NaiveDate, TimeBucket> = BTreeMap::new();

    for record in records {
        let start = period_start(record.date, unit);
        let bucket = buckets.entry(start).or_insert_with(|| TimeBucket {
            period_start: start,
            sales: 0,
            profit: 0.0,
            count: 0,
        });
        bucket.sales += record.sales;
        bucket.profit += record.profit;
        bucket.count += 1;
    }

    buckets.into_values().collect()
}

/// First day of the period containing `date`
pub fn period_start(date: NaiveDate, unit: TimeUnit) -> NaiveDate {
    match unit {
        TimeUnit::Day => date,
        TimeUnit::Week => {
            date - Duration::days(date.weekday().num_days_from_monday() as i64)
        }
        TimeUnit::Month => date.with_day(1).unwrap_or(date),
        TimeUnit::Quarter => {
            let first_month = date.month0() / 3 * 3 + 1;
            NaiveDate::from_ymd_opt(date.year(), first_month, 1).unwrap_or(date)
        }
    }
}
