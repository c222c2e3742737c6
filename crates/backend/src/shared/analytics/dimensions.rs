use contracts::shared::analytics::{Dimension, DimensionBucket, TransactionRecord};
use std::collections::BTreeMap;

#[derive(Default)]
struct Totals {
    sales: i64,
    profit: f64,
    count: usize,
}

/// Group records by category or region label, ordered by label.
pub fn aggregate_by_dimension(
    records: &[TransactionRecord],
    dimension: Dimension,
) -> Vec<DimensionBucket> {
    let mut groups: BTreeMap<&'static str, Totals> = BTreeMap::new();

    for record in records {
        let key = match dimension {
            Dimension::Category => record.category.label(),
            Dimension::Region => record.region.label(),
        };
        let totals = groups.entry(key).or_default();
        totals.sales += record.sales;
        totals.profit += record.profit;
        totals.count += 1;
    }

    groups
        .into_iter()
        .map(|(key, totals)| DimensionBucket {
            key: key.to_string(),
            total_sales: totals.sales,
            total_profit: totals.profit,
            count: totals.count,
            mean_sales: totals.sales as f64 / totals.count as f64,
            margin_pct: margin_pct(totals.profit, totals.sales),
        })
        .collect()
}

/// Profit as a percentage of sales; 0 when there are no sales.
pub fn margin_pct(profit: f64, sales: i64) -> f64 {
    if sales == 0 {
        0.0
    } else {
        profit / sales as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::{date, record, sample};
    use contracts::enums::{Category, Region};

    #[test]
    fn test_by_category() {
        let buckets = aggregate_by_dimension(&sample(), Dimension::Category);
        let keys: Vec<_> = buckets.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["제품A", "제품B", "제품C", "제품D"]);

        let a = &buckets[0];
        assert_eq!(a.total_sales, 10000);
        assert_eq!(a.count, 3);
        assert!((a.total_profit - 2500.0).abs() < 1e-9);
        assert!((a.mean_sales - 10000.0 / 3.0).abs() < 1e-9);
        assert!((a.margin_pct - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_by_region_covers_every_record() {
        let records = sample();
        let buckets = aggregate_by_dimension(&records, Dimension::Region);
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), records.len());

        let north = buckets.iter().find(|b| b.key == "북부").unwrap();
        assert_eq!(north.total_sales, 11000);
        assert_eq!(north.count, 3);
    }

    #[test]
    fn test_margin_within_bounds_when_profit_below_sales() {
        for bucket in aggregate_by_dimension(&sample(), Dimension::Region) {
            assert!((0.0..=100.0).contains(&bucket.margin_pct), "{:?}", bucket);
        }
    }

    #[test]
    fn test_zero_sales_margin_is_zero() {
        let records = vec![
            record(date(2023, 1, 1), Category::ProductA, Region::North, 0, 0.0),
            record(date(2023, 1, 2), Category::ProductA, Region::North, 0, 0.0),
        ];
        let buckets = aggregate_by_dimension(&records, Dimension::Category);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].margin_pct, 0.0);
        assert_eq!(buckets[0].mean_sales, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_by_dimension(&[], Dimension::Category).is_empty());
    }
}
