use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Region};

// ---------------------------------------------------------------------------
// Source records
// ---------------------------------------------------------------------------

/// One sales transaction, the atomic unit every page aggregates over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub category: Category,
    pub region: Region,
    pub sales: i64,
    pub profit: f64,
}

// ---------------------------------------------------------------------------
// Grouping keys
// ---------------------------------------------------------------------------

/// Calendar granularity for time bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Day,
    Week,
    Month,
    Quarter,
}

impl TimeUnit {
    pub fn code(&self) -> &'static str {
        match self {
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Quarter => "quarter",
        }
    }

    /// Korean radio-button label of the dashboard
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeUnit::Day => "일별",
            TimeUnit::Week => "주별",
            TimeUnit::Month => "월별",
            TimeUnit::Quarter => "분기별",
        }
    }

    /// Accepts both the code and the display label
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        [TimeUnit::Day, TimeUnit::Week, TimeUnit::Month, TimeUnit::Quarter]
            .into_iter()
            .find(|unit| unit.code() == value || unit.display_name() == value)
    }
}

/// Serde default of time-unit request fields: daily buckets
pub fn default_time_unit() -> String {
    TimeUnit::Day.code().to_string()
}

/// Categorical attribute used as a group-by key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Category,
    Region,
}

// ---------------------------------------------------------------------------
// Aggregation output
// ---------------------------------------------------------------------------

/// Records sharing one calendar period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBucket {
    /// First day of the period (ISO week starts on Monday)
    pub period_start: NaiveDate,
    pub sales: i64,
    pub profit: f64,
    pub count: usize,
}

/// Records sharing one category or region label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionBucket {
    pub key: String,
    pub total_sales: i64,
    pub total_profit: f64,
    pub count: usize,
    pub mean_sales: f64,
    /// total_profit / total_sales * 100, or 0 when total_sales is 0
    pub margin_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionCoordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Region aggregate placed on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub region: String,
    pub lat: f64,
    pub lon: f64,
    pub sales: i64,
    pub profit: f64,
    pub count: usize,
}

/// Sum of sales for one (month, weekday) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub month: u32,
    /// English weekday name, Monday first
    pub weekday: String,
    pub sales: i64,
}

// ---------------------------------------------------------------------------
// Filtering, sorting, paging
// ---------------------------------------------------------------------------

/// Conjunction of optional predicates. Empty list / `None` = no restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub regions: Vec<Region>,
    /// Inclusive
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Inclusive
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    #[serde(default)]
    pub min_sales: Option<i64>,
}

impl FilterSet {
    pub fn is_unrestricted(&self) -> bool {
        self.categories.is_empty()
            && self.regions.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.min_sales.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Date,
    Sales,
    Profit,
    Category,
    Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Metric that can be plotted on the time series page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Sales,
    Profit,
    Count,
}

impl Metric {
    pub fn value_of(&self, bucket: &TimeBucket) -> f64 {
        match self {
            Metric::Sales => bucket.sales as f64,
            Metric::Profit => bucket.profit,
            Metric::Count => bucket.count as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_unit_parse() {
        assert_eq!(TimeUnit::parse("week"), Some(TimeUnit::Week));
        assert_eq!(TimeUnit::parse("분기별"), Some(TimeUnit::Quarter));
        assert_eq!(TimeUnit::parse(" month "), Some(TimeUnit::Month));
        assert_eq!(TimeUnit::parse("year"), None);
        assert_eq!(TimeUnit::parse(""), None);
    }

    #[test]
    fn test_filter_set_defaults_from_empty_json() {
        let filter: FilterSet = serde_json::from_str("{}").unwrap();
        assert!(filter.is_unrestricted());
    }

    #[test]
    fn test_filter_set_with_labels() {
        let filter: FilterSet = serde_json::from_str(
            r#"{"categories":["제품A"],"regions":["북부","남부"],"date_from":"2023-01-05","min_sales":5000}"#,
        )
        .unwrap();
        assert_eq!(filter.categories, vec![Category::ProductA]);
        assert_eq!(filter.regions, vec![Region::North, Region::South]);
        assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2023, 1, 5));
        assert_eq!(filter.min_sales, Some(5000));
        assert!(!filter.is_unrestricted());
    }
}
