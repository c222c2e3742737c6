use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Region};
use crate::shared::analytics::{
    default_time_unit, DimensionBucket, FilterSet, MapPoint, TimeBucket, TimeUnit,
    TransactionRecord,
};
use crate::shared::indicators::IndicatorValue;

/// Sidebar filters of the overview dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewRequest {
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub regions: Vec<Region>,
    /// "day" | "week" | "month" | "quarter" (or the Korean labels)
    #[serde(default = "default_time_unit")]
    pub time_unit: String,
}

impl OverviewRequest {
    pub fn filter(&self) -> FilterSet {
        FilterSet {
            categories: self.categories.clone(),
            regions: self.regions.clone(),
            date_from: self.date_from,
            date_to: self.date_to,
            min_sales: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    /// False when the filters matched nothing and the full data set is shown instead
    pub filters_matched: bool,
    pub record_count: usize,
    pub kpis: Vec<IndicatorValue>,
    pub time_unit: TimeUnit,
    pub time_series: Vec<TimeBucket>,
    pub by_category: Vec<DimensionBucket>,
    pub by_region: Vec<DimensionBucket>,
    pub map_points: Vec<MapPoint>,
    /// Detail table, newest first
    pub details: Vec<TransactionRecord>,
}

/// Options for the sidebar multiselects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    pub categories: Vec<Category>,
    pub regions: Vec<Region>,
    pub date_min: Option<NaiveDate>,
    pub date_max: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: OverviewRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.time_unit, "day");
        assert!(request.filter().is_unrestricted());
    }
}
