use serde::{Deserialize, Serialize};

use crate::enums::{Category, Region};
use crate::shared::analytics::{
    default_time_unit, Dimension, DimensionBucket, FilterSet, HeatmapCell, MapPoint, Metric,
    SortField, SortOrder, TimeBucket, TimeUnit, TransactionRecord,
};

// ---------------------------------------------------------------------------
// Category / region tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAnalysisRequest {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionAnalysisRequest {
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionAnalysisResponse {
    pub dimension: Dimension,
    pub buckets: Vec<DimensionBucket>,
    /// Filled for the region tab only
    pub map_points: Vec<MapPoint>,
}

// ---------------------------------------------------------------------------
// Time series tab
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesRequest {
    #[serde(default = "default_time_unit")]
    pub time_unit: String,
    #[serde(default = "default_metrics")]
    pub metrics: Vec<Metric>,
    /// Signed so that out-of-range input reaches validation
    #[serde(default)]
    pub moving_average_window: Option<i64>,
}

fn default_metrics() -> Vec<Metric> {
    vec![Metric::Sales, Metric::Profit]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSeries {
    pub metric: Metric,
    pub values: Vec<f64>,
}

/// Trailing mean aligned with the buckets; leading entries are `None`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingAverageSeries {
    pub metric: Metric,
    pub window: usize,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesResponse {
    pub time_unit: TimeUnit,
    pub buckets: Vec<TimeBucket>,
    pub series: Vec<MetricSeries>,
    pub moving_averages: Vec<MovingAverageSeries>,
    /// True when a window was requested but there were too few buckets for it
    pub moving_average_skipped: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapResponse {
    pub cells: Vec<HeatmapCell>,
}

// ---------------------------------------------------------------------------
// Data exploration tab
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreRequest {
    #[serde(default)]
    pub filter: FilterSet,
    #[serde(default)]
    pub sort_by: SortField,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    /// 1-based
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page_size() -> i64 {
    20
}

fn default_page() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreResponse {
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    pub rows: Vec<TransactionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub filter: FilterSet,
    #[serde(default)]
    pub sort_by: SortField,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explore_request_defaults() {
        let request: ExploreRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.page_size, 20);
        assert_eq!(request.page, 1);
        assert_eq!(request.sort_by, SortField::Date);
        assert_eq!(request.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_time_series_defaults() {
        let request: TimeSeriesRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.time_unit, "day");
        assert_eq!(request.metrics, vec![Metric::Sales, Metric::Profit]);
        assert!(request.moving_average_window.is_none());
    }

    #[test]
    fn test_negative_paging_deserializes() {
        let request: ExploreRequest =
            serde_json::from_str(r#"{"page_size":10,"page":-1}"#).unwrap();
        assert_eq!(request.page, -1);

        let request: TimeSeriesRequest =
            serde_json::from_str(r#"{"moving_average_window":-3}"#).unwrap();
        assert_eq!(request.moving_average_window, Some(-3));
    }
}
