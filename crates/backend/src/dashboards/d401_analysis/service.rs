use contracts::dashboards::d401_analysis::{
    CategoryAnalysisRequest, DimensionAnalysisResponse, ExploreRequest, ExploreResponse,
    HeatmapResponse, MetricSeries, MovingAverageSeries, RegionAnalysisRequest,
    TimeSeriesRequest, TimeSeriesResponse,
};
use contracts::shared::analytics::{
    Dimension, FilterSet, RegionCoordinates, SortField, SortOrder, TransactionRecord,
};
use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::dashboards::DashboardError;
use crate::shared::analytics::{
    aggregate_by_dimension, aggregate_by_time_unit, filter_records, moving_average, paginate,
    parse_time_unit, sort_records, to_map_points, total_pages, weekday_month_heatmap,
    AnalyticsError,
};

/// Window sizes offered for the moving-average overlay
pub const MOVING_AVERAGE_WINDOWS: RangeInclusive<i64> = 2..=10;

/// Page sizes offered on the explore tab
pub const PAGE_SIZES: RangeInclusive<i64> = 10..=100;

pub fn analyze_categories(
    records: &[TransactionRecord],
    request: &CategoryAnalysisRequest,
) -> Result<DimensionAnalysisResponse, DashboardError> {
    if request.categories.is_empty() {
        return Err(DashboardError::EmptySelection("category"));
    }

    let filter = FilterSet {
        categories: request.categories.clone(),
        ..Default::default()
    };
    let selected = filter_records(records, &filter);

    Ok(DimensionAnalysisResponse {
        dimension: Dimension::Category,
        buckets: aggregate_by_dimension(&selected, Dimension::Category),
        map_points: Vec::new(),
    })
}

pub fn analyze_regions(
    records: &[TransactionRecord],
    coordinates: &HashMap<String, RegionCoordinates>,
    request: &RegionAnalysisRequest,
) -> Result<DimensionAnalysisResponse, DashboardError> {
    if request.regions.is_empty() {
        return Err(DashboardError::EmptySelection("region"));
    }

    let filter = FilterSet {
        regions: request.regions.clone(),
        ..Default::default()
    };
    let selected = filter_records(records, &filter);
    let buckets = aggregate_by_dimension(&selected, Dimension::Region);
    let map_points = to_map_points(&buckets, coordinates);

    Ok(DimensionAnalysisResponse {
        dimension: Dimension::Region,
        buckets,
        map_points,
    })
}

/// Time series per metric, with an optional trailing moving average.
///
/// A window the engine cannot apply to this series (more points than buckets)
/// drops the overlay and sets `moving_average_skipped`; it is not an error.
pub fn time_series(
    records: &[TransactionRecord],
    request: &TimeSeriesRequest,
) -> Result<TimeSeriesResponse, DashboardError> {
    let time_unit = parse_time_unit(&request.time_unit)?;
    let buckets = aggregate_by_time_unit(records, time_unit);

    let window = match request.moving_average_window {
        Some(window) if !MOVING_AVERAGE_WINDOWS.contains(&window) => {
            return Err(AnalyticsError::InvalidWindow {
                window,
                len: buckets.len(),
            }
            .into());
        }
        Some(window) => Some(window as usize),
        None => None,
    };

    let series: Vec<MetricSeries> = request
        .metrics
        .iter()
        .map(|metric| MetricSeries {
            metric: *metric,
            values: buckets.iter().map(|b| metric.value_of(b)).collect(),
        })
        .collect();

    let mut moving_averages = Vec::new();
    let mut moving_average_skipped = false;
    if let Some(window) = window {
        for s in &series {
            match moving_average(&s.values, window) {
                Ok(values) => moving_averages.push(MovingAverageSeries {
                    metric: s.metric,
                    window,
                    values,
                }),
                Err(e) => {
                    tracing::warn!("D401 Analysis: moving average skipped: {}", e);
                    moving_averages.clear();
                    moving_average_skipped = true;
                    break;
                }
            }
        }
    }

    Ok(TimeSeriesResponse {
        time_unit,
        buckets,
        series,
        moving_averages,
        moving_average_skipped,
    })
}

pub fn heatmap(records: &[TransactionRecord]) -> HeatmapResponse {
    HeatmapResponse {
        cells: weekday_month_heatmap(records),
    }
}

/// Filter, sort, then cut out one page
pub fn explore(
    records: &[TransactionRecord],
    request: &ExploreRequest,
) -> Result<ExploreResponse, DashboardError> {
    if !PAGE_SIZES.contains(&request.page_size) || request.page < 1 {
        return Err(AnalyticsError::InvalidPage {
            page_size: request.page_size,
            page_number: request.page,
        }
        .into());
    }
    let page_size = request.page_size as usize;
    let page_number = request.page as usize;

    let rows = filtered_sorted(records, &request.filter, request.sort_by, request.sort_order);
    let page = paginate(&rows, page_size, page_number)?;

    Ok(ExploreResponse {
        total_items: rows.len(),
        total_pages: total_pages(rows.len(), page_size)?,
        page: page_number,
        page_size,
        rows: page.to_vec(),
    })
}

pub(crate) fn filtered_sorted(
    records: &[TransactionRecord],
    filter: &FilterSet,
    sort_by: SortField,
    sort_order: SortOrder,
) -> Vec<TransactionRecord> {
    let mut rows = filter_records(records, filter);
    sort_records(&mut rows, sort_by, sort_order);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::{date, sample};
    use crate::shared::config::Config;
    use contracts::enums::{Category, Region};
    use contracts::shared::analytics::{Metric, TimeUnit};

    fn ts_request(unit: &str, window: Option<i64>) -> TimeSeriesRequest {
        TimeSeriesRequest {
            time_unit: unit.to_string(),
            metrics: vec![Metric::Sales, Metric::Count],
            moving_average_window: window,
        }
    }

    fn explore_request(page_size: i64, page: i64) -> ExploreRequest {
        ExploreRequest {
            filter: FilterSet::default(),
            sort_by: SortField::Sales,
            sort_order: SortOrder::Desc,
            page_size,
            page,
        }
    }

    #[test]
    fn test_empty_category_selection() {
        let request = CategoryAnalysisRequest { categories: vec![] };
        let err = analyze_categories(&sample(), &request).unwrap_err();
        assert!(matches!(err, DashboardError::EmptySelection("category")));
        assert_eq!(err.to_string(), "select at least one category");
    }

    #[test]
    fn test_category_analysis() {
        let request = CategoryAnalysisRequest {
            categories: vec![Category::ProductB, Category::ProductA],
        };
        let response = analyze_categories(&sample(), &request).unwrap();
        assert_eq!(response.buckets.len(), 2);
        assert_eq!(response.buckets[0].key, "제품A");
        assert_eq!(response.buckets[0].total_sales, 10000);
        assert_eq!(response.buckets[1].key, "제품B");
        assert_eq!(response.buckets[1].total_sales, 9000);
    }

    #[test]
    fn test_region_analysis_has_map_points() {
        let request = RegionAnalysisRequest {
            regions: vec![Region::North, Region::East],
        };
        let regions = Config::default().regions;
        let response = analyze_regions(&sample(), &regions, &request).unwrap();
        assert_eq!(response.buckets.len(), 2);
        assert_eq!(response.map_points.len(), 2);

        let north = response
            .map_points
            .iter()
            .find(|p| p.region == "북부")
            .unwrap();
        assert_eq!(north.sales, 11000);
        assert_eq!(north.count, 3);
    }

    #[test]
    fn test_time_series_with_moving_average() {
        let response = time_series(&sample(), &ts_request("month", Some(2))).unwrap();
        assert_eq!(response.time_unit, TimeUnit::Month);
        assert_eq!(response.series.len(), 2);
        assert_eq!(response.series[0].values, vec![10000.0, 5000.0, 6000.0, 7000.0]);
        assert_eq!(response.series[1].values, vec![4.0, 1.0, 1.0, 1.0]);

        assert!(!response.moving_average_skipped);
        assert_eq!(response.moving_averages.len(), 2);
        assert_eq!(
            response.moving_averages[0].values,
            vec![None, Some(7500.0), Some(5500.0), Some(6500.0)]
        );
    }

    #[test]
    fn test_time_series_skips_oversized_window() {
        let response = time_series(&sample(), &ts_request("quarter", Some(5))).unwrap();
        assert_eq!(response.buckets.len(), 2);
        assert!(response.moving_average_skipped);
        assert!(response.moving_averages.is_empty());
    }

    #[test]
    fn test_time_series_window_out_of_range() {
        let err = time_series(&sample(), &ts_request("day", Some(11))).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Analytics(AnalyticsError::InvalidWindow { window: 11, .. })
        ));
        assert!(time_series(&sample(), &ts_request("day", Some(1))).is_err());
        assert!(matches!(
            time_series(&sample(), &ts_request("day", Some(-3))),
            Err(DashboardError::Analytics(AnalyticsError::InvalidWindow { window: -3, .. }))
        ));
        assert!(time_series(&sample(), &ts_request("hour", None)).is_err());
    }

    #[test]
    fn test_explore_pages() {
        let records: Vec<_> = (0..25)
            .flat_map(|_| sample())
            .collect();
        let response = explore(&records, &explore_request(20, 9)).unwrap();
        assert_eq!(response.total_items, 175);
        assert_eq!(response.total_pages, 9);
        assert_eq!(response.rows.len(), 15);

        let first = explore(&records, &explore_request(10, 1)).unwrap();
        assert!(first.rows.iter().all(|r| r.sales == 7000));
        assert_eq!(first.rows[0].date, date(2023, 4, 1));

        let beyond = explore(&records, &explore_request(100, 3)).unwrap();
        assert!(beyond.rows.is_empty());
    }

    #[test]
    fn test_explore_page_size_bounds() {
        assert!(matches!(
            explore(&sample(), &explore_request(5, 1)),
            Err(DashboardError::Analytics(AnalyticsError::InvalidPage { .. }))
        ));
        assert!(explore(&sample(), &explore_request(101, 1)).is_err());
        assert!(explore(&sample(), &explore_request(10, 0)).is_err());
        assert!(matches!(
            explore(&sample(), &explore_request(10, -1)),
            Err(DashboardError::Analytics(AnalyticsError::InvalidPage {
                page_size: 10,
                page_number: -1
            }))
        ));
    }

    #[test]
    fn test_heatmap_counts_sales() {
        let response = heatmap(&sample());
        let total: i64 = response.cells.iter().map(|c| c.sales).sum();
        assert_eq!(total, 28000);
    }
}
