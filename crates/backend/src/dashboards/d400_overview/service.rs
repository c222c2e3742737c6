use contracts::dashboards::d400_overview::{
    FilterOptionsResponse, OverviewRequest, OverviewResponse,
};
use contracts::shared::analytics::{
    Dimension, RegionCoordinates, SortField, SortOrder, TransactionRecord,
};
use std::collections::HashMap;

use crate::dashboards::DashboardError;
use crate::shared::analytics::{
    aggregate_by_dimension, aggregate_by_time_unit, filter_records, parse_time_unit,
    sort_records, summarize_kpis, to_map_points,
};

/// Build the overview dashboard for the requested filter.
///
/// When the filter matches nothing the whole data set is shown instead and
/// `filters_matched` is false.
pub fn get_overview(
    records: &[TransactionRecord],
    coordinates: &HashMap<String, RegionCoordinates>,
    request: &OverviewRequest,
) -> Result<OverviewResponse, DashboardError> {
    let time_unit = parse_time_unit(&request.time_unit)?;

    let mut selected = filter_records(records, &request.filter());
    let filters_matched = !selected.is_empty();
    if !filters_matched {
        tracing::warn!("D400 Overview: no records match the filter, showing all data");
        selected = records.to_vec();
    }

    let by_region = aggregate_by_dimension(&selected, Dimension::Region);
    let map_points = to_map_points(&by_region, coordinates);

    let mut details = selected.clone();
    sort_records(&mut details, SortField::Date, SortOrder::Desc);

    Ok(OverviewResponse {
        filters_matched,
        record_count: selected.len(),
        kpis: summarize_kpis(&selected),
        time_unit,
        time_series: aggregate_by_time_unit(&selected, time_unit),
        by_category: aggregate_by_dimension(&selected, Dimension::Category),
        by_region,
        map_points,
        details,
    })
}

/// Categories and regions present in the data (first-seen order) and its date span
pub fn get_filter_options(records: &[TransactionRecord]) -> FilterOptionsResponse {
    let mut categories = Vec::new();
    let mut regions = Vec::new();
    for record in records {
        if !categories.contains(&record.category) {
            categories.push(record.category);
        }
        if !regions.contains(&record.region) {
            regions.push(record.region);
        }
    }

    FilterOptionsResponse {
        categories,
        regions,
        date_min: records.iter().map(|r| r.date).min(),
        date_max: records.iter().map(|r| r.date).max(),
    }
}
