use contracts::shared::analytics::{DimensionBucket, MapPoint, RegionCoordinates};
use std::collections::HashMap;

/// Join region aggregates with the coordinate table.
///
/// Aggregates whose region has no coordinates are left out of the result.
pub fn to_map_points(
    aggregates: &[DimensionBucket],
    coordinates: &HashMap<String, RegionCoordinates>,
) -> Vec<MapPoint> {
    aggregates
        .iter()
        .filter_map(|bucket| {
            let Some(coords) = coordinates.get(&bucket.key) else {
                tracing::debug!("No coordinates for region '{}', skipping", bucket.key);
                return None;
            };
            Some(MapPoint {
                region: bucket.key.clone(),
                lat: coords.lat,
                lon: coords.lon,
                sales: bucket.total_sales,
                profit: bucket.total_profit,
                count: bucket.count,
            })
        })
        .collect()
}
