use axum::{extract::State, Json};
use contracts::dashboards::d400_overview::{
    FilterOptionsResponse, OverviewRequest, OverviewResponse,
};

use crate::api::error::{ApiJson, AppError};
use crate::dashboards::d400_overview::service;
use crate::shared::format::format_won;
use crate::shared::state::AppState;

/// POST /api/d400/overview
pub async fn get_overview(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<OverviewRequest>,
) -> Result<Json<OverviewResponse>, AppError> {
    tracing::info!(
        "D400 Overview: unit={}, categories={}, regions={}, from={:?}, to={:?}",
        request.time_unit,
        request.categories.len(),
        request.regions.len(),
        request.date_from,
        request.date_to
    );

    let records = state.data.snapshot();
    match service::get_overview(&records, &state.config.regions, &request) {
        Ok(response) => {
            let total_sales: i64 = response.time_series.iter().map(|b| b.sales).sum();
            tracing::info!(
                "D400 Overview: Returning {} records in {} buckets, sales {}",
                response.record_count,
                response.time_series.len(),
                format_won(total_sales)
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D400 Overview: Failed to build overview: {}", e);
            Err(e.into())
        }
    }
}

/// GET /api/d400/filter_options
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptionsResponse> {
    let records = state.data.snapshot();
    Json(service::get_filter_options(&records))
}
