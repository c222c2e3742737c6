use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use contracts::dashboards::d401_analysis::{
    CategoryAnalysisRequest, DimensionAnalysisResponse, ExploreRequest, ExploreResponse,
    ExportRequest, HeatmapResponse, RegionAnalysisRequest, TimeSeriesRequest, TimeSeriesResponse,
};

use crate::api::error::{ApiJson, AppError};
use crate::dashboards::d401_analysis::{export, service};
use crate::shared::state::AppState;

/// POST /api/d401/category
pub async fn analyze_categories(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CategoryAnalysisRequest>,
) -> Result<Json<DimensionAnalysisResponse>, AppError> {
    let records = state.data.snapshot();
    let response = service::analyze_categories(&records, &request).map_err(|e| {
        tracing::warn!("D401 Analysis: category analysis rejected: {}", e);
        e
    })?;
    Ok(Json(response))
}

/// POST /api/d401/region
pub async fn analyze_regions(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegionAnalysisRequest>,
) -> Result<Json<DimensionAnalysisResponse>, AppError> {
    let records = state.data.snapshot();
    let response = service::analyze_regions(&records, &state.config.regions, &request)
        .map_err(|e| {
            tracing::warn!("D401 Analysis: region analysis rejected: {}", e);
            e
        })?;
    Ok(Json(response))
}

/// POST /api/d401/time_series
pub async fn time_series(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TimeSeriesRequest>,
) -> Result<Json<TimeSeriesResponse>, AppError> {
    tracing::info!(
        "D401 Analysis: time series unit={}, metrics={:?}, window={:?}",
        request.time_unit,
        request.metrics,
        request.moving_average_window
    );

    let records = state.data.snapshot();
    let response = service::time_series(&records, &request)?;
    Ok(Json(response))
}

/// GET /api/d401/heatmap
pub async fn heatmap(State(state): State<AppState>) -> Json<HeatmapResponse> {
    let records = state.data.snapshot();
    Json(service::heatmap(&records))
}

/// POST /api/d401/explore
pub async fn explore(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ExploreRequest>,
) -> Result<Json<ExploreResponse>, AppError> {
    let records = state.data.snapshot();
    let response = service::explore(&records, &request)?;
    tracing::info!(
        "D401 Analysis: explore page {}/{} ({} of {} rows)",
        response.page,
        response.total_pages,
        response.rows.len(),
        response.total_items
    );
    Ok(Json(response))
}

/// POST /api/d401/export
pub async fn export_csv(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ExportRequest>,
) -> Result<Response, AppError> {
    let records = state.data.snapshot();
    let export = export::export_csv(&records, &request, Local::now().naive_local())?;

    tracing::info!(
        "D401 Analysis: exporting {} bytes as {}",
        export.content.len(),
        export.filename
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ),
        ],
        export.content,
    )
        .into_response())
}
