use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::dashboards::DashboardError;
use crate::shared::analytics::AnalyticsError;
use crate::system::settings::SettingsError;

/// JSON body of every error answered by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// `Json` body extractor whose rejections answer with an `ApiError` body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug)]
pub enum AppError {
    /// Body is not valid JSON for the endpoint
    InvalidRequest(String),
    /// Engine rejected the request parameters
    Analytics(AnalyticsError),
    /// A page needs at least one selected value
    EmptySelection(&'static str),
    Settings(SettingsError),
    /// Session ended while the request was in flight
    Unauthorized,
    Forbidden(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_REQUEST", msg),
            ),
            AppError::Analytics(e) => (StatusCode::BAD_REQUEST, ApiError::new(e.code(), e.to_string())),
            AppError::EmptySelection(what) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("EMPTY_SELECTION", format!("select at least one {}", what)),
            ),
            AppError::Settings(e) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_SETTINGS", e.to_string()),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiError::new("UNAUTHORIZED", "session expired or logged out"),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, ApiError::new("FORBIDDEN", msg)),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<AnalyticsError> for AppError {
    fn from(e: AnalyticsError) -> Self {
        AppError::Analytics(e)
    }
}

impl From<DashboardError> for AppError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::Analytics(e) => AppError::Analytics(e),
            DashboardError::EmptySelection(what) => AppError::EmptySelection(what),
            DashboardError::Internal(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<SettingsError> for AppError {
    fn from(e: SettingsError) -> Self {
        AppError::Settings(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}
