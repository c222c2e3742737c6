use axum::{extract::State, http::StatusCode, Json};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentSession;
use crate::system::users::service as user_service;

/// Login handler
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let user = user_service::verify_credentials(&state.config.users, &request.username, &request.password)
        .ok_or_else(|| {
            tracing::warn!("Login failed for '{}'", request.username);
            StatusCode::UNAUTHORIZED
        })?;

    // Sessions whose tokens expired are unreachable anyway
    let purged = state.sessions.purge_older_than(state.jwt.lifetime());
    if purged > 0 {
        tracing::debug!("Purged {} expired sessions", purged);
    }

    let session = state.sessions.create(&user.username, user.role);

    let access_token = state.jwt.generate_access_token(&session).map_err(|e| {
        tracing::error!("Failed to issue token: {}", e);
        state.sessions.destroy(&session.id);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::info!("User '{}' logged in (session {})", session.username, session.id);

    Ok(Json(LoginResponse {
        access_token,
        user: session.user_info(),
    }))
}

/// Logout handler, ends the session the token is bound to
pub async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> StatusCode {
    state.sessions.destroy(&session.id);
    tracing::info!("User '{}' logged out (session {})", session.username, session.id);
    StatusCode::OK
}

/// Get current user handler (protected by middleware)
pub async fn current_user(CurrentSession(session): CurrentSession) -> Json<UserInfo> {
    Json(session.user_info())
}
