use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::shared::state::AppState;
use crate::system::sessions::Session;

/// Middleware that requires a valid token bound to a live session
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let session = authenticate(&state, req.headers())?;

    // Add session to request extensions for use in handlers
    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}

/// Middleware that requires admin privileges
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let session = authenticate(&state, req.headers())?;

    if !session.is_admin() {
        tracing::warn!("Admin route denied for '{}'", session.username);
        return Err(StatusCode::FORBIDDEN);
    }

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Session, StatusCode> {
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = state
        .jwt
        .validate_token(token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let session_id = Uuid::parse_str(&claims.sid).map_err(|_| StatusCode::UNAUTHORIZED)?;

    // Token outlives a logout; the session store is authoritative
    state
        .sessions
        .get(&session_id)
        .ok_or(StatusCode::UNAUTHORIZED)
}
