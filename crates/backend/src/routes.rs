use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::api::handlers;
use crate::shared::state::AppState;
use crate::system;
use crate::system::auth::middleware::{require_admin, require_auth};

/// Build the application router
pub fn configure_routes(state: AppState) -> Router {
    let auth = middleware::from_fn_with_state(state.clone(), require_auth);
    let admin = middleware::from_fn_with_state(state.clone(), require_admin);

    // ========================================
    // DASHBOARD ROUTES (authenticated)
    // ========================================
    let dashboards = Router::new()
        // D400 Overview
        .route("/api/d400/overview", post(handlers::d400_overview::get_overview))
        .route(
            "/api/d400/filter_options",
            get(handlers::d400_overview::get_filter_options),
        )
        // D401 Analysis
        .route(
            "/api/d401/category",
            post(handlers::d401_analysis::analyze_categories),
        )
        .route(
            "/api/d401/region",
            post(handlers::d401_analysis::analyze_regions),
        )
        .route(
            "/api/d401/time_series",
            post(handlers::d401_analysis::time_series),
        )
        .route("/api/d401/heatmap", get(handlers::d401_analysis::heatmap))
        .route("/api/d401/explore", post(handlers::d401_analysis::explore))
        .route("/api/d401/export", post(handlers::d401_analysis::export_csv))
        .route_layer(auth.clone());

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout).layer(auth.clone()),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user).layer(auth.clone()),
        )
        // ========================================
        // SYSTEM SETTINGS ROUTES
        // ========================================
        .route(
            "/api/system/settings",
            get(system::handlers::settings::get_settings).layer(auth.clone()),
        )
        .route(
            "/api/system/settings/display",
            put(system::handlers::settings::save_display).layer(auth.clone()),
        )
        .route(
            "/api/system/settings/notifications",
            put(system::handlers::settings::save_notifications).layer(auth.clone()),
        )
        .route(
            "/api/system/settings/account",
            put(system::handlers::settings::save_account).layer(auth.clone()),
        )
        .route(
            "/api/system/settings/password",
            post(system::handlers::settings::change_password).layer(auth),
        )
        .route(
            "/api/system/settings/advanced",
            put(system::handlers::settings::save_advanced).layer(admin),
        )
        .merge(dashboards)
        .with_state(state)
}
