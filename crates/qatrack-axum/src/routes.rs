//! Route definitions and router construction.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post, put};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::bootstrap::CorsConfig;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// All API routes without the `/api` prefix (nested by the caller).
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Tests API
        .route(
            "/tests",
            get(handlers::test_cases::list).post(handlers::test_cases::create),
        )
        .route("/tests/{id}", get(handlers::test_cases::get))
        .route("/tests/{id}/assign", post(handlers::test_cases::assign))
        .route("/tests/{id}/unassign", post(handlers::test_cases::unassign))
        .route("/tests/{id}/disabled", post(handlers::test_cases::disabled))
        .route("/tests/{id}/cards", get(handlers::test_cases::cards))
        // Progress API
        .route("/progress", get(handlers::progress::list))
        .route("/progress/{test_id}", put(handlers::progress::upsert))
        // Users API
        .route("/users", get(handlers::users::list))
        .route("/users/me", get(handlers::users::me))
        .route(
            "/users/{id}/progress",
            get(handlers::users::progress_summary),
        )
}

/// Create the main Axum router: `/health` plus `/api/*`.
///
/// Axum 0.8 uses brace syntax for path parameters: `{id}`.
pub fn create_router(state: AppState, cors_config: &CorsConfig) -> Router {
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Create a router with API routes and static asset serving.
///
/// Unknown non-API paths fall back to `index.html` for client-side routing.
pub fn create_spa_router<P: AsRef<Path>>(
    state: AppState,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let static_path = static_dir.as_ref();
    let serve_dir = ServeDir::new(static_path).fallback(ServeFile::new(static_path.join("index.html")));

    create_router(state, cors_config).fallback_service(serve_dir)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
