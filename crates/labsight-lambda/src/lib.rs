//! labsight-lambda
//!
//! HTTP surface for lab-report analysis, run on AWS Lambda or as a plain
//! TCP server.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health (no body)
        .route("/health", get(routes::health::health_check))
        .route("/analyze", post(routes::analyze::analyze))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
