//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public endpoints.
///
/// # Endpoints
///
/// - `POST /shorten`              - Create (or look up) a short link
/// - `GET  /stats/{short_code}`   - Visit statistics for a short link
/// - `GET  /health`               - Health check
/// - `GET  /{short_code}`         - Redirect to the original URL
///
/// Static segments take precedence over the `/{short_code}` capture; generated codes
/// never collide with them (see [`crate::utils::code_generator::RESERVED_CODES`]).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{short_code}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
}
