//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::base_url;

/// Returns the original URL, short URL and visit count for a short code.
///
/// # Endpoint
///
/// `GET /stats/{short_code}`
///
/// Read-only: viewing stats does not count as a visit.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
    headers: HeaderMap,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_stats(&short_code).await?;

    let base = base_url(
        state.public_base_url.as_deref(),
        &headers,
        state.behind_proxy,
    );

    Ok(Json(LinkResponse::from_link(link, &base)))
}
