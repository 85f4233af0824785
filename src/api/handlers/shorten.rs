//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::HeaderMap,
};
use std::net::SocketAddr;
use validator::Validate;

use crate::api::dto::link::LinkResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::application::services::Provenance;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::{base_url, client_ip, user_agent};

/// Creates (or returns the existing) short link for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path?x=1" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://s.example.com/aB3xY9",
///   "original_url": "https://example.com/some/long/path?x=1",
///   "visits_count": 0
/// }
/// ```
///
/// Submitting a URL that is already stored returns the existing short URL and its
/// current visit count.
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the URL is malformed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let provenance = Provenance {
        client_ip: client_ip(&headers, Some(addr), state.behind_proxy),
        user_agent: Some(user_agent(&headers)),
    };

    let link = state.link_service.shorten(payload.url, provenance).await?;

    let base = base_url(
        state.public_base_url.as_deref(),
        &headers,
        state.behind_proxy,
    );

    Ok(Json(LinkResponse::from_link(link, &base)))
}
