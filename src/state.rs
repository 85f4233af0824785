//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteShortLinkRepository;

/// Concrete link service used by the HTTP layer.
pub type AppLinkService = LinkService<SqliteShortLinkRepository>;

/// State cloned into each request.
///
/// Holds the single storage-backed service built at startup plus the request-shaping
/// settings handlers need.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    /// Configured public base for short URLs; derived per request when `None`.
    pub public_base_url: Option<String>,
    /// Trust `X-Forwarded-*` headers for base URL and client address.
    pub behind_proxy: bool,
}

impl AppState {
    /// Builds the state from a connection pool and the loaded configuration.
    pub fn new(pool: Arc<SqlitePool>, config: &Config) -> Self {
        let repository = Arc::new(SqliteShortLinkRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(repository, config.short_url_length)),
            public_base_url: config.base_url.clone(),
            behind_proxy: config.behind_proxy,
        }
    }
}
