//! DTO returned by the shorten and stats endpoints.

use serde::Serialize;

use crate::domain::entities::ShortLink;

/// Public view of a short link.
#[derive(Debug, Serialize, PartialEq)]
pub struct LinkResponse {
    pub short_url: String,
    pub original_url: String,
    pub visits_count: i64,
}

impl LinkResponse {
    /// Builds the response for `link`, with `short_url` rooted at `base_url`.
    pub fn from_link(link: ShortLink, base_url: &str) -> Self {
        Self {
            short_url: link.short_url(base_url),
            original_url: link.original_url,
            visits_count: link.visits_count,
        }
    }
}
