//! ShortLink entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping from a short code to its original URL.
///
/// `original_url`, `short_code`, `created_at` and the creator fields are set once
/// at creation. Only `visits_count` changes afterwards, and it never decreases.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub visits_count: i64,
    pub creator_ip: Option<String>,
    pub creator_agent: Option<String>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        visits_count: i64,
        creator_ip: Option<String>,
        creator_agent: Option<String>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            visits_count,
            creator_ip,
            creator_agent,
        }
    }

    /// Builds the public short URL for this link under `base_url`.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.short_code)
    }
}

/// Input data for creating a new short link.
///
/// The visit counter starts at zero and the timestamp is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub original_url: String,
    pub short_code: String,
    pub creator_ip: Option<String>,
    pub creator_agent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_link() -> ShortLink {
        ShortLink::new(
            1,
            "https://example.com/page?x=1".to_string(),
            "aB3xY9".to_string(),
            Utc::now(),
            0,
            Some("127.0.0.1".to_string()),
            Some("curl/8.0".to_string()),
        )
    }

    #[test]
    fn test_short_link_creation() {
        let link = sample_link();

        assert_eq!(link.id, 1);
        assert_eq!(link.original_url, "https://example.com/page?x=1");
        assert_eq!(link.short_code, "aB3xY9");
        assert_eq!(link.visits_count, 0);
        assert_eq!(link.creator_ip.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn test_short_url_with_trailing_slash() {
        let link = sample_link();
        assert_eq!(link.short_url("http://s.test/"), "http://s.test/aB3xY9");
    }

    #[test]
    fn test_short_url_without_trailing_slash() {
        let link = sample_link();
        assert_eq!(link.short_url("https://s.test"), "https://s.test/aB3xY9");
    }

    #[test]
    fn test_short_url_with_path_prefix() {
        let link = sample_link();
        assert_eq!(
            link.short_url("https://example.org/s/"),
            "https://example.org/s/aB3xY9"
        );
    }
}
