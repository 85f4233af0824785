//! Short link creation, redirect resolution and stats.

use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::code_allocator::allocate_short_code;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// Provenance captured when a link is first created.
#[derive(Debug, Clone, Default)]
pub struct Provenance {
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Service implementing the shorten, redirect and stats operations.
///
/// The repository handle is injected at construction; the service holds no other state
/// besides the configured code length.
pub struct LinkService<R: ShortLinkRepository> {
    repository: Arc<R>,
    code_length: usize,
}

impl<R: ShortLinkRepository> LinkService<R> {
    /// Creates a new link service generating codes of `code_length` symbols.
    pub fn new(repository: Arc<R>, code_length: usize) -> Self {
        Self {
            repository,
            code_length,
        }
    }

    /// Length of newly allocated short codes.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Returns the link for `original_url`, creating it on first submission.
    ///
    /// The URL must already be validated; it is stored exactly as given.
    ///
    /// # Deduplication
    ///
    /// A URL that is already stored resolves to its existing record without touching
    /// the visit counter. If a concurrent request inserts the same URL between the
    /// lookup and the insert, the insert's conflict is resolved by re-reading the
    /// winner's record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn shorten(
        &self,
        original_url: String,
        provenance: Provenance,
    ) -> Result<ShortLink, AppError> {
        if let Some(existing) = self.repository.find_by_original_url(&original_url).await? {
            debug!(short_code = %existing.short_code, "URL already shortened");
            return Ok(existing);
        }

        let short_code = allocate_short_code(self.repository.as_ref(), self.code_length).await?;

        let new_link = NewShortLink {
            original_url,
            short_code,
            creator_ip: provenance.client_ip,
            creator_agent: provenance.user_agent,
        };
        let original_url = new_link.original_url.clone();

        match self.repository.create(new_link).await {
            Ok(link) => {
                info!(short_code = %link.short_code, "Created short link");
                Ok(link)
            }
            Err(err @ AppError::Conflict { .. }) => self
                .repository
                .find_by_original_url(&original_url)
                .await?
                .ok_or(err),
            Err(err) => Err(err),
        }
    }

    /// Records one visit to `short_code` and returns the updated link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve_visit(&self, short_code: &str) -> Result<ShortLink, AppError> {
        self.repository
            .record_visit(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Returns the link for `short_code` without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_stats(&self, short_code: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Checks that the underlying store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn not_found(short_code: &str) -> AppError {
    AppError::not_found("URL not found", json!({ "short_code": short_code }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockShortLinkRepository;
    use chrono::Utc;

    fn create_test_link(id: i64, code: &str, url: &str, visits: i64) -> ShortLink {
        ShortLink::new(
            id,
            url.to_string(),
            code.to_string(),
            Utc::now(),
            visits,
            Some("127.0.0.1".to_string()),
            Some("test-agent".to_string()),
        )
    }

    fn provenance() -> Provenance {
        Provenance {
            client_ip: Some("127.0.0.1".to_string()),
            user_agent: Some("test-agent".to_string()),
        }
    }

    #[tokio::test]
    async fn test_shorten_creates_new_link() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_find_by_original_url()
            .withf(|url| url == "http://example.com")
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        repo.expect_create()
            .withf(|new_link| {
                new_link.original_url == "http://example.com"
                    && new_link.short_code.len() == 6
                    && new_link.creator_ip.as_deref() == Some("127.0.0.1")
                    && new_link.creator_agent.as_deref() == Some("test-agent")
            })
            .times(1)
            .returning(|new_link| {
                Ok(create_test_link(
                    1,
                    &new_link.short_code,
                    &new_link.original_url,
                    0,
                ))
            });

        let service = LinkService::new(Arc::new(repo), 6);

        let link = service
            .shorten("http://example.com".to_string(), provenance())
            .await
            .unwrap();

        assert_eq!(link.original_url, "http://example.com");
        assert_eq!(link.short_code.len(), 6);
        assert_eq!(link.visits_count, 0);
    }

    #[tokio::test]
    async fn test_shorten_uses_configured_length() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_find_by_original_url().returning(|_| Ok(None));
        repo.expect_find_by_code().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|new_link| new_link.short_code.len() == 10)
            .times(1)
            .returning(|n| Ok(create_test_link(1, &n.short_code, &n.original_url, 0)));

        let service = LinkService::new(Arc::new(repo), 10);

        let link = service
            .shorten("https://example.com".to_string(), Provenance::default())
            .await
            .unwrap();

        assert_eq!(link.short_code.len(), 10);
    }

    #[tokio::test]
    async fn test_shorten_returns_existing_link() {
        let mut repo = MockShortLinkRepository::new();

        let existing = create_test_link(5, "abc123", "http://example.com/test", 3);
        repo.expect_find_by_original_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        repo.expect_find_by_code().times(0);
        repo.expect_create().times(0);
        repo.expect_record_visit().times(0);

        let service = LinkService::new(Arc::new(repo), 6);

        let link = service
            .shorten("http://example.com/test".to_string(), provenance())
            .await
            .unwrap();

        assert_eq!(link.id, 5);
        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.visits_count, 3);
    }

    #[tokio::test]
    async fn test_shorten_retries_on_code_collision() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_find_by_original_url()
            .times(1)
            .returning(|_| Ok(None));

        let taken = create_test_link(9, "taken1", "https://other.com", 0);
        let mut seq = mockall::Sequence::new();
        repo.expect_find_by_code()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(taken.clone())));
        repo.expect_find_by_code()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        repo.expect_create()
            .times(1)
            .returning(|n| Ok(create_test_link(10, &n.short_code, &n.original_url, 0)));

        let service = LinkService::new(Arc::new(repo), 6);

        let result = service
            .shorten("https://example.com".to_string(), provenance())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_resolves_concurrent_duplicate() {
        let mut repo = MockShortLinkRepository::new();

        let winner = create_test_link(7, "winner", "https://race.com", 0);
        let mut seq = mockall::Sequence::new();
        repo.expect_find_by_original_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        repo.expect_find_by_original_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(winner.clone())));

        repo.expect_find_by_code().returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = LinkService::new(Arc::new(repo), 6);

        let link = service
            .shorten("https://race.com".to_string(), provenance())
            .await
            .unwrap();

        assert_eq!(link.short_code, "winner");
    }

    #[tokio::test]
    async fn test_shorten_propagates_storage_error() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_find_by_original_url()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));
        repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(repo), 6);

        let result = service
            .shorten("https://example.com".to_string(), provenance())
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_resolve_visit_returns_updated_link() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_record_visit()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(Some(create_test_link(1, "abc123", "http://example.com", 1))));

        let service = LinkService::new(Arc::new(repo), 6);

        let link = service.resolve_visit("abc123").await.unwrap();

        assert_eq!(link.original_url, "http://example.com");
        assert_eq!(link.visits_count, 1);
    }

    #[tokio::test]
    async fn test_resolve_visit_unknown_code() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_record_visit().times(1).returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(repo), 6);

        let result = service.resolve_visit("nope42").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_stats_is_read_only() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(Some(create_test_link(1, "abc123", "http://example.com", 4))));
        repo.expect_record_visit().times(0);

        let service = LinkService::new(Arc::new(repo), 6);

        let link = service.get_stats("abc123").await.unwrap();

        assert_eq!(link.visits_count, 4);
    }

    #[tokio::test]
    async fn test_get_stats_unknown_code() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(repo), 6);

        let err = service.get_stats("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_error_info().details["short_code"], "missing");
    }
}
