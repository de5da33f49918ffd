//! Link shortening and resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertError, LinkStore};
use crate::error::AppError;
use crate::utils::code_generator::{derive_code, HashConfig, HashError};
use crate::utils::url_codec;

/// Service for creating and resolving short links.
///
/// Owns the shortening pipeline: validation, canonical encoding,
/// deduplication, and the deterministic collision probe over the live store.
pub struct LinkService<L: LinkStore> {
    link_store: Arc<L>,
    hash: HashConfig,
}

impl<L: LinkStore> LinkService<L> {
    /// Creates a new link service with injected hash settings.
    pub fn new(link_store: Arc<L>, hash: HashConfig) -> Self {
        Self { link_store, hash }
    }

    /// Shortens a raw URL, returning the stored link.
    ///
    /// Idempotent: a URL that was already shortened returns its existing
    /// record without touching the hash generator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the URL has no recognized
    /// scheme or no host, and [`AppError::Internal`] when the collision
    /// probe exhausts its attempts or the canonical form falls outside the
    /// hashing alphabet.
    pub async fn shorten(&self, raw_url: &str) -> Result<Link, AppError> {
        url_codec::validate(raw_url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({})))?;

        let canonical = url_codec::encode(raw_url);

        if let Some(existing) = self.link_store.find_by_url(&canonical).await? {
            return Ok(existing);
        }

        self.insert_with_fresh_code(&canonical).await
    }

    /// Resolves a short code back to the original URL.
    ///
    /// Absence is a normal outcome: an unknown code yields `Ok(None)`, and
    /// the caller decides the user-facing message.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or when a stored
    /// canonical URL fails to decode (corrupt row).
    pub async fn unshorten(&self, code: &str) -> Result<Option<String>, AppError> {
        match self.link_store.find_by_code(code).await? {
            Some(link) => {
                let raw = url_codec::decode(&link.encoded_url).map_err(|e| {
                    tracing::error!(code = %link.code, error = %e, "stored canonical URL failed to decode");
                    AppError::internal("Stored URL is corrupt", json!({ "code": link.code }))
                })?;
                Ok(Some(raw))
            }
            None => Ok(None),
        }
    }

    /// Derives an unused code for a new canonical URL and inserts the row.
    ///
    /// Each attempt re-checks the live store, and the insert itself is the
    /// linearization point: a concurrent writer claiming the candidate
    /// between probe and insert surfaces as [`InsertError::DuplicateCode`]
    /// and moves the probe to the next salt attempt, while
    /// [`InsertError::DuplicateUrl`] means an identical shorten won the race
    /// and its row is returned instead.
    async fn insert_with_fresh_code(&self, canonical: &str) -> Result<Link, AppError> {
        let mut attempt = 0;

        while attempt < self.hash.max_attempts {
            let code = derive_code(canonical, attempt, &self.hash).map_err(|e| {
                tracing::error!(url = %canonical, error = %e, "canonical URL outside hashing alphabet");
                AppError::internal("Failed to derive short code", json!({}))
            })?;

            if self.link_store.find_by_code(&code).await?.is_some() {
                tracing::warn!(%code, attempt, "short code collision, escalating salt");
                attempt += 1;
                continue;
            }

            match self
                .link_store
                .insert(NewLink {
                    code: code.clone(),
                    encoded_url: canonical.to_string(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(InsertError::DuplicateCode) => {
                    tracing::warn!(%code, attempt, "short code claimed concurrently, escalating salt");
                    attempt += 1;
                }
                Err(InsertError::DuplicateUrl) => {
                    return self.link_store.find_by_url(canonical).await?.ok_or_else(|| {
                        AppError::internal(
                            "Concurrent shorten vanished",
                            json!({ "code": code }),
                        )
                    });
                }
                Err(InsertError::Store(e)) => return Err(e),
            }
        }

        let exhausted = HashError::Exhausted {
            attempts: self.hash.max_attempts,
        };
        tracing::error!(url = %canonical, attempts = self.hash.max_attempts, "collision probe exhausted");
        Err(AppError::internal(
            exhausted.to_string(),
            json!({ "attempts": self.hash.max_attempts }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;
    use chrono::Utc;

    fn test_link(id: i64, code: &str, encoded_url: &str) -> Link {
        Link::new(id, code.to_string(), encoded_url.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_shorten_new_url_uses_first_candidate() {
        let mut mock_store = MockLinkStore::new();
        let hash = HashConfig::default();

        let canonical = url_codec::encode("https://example.com/path?q=1");
        let expected_code = derive_code(&canonical, 0, &hash).unwrap();

        mock_store
            .expect_find_by_url()
            .times(1)
            .returning(|_| Ok(None));
        mock_store
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let inserted = test_link(1, &expected_code, &canonical);
        let wanted_code = expected_code.clone();
        mock_store
            .expect_insert()
            .withf(move |new_link| new_link.code == wanted_code)
            .times(1)
            .returning(move |_| Ok(inserted.clone()));

        let service = LinkService::new(Arc::new(mock_store), hash);

        let link = service.shorten("https://example.com/path?q=1").await.unwrap();

        assert_eq!(link.code, expected_code);
        assert_eq!(link.code.len(), 6);
    }

    #[tokio::test]
    async fn test_shorten_is_idempotent() {
        let mut mock_store = MockLinkStore::new();

        let canonical = url_codec::encode("https://example.com");
        let existing = test_link(5, "AbCdEf", &canonical);
        mock_store
            .expect_find_by_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_store.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_store), HashConfig::default());

        let link = service.shorten("https://example.com").await.unwrap();

        assert_eq!(link.id, 5);
        assert_eq!(link.code, "AbCdEf");
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url() {
        let mock_store = MockLinkStore::new();
        let service = LinkService::new(Arc::new(mock_store), HashConfig::default());

        let result = service.shorten("not-a-url").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_rejects_empty_string() {
        let mock_store = MockLinkStore::new();
        let service = LinkService::new(Arc::new(mock_store), HashConfig::default());

        let result = service.shorten("").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_collision_escalates_to_next_salt_attempt() {
        let mut mock_store = MockLinkStore::new();
        let hash = HashConfig::default();

        let canonical = url_codec::encode("https://example.com/collide");
        let first = derive_code(&canonical, 0, &hash).unwrap();
        let second = derive_code(&canonical, 1, &hash).unwrap();
        assert_ne!(first, second);

        mock_store
            .expect_find_by_url()
            .times(1)
            .returning(|_| Ok(None));

        // Attempt 0 candidate is occupied, attempt 1 is free.
        let taken = first.clone();
        let occupied = test_link(9, &first, "something%20else");
        mock_store
            .expect_find_by_code()
            .times(2)
            .returning(move |code| {
                if code == taken {
                    Ok(Some(occupied.clone()))
                } else {
                    Ok(None)
                }
            });

        let inserted = test_link(10, &second, &canonical);
        let wanted_code = second.clone();
        mock_store
            .expect_insert()
            .withf(move |new_link| new_link.code == wanted_code)
            .times(1)
            .returning(move |_| Ok(inserted.clone()));

        let service = LinkService::new(Arc::new(mock_store), hash);

        let link = service.shorten("https://example.com/collide").await.unwrap();

        assert_eq!(link.code, second);
    }

    #[tokio::test]
    async fn test_duplicate_code_race_retries_next_attempt() {
        let mut mock_store = MockLinkStore::new();
        let hash = HashConfig::default();

        let canonical = url_codec::encode("https://example.com/race");
        let second = derive_code(&canonical, 1, &hash).unwrap();

        mock_store
            .expect_find_by_url()
            .times(1)
            .returning(|_| Ok(None));
        mock_store
            .expect_find_by_code()
            .times(2)
            .returning(|_| Ok(None));

        // First insert loses the race, second succeeds.
        let mut calls = 0;
        mock_store
            .expect_insert()
            .times(2)
            .returning(move |new_link| {
                calls += 1;
                if calls == 1 {
                    Err(InsertError::DuplicateCode)
                } else {
                    Ok(test_link(3, &new_link.code, &new_link.encoded_url))
                }
            });

        let service = LinkService::new(Arc::new(mock_store), hash);

        let link = service.shorten("https://example.com/race").await.unwrap();

        assert_eq!(link.code, second);
    }

    #[tokio::test]
    async fn test_duplicate_url_race_returns_winner() {
        let mut mock_store = MockLinkStore::new();
        let hash = HashConfig::default();

        let canonical = url_codec::encode("https://example.com/same");
        let winner = test_link(7, "WINNER", &canonical);

        // Dedupe check misses, then the insert collides on the URL column
        // because a concurrent shorten committed in between.
        let mut url_lookups = 0;
        let winner_clone = winner.clone();
        mock_store
            .expect_find_by_url()
            .times(2)
            .returning(move |_| {
                url_lookups += 1;
                if url_lookups == 1 {
                    Ok(None)
                } else {
                    Ok(Some(winner_clone.clone()))
                }
            });
        mock_store
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));
        mock_store
            .expect_insert()
            .times(1)
            .returning(|_| Err(InsertError::DuplicateUrl));

        let service = LinkService::new(Arc::new(mock_store), hash);

        let link = service.shorten("https://example.com/same").await.unwrap();

        assert_eq!(link.id, 7);
        assert_eq!(link.code, "WINNER");
    }

    #[tokio::test]
    async fn test_zero_attempts_exhausts_without_store_calls() {
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_find_by_url()
            .times(1)
            .returning(|_| Ok(None));
        mock_store.expect_find_by_code().times(0);
        mock_store.expect_insert().times(0);

        let hash = HashConfig {
            max_attempts: 0,
            ..HashConfig::default()
        };
        let service = LinkService::new(Arc::new(mock_store), hash);

        let result = service.shorten("https://example.com/new").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_exhaustion_after_persistent_collisions() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_find_by_url()
            .times(1)
            .returning(|_| Ok(None));
        // Every candidate is taken.
        mock_store.expect_find_by_code().times(2).returning(|code| {
            Ok(Some(test_link(1, code, "occupied")))
        });
        mock_store.expect_insert().times(0);

        let hash = HashConfig {
            max_attempts: 2,
            ..HashConfig::default()
        };
        let service = LinkService::new(Arc::new(mock_store), hash);

        let result = service.shorten("https://example.com/full").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_unshorten_round_trips_original_url() {
        let mut mock_store = MockLinkStore::new();

        let original = "https://example.com/path?q=1&r=two words";
        let canonical = url_codec::encode(original);
        let stored = test_link(1, "AbCdEf", &canonical);
        mock_store
            .expect_find_by_code()
            .withf(|code| code == "AbCdEf")
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let service = LinkService::new(Arc::new(mock_store), HashConfig::default());

        let resolved = service.unshorten("AbCdEf").await.unwrap();

        assert_eq!(resolved.as_deref(), Some(original));
    }

    #[tokio::test]
    async fn test_unshorten_unknown_code_is_absent_not_error() {
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_store), HashConfig::default());

        let resolved = service.unshorten("ZZZZZZ").await.unwrap();

        assert!(resolved.is_none());
    }
}
