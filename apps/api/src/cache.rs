//! Cache Adapter — Redis-backed storage for generated cover letters.
//!
//! Letters are stored as JSON under `cover_letter:<id>` with a fixed TTL and
//! expire passively. Writes on the generate path are best-effort: callers
//! spawn them off the response path and log failures instead of surfacing them.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;

use crate::letters::models::CoverLetterResponse;

/// How long a generated letter stays retrievable.
pub const LETTER_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Key scheme for cached letters.
pub fn cache_key(id: &str) -> String {
    format!("cover_letter:{id}")
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Backend(#[from] redis::RedisError),

    #[error("stored value is not a valid cover letter: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The cache seam. `AppState` holds an `Arc<dyn CoverLetterCache>` so tests
/// can substitute an in-memory fake for the Redis-backed implementation.
#[async_trait]
pub trait CoverLetterCache: Send + Sync {
    /// Serializes and stores a letter under its id with the given expiry.
    async fn put(
        &self,
        id: &str,
        letter: &CoverLetterResponse,
        ttl: Duration,
    ) -> Result<(), CacheError>;

    /// Fetches and deserializes a letter. `Ok(None)` means the key is absent
    /// or expired; `Err(Corrupt)` means the stored payload is unreadable.
    async fn get(&self, id: &str) -> Result<Option<CoverLetterResponse>, CacheError>;

    /// Liveness probe used by health reporting.
    async fn ping(&self) -> Result<(), CacheError>;
}

/// Production implementation backed by a shared `redis::Client`.
pub struct RedisCache {
    client: redis::Client,
}

impl RedisCache {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CoverLetterCache for RedisCache {
    async fn put(
        &self,
        id: &str,
        letter: &CoverLetterResponse,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let payload = serde_json::to_string(letter)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(cache_key(id), payload, ttl.as_secs()).await?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<CoverLetterResponse>, CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(cache_key(id)).await?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<_, String>(&mut conn).await?;
        Ok(())
    }
}
