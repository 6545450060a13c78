// ABOUTME: Storage contract for the counter engine: set-with-expiry, get, exists, delete, enumerate.
// ABOUTME: Implemented by tickd-store backends; keys and values are opaque strings.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or the command timed out.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The requested key is not present in the store.
    #[error("key not found: {0}")]
    NotFound(String),

    /// The store rejected the command (bad argument, server-side error).
    #[error("store command failed: {0}")]
    Backend(String),
}

/// A key-value store with native per-key expiration.
///
/// The key space is a single flat namespace shared by all counters;
/// `keys` enumerates everything in it. Values are opaque to the store.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Store `value` under `key` with the store's native expiration set to
    /// `ttl_seconds`. Non-positive TTLs are passed to the store unchanged;
    /// what the store does with them is its own business.
    async fn set(&self, key: &str, value: &str, ttl_seconds: i64) -> Result<(), StoreError>;

    /// Fetch the value under `key`. Absent keys are `StoreError::NotFound`.
    async fn get(&self, key: &str) -> Result<String, StoreError>;

    /// Count of matching keys (0 or 1 for this usage). Nonzero means present.
    async fn exists(&self, key: &str) -> Result<i64, StoreError>;

    /// Delete `key`. Deleting an absent key is success, not an error.
    async fn del(&self, key: &str) -> Result<(), StoreError>;

    /// Every live key in the namespace, in store-defined order.
    async fn keys(&self) -> Result<Vec<String>, StoreError>;
}
