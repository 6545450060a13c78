// ABOUTME: In-memory KvStore with per-key expiration, for tests and local runs without Redis.
// ABOUTME: Entries carry an absolute expiry second; expired entries read as absent.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tickd_core::{Clock, KvStore, StoreError, SystemClock};
use tokio::sync::RwLock;

struct Entry {
    value: String,
    expires_at: i64,
}

/// A [`KvStore`] over a plain map, expiring entries lazily on access.
///
/// A non-positive TTL stores an entry that is already expired, so it is
/// never observable. That matches this store's contract of honoring
/// whatever TTL it is handed rather than validating it.
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Store reading time from the given clock, for deterministic expiry
    /// in tests.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    fn is_live(&self, entry: &Entry) -> bool {
        self.clock.now_unix() < entry.expires_at
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn set(&self, key: &str, value: &str, ttl_seconds: i64) -> Result<(), StoreError> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: self.clock.now_unix() + ttl_seconds,
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| self.is_live(entry))
            .map(|entry| entry.value.clone())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn exists(&self, key: &str) -> Result<i64, StoreError> {
        let entries = self.entries.read().await;
        let live = entries.get(key).is_some_and(|entry| self.is_live(entry));
        Ok(i64::from(live))
    }

    async fn del(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|(_, entry)| self.is_live(entry))
            .map(|(key, _)| key.clone())
            .collect())
    }
}
