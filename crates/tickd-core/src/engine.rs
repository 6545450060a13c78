// ABOUTME: The counter engine: derives counter progress from stored timestamps.
// ABOUTME: Stateless over an injected store, clock, and id generator; safe for concurrent use.

use std::sync::Arc;

use thiserror::Error;

use crate::clock::{Clock, IdGenerator, SystemClock, UuidIds};
use crate::record::{CounterRecord, CounterResult};
use crate::store::{KvStore, StoreError};

/// Errors returned by counter engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A store call failed. Propagated unchanged; the engine never retries.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A persisted value did not match the expected record shape.
    /// Never expected in normal operation; indicates store corruption
    /// or a version mismatch.
    #[error("record codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Computes counter progress over a [`KvStore`].
///
/// Holds no state beyond its injected collaborators, so a single engine
/// can serve unbounded concurrent requests without locking. All blocking
/// happens inside the store.
pub struct CounterEngine {
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl CounterEngine {
    /// Engine with the production clock and id generator.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_parts(store, Arc::new(SystemClock), Arc::new(UuidIds))
    }

    /// Engine with explicit clock and id sources.
    pub fn with_parts(
        store: Arc<dyn KvStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { store, clock, ids }
    }

    /// Create a counter running for `duration` seconds and return its id.
    ///
    /// The record is stored with the store's own expiration set to
    /// `duration`. On store failure the freshly minted id is discarded;
    /// a caller-triggered retry generates a new one. The engine does not
    /// validate `duration` (non-positive values reach the store as-is).
    pub async fn generate(&self, duration: i64) -> Result<String, EngineError> {
        let id = self.ids.generate();
        let record = CounterRecord::new(self.clock.now_unix(), duration);
        let value = record.encode()?;
        self.store.set(&id, &value, duration).await?;
        tracing::debug!(%id, duration, "counter created");
        Ok(id)
    }

    /// Compute the current progress of the counter under `id`.
    ///
    /// Absent counters yield the zero-valued result. For present counters,
    /// `current = now - start + 1` and `to = end - start`. Expiry is
    /// checked twice: the store's own TTL decides presence, and the
    /// engine's `current > to` comparison catches keys the store still
    /// holds past their end (clock skew, lagging expiry). In that window
    /// the result reports `exists: false` while keeping the computed
    /// numbers.
    pub async fn get(&self, id: &str) -> Result<CounterResult, EngineError> {
        let count = self.store.exists(id).await?;
        if count == 0 {
            return Ok(CounterResult::absent());
        }

        // The key can expire between the existence check and this fetch;
        // that surfaces as NotFound and is transient for the caller.
        let raw = self.store.get(id).await?;
        let record = CounterRecord::decode(&raw)?;

        let current = self.clock.now_unix() - record.start_timestamp + 1;
        let to = record.duration();
        Ok(CounterResult {
            current,
            to,
            exists: current <= to,
        })
    }

    /// Every counter id the store currently holds, in store-defined order.
    pub async fn list_ids(&self) -> Result<Vec<String>, EngineError> {
        Ok(self.store.keys().await?)
    }

    /// Delete the counter under `id`. Deleting an absent id is success.
    pub async fn delete(&self, id: &str) -> Result<(), EngineError> {
        self.store.del(id).await?;
        tracing::debug!(%id, "counter deleted");
        Ok(())
    }
}
