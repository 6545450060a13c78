// ABOUTME: Redis-backed KvStore adapter owning the connection and the connect-retry policy.
// ABOUTME: TTLs are passed to Redis unclamped; Redis decides what a non-positive expiry means.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use tickd_core::{KvStore, StoreError};

/// How construction handles an unreachable server: a fixed number of
/// attempts with a fixed delay between them, then a permanent failure.
/// This is the only place the store blocks sequentially; it never
/// repeats per request.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 6,
            interval: Duration::from_secs(5),
        }
    }
}

/// A [`KvStore`] over one multiplexed async Redis connection.
///
/// The connection is cheap to clone per command and multiplexes
/// concurrent requests, so the adapter itself holds no locks.
#[derive(Clone, Debug)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Connect to Redis at `url` and verify connectivity with a PING,
    /// retrying within the given budget. Fails permanently once the
    /// budget is exhausted, returning the last error observed.
    pub async fn connect(url: &str, retry: RetryPolicy) -> Result<Self, StoreError> {
        let client = redis::Client::open(url).map_err(map_err)?;

        let mut last_err = None;
        for attempt in 1..=retry.attempts.max(1) {
            if attempt > 1 {
                tokio::time::sleep(retry.interval).await;
            }
            match Self::try_connect(&client).await {
                Ok(conn) => {
                    tracing::info!(url, attempt, "connected to redis");
                    return Ok(Self { conn });
                }
                Err(e) => {
                    tracing::warn!(url, attempt, error = %e, "redis connect failed");
                    last_err = Some(e);
                }
            }
        }

        Err(StoreError::Unavailable(
            last_err
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no connection attempts made".to_string()),
        ))
    }

    async fn try_connect(client: &redis::Client) -> Result<MultiplexedConnection, redis::RedisError> {
        let mut conn = client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(conn)
    }
}

/// Map a Redis error onto the store taxonomy. Connectivity problems are
/// `Unavailable`; everything the server itself rejected is `Backend`.
fn map_err(err: redis::RedisError) -> StoreError {
    if err.is_connection_refusal() || err.is_connection_dropped() || err.is_timeout() {
        StoreError::Unavailable(err.to_string())
    } else {
        StoreError::Backend(err.to_string())
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: &str, ttl_seconds: i64) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        // Raw SET .. EX rather than the typed helper: the helper takes an
        // unsigned TTL, and non-positive TTLs must reach the server as-is.
        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl_seconds)
            .query_async(&mut conn)
            .await
            .map_err(map_err)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(map_err)?;
        value.ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn exists(&self, key: &str) -> Result<i64, StoreError> {
        let mut conn = self.conn.clone();
        redis::cmd("EXISTS")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(map_err)
    }

    async fn del(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        // DEL returns the number of keys removed; zero (absent key) is
        // still success.
        let _: i64 = redis::cmd("DEL")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(map_err)?;
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut conn = self.conn.clone();
        redis::cmd("KEYS")
            .arg("*")
            .query_async(&mut conn)
            .await
            .map_err(map_err)
    }
}
