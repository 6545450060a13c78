// ABOUTME: Store backends for tickd, implementing the KvStore contract from tickd-core.
// ABOUTME: Provides the Redis adapter used in production and an in-memory TTL store for tests.

pub mod memory;
pub mod redis;

pub use self::memory::MemoryStore;
pub use self::redis::{RedisStore, RetryPolicy};
