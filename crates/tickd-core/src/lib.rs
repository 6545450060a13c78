// ABOUTME: Core library for tickd, containing the counter engine and its storage contract.
// ABOUTME: This crate defines the shared types and business logic used across all tickd components.

pub mod clock;
pub mod engine;
pub mod record;
pub mod store;

pub use clock::{Clock, IdGenerator, SystemClock, UuidIds};
pub use engine::{CounterEngine, EngineError};
pub use record::{CounterRecord, CounterResult};
pub use store::{KvStore, StoreError};
