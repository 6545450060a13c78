// ABOUTME: Persisted record codec and caller-facing counter result.
// ABOUTME: Only start/end timestamps are stored; duration and progress are recomputed on read.

use serde::{Deserialize, Serialize};

/// The value persisted under a counter's id: the two timestamps that
/// bound it. The duration is never stored directly; it is recomputed as
/// `end - start` on every read so the result tolerates representation
/// drift between writer and reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    pub start_timestamp: i64,
    pub end_timestamp: i64,
}

impl CounterRecord {
    /// Build a record starting at `start_timestamp` and running for
    /// `duration` seconds.
    pub fn new(start_timestamp: i64, duration: i64) -> Self {
        Self {
            start_timestamp,
            end_timestamp: start_timestamp + duration,
        }
    }

    /// Total countdown length in seconds.
    pub fn duration(&self) -> i64 {
        self.end_timestamp - self.start_timestamp
    }

    /// Serialize to the stored JSON form.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a stored value back into a record.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// A counter's computed progress, returned to callers.
///
/// `current` is 1-based elapsed seconds (a freshly created counter reads
/// as 1). `exists` is derived, never serialized: the facade maps it to a
/// not-found response. It can be false while `current`/`to` still carry
/// the computed numbers, which are informational at the expiry boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterResult {
    pub current: i64,
    pub to: i64,
    #[serde(skip)]
    pub exists: bool,
}

impl CounterResult {
    /// The zero-valued result reported for counters the store does not hold.
    pub fn absent() -> Self {
        Self {
            current: 0,
            to: 0,
            exists: false,
        }
    }
}
