// ABOUTME: Injected clock and identifier-generator abstractions for the counter engine.
// ABOUTME: Production uses whole-second wall time and random UUIDs; tests substitute fixed values.

use chrono::Utc;
use uuid::Uuid;

/// Source of the current time in whole seconds since the Unix epoch.
/// Injected at engine construction so progress computation is
/// deterministic under test.
pub trait Clock: Send + Sync {
    fn now_unix(&self) -> i64;
}

/// Wall-clock time, second granularity.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Source of fresh counter identifiers. Each call must return a value
/// whose collision probability with any other live counter is negligible.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random 128-bit UUIDs (version 4), rendered in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_tracks_wall_time() {
        let before = Utc::now().timestamp();
        let now = SystemClock.now_unix();
        let after = Utc::now().timestamp();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn uuid_ids_are_distinct_and_parseable() {
        let ids = UuidIds;
        let a = ids.generate();
        let b = ids.generate();
        assert_ne!(a, b);
        assert!(a.parse::<Uuid>().is_ok());
    }
}
