//! Identifier generation for new fairs, citas and voluntarios

use std::sync::atomic::{AtomicI64, Ordering};

/// Source of fresh entity ids, injected into the ledger
pub trait IdGenerator: Send + Sync {
    /// Return an id greater than every id handed out or observed so far
    fn next_id(&self) -> i64;

    /// Record an id that already exists (loaded data, fixtures)
    fn observe(&self, id: i64);
}

/// Production generator: snowflake ids forced to be strictly increasing
///
/// `shared::util::snowflake_id` alone can go backwards within one
/// millisecond; the last value is tracked and bumped past when needed.
#[derive(Debug, Default)]
pub struct SnowflakeIdGenerator {
    last: AtomicI64,
}

impl SnowflakeIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SnowflakeIdGenerator {
    fn next_id(&self) -> i64 {
        let candidate = shared::util::snowflake_id();
        let prev = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(candidate.max(last + 1))
            }) {
            Ok(prev) | Err(prev) => prev,
        };
        candidate.max(prev + 1)
    }

    fn observe(&self, id: i64) {
        self.last.fetch_max(id, Ordering::SeqCst);
    }
}

/// Deterministic counter for tests
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    last: AtomicI64,
}

impl SequentialIdGenerator {
    /// The first id handed out is `start`, unless a larger id is observed
    pub fn starting_at(start: i64) -> Self {
        Self {
            last: AtomicI64::new(start - 1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> i64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn observe(&self, id: i64) {
        self.last.fetch_max(id, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_strictly_increasing() {
        let ids = SnowflakeIdGenerator::new();
        let mut prev = 0;
        for _ in 0..10_000 {
            let id = ids.next_id();
            assert!(id > prev, "{id} should be greater than {prev}");
            prev = id;
        }
    }

    #[test]
    fn test_snowflake_skips_past_observed() {
        let ids = SnowflakeIdGenerator::new();
        let far_future = i64::MAX / 2;
        ids.observe(far_future);
        assert_eq!(ids.next_id(), far_future + 1);
        assert_eq!(ids.next_id(), far_future + 2);
    }

    #[test]
    fn test_sequential() {
        let ids = SequentialIdGenerator::starting_at(1000);
        assert_eq!(ids.next_id(), 1000);
        assert_eq!(ids.next_id(), 1001);
        ids.observe(5000);
        assert_eq!(ids.next_id(), 5001);
        ids.observe(10);
        assert_eq!(ids.next_id(), 5002);
    }
}
