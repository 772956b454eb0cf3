//! Contact id generation.

use super::ContactId;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh contact ids.
///
/// The store never assigns ids itself; whoever creates a contact asks a
/// generator for one.
pub trait IdGenerator: Send + Sync {
    /// Produce the next id.
    fn next_id(&self) -> ContactId;
}

/// Time-based ids: milliseconds since the Unix epoch.
///
/// Two calls inside the same millisecond (or after the wall clock steps
/// backwards) still produce strictly increasing ids.
#[derive(Debug, Default)]
pub struct ClockIdGenerator {
    last: AtomicU64,
}

impl ClockIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_millis() -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

impl IdGenerator for ClockIdGenerator {
    fn next_id(&self) -> ContactId {
        let now = Self::now_millis();
        let next = |last: u64| now.max(last.saturating_add(1));

        let previous = self
            .last
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| Some(next(last)))
            .unwrap_or_else(|last| last);

        ContactId::new(next(previous))
    }
}

/// Counter ids: 1, 2, 3, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Start counting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start counting at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ContactId {
        ContactId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
