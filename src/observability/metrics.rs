//! Counters for store mutations and form submits.

use crate::models::Contact;
use crate::store::{StoreEvent, StoreListener};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics tracker for the contact book.
///
/// Clones share the same counters. Subscribe a clone to the store to count
/// mutations; the form controller records submit outcomes.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    contacts_added_total: Arc<AtomicU64>,
    contacts_updated_total: Arc<AtomicU64>,
    contacts_removed_total: Arc<AtomicU64>,
    submits_accepted_total: Arc<AtomicU64>,
    submits_rejected_total: Arc<AtomicU64>,
}

/// Point-in-time copy of every counter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub contacts_added: u64,
    pub contacts_updated: u64,
    pub contacts_removed: u64,
    pub submits_accepted: u64,
    pub submits_rejected: u64,
    pub rejection_rate: f64,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            contacts_added_total: Arc::new(AtomicU64::new(0)),
            contacts_updated_total: Arc::new(AtomicU64::new(0)),
            contacts_removed_total: Arc::new(AtomicU64::new(0)),
            submits_accepted_total: Arc::new(AtomicU64::new(0)),
            submits_rejected_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a store mutation.
    pub fn track_store_event(&self, event: &StoreEvent) {
        let counter = match event {
            StoreEvent::Added(_) => &self.contacts_added_total,
            StoreEvent::Updated(_) => &self.contacts_updated_total,
            StoreEvent::Removed(_) => &self.contacts_removed_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        tracing::trace!(event = event.kind(), "Store mutation counted");
    }

    /// Track a submit attempt.
    pub fn track_submit(&self, accepted: bool, error_count: usize) {
        if accepted {
            self.submits_accepted_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.submits_rejected_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            accepted = accepted,
            error_count = error_count,
            "Submit completed"
        );
    }

    pub fn contacts_added_total(&self) -> u64 {
        self.contacts_added_total.load(Ordering::Relaxed)
    }

    pub fn contacts_updated_total(&self) -> u64 {
        self.contacts_updated_total.load(Ordering::Relaxed)
    }

    pub fn contacts_removed_total(&self) -> u64 {
        self.contacts_removed_total.load(Ordering::Relaxed)
    }

    pub fn submits_accepted_total(&self) -> u64 {
        self.submits_accepted_total.load(Ordering::Relaxed)
    }

    pub fn submits_rejected_total(&self) -> u64 {
        self.submits_rejected_total.load(Ordering::Relaxed)
    }

    /// Get the submit rejection rate (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.submits_rejected_total() as f64;
        let total = (self.submits_accepted_total() + self.submits_rejected_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    /// Snapshot all counters.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contacts_added: self.contacts_added_total(),
            contacts_updated: self.contacts_updated_total(),
            contacts_removed: self.contacts_removed_total(),
            submits_accepted: self.submits_accepted_total(),
            submits_rejected: self.submits_rejected_total(),
            rejection_rate: self.rejection_rate(),
        }
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreListener for MetricsTracker {
    fn on_change(&self, event: &StoreEvent, _contacts: &[Contact]) {
        self.track_store_event(event);
    }
}
