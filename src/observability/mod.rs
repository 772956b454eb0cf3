//! Observability module for monitoring and metrics.
//!
//! Logging goes through `tracing` everywhere in the crate; this module adds
//! counters for store mutations and submit outcomes.

pub mod metrics;

pub use metrics::{MetricsSummary, MetricsTracker};
