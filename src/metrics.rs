//! Metric helpers for `amplink`.
//!
//! This module defines metric names and simple helper functions wrapping the
//! [`metrics`](https://docs.rs/metrics) crate. Without the `metrics` feature
//! the helpers compile to no-ops.

use crate::event::EventKind;

/// Name of the counter tracking dispatched high-level events.
pub const EVENTS_DISPATCHED: &str = "amplink_events_dispatched_total";
/// Name of the counter tracking surfaced error events and decode failures.
pub const ERRORS_TOTAL: &str = "amplink_errors_total";

/// Record a dispatched high-level event, labelled by kind.
#[cfg(feature = "metrics")]
pub fn inc_events(kind: EventKind) {
    metrics::counter!(EVENTS_DISPATCHED, "kind" => kind.as_str()).increment(1);
}

/// Record a dispatched high-level event, labelled by kind.
#[cfg(not(feature = "metrics"))]
pub fn inc_events(_kind: EventKind) {}

/// Record an error occurrence.
#[cfg(feature = "metrics")]
pub fn inc_errors() { metrics::counter!(ERRORS_TOTAL).increment(1); }

/// Record an error occurrence.
#[cfg(not(feature = "metrics"))]
pub fn inc_errors() {}
