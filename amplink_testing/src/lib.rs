//! Utilities for driving an [`amplink`](amplink) adapter in tests.
//!
//! [`FakeEngine`] is a scripted stand-in for a protocol engine: tests create
//! endpoints and deliveries, script their state, dispatch events through a
//! [`MessagingAdapter`](amplink::MessagingAdapter), then assert on the
//! commands the adapter issued. [`RecordingHandler`] captures every callback
//! invocation in order.

#[path = "engine.rs"]
mod fake_engine;
mod fixtures;
mod handler;

pub use fake_engine::{Command, DeliveryRecord, FakeEngine};
pub use fixtures::{adapter, engine};
pub use handler::{HandlerCall, RecordingHandler};
