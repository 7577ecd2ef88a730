//! Shared `rstest` fixtures.

use amplink::MessagingAdapter;
use rstest::fixture;

use crate::{FakeEngine, RecordingHandler};

/// Fresh scripted engine.
#[fixture]
pub fn engine() -> FakeEngine {
    FakeEngine::new()
}

/// Adapter over a [`RecordingHandler`] with the default configuration.
#[fixture]
pub fn adapter() -> MessagingAdapter<RecordingHandler> {
    MessagingAdapter::new(RecordingHandler::default())
}
