//! Shared utilities for integration tests.

// Items in this shared module may not be used by all test binaries that
// import it.
#![allow(
    dead_code,
    reason = "shared test utilities are not used by all test binaries"
)]

use amplink::{
    AdapterConfig,
    ConnectionHandle,
    DeliveryHandle,
    EngineEvent,
    EngineEventKind,
    LinkHandle,
    LinkPolicy,
    MessagingAdapter,
};
use amplink_testing::RecordingHandler;

/// Adapter over a recording handler with the given link policy.
pub fn adapter_with_policy(policy: LinkPolicy) -> MessagingAdapter<RecordingHandler> {
    MessagingAdapter::with_config(
        RecordingHandler::default(),
        AdapterConfig {
            link_policy: policy,
            container: None,
        },
    )
}

/// Adapter over a recording handler with a credit window and defaults
/// otherwise.
pub fn adapter_with_window(window: u32) -> MessagingAdapter<RecordingHandler> {
    adapter_with_policy(LinkPolicy {
        credit_window: window,
        ..LinkPolicy::default()
    })
}

/// Raw delivery event carrying its full ownership chain.
pub fn delivery_event(
    connection: ConnectionHandle,
    link: LinkHandle,
    delivery: DeliveryHandle,
) -> EngineEvent {
    EngineEvent::new(EngineEventKind::Delivery)
        .with_connection(connection)
        .with_link(link)
        .with_delivery(delivery)
}
