#![cfg(feature = "metrics")]
//! Tests for `amplink` metrics helpers.
//!
//! These verify that dispatch records event and error counters, using
//! `metrics_util::debugging::DebuggingRecorder`.

mod common;

use amplink::{
    Condition,
    EndpointPhase,
    EndpointState,
    EngineEvent,
    EngineEventKind,
    LinkRole,
    MessagingAdapter,
};
use amplink_testing::{DeliveryRecord, FakeEngine, RecordingHandler};
use common::delivery_event;
use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
use serial_test::serial;

/// Creates a debugging recorder and snapshotter for metrics testing.
fn debugging_recorder_setup() -> (Snapshotter, DebuggingRecorder) {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    (snapshotter, recorder)
}

fn counter_with_label(
    snapshotter: &Snapshotter,
    name: &str,
    label: Option<(&str, &str)>,
) -> Option<u64> {
    snapshotter.snapshot().into_vec().iter().find_map(|(k, _, _, v)| {
        let key = k.key();
        let name_matches = key.name() == name;
        let label_matches = label.is_none_or(|(lk, lv)| {
            key.labels().any(|l| l.key() == lk && l.value() == lv)
        });
        match v {
            DebugValue::Counter(c) if name_matches && label_matches => Some(*c),
            _ => None,
        }
    })
}

#[test]
#[serial]
fn dispatched_events_are_counted_by_kind() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let mut engine = FakeEngine::new();
        let mut adapter = MessagingAdapter::new(RecordingHandler::default());
        let conn = engine.add_connection(EndpointState::new(
            EndpointPhase::Uninitialized,
            EndpointPhase::Active,
        ));
        adapter.dispatch(
            &mut engine,
            &EngineEvent::new(EngineEventKind::ConnectionRemoteOpen).with_connection(conn),
        );
    });

    let count = counter_with_label(
        &snapshotter,
        amplink::metrics::EVENTS_DISPATCHED,
        Some(("kind", "connection_open")),
    );
    assert!(matches!(count, Some(c) if c > 0), "connection_open not counted");
}

#[test]
#[serial]
fn error_events_increment_the_error_counter() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let mut engine = FakeEngine::new();
        let mut adapter = MessagingAdapter::new(RecordingHandler::default());
        let conn = engine.add_connection(EndpointState::new(
            EndpointPhase::Active,
            EndpointPhase::Closed,
        ));
        engine.set_connection_condition(conn, Condition::new("amqp:connection:forced", "bye"));
        adapter.dispatch(
            &mut engine,
            &EngineEvent::new(EngineEventKind::ConnectionRemoteClose).with_connection(conn),
        );
    });

    let errors = counter_with_label(&snapshotter, amplink::metrics::ERRORS_TOTAL, None);
    assert!(matches!(errors, Some(c) if c > 0), "error not counted");
}

#[test]
#[serial]
fn decode_failures_increment_the_error_counter() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let mut engine = FakeEngine::new();
        let mut adapter = MessagingAdapter::new(RecordingHandler::default());
        let active = EndpointState::new(EndpointPhase::Active, EndpointPhase::Active);
        let conn = engine.add_connection(active);
        let link = engine.add_link(LinkRole::Receiver, active);
        let delivery = engine.add_delivery(DeliveryRecord {
            readable: true,
            fail_decode: true,
            ..DeliveryRecord::default()
        });
        adapter.dispatch(&mut engine, &delivery_event(conn, link, delivery));
    });

    let errors = counter_with_label(&snapshotter, amplink::metrics::ERRORS_TOTAL, None);
    assert!(matches!(errors, Some(c) if c > 0), "decode failure not counted");
}
