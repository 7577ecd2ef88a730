//! Tests for the credit-window policy on receiver links.

mod common;

use amplink::{EndpointPhase, EndpointState, EngineEvent, EngineEventKind, LinkRole};
use amplink_testing::{Command, DeliveryRecord, FakeEngine, HandlerCall, engine};
use common::{adapter_with_window, delivery_event};
use proptest::prelude::*;
use rstest::rstest;

fn active() -> EndpointState { EndpointState::new(EndpointPhase::Active, EndpointPhase::Active) }

fn local_open(link: amplink::LinkHandle) -> EngineEvent {
    EngineEvent::new(EngineEventKind::LinkLocalOpen).with_link(link)
}

#[rstest]
fn local_open_primes_the_window(mut engine: FakeEngine) {
    let mut adapter = adapter_with_window(10);
    let link = engine.add_link(LinkRole::Receiver, active());

    adapter.dispatch(&mut engine, &local_open(link));

    assert_eq!(engine.commands, vec![Command::Flow(link, 10)]);
    assert_eq!(engine.link_credit_of(link), 10);
}

#[rstest]
fn consumed_credit_is_topped_back_up_on_the_next_event(mut engine: FakeEngine) {
    let mut adapter = adapter_with_window(10);
    let conn = engine.add_connection(active());
    let link = engine.add_link(LinkRole::Receiver, active());
    adapter.dispatch(&mut engine, &local_open(link));

    // One transfer arrives, consuming one credit unit.
    engine.set_link_credit(link, 9);
    let delivery = engine.add_delivery(DeliveryRecord {
        readable: true,
        payload: b"consumes one".to_vec(),
        ..DeliveryRecord::default()
    });
    adapter.dispatch(&mut engine, &delivery_event(conn, link, delivery));

    assert!(engine.commands.contains(&Command::Flow(link, 1)));
    assert_eq!(engine.link_credit_of(link), 10);
}

#[rstest]
fn zero_window_means_manual_credit_management(mut engine: FakeEngine) {
    let mut adapter = adapter_with_window(0);
    let link = engine.add_link(LinkRole::Receiver, active());

    adapter.dispatch(&mut engine, &local_open(link));

    assert!(engine.commands.is_empty());
}

#[rstest]
fn receiver_flow_event_tops_up_without_a_sendable_callback(mut engine: FakeEngine) {
    let mut adapter = adapter_with_window(5);
    let link = engine.add_link(LinkRole::Receiver, active());
    engine.set_link_credit(link, 2);

    adapter.dispatch(
        &mut engine,
        &EngineEvent::new(EngineEventKind::LinkFlow).with_link(link),
    );

    assert!(adapter.handler().calls.is_empty());
    assert_eq!(engine.commands, vec![Command::Flow(link, 3)]);
}

#[rstest]
fn sender_with_credit_is_sendable_and_never_topped_up(mut engine: FakeEngine) {
    let mut adapter = adapter_with_window(5);
    let link = engine.add_link(LinkRole::Sender, active());
    engine.set_link_credit(link, 3);

    adapter.dispatch(
        &mut engine,
        &EngineEvent::new(EngineEventKind::LinkFlow).with_link(link),
    );

    assert_eq!(adapter.handler().calls, vec![HandlerCall::Sendable(link)]);
    assert!(engine.commands.is_empty());
}

#[rstest]
fn sender_without_credit_is_not_sendable(mut engine: FakeEngine) {
    let mut adapter = adapter_with_window(5);
    let link = engine.add_link(LinkRole::Sender, active());

    adapter.dispatch(
        &mut engine,
        &EngineEvent::new(EngineEventKind::LinkFlow).with_link(link),
    );

    assert!(adapter.handler().calls.is_empty());
}

#[rstest]
fn remote_open_of_a_receiver_primes_the_window(mut engine: FakeEngine) {
    let mut adapter = adapter_with_window(7);
    let link = engine.add_link(
        LinkRole::Receiver,
        EndpointState::new(EndpointPhase::Uninitialized, EndpointPhase::Active),
    );

    adapter.dispatch(
        &mut engine,
        &EngineEvent::new(EngineEventKind::LinkRemoteOpen).with_link(link),
    );

    assert_eq!(
        engine.commands,
        vec![Command::OpenLink(link, None), Command::Flow(link, 7)]
    );
}

#[rstest]
fn per_link_override_takes_effect_on_the_next_event(mut engine: FakeEngine) {
    let mut adapter = adapter_with_window(0);
    let link = engine.add_link(LinkRole::Receiver, active());
    adapter.link_context_mut(link).credit_window = 4;

    adapter.dispatch(&mut engine, &local_open(link));

    assert_eq!(engine.commands, vec![Command::Flow(link, 4)]);
}

#[rstest]
fn link_teardown_discards_the_override(mut engine: FakeEngine) {
    let mut adapter = adapter_with_window(0);
    let link = engine.add_link(LinkRole::Receiver, active());
    adapter.link_context_mut(link).credit_window = 4;

    adapter.dispatch(
        &mut engine,
        &EngineEvent::new(EngineEventKind::LinkFinal).with_link(link),
    );
    adapter.dispatch(&mut engine, &local_open(link));

    assert!(engine.commands.is_empty(), "context was rebuilt from defaults");
}

proptest! {
    // Any event that runs the top-up restores outstanding credit to exactly
    // the window; surplus credit is left alone because the engine discards
    // non-positive deltas.
    #[test]
    fn topup_restores_the_window(window in 1..500u32, outstanding in 0..500u32) {
        let mut engine = FakeEngine::new();
        let link = engine.add_link(LinkRole::Receiver, active());
        engine.set_link_credit(link, outstanding);
        let mut adapter = adapter_with_window(window);

        adapter.dispatch(
            &mut engine,
            &EngineEvent::new(EngineEventKind::LinkFlow).with_link(link),
        );

        prop_assert_eq!(engine.link_credit_of(link), window.max(outstanding));
    }

    #[test]
    fn topup_is_idempotent(window in 1..500u32, repeats in 1..5usize) {
        let mut engine = FakeEngine::new();
        let link = engine.add_link(LinkRole::Receiver, active());
        let mut adapter = adapter_with_window(window);

        for _ in 0..repeats {
            adapter.dispatch(&mut engine, &local_open(link));
        }

        prop_assert_eq!(engine.link_credit_of(link), window);
    }
}
