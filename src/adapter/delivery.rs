//! Delivery dispatch: inbound messages and sender outcome handling.

use log::warn;

use super::{MessagingAdapter, build_event};
use crate::{
    engine::{DeliveryHandle, EndpointPhase, Engine, EngineEvent, LinkHandle, LinkRole},
    event::EventKind,
    flow,
    handler::MessagingHandler,
    metrics,
    settlement::{self, Outcome},
};

impl<H: MessagingHandler> MessagingAdapter<H> {
    pub(super) fn on_delivery(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        let (Some(link), Some(delivery)) = (raw.link, raw.delivery) else {
            warn!("delivery event without link and delivery handles");
            return;
        };
        match engine.link_role(link) {
            LinkRole::Receiver => self.on_receiver_delivery(engine, raw, link, delivery),
            LinkRole::Sender => self.on_sender_delivery(engine, raw, link, delivery),
        }
    }

    fn on_receiver_delivery(
        &mut self,
        engine: &mut dyn Engine,
        raw: &EngineEvent,
        link: LinkHandle,
        delivery: DeliveryHandle,
    ) {
        if !engine.delivery_partial(delivery) && engine.delivery_readable(delivery) {
            self.deliver_message(engine, raw, link, delivery);
        } else if engine.delivery_updated(delivery) && engine.delivery_remote_settled(delivery) {
            let event = build_event(EventKind::DeliverySettle, raw);
            self.handler.on_delivery_settle(engine, &event, delivery);
        }
        flow::credit_topup(engine, &mut self.contexts, link);
    }

    fn deliver_message(
        &mut self,
        engine: &mut dyn Engine,
        raw: &EngineEvent,
        link: LinkHandle,
        delivery: DeliveryHandle,
    ) {
        let Some(connection) = raw.connection else {
            warn!("delivery event without a connection handle");
            return;
        };
        let auto_accept = self.contexts.link(link).auto_accept;
        let buffer = self.contexts.connection(connection).message_mut();
        if let Err(error) = engine.decode_message(delivery, buffer) {
            warn!("failed to decode {delivery}: {error}");
            metrics::inc_errors();
            return;
        }
        // The application already closed the link; withhold the message
        // and, under auto-accept, release it back to the peer.
        if engine.link_state(link).local == EndpointPhase::Closed {
            if auto_accept {
                engine.release(delivery);
            }
            return;
        }
        let event = build_event(EventKind::Message, raw);
        let Self {
            handler, contexts, ..
        } = self;
        let message = contexts.connection(connection).message();
        handler.on_message(engine, &event, delivery, message);
        if auto_accept && !engine.delivery_remote_settled(delivery) {
            engine.accept(delivery);
        }
    }

    fn on_sender_delivery(
        &mut self,
        engine: &mut dyn Engine,
        raw: &EngineEvent,
        link: LinkHandle,
        delivery: DeliveryHandle,
    ) {
        if !engine.delivery_updated(delivery) {
            return;
        }
        if let Some(outcome) = settlement::classify(engine.delivery_disposition(delivery)) {
            match outcome {
                Outcome::Accepted => {
                    let event = build_event(EventKind::DeliveryAccept, raw);
                    self.handler.on_delivery_accept(engine, &event, delivery);
                }
                Outcome::Rejected => {
                    let event = build_event(EventKind::DeliveryReject, raw);
                    self.handler.on_delivery_reject(engine, &event, delivery);
                }
                Outcome::Released => {
                    let event = build_event(EventKind::DeliveryRelease, raw);
                    self.handler.on_delivery_release(engine, &event, delivery);
                }
            }
        }
        if engine.delivery_remote_settled(delivery) {
            let event = build_event(EventKind::DeliverySettle, raw);
            self.handler.on_delivery_settle(engine, &event, delivery);
        }
        if self.contexts.link(link).auto_settle {
            engine.settle(delivery);
        }
    }
}
