//! Application-facing messaging callbacks.
//!
//! [`MessagingHandler`] exposes one method per
//! [`EventKind`](crate::event::EventKind); every method defaults to a no-op
//! so applications only override what they care about. Callbacks run inline
//! on the event-processing path and are expected to return promptly.

use crate::{
    engine::{ConnectionHandle, DeliveryHandle, Engine, LinkHandle, SessionHandle, TransportHandle},
    event::Event,
    message::Message,
};

/// Callbacks invoked by the [`MessagingAdapter`](crate::adapter::MessagingAdapter).
///
/// Each method receives the engine (for queries and commands), the built
/// high-level [`Event`], and the handle of the endpoint or delivery
/// concerned. The `message` reference passed to [`on_message`] is only valid
/// for the duration of the call; see [`Message`].
///
/// [`on_message`]: MessagingHandler::on_message
pub trait MessagingHandler {
    /// The processing context started. Only fired under a container.
    fn on_start(&mut self, _engine: &mut dyn Engine, _event: &Event) {}

    /// A sender link has credit and can transfer.
    fn on_sendable(&mut self, _engine: &mut dyn Engine, _event: &Event, _link: LinkHandle) {}

    /// A complete message arrived on a receiver link.
    fn on_message(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _delivery: DeliveryHandle,
        _message: &Message,
    ) {
    }

    /// The remote peer settled a delivery.
    fn on_delivery_settle(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _delivery: DeliveryHandle,
    ) {
    }

    /// The remote peer accepted a sent delivery.
    fn on_delivery_accept(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _delivery: DeliveryHandle,
    ) {
    }

    /// The remote peer rejected a sent delivery.
    fn on_delivery_reject(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _delivery: DeliveryHandle,
    ) {
    }

    /// The remote peer released or modified a sent delivery.
    fn on_delivery_release(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _delivery: DeliveryHandle,
    ) {
    }

    /// The remote peer opened a link.
    fn on_link_open(&mut self, _engine: &mut dyn Engine, _event: &Event, _link: LinkHandle) {}

    /// The remote peer closed a link.
    fn on_link_close(&mut self, _engine: &mut dyn Engine, _event: &Event, _link: LinkHandle) {}

    /// The remote peer signalled an error condition on a link.
    fn on_link_error(&mut self, _engine: &mut dyn Engine, _event: &Event, _link: LinkHandle) {}

    /// The remote peer opened a session.
    fn on_session_open(&mut self, _engine: &mut dyn Engine, _event: &Event, _session: SessionHandle) {
    }

    /// The remote peer closed a session.
    fn on_session_close(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _session: SessionHandle,
    ) {
    }

    /// The remote peer signalled an error condition on a session.
    fn on_session_error(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _session: SessionHandle,
    ) {
    }

    /// The remote peer opened a connection.
    fn on_connection_open(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _connection: ConnectionHandle,
    ) {
    }

    /// The remote peer closed a connection.
    fn on_connection_close(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _connection: ConnectionHandle,
    ) {
    }

    /// The remote peer signalled an error condition on a connection.
    fn on_connection_error(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _connection: ConnectionHandle,
    ) {
    }

    /// The transport carrying a locally active connection closed.
    fn on_transport_close(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _transport: TransportHandle,
    ) {
    }

    /// The transport reported an error condition.
    fn on_transport_error(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        _transport: TransportHandle,
    ) {
    }

    /// A scheduled timer fired. Only fired under a container.
    fn on_timer(&mut self, _engine: &mut dyn Engine, _event: &Event) {}
}
