//! Handler recording every callback invocation.

use amplink::{
    ConnectionHandle,
    DeliveryHandle,
    Engine,
    Event,
    LinkHandle,
    Message,
    MessagingHandler,
    SessionHandle,
    TransportHandle,
};

/// One recorded callback invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerCall {
    /// `on_start` fired.
    Start,
    /// `on_sendable` fired for the link.
    Sendable(LinkHandle),
    /// `on_message` fired; the body is copied out of the reusable buffer.
    Message {
        /// Delivery the message arrived on.
        delivery: DeliveryHandle,
        /// Copy of the decoded body.
        body: Vec<u8>,
    },
    /// `on_delivery_settle` fired.
    DeliverySettle(DeliveryHandle),
    /// `on_delivery_accept` fired.
    DeliveryAccept(DeliveryHandle),
    /// `on_delivery_reject` fired.
    DeliveryReject(DeliveryHandle),
    /// `on_delivery_release` fired.
    DeliveryRelease(DeliveryHandle),
    /// `on_link_open` fired.
    LinkOpen(LinkHandle),
    /// `on_link_close` fired.
    LinkClose(LinkHandle),
    /// `on_link_error` fired.
    LinkError(LinkHandle),
    /// `on_session_open` fired.
    SessionOpen(SessionHandle),
    /// `on_session_close` fired.
    SessionClose(SessionHandle),
    /// `on_session_error` fired.
    SessionError(SessionHandle),
    /// `on_connection_open` fired.
    ConnectionOpen(ConnectionHandle),
    /// `on_connection_close` fired.
    ConnectionClose(ConnectionHandle),
    /// `on_connection_error` fired.
    ConnectionError(ConnectionHandle),
    /// `on_transport_close` fired.
    TransportClose(TransportHandle),
    /// `on_transport_error` fired.
    TransportError(TransportHandle),
    /// `on_timer` fired.
    Timer,
}

/// Handler that appends every invocation to [`calls`](Self::calls).
#[derive(Debug, Default)]
pub struct RecordingHandler {
    /// Callback invocations observed, in order.
    pub calls: Vec<HandlerCall>,
}

impl MessagingHandler for RecordingHandler {
    fn on_start(&mut self, _engine: &mut dyn Engine, _event: &Event) {
        self.calls.push(HandlerCall::Start);
    }

    fn on_sendable(&mut self, _engine: &mut dyn Engine, _event: &Event, link: LinkHandle) {
        self.calls.push(HandlerCall::Sendable(link));
    }

    fn on_message(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        delivery: DeliveryHandle,
        message: &Message,
    ) {
        self.calls.push(HandlerCall::Message {
            delivery,
            body: message.body().to_vec(),
        });
    }

    fn on_delivery_settle(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        delivery: DeliveryHandle,
    ) {
        self.calls.push(HandlerCall::DeliverySettle(delivery));
    }

    fn on_delivery_accept(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        delivery: DeliveryHandle,
    ) {
        self.calls.push(HandlerCall::DeliveryAccept(delivery));
    }

    fn on_delivery_reject(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        delivery: DeliveryHandle,
    ) {
        self.calls.push(HandlerCall::DeliveryReject(delivery));
    }

    fn on_delivery_release(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        delivery: DeliveryHandle,
    ) {
        self.calls.push(HandlerCall::DeliveryRelease(delivery));
    }

    fn on_link_open(&mut self, _engine: &mut dyn Engine, _event: &Event, link: LinkHandle) {
        self.calls.push(HandlerCall::LinkOpen(link));
    }

    fn on_link_close(&mut self, _engine: &mut dyn Engine, _event: &Event, link: LinkHandle) {
        self.calls.push(HandlerCall::LinkClose(link));
    }

    fn on_link_error(&mut self, _engine: &mut dyn Engine, _event: &Event, link: LinkHandle) {
        self.calls.push(HandlerCall::LinkError(link));
    }

    fn on_session_open(&mut self, _engine: &mut dyn Engine, _event: &Event, session: SessionHandle) {
        self.calls.push(HandlerCall::SessionOpen(session));
    }

    fn on_session_close(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        session: SessionHandle,
    ) {
        self.calls.push(HandlerCall::SessionClose(session));
    }

    fn on_session_error(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        session: SessionHandle,
    ) {
        self.calls.push(HandlerCall::SessionError(session));
    }

    fn on_connection_open(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        connection: ConnectionHandle,
    ) {
        self.calls.push(HandlerCall::ConnectionOpen(connection));
    }

    fn on_connection_close(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        connection: ConnectionHandle,
    ) {
        self.calls.push(HandlerCall::ConnectionClose(connection));
    }

    fn on_connection_error(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        connection: ConnectionHandle,
    ) {
        self.calls.push(HandlerCall::ConnectionError(connection));
    }

    fn on_transport_close(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        transport: TransportHandle,
    ) {
        self.calls.push(HandlerCall::TransportClose(transport));
    }

    fn on_transport_error(
        &mut self,
        _engine: &mut dyn Engine,
        _event: &Event,
        transport: TransportHandle,
    ) {
        self.calls.push(HandlerCall::TransportError(transport));
    }

    fn on_timer(&mut self, _engine: &mut dyn Engine, _event: &Event) {
        self.calls.push(HandlerCall::Timer);
    }
}
