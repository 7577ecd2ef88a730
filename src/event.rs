//! High-level messaging events delivered to application handlers.

use crate::engine::{
    ConnectionHandle,
    DeliveryHandle,
    EngineEvent,
    LinkHandle,
    SessionHandle,
    TransportHandle,
};

/// Kind of a high-level messaging event.
///
/// Each kind corresponds to exactly one [`MessagingHandler`] method. The set
/// is closed; the adapter classifies every raw engine event into at most a
/// few of these.
///
/// [`MessagingHandler`]: crate::handler::MessagingHandler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// The processing context started.
    Start,
    /// A sender link has credit and can transfer.
    Sendable,
    /// A complete message arrived on a receiver link.
    Message,
    /// The remote peer settled a delivery.
    DeliverySettle,
    /// The remote peer accepted a sent delivery.
    DeliveryAccept,
    /// The remote peer rejected a sent delivery.
    DeliveryReject,
    /// The remote peer released or modified a sent delivery.
    DeliveryRelease,
    /// The remote peer opened a link.
    LinkOpen,
    /// The remote peer closed a link.
    LinkClose,
    /// The remote peer signalled an error condition on a link.
    LinkError,
    /// The remote peer opened a session.
    SessionOpen,
    /// The remote peer closed a session.
    SessionClose,
    /// The remote peer signalled an error condition on a session.
    SessionError,
    /// The remote peer opened a connection.
    ConnectionOpen,
    /// The remote peer closed a connection.
    ConnectionClose,
    /// The remote peer signalled an error condition on a connection.
    ConnectionError,
    /// The transport carrying an active connection closed.
    TransportClose,
    /// The transport reported an error condition.
    TransportError,
    /// A scheduled timer fired.
    Timer,
}

impl EventKind {
    /// Returns the kind name as a static string for metrics and logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Sendable => "sendable",
            Self::Message => "message",
            Self::DeliverySettle => "delivery_settle",
            Self::DeliveryAccept => "delivery_accept",
            Self::DeliveryReject => "delivery_reject",
            Self::DeliveryRelease => "delivery_release",
            Self::LinkOpen => "link_open",
            Self::LinkClose => "link_close",
            Self::LinkError => "link_error",
            Self::SessionOpen => "session_open",
            Self::SessionClose => "session_close",
            Self::SessionError => "session_error",
            Self::ConnectionOpen => "connection_open",
            Self::ConnectionClose => "connection_close",
            Self::ConnectionError => "connection_error",
            Self::TransportClose => "transport_close",
            Self::TransportError => "transport_error",
            Self::Timer => "timer",
        }
    }

    /// Returns `true` for the error variants.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            Self::LinkError | Self::SessionError | Self::ConnectionError | Self::TransportError
        )
    }
}

/// Immutable record describing one high-level event.
///
/// An `Event` pairs its [`EventKind`] with the handles copied from the raw
/// engine event it was derived from. Handles for objects the event does not
/// concern are `None`.
#[derive(Clone, Copy, Debug)]
pub struct Event {
    kind: EventKind,
    connection: Option<ConnectionHandle>,
    session: Option<SessionHandle>,
    link: Option<LinkHandle>,
    delivery: Option<DeliveryHandle>,
    transport: Option<TransportHandle>,
}

impl Event {
    pub(crate) fn from_raw(kind: EventKind, raw: &EngineEvent) -> Self {
        Self {
            kind,
            connection: raw.connection,
            session: raw.session,
            link: raw.link,
            delivery: raw.delivery,
            transport: raw.transport,
        }
    }

    /// Kind of the event.
    #[must_use]
    pub fn kind(&self) -> EventKind { self.kind }

    /// Connection concerned, if any.
    #[must_use]
    pub fn connection(&self) -> Option<ConnectionHandle> { self.connection }

    /// Session concerned, if any.
    #[must_use]
    pub fn session(&self) -> Option<SessionHandle> { self.session }

    /// Link concerned, if any.
    #[must_use]
    pub fn link(&self) -> Option<LinkHandle> { self.link }

    /// Delivery concerned, if any.
    #[must_use]
    pub fn delivery(&self) -> Option<DeliveryHandle> { self.delivery }

    /// Transport concerned, if any.
    #[must_use]
    pub fn transport(&self) -> Option<TransportHandle> { self.transport }
}

#[cfg(test)]
mod tests {
    use super::{Event, EventKind};
    use crate::engine::{EngineEvent, EngineEventKind, LinkHandle};

    #[test]
    fn copies_handles_from_the_raw_event() {
        let link = LinkHandle::new(4);
        let raw = EngineEvent::new(EngineEventKind::LinkRemoteOpen).with_link(link);
        let event = Event::from_raw(EventKind::LinkOpen, &raw);
        assert_eq!(event.kind(), EventKind::LinkOpen);
        assert_eq!(event.link(), Some(link));
        assert_eq!(event.delivery(), None);
    }

    #[test]
    fn error_kinds_are_classified() {
        assert!(EventKind::LinkError.is_error());
        assert!(EventKind::TransportError.is_error());
        assert!(!EventKind::LinkClose.is_error());
    }
}
