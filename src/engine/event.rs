//! Raw engine events consumed by the adapter.

use super::handle::{
    ConnectionHandle,
    DeliveryHandle,
    LinkHandle,
    SessionHandle,
    TransportHandle,
};

/// Kind tag carried by a raw engine event.
///
/// The set is closed: the engine emits exactly these primitive state-change
/// notifications and the adapter matches over them exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEventKind {
    /// The processing context started; fired once per reactor.
    ReactorInit,
    /// Credit changed on a link.
    LinkFlow,
    /// A delivery was created or updated.
    Delivery,
    /// The local side opened a link.
    LinkLocalOpen,
    /// The remote side opened a link.
    LinkRemoteOpen,
    /// The remote side closed a link.
    LinkRemoteClose,
    /// The engine is about to destroy a link.
    LinkFinal,
    /// The remote side opened a session.
    SessionRemoteOpen,
    /// The remote side closed a session.
    SessionRemoteClose,
    /// The remote side opened a connection.
    ConnectionRemoteOpen,
    /// The remote side closed a connection.
    ConnectionRemoteClose,
    /// The engine is about to destroy a connection.
    ConnectionFinal,
    /// The transport read side reached end of stream.
    TransportTailClosed,
    /// A scheduled timer fired.
    TimerTask,
}

/// One raw event yielded by the engine's event iteration interface.
///
/// An event carries its kind and handles for the objects it concerns. The
/// engine populates the full ownership chain: a [`Delivery`] event carries
/// the delivery, its link, session, and connection; a link event carries the
/// link and its owners, and so on.
///
/// [`Delivery`]: EngineEventKind::Delivery
#[derive(Clone, Copy, Debug)]
pub struct EngineEvent {
    /// Kind tag identifying the state change.
    pub kind: EngineEventKind,
    /// Connection concerned, if any.
    pub connection: Option<ConnectionHandle>,
    /// Session concerned, if any.
    pub session: Option<SessionHandle>,
    /// Link concerned, if any.
    pub link: Option<LinkHandle>,
    /// Delivery concerned, if any.
    pub delivery: Option<DeliveryHandle>,
    /// Transport concerned, if any.
    pub transport: Option<TransportHandle>,
}

impl EngineEvent {
    /// Create an event of the given kind with no handles attached.
    #[must_use]
    pub fn new(kind: EngineEventKind) -> Self {
        Self {
            kind,
            connection: None,
            session: None,
            link: None,
            delivery: None,
            transport: None,
        }
    }

    /// Attach the connection concerned.
    #[must_use]
    pub fn with_connection(mut self, connection: ConnectionHandle) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Attach the session concerned.
    #[must_use]
    pub fn with_session(mut self, session: SessionHandle) -> Self {
        self.session = Some(session);
        self
    }

    /// Attach the link concerned.
    #[must_use]
    pub fn with_link(mut self, link: LinkHandle) -> Self {
        self.link = Some(link);
        self
    }

    /// Attach the delivery concerned.
    #[must_use]
    pub fn with_delivery(mut self, delivery: DeliveryHandle) -> Self {
        self.delivery = Some(delivery);
        self
    }

    /// Attach the transport concerned.
    #[must_use]
    pub fn with_transport(mut self, transport: TransportHandle) -> Self {
        self.transport = Some(transport);
        self
    }
}
