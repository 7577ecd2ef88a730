//! Scripted fake protocol engine.

use std::collections::HashMap;

use amplink::{
    Condition,
    ConnectionHandle,
    DecodeError,
    DeliveryHandle,
    Disposition,
    EndpointPhase,
    EndpointState,
    Engine,
    LinkHandle,
    LinkOptions,
    LinkRole,
    Message,
    SessionHandle,
    TransportHandle,
};

/// Commands issued by the adapter, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `open_connection` was issued.
    OpenConnection(ConnectionHandle),
    /// `close_connection` was issued.
    CloseConnection(ConnectionHandle),
    /// `open_session` was issued.
    OpenSession(SessionHandle),
    /// `close_session` was issued.
    CloseSession(SessionHandle),
    /// `open_link` was issued with the recorded options.
    OpenLink(LinkHandle, Option<LinkOptions>),
    /// `close_link` was issued.
    CloseLink(LinkHandle),
    /// `flow` was issued with the recorded delta.
    Flow(LinkHandle, i64),
    /// `accept` was issued.
    Accept(DeliveryHandle),
    /// `reject` was issued.
    Reject(DeliveryHandle),
    /// `release` was issued.
    Release(DeliveryHandle),
    /// `settle` was issued.
    Settle(DeliveryHandle),
}

#[derive(Debug, Default)]
struct EndpointRecord {
    state: EndpointState,
    condition: Option<Condition>,
}

#[derive(Debug)]
struct LinkRecord {
    role: LinkRole,
    state: EndpointState,
    condition: Option<Condition>,
    credit: u32,
}

/// Scripted state of one in-flight delivery.
#[derive(Debug, Default)]
pub struct DeliveryRecord {
    /// Remote state changed in the current event.
    pub updated: bool,
    /// More payload bytes still in flight.
    pub partial: bool,
    /// Payload available to decode.
    pub readable: bool,
    /// Remote peer settled the delivery.
    pub remote_settled: bool,
    /// Local side settled the delivery; set by the `Settle` command.
    pub local_settled: bool,
    /// Remote disposition.
    pub disposition: Disposition,
    /// Payload produced by `decode_message`.
    pub payload: Vec<u8>,
    /// Fail the next decode instead of producing the payload.
    pub fail_decode: bool,
}

/// Scripted fake engine.
///
/// Queries panic on handles the test never created; commands both record
/// themselves in [`commands`](Self::commands) and apply the state change a
/// real engine would (local phase transitions, credit arithmetic, local
/// settlement), so invariants are observable after dispatch.
#[derive(Debug, Default)]
pub struct FakeEngine {
    next_id: u64,
    connections: HashMap<ConnectionHandle, EndpointRecord>,
    sessions: HashMap<SessionHandle, EndpointRecord>,
    links: HashMap<LinkHandle, LinkRecord>,
    transports: HashMap<TransportHandle, Option<Condition>>,
    deliveries: HashMap<DeliveryHandle, DeliveryRecord>,
    /// Commands issued by the adapter, in order.
    pub commands: Vec<Command>,
}

impl FakeEngine {
    /// Create an empty engine.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Create a connection in the given state.
    pub fn add_connection(&mut self, state: EndpointState) -> ConnectionHandle {
        let handle = ConnectionHandle::new(self.next_id());
        self.connections.insert(
            handle,
            EndpointRecord {
                state,
                condition: None,
            },
        );
        handle
    }

    /// Create a session in the given state.
    pub fn add_session(&mut self, state: EndpointState) -> SessionHandle {
        let handle = SessionHandle::new(self.next_id());
        self.sessions.insert(
            handle,
            EndpointRecord {
                state,
                condition: None,
            },
        );
        handle
    }

    /// Create a link with the given role and state, with no credit.
    pub fn add_link(&mut self, role: LinkRole, state: EndpointState) -> LinkHandle {
        let handle = LinkHandle::new(self.next_id());
        self.links.insert(
            handle,
            LinkRecord {
                role,
                state,
                condition: None,
                credit: 0,
            },
        );
        handle
    }

    /// Create a transport with no error condition.
    pub fn add_transport(&mut self) -> TransportHandle {
        let handle = TransportHandle::new(self.next_id());
        self.transports.insert(handle, None);
        handle
    }

    /// Create a delivery from a scripted record.
    pub fn add_delivery(&mut self, record: DeliveryRecord) -> DeliveryHandle {
        let handle = DeliveryHandle::new(self.next_id());
        self.deliveries.insert(handle, record);
        handle
    }

    /// Script the outstanding credit on a link.
    pub fn set_link_credit(&mut self, link: LinkHandle, credit: u32) {
        self.link_mut(link).credit = credit;
    }

    /// Script a link's endpoint state.
    pub fn set_link_state(&mut self, link: LinkHandle, state: EndpointState) {
        self.link_mut(link).state = state;
    }

    /// Script a connection's endpoint state.
    pub fn set_connection_state(&mut self, connection: ConnectionHandle, state: EndpointState) {
        self.connection_mut(connection).state = state;
    }

    /// Attach a remote error condition to a connection.
    pub fn set_connection_condition(&mut self, connection: ConnectionHandle, condition: Condition) {
        self.connection_mut(connection).condition = Some(condition);
    }

    /// Attach a remote error condition to a session.
    pub fn set_session_condition(&mut self, session: SessionHandle, condition: Condition) {
        self.session_mut(session).condition = Some(condition);
    }

    /// Attach a remote error condition to a link.
    pub fn set_link_condition(&mut self, link: LinkHandle, condition: Condition) {
        self.link_mut(link).condition = Some(condition);
    }

    /// Attach an error condition to a transport.
    pub fn set_transport_condition(&mut self, transport: TransportHandle, condition: Condition) {
        let slot = self
            .transports
            .get_mut(&transport)
            .expect("unknown transport handle");
        *slot = Some(condition);
    }

    /// Mutable access to a scripted delivery.
    pub fn delivery_mut(&mut self, delivery: DeliveryHandle) -> &mut DeliveryRecord {
        self.deliveries
            .get_mut(&delivery)
            .expect("unknown delivery handle")
    }

    /// Outstanding credit on a link, for assertions.
    #[must_use]
    pub fn link_credit_of(&self, link: LinkHandle) -> u32 { self.link_ref(link).credit }

    /// Whether the local side settled a delivery, for assertions.
    #[must_use]
    pub fn delivery_local_settled(&self, delivery: DeliveryHandle) -> bool {
        self.deliveries
            .get(&delivery)
            .expect("unknown delivery handle")
            .local_settled
    }

    fn connection_mut(&mut self, connection: ConnectionHandle) -> &mut EndpointRecord {
        self.connections
            .get_mut(&connection)
            .expect("unknown connection handle")
    }

    fn connection_ref(&self, connection: ConnectionHandle) -> &EndpointRecord {
        self.connections
            .get(&connection)
            .expect("unknown connection handle")
    }

    fn session_mut(&mut self, session: SessionHandle) -> &mut EndpointRecord {
        self.sessions
            .get_mut(&session)
            .expect("unknown session handle")
    }

    fn session_ref(&self, session: SessionHandle) -> &EndpointRecord {
        self.sessions.get(&session).expect("unknown session handle")
    }

    fn link_mut(&mut self, link: LinkHandle) -> &mut LinkRecord {
        self.links.get_mut(&link).expect("unknown link handle")
    }

    fn link_ref(&self, link: LinkHandle) -> &LinkRecord {
        self.links.get(&link).expect("unknown link handle")
    }

    fn delivery_ref(&self, delivery: DeliveryHandle) -> &DeliveryRecord {
        self.deliveries
            .get(&delivery)
            .expect("unknown delivery handle")
    }
}

impl Engine for FakeEngine {
    fn connection_state(&self, connection: ConnectionHandle) -> EndpointState {
        self.connection_ref(connection).state
    }

    fn session_state(&self, session: SessionHandle) -> EndpointState {
        self.session_ref(session).state
    }

    fn link_state(&self, link: LinkHandle) -> EndpointState { self.link_ref(link).state }

    fn link_role(&self, link: LinkHandle) -> LinkRole { self.link_ref(link).role }

    fn link_credit(&self, link: LinkHandle) -> u32 { self.link_ref(link).credit }

    fn connection_condition(&self, connection: ConnectionHandle) -> Option<Condition> {
        self.connection_ref(connection).condition.clone()
    }

    fn session_condition(&self, session: SessionHandle) -> Option<Condition> {
        self.session_ref(session).condition.clone()
    }

    fn link_condition(&self, link: LinkHandle) -> Option<Condition> {
        self.link_ref(link).condition.clone()
    }

    fn transport_condition(&self, transport: TransportHandle) -> Option<Condition> {
        self.transports
            .get(&transport)
            .expect("unknown transport handle")
            .clone()
    }

    fn delivery_updated(&self, delivery: DeliveryHandle) -> bool {
        self.delivery_ref(delivery).updated
    }

    fn delivery_partial(&self, delivery: DeliveryHandle) -> bool {
        self.delivery_ref(delivery).partial
    }

    fn delivery_readable(&self, delivery: DeliveryHandle) -> bool {
        self.delivery_ref(delivery).readable
    }

    fn delivery_remote_settled(&self, delivery: DeliveryHandle) -> bool {
        self.delivery_ref(delivery).remote_settled
    }

    fn delivery_disposition(&self, delivery: DeliveryHandle) -> Disposition {
        self.delivery_ref(delivery).disposition
    }

    fn open_connection(&mut self, connection: ConnectionHandle) {
        self.connection_mut(connection).state.local = EndpointPhase::Active;
        self.commands.push(Command::OpenConnection(connection));
    }

    fn close_connection(&mut self, connection: ConnectionHandle) {
        self.connection_mut(connection).state.local = EndpointPhase::Closed;
        self.commands.push(Command::CloseConnection(connection));
    }

    fn open_session(&mut self, session: SessionHandle) {
        self.session_mut(session).state.local = EndpointPhase::Active;
        self.commands.push(Command::OpenSession(session));
    }

    fn close_session(&mut self, session: SessionHandle) {
        self.session_mut(session).state.local = EndpointPhase::Closed;
        self.commands.push(Command::CloseSession(session));
    }

    fn open_link(&mut self, link: LinkHandle, options: Option<&LinkOptions>) {
        self.link_mut(link).state.local = EndpointPhase::Active;
        self.commands.push(Command::OpenLink(link, options.cloned()));
    }

    fn close_link(&mut self, link: LinkHandle) {
        self.link_mut(link).state.local = EndpointPhase::Closed;
        self.commands.push(Command::CloseLink(link));
    }

    fn flow(&mut self, link: LinkHandle, delta: i64) {
        if let Ok(gained) = u32::try_from(delta) {
            self.link_mut(link).credit += gained;
        }
        self.commands.push(Command::Flow(link, delta));
    }

    fn accept(&mut self, delivery: DeliveryHandle) {
        self.delivery_mut(delivery);
        self.commands.push(Command::Accept(delivery));
    }

    fn reject(&mut self, delivery: DeliveryHandle) {
        self.delivery_mut(delivery);
        self.commands.push(Command::Reject(delivery));
    }

    fn release(&mut self, delivery: DeliveryHandle) {
        self.delivery_mut(delivery);
        self.commands.push(Command::Release(delivery));
    }

    fn settle(&mut self, delivery: DeliveryHandle) {
        self.delivery_mut(delivery).local_settled = true;
        self.commands.push(Command::Settle(delivery));
    }

    fn decode_message(
        &mut self,
        delivery: DeliveryHandle,
        message: &mut Message,
    ) -> Result<(), DecodeError> {
        let record = self.delivery_ref(delivery);
        if record.fail_decode {
            return Err(DecodeError::Malformed("scripted decode failure".into()));
        }
        message.clear();
        message.body_mut().extend_from_slice(&record.payload);
        Ok(())
    }
}
