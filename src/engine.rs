//! Boundary to the low-level protocol engine.
//!
//! The adapter never touches wire bytes; it consumes [`EngineEvent`] records
//! and endpoint-state queries exposed here, and issues commands back through
//! the same trait. Implementations wrap a concrete protocol engine and are
//! expected to uphold the per-connection serialization guarantee: no two
//! events for the same connection are ever dispatched concurrently.

mod event;
mod handle;
mod state;

pub use event::{EngineEvent, EngineEventKind};
pub use handle::{ConnectionHandle, DeliveryHandle, LinkHandle, SessionHandle, TransportHandle};
pub use state::{Condition, Disposition, EndpointPhase, EndpointState, LinkRole};
use thiserror::Error;

use crate::{config::LinkOptions, message::Message};

/// Errors reported by [`Engine::decode_message`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The delivery payload ended before a complete message was read.
    #[error("delivery payload is incomplete")]
    Incomplete,
    /// The delivery payload is not a well-formed message.
    #[error("malformed message: {0}")]
    Malformed(String),
}

/// Queries and commands exposed by the protocol engine.
///
/// Queries take a handle and report the engine's current view of that
/// object; commands request a protocol action. Commands are fire-and-forget
/// at this boundary: the engine reports any resulting state change through a
/// later event rather than a return value.
pub trait Engine {
    /// Local and remote state of a connection.
    fn connection_state(&self, connection: ConnectionHandle) -> EndpointState;

    /// Local and remote state of a session.
    fn session_state(&self, session: SessionHandle) -> EndpointState;

    /// Local and remote state of a link.
    fn link_state(&self, link: LinkHandle) -> EndpointState;

    /// Direction of a link.
    fn link_role(&self, link: LinkHandle) -> LinkRole;

    /// Outstanding credit on a link.
    fn link_credit(&self, link: LinkHandle) -> u32;

    /// Error condition the remote peer attached to a connection, if any.
    fn connection_condition(&self, connection: ConnectionHandle) -> Option<Condition>;

    /// Error condition the remote peer attached to a session, if any.
    fn session_condition(&self, session: SessionHandle) -> Option<Condition>;

    /// Error condition the remote peer attached to a link, if any.
    fn link_condition(&self, link: LinkHandle) -> Option<Condition>;

    /// Error condition set on a transport, if any.
    fn transport_condition(&self, transport: TransportHandle) -> Option<Condition>;

    /// Whether the delivery's remote state changed in the current event.
    fn delivery_updated(&self, delivery: DeliveryHandle) -> bool;

    /// Whether more payload bytes for the delivery are still in flight.
    fn delivery_partial(&self, delivery: DeliveryHandle) -> bool;

    /// Whether the delivery has payload available to decode.
    fn delivery_readable(&self, delivery: DeliveryHandle) -> bool;

    /// Whether the remote peer has settled the delivery.
    fn delivery_remote_settled(&self, delivery: DeliveryHandle) -> bool;

    /// Remote disposition of the delivery.
    fn delivery_disposition(&self, delivery: DeliveryHandle) -> Disposition;

    /// Open the local side of a connection.
    fn open_connection(&mut self, connection: ConnectionHandle);

    /// Close the local side of a connection.
    fn close_connection(&mut self, connection: ConnectionHandle);

    /// Open the local side of a session.
    fn open_session(&mut self, session: SessionHandle);

    /// Close the local side of a session.
    fn close_session(&mut self, session: SessionHandle);

    /// Open the local side of a link, optionally applying attach options.
    fn open_link(&mut self, link: LinkHandle, options: Option<&LinkOptions>);

    /// Close the local side of a link.
    fn close_link(&mut self, link: LinkHandle);

    /// Adjust a link's credit by `delta`.
    ///
    /// A zero or negative delta is a no-op; the adapter may issue one on any
    /// event and relies on the engine discarding it.
    fn flow(&mut self, link: LinkHandle, delta: i64);

    /// Record the accepted outcome on a delivery.
    fn accept(&mut self, delivery: DeliveryHandle);

    /// Record the rejected outcome on a delivery.
    fn reject(&mut self, delivery: DeliveryHandle);

    /// Record the released outcome on a delivery.
    fn release(&mut self, delivery: DeliveryHandle);

    /// Settle the local side of a delivery.
    fn settle(&mut self, delivery: DeliveryHandle);

    /// Decode a delivery's payload into `message`, overwriting its contents.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the payload is incomplete or malformed;
    /// the previous contents of `message` are unspecified afterwards.
    fn decode_message(
        &mut self,
        delivery: DeliveryHandle,
        message: &mut Message,
    ) -> Result<(), DecodeError>;
}
