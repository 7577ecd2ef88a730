//! Endpoint and delivery state types reported by the engine.

/// Phase of one side of an endpoint.
///
/// The local and remote sides move through these phases independently; an
/// endpoint that was never opened locally stays `Uninitialized` even while
/// the remote side is `Active`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndpointPhase {
    /// The side has not sent or received an open yet.
    #[default]
    Uninitialized,
    /// The side has opened and not yet closed.
    Active,
    /// The side has closed.
    Closed,
}

/// Combined local/remote state of a connection, session, or link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EndpointState {
    /// Phase of the locally controlled side.
    pub local: EndpointPhase,
    /// Phase of the remotely controlled side.
    pub remote: EndpointPhase,
}

impl EndpointState {
    /// Create a state from its two sides.
    #[must_use]
    pub const fn new(local: EndpointPhase, remote: EndpointPhase) -> Self {
        Self { local, remote }
    }
}

/// Direction of a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkRole {
    /// The local side sends transfers.
    Sender,
    /// The local side receives transfers.
    Receiver,
}

/// Remote disposition of a delivery as reported by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disposition {
    /// The peer has not reported an outcome yet.
    #[default]
    None,
    /// The peer accepted the transfer.
    Accepted,
    /// The peer rejected the transfer as invalid.
    Rejected,
    /// The peer released the transfer without processing it.
    Released,
    /// The peer released the transfer with updated annotations.
    Modified,
}

/// Error condition attached to an endpoint or transport by the remote peer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    /// Symbolic condition name, e.g. `amqp:connection:forced`.
    pub name: String,
    /// Free-text description supplied with the condition.
    pub description: String,
}

impl Condition {
    /// Create a condition from its name and description.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}
