//! Per-endpoint side-table state.
//!
//! Contexts are attached by handle lookup rather than by extending the
//! engine's endpoint objects. A context is created lazily on first need and
//! evicted when the engine announces the owner's destruction, so a context
//! never outlives its endpoint.

use std::collections::HashMap;

use crate::{
    config::LinkPolicy,
    engine::{ConnectionHandle, LinkHandle},
    message::Message,
};

/// Mutable policy state attached to one link.
///
/// Initialised from the configured [`LinkPolicy`] when the link is first
/// seen; applications may adjust individual links afterwards through
/// [`MessagingAdapter::link_context_mut`](crate::adapter::MessagingAdapter::link_context_mut).
#[derive(Clone, Copy, Debug)]
pub struct LinkContext {
    /// Credit window maintained on this link when it is a receiver.
    pub credit_window: u32,
    /// Accept readable, unsettled deliveries after the message callback.
    pub auto_accept: bool,
    /// Settle sender deliveries after their remote state updates.
    pub auto_settle: bool,
}

impl LinkContext {
    fn from_policy(policy: LinkPolicy) -> Self {
        Self {
            credit_window: policy.credit_window,
            auto_accept: policy.auto_accept,
            auto_settle: policy.auto_settle,
        }
    }
}

/// Mutable state attached to one connection.
///
/// Holds the single reusable [`Message`] decode buffer for all inbound
/// deliveries on the connection.
#[derive(Debug, Default)]
pub(crate) struct ConnectionContext {
    message: Message,
}

impl ConnectionContext {
    pub(crate) fn message(&self) -> &Message { &self.message }

    pub(crate) fn message_mut(&mut self) -> &mut Message { &mut self.message }
}

/// Side tables mapping endpoint handles to their contexts.
#[derive(Debug)]
pub(crate) struct ContextMap {
    policy: LinkPolicy,
    links: HashMap<LinkHandle, LinkContext>,
    connections: HashMap<ConnectionHandle, ConnectionContext>,
}

impl ContextMap {
    pub(crate) fn new(policy: LinkPolicy) -> Self {
        Self {
            policy,
            links: HashMap::new(),
            connections: HashMap::new(),
        }
    }

    /// Context for `link`, created from the configured policy if absent.
    pub(crate) fn link(&mut self, link: LinkHandle) -> &mut LinkContext {
        let policy = self.policy;
        self.links
            .entry(link)
            .or_insert_with(|| LinkContext::from_policy(policy))
    }

    /// Context for `connection`, created empty if absent.
    pub(crate) fn connection(&mut self, connection: ConnectionHandle) -> &mut ConnectionContext {
        self.connections.entry(connection).or_default()
    }

    /// Drop the context for a link the engine is destroying.
    pub(crate) fn evict_link(&mut self, link: LinkHandle) { self.links.remove(&link); }

    /// Drop the context for a connection the engine is destroying.
    pub(crate) fn evict_connection(&mut self, connection: ConnectionHandle) {
        self.connections.remove(&connection);
    }

    #[cfg(test)]
    pub(crate) fn has_link(&self, link: LinkHandle) -> bool { self.links.contains_key(&link) }

    #[cfg(test)]
    pub(crate) fn has_connection(&self, connection: ConnectionHandle) -> bool {
        self.connections.contains_key(&connection)
    }
}
