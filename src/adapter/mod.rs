//! Event adapter translating raw engine events into messaging callbacks.
//!
//! [`MessagingAdapter::dispatch`] is the single entry point. One raw event
//! is fully processed, including all policy side effects and the handler
//! callback, before the caller feeds the next; dispatch never suspends and
//! never propagates a fault. Endpoint-level problems surface as ERROR events
//! to the handler, malformed inputs degrade to logged no-ops.

mod delivery;
mod lifecycle;

use log::warn;

use crate::{
    config::{AdapterConfig, ContainerConfig},
    context::{ContextMap, LinkContext},
    engine::{Engine, EngineEvent, EngineEventKind, LinkHandle, LinkRole},
    event::{Event, EventKind},
    flow,
    handler::MessagingHandler,
    metrics,
};

/// Build the high-level event record for a callback about to fire.
fn build_event(kind: EventKind, raw: &EngineEvent) -> Event {
    metrics::inc_events(kind);
    if kind.is_error() {
        metrics::inc_errors();
    }
    Event::from_raw(kind, raw)
}

/// Adapter between a protocol engine and a [`MessagingHandler`].
///
/// Owns the handler, the per-endpoint context tables, and the optional
/// container configuration. The engine itself is borrowed per dispatch call,
/// so one adapter serves exactly the connections whose events are routed to
/// it; the external reactor guarantees per-connection serialization.
///
/// # Examples
///
/// ```no_run
/// use amplink::{AdapterConfig, LinkPolicy, MessagingAdapter, MessagingHandler};
///
/// struct Printer;
///
/// impl MessagingHandler for Printer {}
///
/// let config = AdapterConfig {
///     link_policy: LinkPolicy {
///         credit_window: 10,
///         ..LinkPolicy::default()
///     },
///     container: None,
/// };
/// let adapter = MessagingAdapter::with_config(Printer, config);
/// # drop(adapter);
/// ```
pub struct MessagingAdapter<H> {
    handler: H,
    contexts: ContextMap,
    container: Option<ContainerConfig>,
}

impl<H: MessagingHandler> MessagingAdapter<H> {
    /// Create an adapter with the default configuration.
    #[must_use]
    pub fn new(handler: H) -> Self { Self::with_config(handler, AdapterConfig::default()) }

    /// Create an adapter with the provided configuration.
    #[must_use]
    pub fn with_config(handler: H, config: AdapterConfig) -> Self {
        Self {
            handler,
            contexts: ContextMap::new(config.link_policy),
            container: config.container,
        }
    }

    /// Shared access to the handler.
    #[must_use]
    pub fn handler(&self) -> &H { &self.handler }

    /// Mutable access to the handler.
    pub fn handler_mut(&mut self) -> &mut H { &mut self.handler }

    /// Consume the adapter, returning the handler.
    #[must_use]
    pub fn into_handler(self) -> H { self.handler }

    /// Per-link policy state, created from the configured defaults if the
    /// link has not been seen yet.
    pub fn link_context_mut(&mut self, link: LinkHandle) -> &mut LinkContext {
        self.contexts.link(link)
    }

    /// Process one raw engine event to completion.
    ///
    /// Classifies the event, invokes the matching handler callback, and
    /// applies credit, settlement, and lifecycle policies as side effects.
    pub fn dispatch(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        match raw.kind {
            EngineEventKind::ReactorInit => self.on_reactor_init(engine, raw),
            EngineEventKind::LinkFlow => self.on_link_flow(engine, raw),
            EngineEventKind::Delivery => self.on_delivery(engine, raw),
            EngineEventKind::LinkLocalOpen => self.on_link_local_open(engine, raw),
            EngineEventKind::LinkRemoteOpen => self.on_link_remote_open(engine, raw),
            EngineEventKind::LinkRemoteClose => self.on_link_remote_close(engine, raw),
            EngineEventKind::LinkFinal => {
                if let Some(link) = raw.link {
                    self.contexts.evict_link(link);
                }
            }
            EngineEventKind::SessionRemoteOpen => self.on_session_remote_open(engine, raw),
            EngineEventKind::SessionRemoteClose => self.on_session_remote_close(engine, raw),
            EngineEventKind::ConnectionRemoteOpen => self.on_connection_remote_open(engine, raw),
            EngineEventKind::ConnectionRemoteClose => self.on_connection_remote_close(engine, raw),
            EngineEventKind::ConnectionFinal => {
                if let Some(connection) = raw.connection {
                    self.contexts.evict_connection(connection);
                }
            }
            EngineEventKind::TransportTailClosed => self.on_transport_tail_closed(engine, raw),
            EngineEventKind::TimerTask => self.on_timer_task(engine, raw),
        }
    }

    fn on_reactor_init(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        if self.container.is_none() {
            return;
        }
        let event = build_event(EventKind::Start, raw);
        self.handler.on_start(engine, &event);
    }

    fn on_link_flow(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        let Some(link) = raw.link else {
            warn!("link-flow event without a link handle");
            return;
        };
        if engine.link_role(link) == LinkRole::Sender && engine.link_credit(link) > 0 {
            let event = build_event(EventKind::Sendable, raw);
            self.handler.on_sendable(engine, &event, link);
        }
        flow::credit_topup(engine, &mut self.contexts, link);
    }

    // A locally opened receiver becomes usable without waiting for a flow
    // event.
    fn on_link_local_open(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        let Some(link) = raw.link else {
            warn!("local link-open event without a link handle");
            return;
        };
        flow::credit_topup(engine, &mut self.contexts, link);
    }

    fn on_timer_task(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        if self.container.is_none() {
            return;
        }
        let event = build_event(EventKind::Timer, raw);
        self.handler.on_timer(engine, &event);
    }
}
