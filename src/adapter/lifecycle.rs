//! Endpoint lifecycle dispatch: remote opens, closes, and transport teardown.
//!
//! The error-before-event ordering is fixed: when the remote attached an
//! error condition, the matching ERROR callback always precedes the OPEN or
//! CLOSE callback for the same raw event.

use log::{debug, warn};

use super::{MessagingAdapter, build_event};
use crate::{
    engine::{EndpointPhase, Engine, EngineEvent},
    event::EventKind,
    flow,
    handler::MessagingHandler,
    negotiate::{self, LocalAction},
};

impl<H: MessagingHandler> MessagingAdapter<H> {
    pub(super) fn on_connection_remote_open(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        let Some(connection) = raw.connection else {
            warn!("connection event without a connection handle");
            return;
        };
        if engine.connection_condition(connection).is_some() {
            let event = build_event(EventKind::ConnectionError, raw);
            self.handler.on_connection_error(engine, &event, connection);
        }
        let event = build_event(EventKind::ConnectionOpen, raw);
        self.handler.on_connection_open(engine, &event, connection);
        if negotiate::on_remote_open(engine.connection_state(connection)) == LocalAction::Open {
            engine.open_connection(connection);
        }
    }

    pub(super) fn on_connection_remote_close(
        &mut self,
        engine: &mut dyn Engine,
        raw: &EngineEvent,
    ) {
        let Some(connection) = raw.connection else {
            warn!("connection event without a connection handle");
            return;
        };
        if let Some(condition) = engine.connection_condition(connection) {
            debug!("remote closed {connection} with condition {condition}");
            let event = build_event(EventKind::ConnectionError, raw);
            self.handler.on_connection_error(engine, &event, connection);
        }
        let event = build_event(EventKind::ConnectionClose, raw);
        self.handler.on_connection_close(engine, &event, connection);
        if negotiate::on_remote_close(engine.connection_state(connection)) == LocalAction::Close {
            engine.close_connection(connection);
        }
    }

    pub(super) fn on_session_remote_open(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        let Some(session) = raw.session else {
            warn!("session event without a session handle");
            return;
        };
        if engine.session_condition(session).is_some() {
            let event = build_event(EventKind::SessionError, raw);
            self.handler.on_session_error(engine, &event, session);
        }
        let event = build_event(EventKind::SessionOpen, raw);
        self.handler.on_session_open(engine, &event, session);
        if negotiate::on_remote_open(engine.session_state(session)) == LocalAction::Open {
            engine.open_session(session);
        }
    }

    pub(super) fn on_session_remote_close(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        let Some(session) = raw.session else {
            warn!("session event without a session handle");
            return;
        };
        if let Some(condition) = engine.session_condition(session) {
            debug!("remote closed {session} with condition {condition}");
            let event = build_event(EventKind::SessionError, raw);
            self.handler.on_session_error(engine, &event, session);
        }
        let event = build_event(EventKind::SessionClose, raw);
        self.handler.on_session_close(engine, &event, session);
        if negotiate::on_remote_close(engine.session_state(session)) == LocalAction::Close {
            engine.close_session(session);
        }
    }

    pub(super) fn on_link_remote_open(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        let Some(link) = raw.link else {
            warn!("link event without a link handle");
            return;
        };
        if engine.link_condition(link).is_some() {
            let event = build_event(EventKind::LinkError, raw);
            self.handler.on_link_error(engine, &event, link);
        }
        let event = build_event(EventKind::LinkOpen, raw);
        self.handler.on_link_open(engine, &event, link);
        if negotiate::on_remote_open(engine.link_state(link)) == LocalAction::Open {
            let options = self.container.as_ref().map(|container| &container.link_options);
            engine.open_link(link, options);
        }
        flow::credit_topup(engine, &mut self.contexts, link);
    }

    pub(super) fn on_link_remote_close(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        let Some(link) = raw.link else {
            warn!("link event without a link handle");
            return;
        };
        if let Some(condition) = engine.link_condition(link) {
            debug!("remote closed {link} with condition {condition}");
            let event = build_event(EventKind::LinkError, raw);
            self.handler.on_link_error(engine, &event, link);
        }
        let event = build_event(EventKind::LinkClose, raw);
        self.handler.on_link_close(engine, &event, link);
        if negotiate::on_remote_close(engine.link_state(link)) == LocalAction::Close {
            engine.close_link(link);
        }
    }

    pub(super) fn on_transport_tail_closed(&mut self, engine: &mut dyn Engine, raw: &EngineEvent) {
        // Transport teardown on a connection the application never opened is
        // not surfaced.
        let Some(connection) = raw.connection else {
            return;
        };
        if engine.connection_state(connection).local != EndpointPhase::Active {
            return;
        }
        let Some(transport) = raw.transport else {
            warn!("transport event without a transport handle");
            return;
        };
        if engine.transport_condition(transport).is_some() {
            let event = build_event(EventKind::TransportError, raw);
            self.handler.on_transport_error(engine, &event, transport);
        }
        let event = build_event(EventKind::TransportClose, raw);
        self.handler.on_transport_close(engine, &event, transport);
    }
}
