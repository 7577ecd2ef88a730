//! Endpoint lifecycle negotiation rules.
//!
//! The same rules apply to connections, sessions, and links: a remote open
//! is mirrored only when the local side never took initiative, while a
//! remote close is always reciprocated.

use crate::engine::{EndpointPhase, EndpointState};

/// Local command the adapter must issue after observing a remote transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalAction {
    /// No local transition is required.
    None,
    /// Open the local side.
    Open,
    /// Close the local side.
    Close,
}

/// Decide the local response to a remote open.
///
/// Mirrors the open only while the local side is still `Uninitialized`; an
/// endpoint the application already opened (or closed) is left alone.
#[must_use]
pub fn on_remote_open(state: EndpointState) -> LocalAction {
    if state.local == EndpointPhase::Uninitialized {
        LocalAction::Open
    } else {
        LocalAction::None
    }
}

/// Decide the local response to a remote close.
///
/// Close is reciprocated unconditionally; the state argument keeps the seam
/// uniform with [`on_remote_open`].
#[must_use]
pub fn on_remote_close(_state: EndpointState) -> LocalAction { LocalAction::Close }

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{LocalAction, on_remote_close, on_remote_open};
    use crate::engine::{EndpointPhase, EndpointState};

    #[rstest]
    #[case(EndpointPhase::Uninitialized, LocalAction::Open)]
    #[case(EndpointPhase::Active, LocalAction::None)]
    #[case(EndpointPhase::Closed, LocalAction::None)]
    fn remote_open_is_mirrored_only_from_uninitialized(
        #[case] local: EndpointPhase,
        #[case] expected: LocalAction,
    ) {
        let state = EndpointState::new(local, EndpointPhase::Active);
        assert_eq!(on_remote_open(state), expected);
    }

    #[rstest]
    #[case(EndpointPhase::Uninitialized)]
    #[case(EndpointPhase::Active)]
    #[case(EndpointPhase::Closed)]
    fn remote_close_is_always_reciprocated(#[case] local: EndpointPhase) {
        let state = EndpointState::new(local, EndpointPhase::Closed);
        assert_eq!(on_remote_close(state), LocalAction::Close);
    }
}
