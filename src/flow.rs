//! Credit replenishment for receiver links.

use tracing::debug;

use crate::{
    context::ContextMap,
    engine::{Engine, LinkHandle, LinkRole},
};

/// Restore a receiver link's outstanding credit to its configured window.
///
/// No-op for senders and for links with a zero window (manual credit
/// management). Otherwise issues a flow command for `window - outstanding`;
/// the engine discards non-positive deltas, which makes this safe to call
/// redundantly on every event touching the link.
pub(crate) fn credit_topup(engine: &mut dyn Engine, contexts: &mut ContextMap, link: LinkHandle) {
    if engine.link_role(link) != LinkRole::Receiver {
        return;
    }
    let window = contexts.link(link).credit_window;
    if window == 0 {
        return;
    }
    let outstanding = engine.link_credit(link);
    let delta = i64::from(window) - i64::from(outstanding);
    debug!(link = %link, window, outstanding, delta, "credit top-up");
    engine.flow(link, delta);
}
