//! Terminal-outcome classification for sender deliveries.

use crate::engine::Disposition;

/// Terminal outcome reported by the remote peer for a sent delivery.
///
/// Released and modified dispositions collapse into [`Released`]: both mean
/// the message was not delivered and redelivery semantics belong to the
/// application.
///
/// [`Released`]: Outcome::Released
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The peer accepted the transfer.
    Accepted,
    /// The peer rejected the transfer as invalid.
    Rejected,
    /// The peer released (or modified) the transfer without processing it.
    Released,
}

impl Outcome {
    /// Returns the outcome name as a static string for metrics and logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Released => "released",
        }
    }
}

/// Classify a remote disposition into its terminal outcome.
///
/// Returns `None` while the peer has not reported an outcome. Settlement is
/// tracked independently of the disposition: a peer may settle a delivery
/// without ever reporting a terminal state, and the settle callback fires
/// either way.
#[must_use]
pub fn classify(disposition: Disposition) -> Option<Outcome> {
    match disposition {
        Disposition::Accepted => Some(Outcome::Accepted),
        Disposition::Rejected => Some(Outcome::Rejected),
        Disposition::Released | Disposition::Modified => Some(Outcome::Released),
        Disposition::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Outcome, classify};
    use crate::engine::Disposition;

    #[test]
    fn each_disposition_maps_to_at_most_one_outcome() {
        assert_eq!(classify(Disposition::Accepted), Some(Outcome::Accepted));
        assert_eq!(classify(Disposition::Rejected), Some(Outcome::Rejected));
        assert_eq!(classify(Disposition::None), None);
    }

    #[test]
    fn released_and_modified_collapse() {
        assert_eq!(classify(Disposition::Released), Some(Outcome::Released));
        assert_eq!(classify(Disposition::Modified), Some(Outcome::Released));
    }
}
