//! Opaque identifiers for engine-owned objects.
//!
//! Handles are assigned by the protocol engine and never interpreted by the
//! adapter; they only serve as lookup keys and as arguments passed back to
//! engine queries and commands.

macro_rules! handle_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name(u64);

        impl From<u64> for $name {
            fn from(value: u64) -> Self { Self(value) }
        }

        impl $name {
            /// Create a new handle with the provided value.
            #[must_use]
            pub fn new(id: u64) -> Self { Self(id) }

            /// Return the inner `u64` representation.
            #[must_use]
            pub fn as_u64(&self) -> u64 { self.0 }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

handle_type! {
    /// Identifier assigned to a connection endpoint.
    ConnectionHandle
}

handle_type! {
    /// Identifier assigned to a session endpoint.
    SessionHandle
}

handle_type! {
    /// Identifier assigned to a link endpoint, sender or receiver.
    LinkHandle
}

handle_type! {
    /// Identifier assigned to one in-flight transfer on a link.
    DeliveryHandle
}

handle_type! {
    /// Identifier assigned to the transport carrying a connection.
    TransportHandle
}

#[cfg(test)]
mod tests {
    use super::LinkHandle;

    #[test]
    fn round_trips_inner_value() {
        let handle = LinkHandle::new(7);
        assert_eq!(handle.as_u64(), 7);
        assert_eq!(LinkHandle::from(7), handle);
    }

    #[test]
    fn display_names_the_handle_kind() {
        assert_eq!(LinkHandle::new(3).to_string(), "LinkHandle(3)");
    }
}
