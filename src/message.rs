//! Decoded application message content.
//!
//! One [`Message`] instance is owned by each connection context and reused
//! for every inbound delivery on that connection, so the per-message hot
//! path performs no allocation once the body buffer has grown to a steady
//! size.

use bytes::BytesMut;

/// Decoded content of one inbound delivery.
///
/// # Reuse contract
///
/// The instance passed to
/// [`MessagingHandler::on_message`](crate::handler::MessagingHandler::on_message)
/// is valid only for the duration of that call. The adapter overwrites it in
/// place on the next decode for the same connection; handlers that need the
/// content afterwards must copy it out.
#[derive(Debug, Default)]
pub struct Message {
    address: Option<String>,
    subject: Option<String>,
    correlation_id: Option<String>,
    body: BytesMut,
}

impl Message {
    /// Create an empty message.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Address the message was sent to.
    #[must_use]
    pub fn address(&self) -> Option<&str> { self.address.as_deref() }

    /// Subject of the message.
    #[must_use]
    pub fn subject(&self) -> Option<&str> { self.subject.as_deref() }

    /// Correlation identifier of the message.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> { self.correlation_id.as_deref() }

    /// Message body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] { &self.body }

    /// Set the address; engines call this while decoding.
    pub fn set_address(&mut self, address: Option<String>) { self.address = address; }

    /// Set the subject; engines call this while decoding.
    pub fn set_subject(&mut self, subject: Option<String>) { self.subject = subject; }

    /// Set the correlation identifier; engines call this while decoding.
    pub fn set_correlation_id(&mut self, correlation_id: Option<String>) {
        self.correlation_id = correlation_id;
    }

    /// Mutable access to the body buffer; engines append decoded payload.
    pub fn body_mut(&mut self) -> &mut BytesMut { &mut self.body }

    /// Reset the message in place, retaining the body buffer's capacity.
    pub fn clear(&mut self) {
        self.address = None;
        self.subject = None;
        self.correlation_id = None;
        self.body.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::Message;

    #[test]
    fn clear_resets_fields_and_keeps_capacity() {
        let mut message = Message::new();
        message.set_address(Some("queue.a".into()));
        message.body_mut().extend_from_slice(b"hello");
        let capacity = message.body_mut().capacity();

        message.clear();

        assert_eq!(message.address(), None);
        assert!(message.body().is_empty());
        assert_eq!(message.body_mut().capacity(), capacity);
    }
}
