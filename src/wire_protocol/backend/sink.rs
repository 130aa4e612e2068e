//! Module: wire_protocol::backend::sink
//!
//! Write-only destination for decoded messages, fed in arrival order.

use std::collections::VecDeque;

use tokio::sync::mpsc::UnboundedSender;

use super::BackendProtocolMessage;
use crate::errors::DecodeError;

// -----------------------------------------------------------------------------
// ----- MessageSink -----------------------------------------------------------

pub trait MessageSink {
    /// Accept the next message. Failing here ends decoding; the decoder
    /// passes the error straight to its caller.
    fn emit(&mut self, message: BackendProtocolMessage) -> Result<(), DecodeError>;
}

// -----------------------------------------------------------------------------
// ----- Implementations -------------------------------------------------------

impl MessageSink for Vec<BackendProtocolMessage> {
    fn emit(&mut self, message: BackendProtocolMessage) -> Result<(), DecodeError> {
        self.push(message);
        Ok(())
    }
}

impl MessageSink for VecDeque<BackendProtocolMessage> {
    fn emit(&mut self, message: BackendProtocolMessage) -> Result<(), DecodeError> {
        self.push_back(message);
        Ok(())
    }
}

impl MessageSink for UnboundedSender<BackendProtocolMessage> {
    fn emit(&mut self, message: BackendProtocolMessage) -> Result<(), DecodeError> {
        self.send(message).map_err(|_| DecodeError::SinkClosed)
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecoderConfig;
    use crate::session::{Charset, SessionContext};
    use crate::wire_protocol::backend::BackendDecoder;
    use tokio::sync::mpsc;

    const TWO_FRAMES: [u8; 10] = [b'1', 0, 0, 0, 4, b'2', 0, 0, 0, 4];

    #[test]
    fn queue_sink_keeps_order() {
        let mut decoder = BackendDecoder::default();
        let mut queue: VecDeque<BackendProtocolMessage> = VecDeque::new();

        decoder.decode(&TWO_FRAMES, &mut queue).unwrap();

        assert_eq!(queue.pop_front(), Some(BackendProtocolMessage::ParseComplete));
        assert_eq!(queue.pop_front(), Some(BackendProtocolMessage::BindComplete));
        assert!(queue.is_empty());
    }

    #[test]
    fn channel_sink() {
        let mut decoder = BackendDecoder::default();
        let (mut tx, mut rx) = mpsc::unbounded_channel::<BackendProtocolMessage>();

        let progress = decoder.decode(&TWO_FRAMES, &mut tx).unwrap();

        assert_eq!(progress.emitted, 2);
        assert_eq!(rx.try_recv().unwrap(), BackendProtocolMessage::ParseComplete);
        assert_eq!(rx.try_recv().unwrap(), BackendProtocolMessage::BindComplete);
    }

    #[test]
    fn closed_channel_stops_decoding() {
        let mut decoder = BackendDecoder::default();
        let (mut tx, rx) = mpsc::unbounded_channel::<BackendProtocolMessage>();
        drop(rx);

        let failure = decoder.decode(&TWO_FRAMES, &mut tx).unwrap_err();
        assert_eq!(failure.error, DecodeError::SinkClosed);
        assert_eq!(failure.progress.consumed, 0);
    }

    #[test]
    fn closed_channel_leaves_charset_alone() {
        let session = SessionContext::new(Charset::Ascii);
        let mut decoder = BackendDecoder::with_session(DecoderConfig::default(), session.clone());
        let (mut tx, rx) = mpsc::unbounded_channel::<BackendProtocolMessage>();
        drop(rx);

        let frame = [&[b'S', 0, 0, 0, 25][..], &b"client_encoding\0UTF8\0"[..]].concat();
        let failure = decoder.decode(&frame, &mut tx).unwrap_err();

        assert_eq!(failure.error, DecodeError::SinkClosed);
        assert_eq!(session.charset(), Charset::Ascii);
    }

    #[test]
    fn switch_follows_delivery_into_channel() {
        let session = SessionContext::new(Charset::Ascii);
        let mut decoder = BackendDecoder::with_session(DecoderConfig::default(), session.clone());
        let (mut tx, mut rx) = mpsc::unbounded_channel::<BackendProtocolMessage>();

        let frame = [&[b'S', 0, 0, 0, 25][..], &b"client_encoding\0UTF8\0"[..]].concat();
        decoder.decode(&frame, &mut tx).unwrap();

        assert!(matches!(
            rx.try_recv().unwrap(),
            BackendProtocolMessage::ParameterStatus(_)
        ));
        assert_eq!(session.charset(), Charset::utf8());
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
