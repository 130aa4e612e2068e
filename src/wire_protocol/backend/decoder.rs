//! Module: wire_protocol::backend::decoder
//!
//! Turns a cumulative byte buffer into backend messages, one frame at a time.
//!
//! The buffer belongs to the feeder: the decoder only borrows it for the
//! duration of a call and reports how many bytes it consumed. A frame is
//! consumed whole or not at all, so after `NeedMoreData` or an error the
//! feeder's cursor still points at the start of the pending frame.

use tracing::{debug, trace, warn};

use super::sink::MessageSink;
use super::{BackendProtocolMessage, MessageKind};
use crate::config::DecoderConfig;
use crate::errors::{DecodeError, DecodeFailure};
use crate::session::{Charset, SessionContext};
use crate::wire_protocol::utils::{HEADER_LEN, PayloadReader, peek_backend};

// -----------------------------------------------------------------------------
// ----- FrameOutcome ----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The buffer does not yet hold a complete frame. Nothing was consumed.
    NeedMoreData,

    /// One frame decoded; `consumed` is its declared length plus the tag byte.
    Message {
        message: BackendProtocolMessage,
        consumed: usize,
    },
}

/// Result of draining a buffer with `BackendDecoder::decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub consumed: usize,
    pub emitted: usize,
}

// -----------------------------------------------------------------------------
// ----- BackendDecoder --------------------------------------------------------

#[derive(Debug)]
pub struct BackendDecoder {
    session: SessionContext,
    max_frame_len: usize,
}

// -----------------------------------------------------------------------------
// ----- BackendDecoder: Static ------------------------------------------------

impl BackendDecoder {
    /// Decoder with a private session starting at `config.initial_charset`.
    pub fn new(config: DecoderConfig) -> Self {
        Self::with_session(config, SessionContext::new(config.initial_charset))
    }

    /// Decoder sharing `session` with the surrounding connection. The
    /// session's current charset is used as is; `config.initial_charset`
    /// only seeds sessions the decoder creates itself.
    pub fn with_session(config: DecoderConfig, session: SessionContext) -> Self {
        Self {
            session,
            max_frame_len: config.max_frame_len,
        }
    }
}

impl Default for BackendDecoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

// -----------------------------------------------------------------------------
// ----- BackendDecoder: Public ------------------------------------------------

impl BackendDecoder {
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn charset(&self) -> Charset {
        self.session.charset()
    }

    pub fn max_frame_len(&self) -> usize {
        self.max_frame_len
    }

    /// Decode at most one frame from the front of `buf`.
    ///
    /// Returning the message is its emission: a `client_encoding` report
    /// switches the session charset right before this returns, so the next
    /// call decodes under the new charset.
    pub fn decode_frame(&mut self, buf: &[u8]) -> Result<FrameOutcome, DecodeError> {
        let outcome = self.parse_frame(buf)?;
        if let FrameOutcome::Message { message, .. } = &outcome {
            self.apply_session_effects(message);
        }
        Ok(outcome)
    }

    /// Decode every complete frame in `buf` into `sink`, in order.
    ///
    /// Stops at the first incomplete frame. A charset switch takes effect only
    /// once the sink has accepted the `ParameterStatus` carrying it. On error,
    /// messages decoded before the failing frame stay emitted and
    /// `DecodeFailure::progress` tells how far the buffer was consumed.
    pub fn decode<S>(&mut self, buf: &[u8], sink: &mut S) -> Result<Progress, DecodeFailure>
    where
        S: MessageSink + ?Sized,
    {
        let mut progress = Progress::default();

        loop {
            let outcome = self
                .parse_frame(&buf[progress.consumed..])
                .map_err(|error| DecodeFailure { progress, error })?;

            let FrameOutcome::Message { message, consumed } = outcome else {
                return Ok(progress);
            };

            let switch = Self::charset_switch(&message);
            sink.emit(message).map_err(|error| DecodeFailure { progress, error })?;

            progress.consumed += consumed;
            progress.emitted += 1;

            if let Some(name) = switch {
                self.switch_charset(&name);
            }
        }
    }
}

// -----------------------------------------------------------------------------
// ----- BackendDecoder: Private -----------------------------------------------

impl BackendDecoder {
    /// Frame and parse one message without touching the session.
    pub(crate) fn parse_frame(&self, buf: &[u8]) -> Result<FrameOutcome, DecodeError> {
        // 1. Header and payload must both be buffered.
        let Some(header) = peek_backend(buf, self.max_frame_len)? else {
            trace!(buffered = buf.len(), "need more data");
            return Ok(FrameOutcome::NeedMoreData);
        };

        trace!(
            tag = %char::from(header.tag),
            payload_len = header.payload_len,
            "backend frame header"
        );

        // 2. Resolve the tag.
        let kind = MessageKind::from_tag(header.tag).ok_or(DecodeError::UnknownTag(header.tag))?;

        // 3. Parse exactly the payload, under the charset in force right now.
        let payload = &buf[HEADER_LEN..header.total_len()];
        let mut reader = PayloadReader::new(kind, payload, self.session.charset());
        let message = BackendProtocolMessage::decode(&mut reader)?;
        reader.finish()?;

        debug!(kind = %kind, payload_len = header.payload_len, "decoded backend message");

        Ok(FrameOutcome::Message {
            message,
            consumed: header.total_len(),
        })
    }

    /// Session changes only affect the frames after `message`; call once it
    /// has been handed on.
    pub(crate) fn apply_session_effects(&self, message: &BackendProtocolMessage) {
        if let Some(name) = Self::charset_switch(message) {
            self.switch_charset(&name);
        }
    }

    /// The `client_encoding` value `message` reports, if any.
    pub(crate) fn charset_switch(message: &BackendProtocolMessage) -> Option<String> {
        match message {
            BackendProtocolMessage::ParameterStatus(status) => {
                status.client_encoding().map(str::to_owned)
            }
            _ => None,
        }
    }

    pub(crate) fn switch_charset(&self, name: &str) {
        let current = self.session.charset();
        match Charset::from_pg_name(name) {
            Some(next) if next == current => {}
            Some(next) => {
                debug!(from = %current, to = %next, "session charset changed");
                self.session.set_charset(next);
            }
            None => {
                warn!(encoding = name, keeping = %current, "unsupported client_encoding");
            }
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
