//! Error types shared by the decoder, the encoder and the feeder.
//!
//! Every `DecodeError` is fatal for the connection: the wire offers no way to
//! resynchronise after a framing or parsing failure, so the feeder must close
//! the connection. Running out of buffered bytes is not an error; see
//! `FrameOutcome::NeedMoreData`.

use thiserror::Error;

use crate::session::Charset;
use crate::wire_protocol::backend::{MessageKind, Progress};

// -----------------------------------------------------------------------------
// ----- DecodeError -----------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown backend message tag: {0:#04X}")]
    UnknownTag(u8),

    #[error("unknown authentication request type: {0}")]
    UnknownAuthSubkind(i32),

    #[error("unknown transaction status: {0:#04X}")]
    UnknownTxnStatus(u8),

    #[error("malformed frame: declared length {length}")]
    MalformedFrame { length: i32 },

    #[error("{0} payload ended early")]
    ShortPayload(MessageKind),

    #[error("{0} left {1} unread payload bytes")]
    TrailingBytes(MessageKind, usize),

    #[error("{kind} field `{field}` is not valid in the session charset")]
    CharsetDecode {
        kind: MessageKind,
        field: &'static str,
    },

    #[error("{kind} carries unknown format code {code}")]
    UnknownFormatCode { kind: MessageKind, code: i16 },

    #[error("{kind} carries invalid value length {length}")]
    NegativeLength { kind: MessageKind, length: i32 },

    #[error("message sink closed")]
    SinkClosed,
}

// -----------------------------------------------------------------------------
// ----- DecodeFailure ---------------------------------------------------------

/// A `DecodeError` raised partway through `BackendDecoder::decode`.
///
/// `progress` covers the frames decoded and emitted before the failure, so
/// the feeder can leave its cursor at the start of the failing frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{error} (after {} bytes, {} messages)", .progress.consumed, .progress.emitted)]
pub struct DecodeFailure {
    pub progress: Progress,
    pub error: DecodeError,
}

impl From<DecodeFailure> for DecodeError {
    fn from(failure: DecodeFailure) -> Self {
        failure.error
    }
}

// -----------------------------------------------------------------------------
// ----- EncodeError -----------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("field `{field}` cannot be represented in {charset}")]
    Unrepresentable {
        field: &'static str,
        charset: Charset,
    },

    #[error("field `{field}` contains a NUL byte")]
    InteriorNul { field: &'static str },

    #[error("payload of {0} bytes does not fit a frame")]
    FrameTooLarge(usize),

    #[error("{count} entries in `{field}` exceed the wire counter")]
    CountOverflow { field: &'static str, count: usize },
}

// -----------------------------------------------------------------------------
// ----- ReaderError -----------------------------------------------------------

/// Failure of the async feeder. Every variant ends the connection.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("backend read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("backend closed the stream inside a frame ({pending} bytes pending)")]
    UnexpectedEof { pending: usize },

    #[error("message channel closed")]
    ChannelClosed,
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(
            DecodeError::UnknownTag(b'X').to_string(),
            "unknown backend message tag: 0x58"
        );
        assert_eq!(
            DecodeError::TrailingBytes(MessageKind::NoData, 3).to_string(),
            "NoData left 3 unread payload bytes"
        );
        assert_eq!(
            DecodeError::CharsetDecode {
                kind: MessageKind::ParameterStatus,
                field: "value",
            }
            .to_string(),
            "ParameterStatus field `value` is not valid in the session charset"
        );
    }

    #[test]
    fn failure_reports_progress() {
        let failure = DecodeFailure {
            progress: Progress {
                consumed: 6,
                emitted: 1,
            },
            error: DecodeError::UnknownTag(b'X'),
        };

        assert_eq!(
            failure.to_string(),
            "unknown backend message tag: 0x58 (after 6 bytes, 1 messages)"
        );
        assert_eq!(DecodeError::from(failure), DecodeError::UnknownTag(b'X'));
    }

    #[test]
    fn encode_error_mentions_charset() {
        let err = EncodeError::Unrepresentable {
            field: "message",
            charset: Charset::Ascii,
        };
        assert_eq!(err.to_string(), "field `message` cannot be represented in SQL_ASCII");
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
