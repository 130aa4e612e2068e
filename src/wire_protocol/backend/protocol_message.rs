use bytes::{BufMut, Bytes, BytesMut};

use super::MessageKind;
use super::frames::{
    AuthenticationFrame, BackendKeyDataFrame, CommandCompleteFrame, CopyDataFrame,
    CopyResponseFrame, DataRowFrame, ErrorResponseFrame, FunctionCallResponseFrame,
    NegotiateProtocolVersionFrame, NoticeResponseFrame, NotificationResponseFrame,
    ParameterDescriptionFrame, ParameterStatusFrame, ReadyForQueryFrame, RowDescriptionFrame,
};
use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::{HEADER_LEN, PayloadReader};

// -----------------------------------------------------------------------------
// ----- BackendProtocolMessage ------------------------------------------------

/// Represents any backend-initiated protocol message.
///
/// Values own their data, so they outlive the buffer they were decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendProtocolMessage {
    /// Any step of the authentication exchange
    Authentication(AuthenticationFrame),

    /// Cancellation key for this session
    BackendKeyData(BackendKeyDataFrame),

    BindComplete,

    CloseComplete,

    /// Command tag of a finished statement
    CommandComplete(CommandCompleteFrame),

    /// Start of a replication COPY
    CopyBothResponse(CopyResponseFrame),

    /// Chunk of COPY data
    CopyData(CopyDataFrame),

    CopyDone,

    /// Start of COPY FROM STDIN
    CopyInResponse(CopyResponseFrame),

    /// Start of COPY TO STDOUT
    CopyOutResponse(CopyResponseFrame),

    /// One result row
    DataRow(DataRowFrame),

    EmptyQueryResponse,

    ErrorResponse(ErrorResponseFrame),

    /// Result of a fast-path function call
    FunctionCallResponse(FunctionCallResponseFrame),

    NegotiateProtocolVersion(NegotiateProtocolVersionFrame),

    NoData,

    NoticeResponse(NoticeResponseFrame),

    /// LISTEN/NOTIFY delivery
    NotificationResponse(NotificationResponseFrame),

    ParameterDescription(ParameterDescriptionFrame),

    /// Run-time parameter report
    ParameterStatus(ParameterStatusFrame),

    ParseComplete,

    PortalSuspended,

    ReadyForQuery(ReadyForQueryFrame),

    /// Column layout of the rows that follow
    RowDescription(RowDescriptionFrame),
}

// -----------------------------------------------------------------------------
// ----- BackendProtocolMessage: Static ----------------------------------------

impl BackendProtocolMessage {
    /// Parse one payload; `reader.kind()` selects the parser. Empty-payload
    /// kinds read nothing, leaving any stray bytes for `PayloadReader::finish`.
    pub fn decode(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        use BackendProtocolMessage as M;

        let message = match reader.kind() {
            // ---------- Startup / session ------------------------------------
            MessageKind::Authentication => M::Authentication(parse(reader)?),
            MessageKind::BackendKeyData => M::BackendKeyData(parse(reader)?),
            MessageKind::ParameterStatus => M::ParameterStatus(parse(reader)?),
            MessageKind::ReadyForQuery => M::ReadyForQuery(parse(reader)?),
            MessageKind::NegotiateProtocolVersion => M::NegotiateProtocolVersion(parse(reader)?),

            // ---------- Extended-query protocol ------------------------------
            MessageKind::ParseComplete => M::ParseComplete,
            MessageKind::BindComplete => M::BindComplete,
            MessageKind::CloseComplete => M::CloseComplete,
            MessageKind::NoData => M::NoData,
            MessageKind::PortalSuspended => M::PortalSuspended,
            MessageKind::ParameterDescription => M::ParameterDescription(parse(reader)?),

            // ---------- Results ----------------------------------------------
            MessageKind::RowDescription => M::RowDescription(parse(reader)?),
            MessageKind::DataRow => M::DataRow(parse(reader)?),
            MessageKind::CommandComplete => M::CommandComplete(parse(reader)?),
            MessageKind::EmptyQueryResponse => M::EmptyQueryResponse,
            MessageKind::FunctionCallResponse => M::FunctionCallResponse(parse(reader)?),

            // ---------- Asynchronous / diagnostics ---------------------------
            MessageKind::ErrorResponse => M::ErrorResponse(parse(reader)?),
            MessageKind::NoticeResponse => M::NoticeResponse(parse(reader)?),
            MessageKind::NotificationResponse => M::NotificationResponse(parse(reader)?),

            // ---------- COPY sub-protocol ------------------------------------
            MessageKind::CopyInResponse => M::CopyInResponse(parse(reader)?),
            MessageKind::CopyOutResponse => M::CopyOutResponse(parse(reader)?),
            MessageKind::CopyBothResponse => M::CopyBothResponse(parse(reader)?),
            MessageKind::CopyData => M::CopyData(parse(reader)?),
            MessageKind::CopyDone => M::CopyDone,
        };

        Ok(message)
    }
}

// -----------------------------------------------------------------------------
// ----- BackendProtocolMessage: Public ----------------------------------------

impl BackendProtocolMessage {
    pub fn kind(&self) -> MessageKind {
        use BackendProtocolMessage as M;

        match self {
            M::Authentication(_) => MessageKind::Authentication,
            M::BackendKeyData(_) => MessageKind::BackendKeyData,
            M::BindComplete => MessageKind::BindComplete,
            M::CloseComplete => MessageKind::CloseComplete,
            M::CommandComplete(_) => MessageKind::CommandComplete,
            M::CopyBothResponse(_) => MessageKind::CopyBothResponse,
            M::CopyData(_) => MessageKind::CopyData,
            M::CopyDone => MessageKind::CopyDone,
            M::CopyInResponse(_) => MessageKind::CopyInResponse,
            M::CopyOutResponse(_) => MessageKind::CopyOutResponse,
            M::DataRow(_) => MessageKind::DataRow,
            M::EmptyQueryResponse => MessageKind::EmptyQueryResponse,
            M::ErrorResponse(_) => MessageKind::ErrorResponse,
            M::FunctionCallResponse(_) => MessageKind::FunctionCallResponse,
            M::NegotiateProtocolVersion(_) => MessageKind::NegotiateProtocolVersion,
            M::NoData => MessageKind::NoData,
            M::NoticeResponse(_) => MessageKind::NoticeResponse,
            M::NotificationResponse(_) => MessageKind::NotificationResponse,
            M::ParameterDescription(_) => MessageKind::ParameterDescription,
            M::ParameterStatus(_) => MessageKind::ParameterStatus,
            M::ParseComplete => MessageKind::ParseComplete,
            M::PortalSuspended => MessageKind::PortalSuspended,
            M::ReadyForQuery(_) => MessageKind::ReadyForQuery,
            M::RowDescription(_) => MessageKind::RowDescription,
        }
    }

    /// Build the complete `[tag][length][payload]` frame, encoding string
    /// fields under `charset`.
    pub fn to_bytes(&self, charset: Charset) -> Result<Bytes, EncodeError> {
        let mut buf = BytesMut::with_capacity(64);
        self.encode(&mut buf, charset)?;
        Ok(buf.freeze())
    }

    /// Append the complete frame to `buf`. On error `buf` is left as it was.
    pub fn encode(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError> {
        let start = buf.len();

        buf.put_u8(self.kind().tag());
        buf.put_u32(0); // length placeholder

        if let Err(err) = self.write_payload(buf, charset) {
            buf.truncate(start);
            return Err(err);
        }

        let frame_len = buf.len() - start - 1;
        let Ok(len) = i32::try_from(frame_len) else {
            buf.truncate(start);
            return Err(EncodeError::FrameTooLarge(frame_len - (HEADER_LEN - 1)));
        };
        buf[start + 1..start + HEADER_LEN].copy_from_slice(&len.to_be_bytes());

        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- BackendProtocolMessage: Private ---------------------------------------

impl BackendProtocolMessage {
    fn write_payload(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError> {
        use BackendProtocolMessage as M;

        match self {
            M::Authentication(f) => f.write_payload(buf, charset),
            M::BackendKeyData(f) => f.write_payload(buf, charset),
            M::CommandComplete(f) => f.write_payload(buf, charset),
            M::CopyBothResponse(f) | M::CopyInResponse(f) | M::CopyOutResponse(f) => {
                f.write_payload(buf, charset)
            }
            M::CopyData(f) => f.write_payload(buf, charset),
            M::DataRow(f) => f.write_payload(buf, charset),
            M::ErrorResponse(f) => f.write_payload(buf, charset),
            M::FunctionCallResponse(f) => f.write_payload(buf, charset),
            M::NegotiateProtocolVersion(f) => f.write_payload(buf, charset),
            M::NoticeResponse(f) => f.write_payload(buf, charset),
            M::NotificationResponse(f) => f.write_payload(buf, charset),
            M::ParameterDescription(f) => f.write_payload(buf, charset),
            M::ParameterStatus(f) => f.write_payload(buf, charset),
            M::ReadyForQuery(f) => f.write_payload(buf, charset),
            M::RowDescription(f) => f.write_payload(buf, charset),
            M::BindComplete
            | M::CloseComplete
            | M::CopyDone
            | M::EmptyQueryResponse
            | M::NoData
            | M::ParseComplete
            | M::PortalSuspended => Ok(()),
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Helpers ---------------------------------------------------------------

#[inline]
fn parse<T: WireSerializable>(reader: &mut PayloadReader<'_>) -> Result<T, DecodeError> {
    T::from_payload(reader)
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
