//! Module: wire_protocol::backend::frames::ready_for_query
//!
//! ReadyForQuery ('Z'): the server is idle and reports the transaction state.

use bytes::{BufMut, BytesMut};

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::shared_types::TransactionStatus;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::PayloadReader;

// -----------------------------------------------------------------------------
// ----- ReadyForQueryFrame ----------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyForQueryFrame {
    pub status: TransactionStatus,
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for ReadyForQueryFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let byte = reader.read_u8()?;
        let status = TransactionStatus::from_byte(byte).ok_or(DecodeError::UnknownTxnStatus(byte))?;

        Ok(Self { status })
    }

    fn write_payload(&self, buf: &mut BytesMut, _charset: Charset) -> Result<(), EncodeError> {
        buf.put_u8(self.status.as_byte());
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire_protocol::backend::MessageKind;
    use crate::wire_protocol::backend::frames::test_support::decode;

    fn parse(payload: &[u8]) -> Result<ReadyForQueryFrame, DecodeError> {
        decode(MessageKind::ReadyForQuery, payload, Charset::Ascii)
    }

    #[test]
    fn statuses() {
        assert_eq!(parse(b"I").unwrap().status, TransactionStatus::Idle);
        assert_eq!(parse(b"T").unwrap().status, TransactionStatus::InTransaction);
        assert_eq!(parse(b"E").unwrap().status, TransactionStatus::Failed);
    }

    #[test]
    fn unknown_status() {
        assert_eq!(parse(b"Q").unwrap_err(), DecodeError::UnknownTxnStatus(b'Q'));
    }

    #[test]
    fn empty_payload_is_short() {
        assert_eq!(
            parse(b"").unwrap_err(),
            DecodeError::ShortPayload(MessageKind::ReadyForQuery)
        );
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
