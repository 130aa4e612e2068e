//! Module: wire_protocol::backend::frames::function_call_response
//!
//! FunctionCallResponse ('V'): raw result of a fast-path function call.

use bytes::{Bytes, BytesMut};

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::{PayloadReader, put_nullable_bytes};

// -----------------------------------------------------------------------------
// ----- FunctionCallResponseFrame ---------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionCallResponseFrame {
    /// `None` when the function returned NULL.
    pub result: Option<Bytes>,
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for FunctionCallResponseFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let result = reader.read_nullable_bytes()?.map(Bytes::copy_from_slice);
        Ok(Self { result })
    }

    fn write_payload(&self, buf: &mut BytesMut, _charset: Charset) -> Result<(), EncodeError> {
        put_nullable_bytes(buf, self.result.as_deref())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire_protocol::backend::MessageKind;
    use crate::wire_protocol::backend::frames::test_support::decode;

    fn parse(payload: &[u8]) -> Result<FunctionCallResponseFrame, DecodeError> {
        decode(MessageKind::FunctionCallResponse, payload, Charset::Ascii)
    }

    #[test]
    fn null_result() {
        assert_eq!(parse(&[0xFF; 4]).unwrap().result, None);
    }

    #[test]
    fn value_result() {
        let frame = parse(b"\0\0\0\x03\x00\xFF\x10").unwrap();
        assert_eq!(frame.result.as_deref(), Some(&[0x00, 0xFF, 0x10][..]));
    }

    #[test]
    fn declared_length_shorter_than_payload() {
        assert_eq!(
            parse(b"\0\0\0\x01ab").unwrap_err(),
            DecodeError::TrailingBytes(MessageKind::FunctionCallResponse, 1)
        );
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
