//! Module: wire_protocol::backend::frames::notice_response
//!
//! NoticeResponse ('N'). Same field list as ErrorResponse, but the server
//! keeps going after sending it.

use bytes::BytesMut;

use super::error_fields::ErrorFields;
use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::PayloadReader;

// -----------------------------------------------------------------------------
// ----- NoticeResponseFrame ---------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeResponseFrame {
    pub fields: ErrorFields,
}

impl From<ErrorFields> for NoticeResponseFrame {
    fn from(fields: ErrorFields) -> Self {
        Self { fields }
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for NoticeResponseFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let fields = ErrorFields::read(reader)?;
        Ok(Self { fields })
    }

    fn write_payload(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError> {
        self.fields.write(buf, charset)
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire_protocol::backend::MessageKind;
    use crate::wire_protocol::backend::frames::Severity;
    use crate::wire_protocol::backend::frames::test_support::decode;

    #[test]
    fn notice_with_utf8_message() {
        let payload = "SNOTICE\0VNOTICE\0C00000\0Mtable «t» skipped\0\0".as_bytes();
        let frame: NoticeResponseFrame =
            decode(MessageKind::NoticeResponse, payload, Charset::utf8()).unwrap();

        assert_eq!(frame.fields.severity(), Some(Severity::Notice));
        assert_eq!(frame.fields.message(), Some("table «t» skipped"));
    }

    #[test]
    fn non_ascii_under_ascii_charset_fails() {
        let payload = "SNOTICE\0Mtable «t» skipped\0\0".as_bytes();
        let err = decode::<NoticeResponseFrame>(MessageKind::NoticeResponse, payload, Charset::Ascii)
            .unwrap_err();

        assert_eq!(
            err,
            DecodeError::CharsetDecode {
                kind: MessageKind::NoticeResponse,
                field: "message"
            }
        );
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
