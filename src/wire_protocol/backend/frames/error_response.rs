//! Module: wire_protocol::backend::frames::error_response
//!
//! ErrorResponse ('E'). The field list lives in `ErrorFields`.

use bytes::BytesMut;

use super::error_fields::ErrorFields;
use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::PayloadReader;

// -----------------------------------------------------------------------------
// ----- ErrorResponseFrame ----------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponseFrame {
    pub fields: ErrorFields,
}

impl From<ErrorFields> for ErrorResponseFrame {
    fn from(fields: ErrorFields) -> Self {
        Self { fields }
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for ErrorResponseFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let fields = ErrorFields::read(reader)?;
        Ok(Self { fields })
    }

    fn write_payload(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError> {
        self.fields.write(buf, charset)
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
