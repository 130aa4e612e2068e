//! Module: wire_protocol::backend::frames::copy_data
//!
//! CopyData ('d'): an opaque chunk of the COPY stream.

use bytes::{Bytes, BytesMut};

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::PayloadReader;

// -----------------------------------------------------------------------------
// ----- CopyDataFrame ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyDataFrame {
    pub data: Bytes,
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for CopyDataFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let data = Bytes::copy_from_slice(reader.read_rest());
        Ok(Self { data })
    }

    fn write_payload(&self, buf: &mut BytesMut, _charset: Charset) -> Result<(), EncodeError> {
        buf.extend_from_slice(&self.data);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
