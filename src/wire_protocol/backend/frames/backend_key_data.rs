//! Module: wire_protocol::backend::frames::backend_key_data
//!
//! Cancellation key ('K') the client must present in a later CancelRequest.

use bytes::{BufMut, BytesMut};

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::PayloadReader;

// -----------------------------------------------------------------------------
// ----- BackendKeyDataFrame ---------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendKeyDataFrame {
    pub process_id: i32,
    pub secret_key: i32,
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for BackendKeyDataFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let process_id = reader.read_i32()?;
        let secret_key = reader.read_i32()?;

        Ok(Self {
            process_id,
            secret_key,
        })
    }

    fn write_payload(&self, buf: &mut BytesMut, _charset: Charset) -> Result<(), EncodeError> {
        buf.put_i32(self.process_id);
        buf.put_i32(self.secret_key);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
