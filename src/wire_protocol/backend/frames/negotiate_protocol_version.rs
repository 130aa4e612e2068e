//! Module: wire_protocol::backend::frames::negotiate_protocol_version
//!
//! NegotiateProtocolVersion ('v'): the server does not support the requested
//! minor protocol version or some `_pq_.` startup options.

use bytes::{BufMut, BytesMut};

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::{PayloadReader, put_cstr};

// -----------------------------------------------------------------------------
// ----- NegotiateProtocolVersionFrame -----------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NegotiateProtocolVersionFrame {
    /// Newest minor version the server supports for the requested major.
    pub newest_minor: i32,
    pub unrecognized_options: Vec<String>,
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for NegotiateProtocolVersionFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let newest_minor = reader.read_i32()?;
        let count = reader.read_i32()?;
        if count < 0 {
            return Err(DecodeError::NegativeLength {
                kind: reader.kind(),
                length: count,
            });
        }

        // each option needs at least its NUL
        let mut unrecognized_options = Vec::with_capacity((count as usize).min(reader.remaining()));
        for _ in 0..count {
            unrecognized_options.push(reader.read_string("option")?);
        }

        Ok(Self {
            newest_minor,
            unrecognized_options,
        })
    }

    fn write_payload(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError> {
        let count = i32::try_from(self.unrecognized_options.len()).map_err(|_| {
            EncodeError::CountOverflow {
                field: "unrecognized_options",
                count: self.unrecognized_options.len(),
            }
        })?;

        buf.put_i32(self.newest_minor);
        buf.put_i32(count);
        for option in &self.unrecognized_options {
            put_cstr(buf, "option", option, charset)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
