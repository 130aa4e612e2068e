//! Module: wire_protocol::backend::frames::copy_response
//!
//! Payload shared by CopyInResponse ('G'), CopyOutResponse ('H') and
//! CopyBothResponse ('W'): overall format, then one format code per column.

use bytes::{BufMut, BytesMut};
use smallvec::SmallVec;

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::shared_types::FormatCode;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::{PayloadReader, put_count_u16};

// -----------------------------------------------------------------------------
// ----- CopyResponseFrame -----------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyResponseFrame {
    pub format: FormatCode,
    pub column_formats: SmallVec<[FormatCode; 8]>,
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for CopyResponseFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let kind = reader.kind();
        let format = FormatCode::from_code(kind, i16::from(reader.read_u8()?))?;

        let count = reader.read_u16()? as usize;
        let mut column_formats = SmallVec::with_capacity(count);
        for _ in 0..count {
            column_formats.push(FormatCode::from_code(kind, reader.read_i16()?)?);
        }

        Ok(Self {
            format,
            column_formats,
        })
    }

    fn write_payload(&self, buf: &mut BytesMut, _charset: Charset) -> Result<(), EncodeError> {
        buf.put_u8(self.format.as_code() as u8);
        put_count_u16(buf, "column_formats", self.column_formats.len())?;
        for format in &self.column_formats {
            buf.put_i16(format.as_code());
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
