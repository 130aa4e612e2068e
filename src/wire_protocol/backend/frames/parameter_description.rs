//! Module: wire_protocol::backend::frames::parameter_description
//!
//! ParameterDescription ('t'): parameter type OIDs of a described statement.

use bytes::{BufMut, BytesMut};
use smallvec::SmallVec;

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::shared_types::Oid;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::{PayloadReader, put_count_u16};

// -----------------------------------------------------------------------------
// ----- ParameterDescriptionFrame ---------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterDescriptionFrame {
    pub type_oids: SmallVec<[Oid; 8]>,
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for ParameterDescriptionFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let count = reader.read_u16()? as usize;
        let mut type_oids = SmallVec::with_capacity(count);
        for _ in 0..count {
            type_oids.push(reader.read_u32()?);
        }
        Ok(Self { type_oids })
    }

    fn write_payload(&self, buf: &mut BytesMut, _charset: Charset) -> Result<(), EncodeError> {
        put_count_u16(buf, "type_oids", self.type_oids.len())?;
        for oid in &self.type_oids {
            buf.put_u32(*oid);
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
