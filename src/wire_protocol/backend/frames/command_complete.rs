//! Module: wire_protocol::backend::frames::command_complete
//!
//! CommandComplete ('C') carries the command tag, e.g. `INSERT 0 3` or
//! `CREATE TABLE`.

use bytes::BytesMut;

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::{PayloadReader, put_cstr};

// -----------------------------------------------------------------------------
// ----- CommandCompleteFrame --------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCompleteFrame {
    pub tag: String,
}

// -----------------------------------------------------------------------------
// ----- CommandCompleteFrame: Public ------------------------------------------

impl CommandCompleteFrame {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Leading word of the tag (`INSERT`, `SELECT`, `CREATE`, ...).
    pub fn command(&self) -> &str {
        self.tag.split(' ').next().unwrap_or_default()
    }

    /// Row count reported by tags ending in a number (`INSERT 0 3`,
    /// `SELECT 5`, `COPY 10`). Tags without one yield `None`.
    pub fn rows(&self) -> Option<u64> {
        let (_, last) = self.tag.rsplit_once(' ')?;
        last.parse().ok()
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for CommandCompleteFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let tag = reader.read_string("tag")?;
        Ok(Self { tag })
    }

    fn write_payload(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError> {
        put_cstr(buf, "tag", &self.tag, charset)
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
