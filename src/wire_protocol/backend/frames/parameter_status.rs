//! Module: wire_protocol::backend::frames::parameter_status
//!
//! ParameterStatus ('S'): the server reports the current value of a run-time
//! parameter, both during startup and whenever a reported parameter changes.
//!
//! A `client_encoding` report changes the charset of every later frame; the
//! decoder applies that switch once this frame has been produced.

use bytes::BytesMut;
use tracing::warn;

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::shared_types::ConfigurationVariable;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::{PayloadReader, put_cstr};

// -----------------------------------------------------------------------------
// ----- ParameterStatusFrame --------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterStatusFrame {
    pub name: ConfigurationVariable,
    pub value: String,
}

// -----------------------------------------------------------------------------
// ----- ParameterStatusFrame: Public ------------------------------------------

impl ParameterStatusFrame {
    pub fn new(name: ConfigurationVariable, value: impl Into<String>) -> Self {
        Self {
            name: name.canonical(),
            value: value.into(),
        }
    }

    /// The new charset name when this frame reports `client_encoding`.
    pub fn client_encoding(&self) -> Option<&str> {
        match self.name {
            ConfigurationVariable::ClientEncoding => Some(&self.value),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for ParameterStatusFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let name = reader.read_string("name")?;
        let value = reader.read_string("value")?;

        let name = ConfigurationVariable::from_name(&name);
        if !name.is_known() {
            warn!(name = %name, value = %value, "server reported unknown configuration variable");
        }

        Ok(Self { name, value })
    }

    fn write_payload(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError> {
        put_cstr(buf, "name", self.name.name(), charset)?;
        put_cstr(buf, "value", &self.value, charset)?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
