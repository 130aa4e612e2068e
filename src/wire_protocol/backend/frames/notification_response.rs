//! Module: wire_protocol::backend::frames::notification_response
//!
//! NotificationResponse ('A'), delivered for LISTEN/NOTIFY.

use bytes::{BufMut, BytesMut};

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::{PayloadReader, put_cstr};

// -----------------------------------------------------------------------------
// ----- NotificationResponseFrame ---------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationResponseFrame {
    /// Backend process that sent the notification.
    pub process_id: i32,
    pub channel: String,
    pub payload: String,
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for NotificationResponseFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let process_id = reader.read_i32()?;
        let channel = reader.read_string("channel")?;
        let payload = reader.read_string("payload")?;

        Ok(Self {
            process_id,
            channel,
            payload,
        })
    }

    fn write_payload(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError> {
        buf.put_i32(self.process_id);
        put_cstr(buf, "channel", &self.channel, charset)?;
        put_cstr(buf, "payload", &self.payload, charset)?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
