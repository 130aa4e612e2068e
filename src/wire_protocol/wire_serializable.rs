use bytes::BytesMut;

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::utils::PayloadReader;

pub trait WireSerializable: Sized {
    /// Parse a frame payload. String fields decode under `reader.charset()`.
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError>;

    /// Append the payload (no tag, no length) to `buf`, encoding string
    /// fields under `charset`.
    fn write_payload(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError>;
}
