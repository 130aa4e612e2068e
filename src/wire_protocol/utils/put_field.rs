//! Encoding helpers shared by the backend frames.

use bytes::{BufMut, BytesMut};

use crate::errors::EncodeError;
use crate::session::Charset;

/// Append `value` encoded under `charset`, followed by a NUL.
pub fn put_cstr(
    buf: &mut BytesMut,
    field: &'static str,
    value: &str,
    charset: Charset,
) -> Result<(), EncodeError> {
    let encoded = charset
        .encode(value)
        .ok_or(EncodeError::Unrepresentable { field, charset })?;

    if encoded.contains(&0) {
        return Err(EncodeError::InteriorNul { field });
    }

    buf.extend_from_slice(&encoded);
    buf.put_u8(0);
    Ok(())
}

/// Append a 2-byte element counter.
pub fn put_count_u16(buf: &mut BytesMut, field: &'static str, count: usize) -> Result<(), EncodeError> {
    let count = u16::try_from(count).map_err(|_| EncodeError::CountOverflow { field, count })?;
    buf.put_u16(count);
    Ok(())
}

/// Append a 4-byte length followed by the bytes; `None` is written as `-1`.
pub fn put_nullable_bytes(buf: &mut BytesMut, value: Option<&[u8]>) -> Result<(), EncodeError> {
    match value {
        None => buf.put_i32(-1),
        Some(bytes) => {
            let len = i32::try_from(bytes.len()).map_err(|_| EncodeError::FrameTooLarge(bytes.len()))?;
            buf.put_i32(len);
            buf.extend_from_slice(bytes);
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
