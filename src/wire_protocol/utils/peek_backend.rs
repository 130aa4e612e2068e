use crate::errors::DecodeError;

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

/// Tag byte plus the 4-byte length field.
pub const HEADER_LEN: usize = 5;

// -----------------------------------------------------------------------------
// ----- FrameHeader -----------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub tag: u8,
    pub payload_len: usize,
}

impl FrameHeader {
    /// Bytes the whole frame occupies: tag + length field + payload.
    #[inline]
    pub fn total_len(&self) -> usize {
        HEADER_LEN + self.payload_len
    }
}

// -----------------------------------------------------------------------------
// ----- peek_backend ----------------------------------------------------------

/// Look at the front of `bytes` for one complete backend frame.
///
/// Returns `Ok(None)` while the header or payload is still incomplete. The
/// declared length is validated as soon as the header is present, so an
/// oversized frame fails before its payload is ever buffered.
pub fn peek_backend(bytes: &[u8], max_payload_len: usize) -> Result<Option<FrameHeader>, DecodeError> {
    if bytes.len() < HEADER_LEN {
        return Ok(None);
    }

    let tag = bytes[0];
    let length = i32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]);

    // the length covers itself but not the tag
    if length < 4 {
        return Err(DecodeError::MalformedFrame { length });
    }

    let payload_len = (length - 4) as usize;
    if payload_len > max_payload_len {
        return Err(DecodeError::MalformedFrame { length });
    }

    if bytes.len() - HEADER_LEN < payload_len {
        return Ok(None);
    }

    Ok(Some(FrameHeader { tag, payload_len }))
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
