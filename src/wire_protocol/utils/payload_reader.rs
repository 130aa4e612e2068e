//! Module: wire_protocol::utils::payload_reader
//!
//! Read-only, bounds-checked view over exactly one frame payload.
//!
//! The framer carves the payload slice out of the cumulative buffer and hands
//! parsers a `PayloadReader` over it. Every read that would run past the end
//! of the slice fails with `ShortPayload(kind)`; once the parser returns, the
//! framer calls `finish` to reject unread bytes.

use bytes::Buf;

use super::read_cstr;
use crate::errors::DecodeError;
use crate::session::Charset;
use crate::wire_protocol::backend::MessageKind;

// -----------------------------------------------------------------------------
// ----- PayloadReader ---------------------------------------------------------

#[derive(Debug)]
pub struct PayloadReader<'a> {
    kind: MessageKind,
    bytes: &'a [u8],
    charset: Charset,
}

// -----------------------------------------------------------------------------
// ----- PayloadReader: Static -------------------------------------------------

impl<'a> PayloadReader<'a> {
    pub fn new(kind: MessageKind, bytes: &'a [u8], charset: Charset) -> Self {
        Self {
            kind,
            bytes,
            charset,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- PayloadReader: Public -------------------------------------------------

impl<'a> PayloadReader<'a> {
    #[inline]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    #[inline]
    pub fn charset(&self) -> Charset {
        self.charset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.ensure(1)?;
        Ok(self.bytes.get_u8())
    }

    pub fn read_i16(&mut self) -> Result<i16, DecodeError> {
        self.ensure(2)?;
        Ok(self.bytes.get_i16())
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        self.ensure(2)?;
        Ok(self.bytes.get_u16())
    }

    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        self.ensure(4)?;
        Ok(self.bytes.get_i32())
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.ensure(4)?;
        Ok(self.bytes.get_u32())
    }

    /// Borrow the next `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.ensure(len)?;
        let (head, tail) = self.bytes.split_at(len);
        self.bytes = tail;
        Ok(head)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Borrow everything left in the payload.
    pub fn read_rest(&mut self) -> &'a [u8] {
        std::mem::take(&mut self.bytes)
    }

    /// Raw bytes of a NUL-terminated string, terminator consumed.
    pub fn read_cstr_bytes(&mut self) -> Result<&'a [u8], DecodeError> {
        read_cstr(&mut self.bytes).ok_or(DecodeError::ShortPayload(self.kind))
    }

    /// A NUL-terminated string decoded under the session charset.
    pub fn read_string(&mut self, field: &'static str) -> Result<String, DecodeError> {
        let raw = self.read_cstr_bytes()?;
        self.charset.decode(raw).ok_or(DecodeError::CharsetDecode {
            kind: self.kind,
            field,
        })
    }

    /// A 4-byte signed length followed by that many raw bytes; `-1` is NULL.
    pub fn read_nullable_bytes(&mut self) -> Result<Option<&'a [u8]>, DecodeError> {
        match self.read_i32()? {
            -1 => Ok(None),
            length if length < 0 => Err(DecodeError::NegativeLength {
                kind: self.kind,
                length,
            }),
            length => self.read_bytes(length as usize).map(Some),
        }
    }

    /// Consume the reader; fails if the parser left bytes behind.
    pub fn finish(self) -> Result<(), DecodeError> {
        if self.bytes.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::TrailingBytes(self.kind, self.bytes.len()))
        }
    }
}

// -----------------------------------------------------------------------------
// ----- PayloadReader: Private ------------------------------------------------

impl<'a> PayloadReader<'a> {
    #[inline]
    fn ensure(&self, len: usize) -> Result<(), DecodeError> {
        if self.bytes.len() < len {
            return Err(DecodeError::ShortPayload(self.kind));
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
