//! Module: wire_protocol::backend::frames::data_row
//!
//! DataRow ('D'). Column values stay raw bytes: their interpretation depends
//! on the type catalog and the format negotiated in RowDescription, so the
//! session charset is never applied here.

use bytes::{Bytes, BytesMut};

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::{PayloadReader, put_count_u16, put_nullable_bytes};

// -----------------------------------------------------------------------------
// ----- DataRowFrame ----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataRowFrame {
    /// `None` is SQL NULL.
    pub columns: Vec<Option<Bytes>>,
}

// -----------------------------------------------------------------------------
// ----- DataRowFrame: Public --------------------------------------------------

impl DataRowFrame {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Value of column `idx`; `None` for SQL NULL or an out-of-range index.
    pub fn get(&self, idx: usize) -> Option<&[u8]> {
        self.columns.get(idx)?.as_deref()
    }

    pub fn is_null(&self, idx: usize) -> bool {
        matches!(self.columns.get(idx), Some(None))
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for DataRowFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let count = reader.read_u16()? as usize;
        let mut columns = Vec::with_capacity(count);

        for _ in 0..count {
            let value = reader.read_nullable_bytes()?.map(Bytes::copy_from_slice);
            columns.push(value);
        }

        Ok(Self { columns })
    }

    fn write_payload(&self, buf: &mut BytesMut, _charset: Charset) -> Result<(), EncodeError> {
        put_count_u16(buf, "columns", self.columns.len())?;
        for column in &self.columns {
            put_nullable_bytes(buf, column.as_deref())?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire_protocol::backend::MessageKind;
    use crate::wire_protocol::backend::frames::test_support::decode;

    fn parse(payload: &[u8]) -> Result<DataRowFrame, DecodeError> {
        decode(MessageKind::DataRow, payload, Charset::Ascii)
    }

    #[test]
    fn values_and_nulls() {
        let payload = b"\0\x03\0\0\0\x0242\xFF\xFF\xFF\xFF\0\0\0\0";
        let row = parse(payload).unwrap();

        assert_eq!(row.len(), 3);
        assert_eq!(row.get(0), Some(&b"42"[..]));
        assert!(row.is_null(1));
        assert_eq!(row.get(2), Some(&b""[..]));
        assert!(!row.is_null(2));
        assert!(!row.is_null(3));
    }

    #[test]
    fn raw_bytes_ignore_charset() {
        // invalid as ASCII and as UTF-8, still accepted
        let payload = b"\0\x01\0\0\0\x02\xC3\x28";
        let row = parse(payload).unwrap();
        assert_eq!(row.get(0), Some(&[0xC3, 0x28][..]));
    }

    #[test]
    fn length_below_minus_one() {
        let payload = b"\0\x01\xFF\xFF\xFF\xFE";
        assert_eq!(
            parse(payload).unwrap_err(),
            DecodeError::NegativeLength {
                kind: MessageKind::DataRow,
                length: -2
            }
        );
    }

    #[test]
    fn value_longer_than_payload() {
        let payload = b"\0\x01\0\0\0\x09abc";
        assert_eq!(
            parse(payload).unwrap_err(),
            DecodeError::ShortPayload(MessageKind::DataRow)
        );
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
