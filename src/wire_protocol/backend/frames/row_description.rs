//! Module: wire_protocol::backend::frames::row_description
//!
//! RowDescription ('T'): one record per column of the upcoming DataRows.

use bytes::{BufMut, BytesMut};

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::shared_types::{FormatCode, Oid};
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::{PayloadReader, put_count_u16, put_cstr};

// -----------------------------------------------------------------------------
// ----- RowDescriptionFrame ---------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowDescriptionFrame {
    pub fields: Vec<FieldDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescription {
    pub name: String,
    /// Zero when the column is not a plain table column.
    pub table_oid: Oid,
    pub column_attr: i16,
    pub type_oid: Oid,
    /// Negative for variable-width types.
    pub type_size: i16,
    pub type_modifier: i32,
    pub format: FormatCode,
}

// -----------------------------------------------------------------------------
// ----- RowDescriptionFrame: Public -------------------------------------------

impl RowDescriptionFrame {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for RowDescriptionFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let count = reader.read_u16()? as usize;
        let mut fields = Vec::with_capacity(count);

        for _ in 0..count {
            let name = reader.read_string("name")?;
            let table_oid = reader.read_u32()?;
            let column_attr = reader.read_i16()?;
            let type_oid = reader.read_u32()?;
            let type_size = reader.read_i16()?;
            let type_modifier = reader.read_i32()?;
            let format = FormatCode::from_code(reader.kind(), reader.read_i16()?)?;

            fields.push(FieldDescription {
                name,
                table_oid,
                column_attr,
                type_oid,
                type_size,
                type_modifier,
                format,
            });
        }

        Ok(Self { fields })
    }

    fn write_payload(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError> {
        put_count_u16(buf, "fields", self.fields.len())?;

        for field in &self.fields {
            put_cstr(buf, "name", &field.name, charset)?;
            buf.put_u32(field.table_oid);
            buf.put_i16(field.column_attr);
            buf.put_u32(field.type_oid);
            buf.put_i16(field.type_size);
            buf.put_i32(field.type_modifier);
            buf.put_i16(field.format.as_code());
        }

        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
