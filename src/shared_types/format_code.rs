use crate::errors::DecodeError;
use crate::wire_protocol::backend::MessageKind;

// -----------------------------------------------------------------------------
// ----- FormatCode ------------------------------------------------------------

/// Wire format of a column or parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatCode {
    #[default]
    Text,
    Binary,
}

impl FormatCode {
    pub fn from_code(kind: MessageKind, code: i16) -> Result<Self, DecodeError> {
        match code {
            0 => Ok(FormatCode::Text),
            1 => Ok(FormatCode::Binary),
            code => Err(DecodeError::UnknownFormatCode { kind, code }),
        }
    }

    pub fn as_code(self) -> i16 {
        match self {
            FormatCode::Text => 0,
            FormatCode::Binary => 1,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
