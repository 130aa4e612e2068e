//! Module: wire_protocol::backend::frames::error_fields
//!
//! Field list shared by ErrorResponse ('E') and NoticeResponse ('N').
//!
//! On the wire each field is a one-byte code followed by a NUL-terminated
//! string, and a zero code ends the list. Fields are kept by code, so codes
//! this crate has no accessor for still survive a decode/encode cycle. When
//! a code repeats, the last value wins.

use std::collections::BTreeMap;
use std::fmt;

use bytes::{BufMut, BytesMut};

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::utils::{PayloadReader, put_cstr};

// -----------------------------------------------------------------------------
// ----- Field Codes -----------------------------------------------------------

pub const SEVERITY: u8 = b'S';
pub const SEVERITY_NONLOCALIZED: u8 = b'V';
pub const CODE: u8 = b'C';
pub const MESSAGE: u8 = b'M';
pub const DETAIL: u8 = b'D';
pub const HINT: u8 = b'H';
pub const POSITION: u8 = b'P';
pub const INTERNAL_POSITION: u8 = b'p';
pub const INTERNAL_QUERY: u8 = b'q';
pub const WHERE: u8 = b'W';
pub const SCHEMA_NAME: u8 = b's';
pub const TABLE_NAME: u8 = b't';
pub const COLUMN_NAME: u8 = b'c';
pub const DATA_TYPE_NAME: u8 = b'd';
pub const CONSTRAINT_NAME: u8 = b'n';
pub const FILE: u8 = b'F';
pub const LINE: u8 = b'L';
pub const ROUTINE: u8 = b'R';

// -----------------------------------------------------------------------------
// ----- ErrorFields -----------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorFields {
    fields: BTreeMap<u8, String>,
}

// -----------------------------------------------------------------------------
// ----- ErrorFields: Static ---------------------------------------------------

impl ErrorFields {
    pub fn new(severity: Severity, code: &str, message: impl Into<String>) -> Self {
        Self::default()
            .with(SEVERITY, severity.as_str())
            .with(SEVERITY_NONLOCALIZED, severity.as_str())
            .with(CODE, code)
            .with(MESSAGE, message)
    }
}

// -----------------------------------------------------------------------------
// ----- ErrorFields: Builder --------------------------------------------------

impl ErrorFields {
    pub fn with(mut self, code: u8, value: impl Into<String>) -> Self {
        self.fields.insert(code, value.into());
        self
    }

    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        self.with(DETAIL, detail)
    }

    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        self.with(HINT, hint)
    }

    pub fn with_position(self, pos: u32) -> Self {
        self.with(POSITION, pos.to_string())
    }

    pub fn with_where(self, where_: impl Into<String>) -> Self {
        self.with(WHERE, where_)
    }

    pub fn with_table(self, schema: impl Into<String>, table: impl Into<String>) -> Self {
        self.with(SCHEMA_NAME, schema).with(TABLE_NAME, table)
    }

    pub fn with_constraint(self, v: impl Into<String>) -> Self {
        self.with(CONSTRAINT_NAME, v)
    }
}

// -----------------------------------------------------------------------------
// ----- ErrorFields: Public ---------------------------------------------------

impl ErrorFields {
    pub fn get(&self, code: u8) -> Option<&str> {
        self.fields.get(&code).map(String::as_str)
    }

    /// Fields in code order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.fields.iter().map(|(code, value)| (*code, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Prefers the non-localized `V` field, which servers since 9.6 send.
    pub fn severity(&self) -> Option<Severity> {
        self.get(SEVERITY_NONLOCALIZED)
            .or_else(|| self.get(SEVERITY))
            .and_then(Severity::from_name)
    }

    /// SQLSTATE, e.g. `42P01`.
    pub fn code(&self) -> Option<&str> {
        self.get(CODE)
    }

    pub fn message(&self) -> Option<&str> {
        self.get(MESSAGE)
    }

    pub fn detail(&self) -> Option<&str> {
        self.get(DETAIL)
    }

    pub fn hint(&self) -> Option<&str> {
        self.get(HINT)
    }

    pub fn position(&self) -> Option<u32> {
        self.get(POSITION)?.parse().ok()
    }

    pub fn internal_position(&self) -> Option<u32> {
        self.get(INTERNAL_POSITION)?.parse().ok()
    }

    pub fn internal_query(&self) -> Option<&str> {
        self.get(INTERNAL_QUERY)
    }

    pub fn where_(&self) -> Option<&str> {
        self.get(WHERE)
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.get(SCHEMA_NAME)
    }

    pub fn table_name(&self) -> Option<&str> {
        self.get(TABLE_NAME)
    }

    pub fn column_name(&self) -> Option<&str> {
        self.get(COLUMN_NAME)
    }

    pub fn data_type_name(&self) -> Option<&str> {
        self.get(DATA_TYPE_NAME)
    }

    pub fn constraint_name(&self) -> Option<&str> {
        self.get(CONSTRAINT_NAME)
    }

    pub fn file(&self) -> Option<&str> {
        self.get(FILE)
    }

    pub fn line(&self) -> Option<u32> {
        self.get(LINE)?.parse().ok()
    }

    pub fn routine(&self) -> Option<&str> {
        self.get(ROUTINE)
    }
}

impl fmt::Display for ErrorFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = self.get(SEVERITY).unwrap_or("ERROR");
        let message = self.message().unwrap_or("<no message>");
        match self.code() {
            Some(code) => write!(f, "{severity}: {message} (SQLSTATE {code})"),
            None => write!(f, "{severity}: {message}"),
        }
    }
}

// -----------------------------------------------------------------------------
// ----- ErrorFields: Wire -----------------------------------------------------

impl ErrorFields {
    pub(crate) fn read(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        let mut fields = BTreeMap::new();
        loop {
            let code = reader.read_u8()?;
            if code == 0 {
                return Ok(Self { fields });
            }
            let value = reader.read_string(field_name(code))?;
            fields.insert(code, value);
        }
    }

    pub(crate) fn write(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError> {
        for (code, value) in &self.fields {
            buf.put_u8(*code);
            put_cstr(buf, field_name(*code), value, charset)?;
        }
        buf.put_u8(0);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Severity --------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Fatal,
    Panic,
    Warning,
    Notice,
    Info,
    Debug,
    Log,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Panic => "PANIC",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Log => "LOG",
        }
    }

    /// Parses the non-localized spelling; `DEBUG1`..`DEBUG5` all map to
    /// `Debug`.
    pub fn from_name(s: &str) -> Option<Self> {
        let severity = match s {
            "ERROR" => Severity::Error,
            "FATAL" => Severity::Fatal,
            "PANIC" => Severity::Panic,
            "WARNING" => Severity::Warning,
            "NOTICE" => Severity::Notice,
            "INFO" => Severity::Info,
            "LOG" => Severity::Log,
            s if s.starts_with("DEBUG") => Severity::Debug,
            _ => return None,
        };
        Some(severity)
    }

    /// The session cannot continue after this severity.
    pub fn is_fatal(self) -> bool {
        matches!(self, Severity::Fatal | Severity::Panic)
    }
}

// -----------------------------------------------------------------------------
// ----- Helpers ---------------------------------------------------------------

fn field_name(code: u8) -> &'static str {
    match code {
        SEVERITY => "severity",
        SEVERITY_NONLOCALIZED => "severity_nonlocalized",
        CODE => "code",
        MESSAGE => "message",
        DETAIL => "detail",
        HINT => "hint",
        POSITION => "position",
        INTERNAL_POSITION => "internal_position",
        INTERNAL_QUERY => "internal_query",
        WHERE => "where",
        SCHEMA_NAME => "schema_name",
        TABLE_NAME => "table_name",
        COLUMN_NAME => "column_name",
        DATA_TYPE_NAME => "data_type_name",
        CONSTRAINT_NAME => "constraint_name",
        FILE => "file",
        LINE => "line",
        ROUTINE => "routine",
        _ => "unknown_field",
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
