use std::fmt;

// -----------------------------------------------------------------------------
// ----- MessageKind -----------------------------------------------------------

/// Every backend (server to client) message kind, keyed by its tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Authentication,
    BackendKeyData,
    BindComplete,
    CloseComplete,
    CommandComplete,
    CopyBothResponse,
    CopyData,
    CopyDone,
    CopyInResponse,
    CopyOutResponse,
    DataRow,
    EmptyQueryResponse,
    ErrorResponse,
    FunctionCallResponse,
    NegotiateProtocolVersion,
    NoData,
    NoticeResponse,
    NotificationResponse,
    ParameterDescription,
    ParameterStatus,
    ParseComplete,
    PortalSuspended,
    ReadyForQuery,
    RowDescription,
}

// -----------------------------------------------------------------------------
// ----- MessageKind: Static ---------------------------------------------------

impl MessageKind {
    pub const ALL: [MessageKind; 24] = [
        MessageKind::Authentication,
        MessageKind::BackendKeyData,
        MessageKind::BindComplete,
        MessageKind::CloseComplete,
        MessageKind::CommandComplete,
        MessageKind::CopyBothResponse,
        MessageKind::CopyData,
        MessageKind::CopyDone,
        MessageKind::CopyInResponse,
        MessageKind::CopyOutResponse,
        MessageKind::DataRow,
        MessageKind::EmptyQueryResponse,
        MessageKind::ErrorResponse,
        MessageKind::FunctionCallResponse,
        MessageKind::NegotiateProtocolVersion,
        MessageKind::NoData,
        MessageKind::NoticeResponse,
        MessageKind::NotificationResponse,
        MessageKind::ParameterDescription,
        MessageKind::ParameterStatus,
        MessageKind::ParseComplete,
        MessageKind::PortalSuspended,
        MessageKind::ReadyForQuery,
        MessageKind::RowDescription,
    ];

    pub fn from_tag(tag: u8) -> Option<MessageKind> {
        use MessageKind::*;

        let kind = match tag {
            // ---------- Startup / session ------------------------------------
            b'R' => Authentication,
            b'K' => BackendKeyData,
            b'S' => ParameterStatus,
            b'Z' => ReadyForQuery,
            b'v' => NegotiateProtocolVersion,

            // ---------- Extended-query protocol ------------------------------
            b'1' => ParseComplete,
            b'2' => BindComplete,
            b'3' => CloseComplete,
            b'n' => NoData,
            b's' => PortalSuspended,
            b't' => ParameterDescription,

            // ---------- Results ----------------------------------------------
            b'T' => RowDescription,
            b'D' => DataRow,
            b'C' => CommandComplete,
            b'I' => EmptyQueryResponse,
            b'V' => FunctionCallResponse,

            // ---------- Asynchronous / diagnostics ---------------------------
            b'E' => ErrorResponse,
            b'N' => NoticeResponse,
            b'A' => NotificationResponse,

            // ---------- COPY sub-protocol ------------------------------------
            b'G' => CopyInResponse,
            b'H' => CopyOutResponse,
            b'W' => CopyBothResponse,
            b'd' => CopyData,
            b'c' => CopyDone,

            _ => return None,
        };

        Some(kind)
    }
}

// -----------------------------------------------------------------------------
// ----- MessageKind: Public ---------------------------------------------------

impl MessageKind {
    pub fn tag(self) -> u8 {
        use MessageKind::*;

        match self {
            Authentication => b'R',
            BackendKeyData => b'K',
            BindComplete => b'2',
            CloseComplete => b'3',
            CommandComplete => b'C',
            CopyBothResponse => b'W',
            CopyData => b'd',
            CopyDone => b'c',
            CopyInResponse => b'G',
            CopyOutResponse => b'H',
            DataRow => b'D',
            EmptyQueryResponse => b'I',
            ErrorResponse => b'E',
            FunctionCallResponse => b'V',
            NegotiateProtocolVersion => b'v',
            NoData => b'n',
            NoticeResponse => b'N',
            NotificationResponse => b'A',
            ParameterDescription => b't',
            ParameterStatus => b'S',
            ParseComplete => b'1',
            PortalSuspended => b's',
            ReadyForQuery => b'Z',
            RowDescription => b'T',
        }
    }

    /// Kinds whose payload is always empty.
    pub fn has_empty_payload(self) -> bool {
        use MessageKind::*;

        matches!(
            self,
            ParseComplete
                | BindComplete
                | CloseComplete
                | CopyDone
                | EmptyQueryResponse
                | NoData
                | PortalSuspended
        )
    }

    pub fn name(self) -> &'static str {
        use MessageKind::*;

        match self {
            Authentication => "Authentication",
            BackendKeyData => "BackendKeyData",
            BindComplete => "BindComplete",
            CloseComplete => "CloseComplete",
            CommandComplete => "CommandComplete",
            CopyBothResponse => "CopyBothResponse",
            CopyData => "CopyData",
            CopyDone => "CopyDone",
            CopyInResponse => "CopyInResponse",
            CopyOutResponse => "CopyOutResponse",
            DataRow => "DataRow",
            EmptyQueryResponse => "EmptyQueryResponse",
            ErrorResponse => "ErrorResponse",
            FunctionCallResponse => "FunctionCallResponse",
            NegotiateProtocolVersion => "NegotiateProtocolVersion",
            NoData => "NoData",
            NoticeResponse => "NoticeResponse",
            NotificationResponse => "NotificationResponse",
            ParameterDescription => "ParameterDescription",
            ParameterStatus => "ParameterStatus",
            ParseComplete => "ParseComplete",
            PortalSuspended => "PortalSuspended",
            ReadyForQuery => "ReadyForQuery",
            RowDescription => "RowDescription",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
