#![allow(dead_code)]

use bytes::Bytes;
use pgframe::frames::{
    AuthenticationFrame, BackendKeyDataFrame, CommandCompleteFrame, CopyDataFrame,
    CopyResponseFrame, DataRowFrame, ErrorFields, FieldDescription, FunctionCallResponseFrame,
    NegotiateProtocolVersionFrame, NotificationResponseFrame, ParameterDescriptionFrame,
    ParameterStatusFrame, ReadyForQueryFrame, RowDescriptionFrame, Severity,
};
use pgframe::shared_types::{ConfigurationVariable, FormatCode, TransactionStatus};
use pgframe::{BackendDecoder, BackendProtocolMessage, Charset, DecodeError};
use smallvec::smallvec;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING: Once = Once::new();

/// Route decoder logs to the test output; `RUST_LOG` picks the level.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}

/// Hex dump like `5A 00 00 00 05 49` into bytes.
pub fn hex(s: &str) -> Vec<u8> {
    s.split_whitespace()
        .map(|b| u8::from_str_radix(b, 16).expect("hex byte"))
        .collect()
}

/// Assemble `[tag][len][payload]`.
pub fn frame(tag: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 5);
    out.push(tag);
    out.extend_from_slice(&((payload.len() + 4) as i32).to_be_bytes());
    out.extend_from_slice(payload);
    out
}

pub fn parameter_status(name: &str, value: &[u8]) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(name.as_bytes());
    payload.push(0);
    payload.extend_from_slice(value);
    payload.push(0);
    frame(b'S', &payload)
}

/// Drives a decoder the way a socket feeder does: append each chunk to a
/// cumulative buffer, decode, advance past what was consumed.
pub struct Feeder {
    pub decoder: BackendDecoder,
    pub buffer: Vec<u8>,
    pub cursor: usize,
    pub messages: Vec<BackendProtocolMessage>,
}

impl Feeder {
    pub fn new(decoder: BackendDecoder) -> Self {
        Self {
            decoder,
            buffer: Vec::new(),
            cursor: 0,
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, chunk: &[u8]) -> Result<usize, DecodeError> {
        self.buffer.extend_from_slice(chunk);
        match self
            .decoder
            .decode(&self.buffer[self.cursor..], &mut self.messages)
        {
            Ok(progress) => {
                self.cursor += progress.consumed;
                Ok(progress.emitted)
            }
            Err(failure) => {
                self.cursor += failure.progress.consumed;
                Err(failure.error)
            }
        }
    }

    pub fn residual(&self) -> usize {
        self.buffer.len() - self.cursor
    }
}

/// One message of every kind, with string fields that encode under UTF-8.
pub fn every_kind() -> Vec<BackendProtocolMessage> {
    use BackendProtocolMessage as M;

    vec![
        M::Authentication(AuthenticationFrame::Ok),
        M::Authentication(AuthenticationFrame::KerberosV5),
        M::Authentication(AuthenticationFrame::CleartextPassword),
        M::Authentication(AuthenticationFrame::CryptPassword { salt: *b"xy" }),
        M::Authentication(AuthenticationFrame::Md5Password {
            salt: [0xDE, 0xAD, 0xBE, 0xEF],
        }),
        M::Authentication(AuthenticationFrame::ScmCredential),
        M::Authentication(AuthenticationFrame::Gss),
        M::Authentication(AuthenticationFrame::GssContinue {
            data: Bytes::from_static(&[1, 2, 3, 0, 4]),
        }),
        M::Authentication(AuthenticationFrame::Sspi),
        M::Authentication(AuthenticationFrame::Sasl {
            mechanisms: vec!["SCRAM-SHA-256-PLUS".into(), "SCRAM-SHA-256".into()],
        }),
        M::Authentication(AuthenticationFrame::SaslContinue {
            data: Bytes::from_static(b"r=nonce,s=salt,i=4096"),
        }),
        M::Authentication(AuthenticationFrame::SaslFinal {
            data: Bytes::from_static(b"v=signature"),
        }),
        M::BackendKeyData(BackendKeyDataFrame {
            process_id: 6880,
            secret_key: i32::MIN,
        }),
        M::BindComplete,
        M::CloseComplete,
        M::CommandComplete(CommandCompleteFrame::new("INSERT 0 3")),
        M::CopyBothResponse(CopyResponseFrame {
            format: FormatCode::Binary,
            column_formats: smallvec![],
        }),
        M::CopyData(CopyDataFrame {
            data: Bytes::from_static(b"1\tcaf\xC3\xA9\n"),
        }),
        M::CopyDone,
        M::CopyInResponse(CopyResponseFrame {
            format: FormatCode::Text,
            column_formats: smallvec![FormatCode::Text, FormatCode::Text],
        }),
        M::CopyOutResponse(CopyResponseFrame {
            format: FormatCode::Binary,
            column_formats: smallvec![FormatCode::Binary],
        }),
        M::DataRow(DataRowFrame {
            columns: vec![Some(Bytes::from_static(b"42")), None, Some(Bytes::new())],
        }),
        M::EmptyQueryResponse,
        M::ErrorResponse(
            ErrorFields::new(Severity::Error, "42P01", "relation \"nope\" does not exist")
                .with_position(15)
                .with(b'F', "parse_relation.c")
                .into(),
        ),
        M::FunctionCallResponse(FunctionCallResponseFrame { result: None }),
        M::FunctionCallResponse(FunctionCallResponseFrame {
            result: Some(Bytes::from_static(&[0, 0, 0, 7])),
        }),
        M::NegotiateProtocolVersion(NegotiateProtocolVersionFrame {
            newest_minor: 0,
            unrecognized_options: vec!["_pq_.compression".into()],
        }),
        M::NoData,
        M::NoticeResponse(
            ErrorFields::new(Severity::Notice, "00000", "relation «t» already exists, skipping")
                .into(),
        ),
        M::NotificationResponse(NotificationResponseFrame {
            process_id: 4242,
            channel: "jobs".into(),
            payload: "{\"id\":7}".into(),
        }),
        M::ParameterDescription(ParameterDescriptionFrame {
            type_oids: smallvec![23, 25, 1184],
        }),
        M::ParameterStatus(ParameterStatusFrame::new(
            ConfigurationVariable::TimeZone,
            "Europe/Zürich",
        )),
        M::ParameterStatus(ParameterStatusFrame::new(
            ConfigurationVariable::Unknown("my.setting".into()),
            "on",
        )),
        M::ParseComplete,
        M::PortalSuspended,
        M::ReadyForQuery(ReadyForQueryFrame {
            status: TransactionStatus::InTransaction,
        }),
        M::RowDescription(RowDescriptionFrame {
            fields: vec![
                FieldDescription {
                    name: "id".into(),
                    table_oid: 16384,
                    column_attr: 1,
                    type_oid: 23,
                    type_size: 4,
                    type_modifier: -1,
                    format: FormatCode::Text,
                },
                FieldDescription {
                    name: "größe".into(),
                    table_oid: 0,
                    column_attr: 0,
                    type_oid: 1043,
                    type_size: -1,
                    type_modifier: 68,
                    format: FormatCode::Binary,
                },
            ],
        }),
    ]
}

/// Concatenated wire bytes of `messages`.
pub fn encode_all(messages: &[BackendProtocolMessage], charset: Charset) -> Vec<u8> {
    let mut out = Vec::new();
    for message in messages {
        out.extend_from_slice(&message.to_bytes(charset).expect("encodable message"));
    }
    out
}
