//! Streaming decoder for PostgreSQL backend (server to client) messages.
//!
//! Feed a cumulative byte buffer to a [`BackendDecoder`] (or let a
//! [`BackendReader`] pull from any `AsyncRead`) and get back fully parsed,
//! owned [`BackendProtocolMessage`] values in stream order.

pub mod config;
pub mod errors;
pub mod net;
pub mod session;
pub mod shared_types;
pub mod wire_protocol;

pub use config::DecoderConfig;
pub use errors::{DecodeError, DecodeFailure, EncodeError, ReaderError};
pub use net::BackendReader;
pub use session::{Charset, SessionContext};
pub use wire_protocol::backend::frames;
pub use wire_protocol::backend::sink::MessageSink;
pub use wire_protocol::{BackendDecoder, BackendProtocolMessage, FrameOutcome, MessageKind, Progress};
