//! Per-connection state the decoder consults while parsing.

pub mod charset;
pub mod session_context;

pub use charset::Charset;
pub use session_context::SessionContext;
