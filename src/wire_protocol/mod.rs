pub mod backend;
pub mod utils;
pub mod wire_serializable;

pub use backend::{BackendDecoder, BackendProtocolMessage, FrameOutcome, MessageKind, Progress};
pub use wire_serializable::WireSerializable;
