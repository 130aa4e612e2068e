pub mod decoder;
pub mod frames;
pub mod message_kind;
pub mod protocol_message;
pub mod sink;

pub use decoder::{BackendDecoder, FrameOutcome, Progress};
pub use message_kind::MessageKind;
pub use protocol_message::BackendProtocolMessage;
pub use sink::MessageSink;
