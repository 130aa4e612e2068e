pub mod decoder_config;

pub use decoder_config::{DEFAULT_MAX_FRAME_LEN, DecoderConfig};
