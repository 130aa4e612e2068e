//! Networking layer: async adapters between sockets and the decoder.

pub mod backend_reader;

pub use backend_reader::BackendReader;
