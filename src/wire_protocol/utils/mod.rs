pub mod payload_reader;
pub mod peek_backend;
pub mod put_field;
pub mod read_cstr;

pub use payload_reader::PayloadReader;
pub use peek_backend::{FrameHeader, HEADER_LEN, peek_backend};
pub use put_field::{put_count_u16, put_cstr, put_nullable_bytes};
pub use read_cstr::read_cstr;
