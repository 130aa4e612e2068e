//! Split a NUL-terminated byte string off the front of a byte slice.
//!
//! Charset decoding is left to the caller: the bytes before the NUL are
//! returned untouched.

use memchr::memchr;

// -----------------------------------------------------------------------------
// ----- read_cstr (mutates input) ---------------------------------------------

/// Split the bytes before the first NUL off `input_bytes`.
///
/// On success `input_bytes` is advanced to start **after** the NUL
/// terminator. Returns `None`, leaving `input_bytes` untouched, when no NUL is
/// present.
#[inline]
pub fn read_cstr<'a>(input_bytes: &mut &'a [u8]) -> Option<&'a [u8]> {
    let unread_bytes = *input_bytes;

    let nul_index = memchr(0, unread_bytes)?;

    let (bytes_before_nul, bytes_from_nul) = unread_bytes.split_at(nul_index);

    // advance past the NUL
    *input_bytes = &bytes_from_nul[1..];

    Some(bytes_before_nul)
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use bytes::{Bytes, BytesMut};
    use std::ffi::CString;

    #[test]
    fn reads_and_advances() {
        let c_hello = CString::new("hello").unwrap();
        let mut buffer = Vec::from(c_hello.as_bytes_with_nul()); // "hello\0"
        buffer.extend_from_slice(b"world"); // "hello\0world"

        let mut input: &[u8] = &buffer;
        let got = read_cstr(&mut input).unwrap();

        assert_eq!(got, b"hello");
        assert_eq!(input, b"world");
    }

    #[test]
    fn empty_string_is_just_the_nul() {
        let mut input: &[u8] = b"\0rest";
        assert_eq!(read_cstr(&mut input), Some(&b""[..]));
        assert_eq!(input, b"rest");
    }

    #[test]
    fn eof_without_nul_leaves_input() {
        let c = CString::new("no-nul").unwrap();
        let mut input: &[u8] = c.as_bytes(); // no trailing NUL

        assert!(read_cstr(&mut input).is_none());
        assert_eq!(input, b"no-nul");
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let mut input: &[u8] = &[0xFF, 0xE9, 0x00, 0x41];
        assert_eq!(read_cstr(&mut input), Some(&[0xFF, 0xE9][..]));
        assert_eq!(input, b"A");
    }

    #[test]
    fn back_to_back_strings() {
        let frozen = Bytes::from_static(b"client_encoding\0UTF8\0");
        let mut input: &[u8] = frozen.as_ref();

        assert_eq!(read_cstr(&mut input), Some(&b"client_encoding"[..]));
        assert_eq!(read_cstr(&mut input), Some(&b"UTF8"[..]));
        assert!(input.is_empty());
    }

    #[test]
    fn bytesmut_borrowed_as_slice() {
        let mut buffer = BytesMut::with_capacity(16);
        buffer.extend_from_slice(b"hello\0world");

        let mut input: &[u8] = &buffer[..];
        let parsed = read_cstr(&mut input).unwrap();

        assert_eq!(&buffer[..], b"hello\0world");
        assert_eq!(parsed, b"hello");
        assert_eq!(input, b"world");
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
