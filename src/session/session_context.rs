//! Module: session::session_context
//!
//! Shared handle on the state a connection and its decoder both see.
//!
//! The surrounding connection owns the session and hands a clone to the
//! decoder at construction. The decoder reads the charset for every string
//! field and switches it when the server reports a new `client_encoding`.

use parking_lot::RwLock;
use std::sync::Arc;

use super::Charset;

// -----------------------------------------------------------------------------
// ----- SessionContext --------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SessionContext {
    inner: Arc<RwLock<SessionState>>,
}

#[derive(Debug)]
struct SessionState {
    charset: Charset,
}

// -----------------------------------------------------------------------------
// ----- SessionContext: Static ------------------------------------------------

impl SessionContext {
    pub fn new(charset: Charset) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionState { charset })),
        }
    }
}

// -----------------------------------------------------------------------------
// ----- SessionContext: Public ------------------------------------------------

impl SessionContext {
    /// Charset currently in force for string fields.
    #[inline]
    pub fn charset(&self) -> Charset {
        self.inner.read().charset
    }

    /// Switch the charset. Only frames decoded after this call observe it.
    pub fn set_charset(&self, charset: Charset) {
        self.inner.write().charset = charset;
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(Charset::default())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_charset() {
        let session = SessionContext::new(Charset::Ascii);
        let decoder_view = session.clone();

        decoder_view.set_charset(Charset::utf8());

        assert_eq!(session.charset(), Charset::utf8());
    }

    #[test]
    fn default_starts_with_ascii() {
        assert_eq!(SessionContext::default().charset(), Charset::Ascii);
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
