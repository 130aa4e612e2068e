//! Module: net::backend_reader
//!
//! Async feeder: reads a backend byte stream into a cumulative inbox and
//! hands complete frames to a `BackendDecoder`.
//!
//! The inbox keeps a read cursor instead of splitting off every frame; the
//! consumed prefix is dropped once the cursor passes `COMPACT_BUFFER_THRESHOLD`.
//! Dropping the reader drops any partially received frame with it.

use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::config::DecoderConfig;
use crate::errors::ReaderError;
use crate::session::SessionContext;
use crate::wire_protocol::backend::{BackendDecoder, BackendProtocolMessage, FrameOutcome};

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

const SCRATCH_CAPACITY_HINT: usize = 4096;

const COMPACT_BUFFER_THRESHOLD: usize = 8 * 1024;

// -----------------------------------------------------------------------------
// ----- BackendReader ---------------------------------------------------------

#[derive(Debug)]
pub struct BackendReader<R> {
    reader: R,
    inbox: BytesMut,
    cursor: usize,
    decoder: BackendDecoder,
}

// -----------------------------------------------------------------------------
// ----- BackendReader: Static -------------------------------------------------

impl<R: AsyncRead + Unpin> BackendReader<R> {
    pub fn new(reader: R, config: DecoderConfig) -> Self {
        Self::with_decoder(reader, BackendDecoder::new(config))
    }

    pub fn with_decoder(reader: R, decoder: BackendDecoder) -> Self {
        Self {
            reader,
            inbox: BytesMut::with_capacity(SCRATCH_CAPACITY_HINT),
            cursor: 0,
            decoder,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- BackendReader: Public -------------------------------------------------

impl<R: AsyncRead + Unpin> BackendReader<R> {
    pub fn session(&self) -> &SessionContext {
        self.decoder.session()
    }

    /// Bytes received but not yet decoded.
    pub fn buffered(&self) -> usize {
        self.inbox.len() - self.cursor
    }

    /// Next decoded message, reading from the stream as needed.
    ///
    /// `Ok(None)` means the stream ended cleanly between frames. A
    /// `client_encoding` report switches the session charset as it is
    /// returned.
    pub async fn next_message(&mut self) -> Result<Option<BackendProtocolMessage>, ReaderError> {
        let message = self.next_parsed().await?;
        if let Some(message) = &message {
            self.decoder.apply_session_effects(message);
        }
        Ok(message)
    }

    /// Forward every message to `tx` until the stream ends. A charset switch
    /// is applied only once `tx` has accepted the message carrying it.
    pub async fn run(mut self, tx: mpsc::Sender<BackendProtocolMessage>) -> Result<(), ReaderError> {
        while let Some(message) = self.next_parsed().await? {
            let switch = BackendDecoder::charset_switch(&message);
            tx.send(message)
                .await
                .map_err(|_| ReaderError::ChannelClosed)?;
            if let Some(name) = switch {
                self.decoder.switch_charset(&name);
            }
        }
        Ok(())
    }

    /// Give the stream back. Undecoded bytes are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

// -----------------------------------------------------------------------------
// ----- BackendReader: Private ------------------------------------------------

impl<R: AsyncRead + Unpin> BackendReader<R> {
    /// Next parsed message; session effects are left to the caller.
    async fn next_parsed(&mut self) -> Result<Option<BackendProtocolMessage>, ReaderError> {
        loop {
            self.maybe_compact();

            if let FrameOutcome::Message { message, consumed } =
                self.decoder.parse_frame(&self.inbox[self.cursor..])?
            {
                self.cursor += consumed;
                return Ok(Some(message));
            }

            self.inbox.reserve(SCRATCH_CAPACITY_HINT);
            let read = self.reader.read_buf(&mut self.inbox).await?;

            if read == 0 {
                let pending = self.buffered();
                if pending == 0 {
                    debug!("backend stream closed");
                    return Ok(None);
                }
                return Err(ReaderError::UnexpectedEof { pending });
            }

            trace!(read, buffered = self.buffered(), "read from backend");
        }
    }
}

// -----------------------------------------------------------------------------
// ----- BackendReader: Utils --------------------------------------------------

impl<R> BackendReader<R> {
    fn maybe_compact(&mut self) {
        if self.cursor == self.inbox.len() {
            self.inbox.clear();
            self.cursor = 0;
        } else if self.cursor > COMPACT_BUFFER_THRESHOLD {
            self.compact();
        }
    }

    fn compact(&mut self) {
        if self.cursor > 0 {
            self.inbox.advance(self.cursor);
            self.cursor = 0;
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
