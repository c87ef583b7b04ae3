//! Length-prefixed binary frame publisher.
//!
//! Wire format:
//! ```text
//! ┌────────────┬──────────────────────────────┐
//! │ Length (4B)│ postcard FrameMessage (N B)  │
//! │ LE u32     │                              │
//! └────────────┴──────────────────────────────┘
//! ```
//!
//! Any `std::io::Write` works as the sink (stdout piped into a pin
//! driver, a serial port, a socket).  Each frame is flushed on its own.

use std::io::Write;

use log::warn;

use crate::app::events::FrameMessage;
use crate::app::ports::{FramePublisher, PublishError};

/// Frame header size (4-byte little-endian length).
const HEADER_SIZE: usize = 4;

/// Upper bound on an encoded payload; a frame message is far smaller.
const MAX_PAYLOAD: usize = 64;

pub struct WireFramePublisher<W: Write> {
    writer: W,
}

impl<W: Write> WireFramePublisher<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FramePublisher for WireFramePublisher<W> {
    fn publish(&mut self, message: &FrameMessage) -> Result<(), PublishError> {
        let bytes = encode_frame(message)?;
        self.writer.write_all(&bytes).map_err(|e| {
            warn!("Wire write failed: {}", e);
            PublishError::IoError
        })?;
        self.writer.flush().map_err(|_| PublishError::IoError)
    }
}

/// Encode one message as `[LE-u32 length][postcard payload]`.
pub fn encode_frame(message: &FrameMessage) -> Result<Vec<u8>, PublishError> {
    let payload = postcard::to_allocvec(message).map_err(|_| PublishError::Encoding)?;
    if payload.len() > MAX_PAYLOAD {
        return Err(PublishError::Encoding);
    }

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decode the first complete frame in `buf`.
///
/// Returns the message and the number of bytes consumed, or `None` if
/// `buf` does not yet hold a whole valid frame.
pub fn decode_frame(buf: &[u8]) -> Option<(FrameMessage, usize)> {
    let header: [u8; HEADER_SIZE] = buf.get(..HEADER_SIZE)?.try_into().ok()?;
    let len = u32::from_le_bytes(header) as usize;
    if len == 0 || len > MAX_PAYLOAD {
        return None;
    }
    let payload = buf.get(HEADER_SIZE..HEADER_SIZE + len)?;
    let message = postcard::from_bytes(payload).ok()?;
    Some((message, HEADER_SIZE + len))
}
