//! Wire codec
//!
//! Messages are MessagePack maps with named fields. On the channel every
//! message is framed as a 4-byte little-endian length followed by the body.

use std::io::{self, Read, Write};

use crate::error::{HackRlError, Result};
use crate::message::Message;

/// Largest frame body accepted on either side (64 MiB)
pub const MAX_FRAME_LEN: usize = 64 * 1024 * 1024;

/// Serialize a message to MessagePack bytes
pub fn encode(msg: &Message) -> Result<Vec<u8>> {
    Ok(rmp_serde::to_vec_named(msg)?)
}

/// Deserialize a message from MessagePack bytes
pub fn decode(bytes: &[u8]) -> Result<Message> {
    Ok(rmp_serde::from_slice(bytes)?)
}

/// Prefix a body with its length
pub fn frame(body: &[u8]) -> Result<Vec<u8>> {
    if body.len() > MAX_FRAME_LEN {
        return Err(HackRlError::FrameTooLarge(body.len()));
    }
    let mut buf = Vec::with_capacity(4 + body.len());
    buf.extend_from_slice(&(body.len() as u32).to_le_bytes());
    buf.extend_from_slice(body);
    Ok(buf)
}

/// Encode and frame a message in one step
pub fn encode_frame(msg: &Message) -> Result<Vec<u8>> {
    frame(&encode(msg)?)
}

/// Write one framed body
pub fn write_frame<W: Write>(writer: &mut W, body: &[u8]) -> Result<()> {
    writer.write_all(&frame(body)?)?;
    writer.flush()?;
    Ok(())
}

/// Read one framed body.
///
/// Returns `Ok(None)` on a clean end of stream before a new frame starts;
/// a stream that ends inside the length prefix or body is an error.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<Option<Vec<u8>>> {
    let mut len_bytes = [0u8; 4];
    let mut filled = 0;
    while filled < len_bytes.len() {
        match reader.read(&mut len_bytes[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => {
                return Err(HackRlError::IpcError(format!(
                    "Stream ended inside length prefix ({} of 4 bytes)",
                    filled
                )));
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(HackRlError::IpcError(format!("Read length failed: {}", e))),
        }
    }
    let len = u32::from_le_bytes(len_bytes) as usize;

    if len > MAX_FRAME_LEN {
        return Err(HackRlError::FrameTooLarge(len));
    }

    let mut data = vec![0u8; len];
    reader
        .read_exact(&mut data)
        .map_err(|e| HackRlError::IpcError(format!("Read data failed: {}", e)))?;

    Ok(Some(data))
}

/// Read and decode one message
pub fn read_message<R: Read>(reader: &mut R) -> Result<Option<Message>> {
    match read_frame(reader)? {
        Some(body) => decode(&body).map(Some),
        None => Ok(None),
    }
}
