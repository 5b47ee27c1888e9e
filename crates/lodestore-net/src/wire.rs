//! Fixed-width integer packet codec.
//!
//! Every settings-update payload is an ordered tuple of 4-byte big-endian
//! signed integers:
//!
//! ```text
//! +-----------+-----------+     +-----------+
//! | field 0   | field 1   | ... | field N-1 |
//! | i32 BE    | i32 BE    |     | i32 BE    |
//! +-----------+-----------+     +-----------+
//! ```
//!
//! Field count and order are fixed per message kind; there is no length
//! prefix and no version field inside the payload. Reading past the end of
//! the buffer is a typed error, never a panic.

/// Errors from reading a packet payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// The buffer ended before the next field could be read.
    #[error("unexpected end of packet: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd {
        /// Bytes required by the next read.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },
}

/// Writes fixed-width fields into a growable byte buffer.
#[derive(Debug, Default)]
pub struct PacketWriter {
    buf: Vec<u8>,
}

impl PacketWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a 4-byte big-endian signed integer.
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Consumes the writer, returning the payload bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Reads fixed-width fields from a byte slice, front to back.
#[derive(Debug)]
pub struct PacketReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PacketReader<'a> {
    /// Creates a reader over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Reads the next 4-byte big-endian signed integer.
    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        let remaining = self.remaining();
        if remaining < 4 {
            return Err(WireError::UnexpectedEnd {
                needed: 4,
                remaining,
            });
        }
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.data[self.pos..self.pos + 4]);
        self.pos += 4;
        Ok(i32::from_be_bytes(bytes))
    }
}
