use super::{DecodeError, Result};

/// Read cursor over a received datagram.
///
/// All reads are bounds-checked and fail with [`DecodeError::TooShort`]
/// instead of slicing past the end.
pub struct BytePacketBuffer<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BytePacketBuffer<'a> {
    pub fn new(buf: &'a [u8]) -> BytePacketBuffer<'a> {
        BytePacketBuffer { buf, pos: 0 }
    }

    /// Current position within buffer
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Move the cursor to an absolute position
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.buf.len() {
            return Err(DecodeError::TooShort {
                needed: pos,
                actual: self.buf.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }

    /// Read a single byte and move the position one step forward
    pub fn read(&mut self) -> Result<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Ok(byte)
    }

    /// Look at the byte under the cursor without moving
    pub fn peek(&self) -> Result<u8> {
        self.buf
            .get(self.pos)
            .copied()
            .ok_or(DecodeError::TooShort {
                needed: self.pos + 1,
                actual: self.buf.len(),
            })
    }

    /// Read two bytes as a big-endian u16
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_range(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Take `len` bytes starting at the cursor
    pub fn read_range(&mut self, len: usize) -> Result<&'a [u8]> {
        let range = self.get_range(self.pos, len)?;
        self.pos += len;
        Ok(range)
    }

    /// Get a range of bytes without moving the cursor
    pub fn get_range(&self, start: usize, len: usize) -> Result<&'a [u8]> {
        let end = start.checked_add(len).unwrap_or(usize::MAX);
        self.buf.get(start..end).ok_or(DecodeError::TooShort {
            needed: end,
            actual: self.buf.len(),
        })
    }
}
