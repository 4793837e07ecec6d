//! Byte cursor over a shared decode buffer
//!
//! The decoder advances one cursor through a single borrowed buffer
//! rather than allocating a sub-buffer per recursive call. Every read
//! is bounds-checked and fails with `OutOfBounds` carrying how many
//! bytes were needed versus available.

use crate::error::{CodecError, Result};

pub(crate) struct ByteReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Bytes consumed so far
    pub(crate) fn consumed(&self) -> usize {
        self.cursor
    }

    /// Bytes left to read
    pub(crate) fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.cursor)
    }

    pub(crate) fn read_byte(&mut self) -> Result<u8> {
        if self.remaining() < 1 {
            return Err(CodecError::OutOfBounds {
                needed: 1,
                available: 0,
            });
        }
        let byte = self.buffer[self.cursor];
        self.cursor += 1;
        Ok(byte)
    }

    pub(crate) fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(CodecError::OutOfBounds {
                needed: len,
                available: self.remaining(),
            });
        }
        let slice = &self.buffer[self.cursor..self.cursor + len];
        self.cursor += len;
        Ok(slice)
    }
}
