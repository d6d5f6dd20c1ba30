//! Byte cursors for encoding and decoding record fields
//!
//! `ByteWriter` appends canonical field representations to a growing buffer;
//! `ByteReader` walks a stored buffer, failing with a positioned
//! `DecodeError` when the bytes do not conform.

use super::errors::{DecodeError, DecodeResult};

/// Appending cursor over an owned byte buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    /// Create a writer with the given capacity hint.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append raw bytes verbatim (fixed-width fields, no padding).
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a u32 in little-endian order.
    pub fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append an i64 in little-endian order.
    pub fn put_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append a string as `[u32 LE byte count][UTF-8 bytes]`.
    pub fn put_string(&mut self, value: &str) {
        self.put_u32(value.len() as u32);
        self.buf.extend_from_slice(value.as_bytes());
    }

    /// Consume the writer, yielding the encoded buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Reading cursor over a stored buffer.
#[derive(Debug)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Read exactly `n` bytes, advancing the cursor.
    pub fn take(&mut self, n: usize) -> DecodeResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(DecodeError::TruncatedBuffer {
                offset: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a fixed-width byte array, advancing the cursor.
    pub fn take_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let slice = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Read a little-endian u32.
    pub fn take_u32(&mut self) -> DecodeResult<u32> {
        Ok(u32::from_le_bytes(self.take_array::<4>()?))
    }

    /// Read a little-endian i64.
    pub fn take_i64(&mut self) -> DecodeResult<i64> {
        Ok(i64::from_le_bytes(self.take_array::<8>()?))
    }

    /// Read a length-prefixed UTF-8 string.
    ///
    /// Fails with `CorruptLength` if the declared length exceeds the
    /// remaining buffer, with `InvalidUtf8` if the bytes are not UTF-8.
    pub fn take_string(&mut self) -> DecodeResult<String> {
        let prefix_offset = self.pos;
        let declared = self.take_u32()? as usize;
        if declared > self.remaining() {
            return Err(DecodeError::CorruptLength {
                offset: prefix_offset,
                declared,
                remaining: self.remaining(),
            });
        }
        let string_offset = self.pos;
        let bytes = self.take(declared)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8 {
            offset: string_offset,
        })
    }
}
