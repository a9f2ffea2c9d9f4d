//! BitReader: reads back a payload produced by the BitWriter.
//!
//! The reader first takes the 32 bit little-endian bit count off the front of the payload, and from then on
//! hands out at most that many bits. Zero padding in the final byte is never returned as data.
//!

use super::HEADER_BYTES;
use crate::error::{Error, Result};

const BIT_MASK: u8 = 0xff;

/// Reads single bits, most significant bit first, from an in-memory payload.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    total_bits: u64,
    bits_read: u64,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader over `payload`, parsing its bit-count header.
    /// A payload too short to hold the header is reported as unexpected end of data.
    pub fn new(payload: &'a [u8]) -> Result<Self> {
        let header: [u8; HEADER_BYTES] = payload
            .get(..HEADER_BYTES)
            .and_then(|h| h.try_into().ok())
            .ok_or(Error::UnexpectedEndOfData { decoded: 0 })?;
        Ok(Self {
            buffer: &payload[HEADER_BYTES..],
            cursor: 0,
            bit_index: 0,
            total_bits: u32::from_le_bytes(header) as u64,
            bits_read: 0,
        })
    }

    /// Number of data bits declared by the header.
    pub fn total_bits(&self) -> u64 {
        self.total_bits
    }

    /// Number of bits handed out so far.
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    /// Return the next bit (*true* for 1), or None once the declared count is used up or
    /// the buffer has no more bytes.
    pub fn bit(&mut self) -> Option<bool> {
        if self.bits_read >= self.total_bits || self.cursor >= self.buffer.len() {
            return None;
        }
        let bit = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        self.bits_read += 1;
        Some(bit == 1)
    }

    /// Debugging function. Report current position in the buffer (header excluded).
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}
