use log::trace;

use super::HEADER_BYTES;
use crate::error::{Error, Result};

/// Packs single bits into a byte buffer, most significant bit first, and counts them so the
/// payload header can record exactly how many bits are data.
pub struct BitWriter {
    /// Output buffer. The first HEADER_BYTES are reserved for the bit count.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Total data bits written so far.
    bit_count: u64,
}

impl BitWriter {
    /// Create a new BitWriter with room for roughly `size` bytes of packed data.
    pub fn new(size: usize) -> Self {
        let mut output = Vec::with_capacity(size + HEADER_BYTES);
        output.resize(HEADER_BYTES, 0);
        Self {
            output,
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Move every full byte from the queue to the output buffer.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Put one bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        self.bit_count += 1;
        self.write_stream();
    }

    /// Put a sequence of bits on the stream, first element first.
    pub fn out_bits(&mut self, bits: &[bool]) {
        bits.iter().for_each(|&bit| self.out_bit(bit));
    }

    /// Number of data bits written so far (padding and header excluded).
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits.
    fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            debug_assert_eq!(self.q_bits, 0);
        }
    }

    /// Pad the last byte, write the bit-count header and hand back the finished payload.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.flush();
        let count = u32::try_from(self.bit_count).map_err(|_| Error::PayloadTooLarge(self.bit_count))?;
        self.output[..HEADER_BYTES].copy_from_slice(&count.to_le_bytes());
        trace!(
            "Finished payload: {} data bits in {} bytes.",
            count,
            self.output.len()
        );
        Ok(self.output)
    }

    /// A payload with no data bits whose header still declares `bit_count`. Used when every bit
    /// is implied, as with a single-symbol alphabet.
    pub fn header_only(bit_count: u64) -> Result<Vec<u8>> {
        let count = u32::try_from(bit_count).map_err(|_| Error::PayloadTooLarge(bit_count))?;
        Ok(count.to_le_bytes().to_vec())
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_count / 8, self.bit_count % 8)
    }
}
