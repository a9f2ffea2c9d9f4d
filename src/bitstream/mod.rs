//! The bitstream module forms the I/O subsystem of the Shannon-Fano codec.
//!
//! Encoded payloads start with a 32 bit little-endian count of the data bits that follow. The data bits
//! are packed most significant bit first, and the final byte is padded with zeros. Because the count is
//! explicit, the reader never hands those padding bits to the decoder.
//!
pub mod bitreader;
pub mod bitwriter;

/// Size in bytes of the bit-count header in front of every payload.
pub const HEADER_BYTES: usize = 4;
