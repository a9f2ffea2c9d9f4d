//! Error types for the Shannon-Fano codec.

use thiserror::Error;

/// Everything that can go wrong while building, storing or applying a code.
#[derive(Debug, Error)]
pub enum Error {
    /// The dictionary file (or stdin/stdout) could not be opened, read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dictionary is truncated, has trailing garbage, or holds an inconsistent code set.
    #[error("malformed dictionary: {0}")]
    Format(String),

    /// The payload holds a bit sequence that no dictionary code starts with.
    #[error("invalid code at bit {position} of the payload")]
    InvalidCode { position: u64 },

    /// The payload ran out in the middle of a code, or before its declared bit count.
    #[error("unexpected end of data after {decoded} decoded symbols")]
    UnexpectedEndOfData { decoded: usize },

    /// An input byte has no entry in the dictionary used to encode it.
    #[error("symbol 0x{0:02x} has no code in the dictionary")]
    UnknownSymbol(u8),

    /// The encoded bit count does not fit the 32 bit payload header.
    #[error("payload of {0} bits does not fit the 32 bit length header")]
    PayloadTooLarge(u64),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
