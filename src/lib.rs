//! Shannon-Fano entropy coder.
//!
//! Builds a prefix-free binary code for the byte values of an input from their empirical probabilities,
//! packs the input into a compact bit stream with that code, and restores it given the same code table.
//!
//! The code table (the dictionary) is stored separately from the encoded payload. A payload is a 32 bit
//! little-endian count of data bits followed by the packed codes, most significant bit first.
//!
//! Basic usage as a library:
//!
//! ```
//! use shannon_fano::{decode, encode, Dictionary};
//!
//! let data = b"abracadabra";
//! let dict = Dictionary::from_data(data);
//! let payload = encode(data, &dict).unwrap();
//! assert_eq!(decode(&dict, &payload).unwrap(), data.to_vec());
//! ```
//!
//! The `shannon-fano` binary does the same from standard input to standard output:
//!
//! `$> shannon-fano -D codes.dict < text.txt > text.sf`
//!
//! `$> shannon-fano -d -D codes.dict < text.sf`
//!
#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod shannon_coding;
pub mod tools;

pub use compression::compress::{compress, encode};
pub use compression::decompress::{decode, decompress};
pub use compression::run;
pub use error::{Error, Result};
pub use shannon_coding::dictionary::{Code, DictEntry, Dictionary};
pub use tools::freq_count::FrequencyModel;
