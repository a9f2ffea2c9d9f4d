//! The compression module runs the encode and decode sides of the Shannon-Fano coder.
//!
//! Encoding happens in the following steps:
//! - Frequency count: count every byte value of the input.
//! - Code construction: derive a prefix-free Shannon-Fano code from those counts.
//! - Dictionary: store the code table in the dictionary file.
//! - Packing: replace every input byte by its code and pack the bits behind a 32 bit bit-count header.
//!
//! Decoding reads the dictionary back, rebuilds the decode trie and walks it for exactly as many bits as the
//! payload header declares.
//!

pub mod compress;
pub mod decompress;

use std::io::{Read, Write};

use crate::error::Result;
use crate::tools::cli::{Mode, ShannonOpts};

/// Read all of `input`, encode or decode it as `opts` asks, and write the result to `output`.
pub fn run<R: Read, W: Write>(opts: &ShannonOpts, input: &mut R, output: &mut W) -> Result<()> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let result = match opts.op_mode {
        Mode::Encode => compress::compress(opts, &data)?,
        Mode::Decode => decompress::decompress(opts, &data)?,
    };

    output.write_all(&result)?;
    output.flush()?;
    Ok(())
}
