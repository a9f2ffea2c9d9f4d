//! The shannon_coding module builds the code table for the Shannon-Fano codec and everything needed to
//! store it and to decode with it.
//!
//! Shannon-Fano coding gives each symbol a code whose length is `ceil(-log2(p))`, and takes the code bits
//! from the binary expansion of the cumulative probability of all more probable symbols. Sorting the
//! symbols by descending probability makes the resulting code set prefix-free. The codes are close to, but
//! not always as short as, Huffman codes.
//!
//! - shannon_code_from_weights: the code construction itself.
//! - dictionary: the ordered symbol/code table and its binary file format.
//! - trie: the bit-by-bit decode tree rebuilt from a dictionary.
//!

pub mod dictionary;
pub mod shannon_code_from_weights;
pub mod trie;
