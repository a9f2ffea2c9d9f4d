use log::{debug, info, trace, warn};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::HEADER_BYTES;
use crate::error::{Error, Result};
use crate::shannon_coding::dictionary::Dictionary;
use crate::shannon_coding::trie::DecodeTrie;
use crate::tools::cli::ShannonOpts;

/// Decode a payload produced by encode() with the same dictionary.
///
/// Exactly as many bits as the payload header declares are read. Running out of payload before
/// that, or stopping in the middle of a code, is UnexpectedEndOfData; a bit sequence no code
/// continues with is InvalidCode.
pub fn decode(dict: &Dictionary, payload: &[u8]) -> Result<Vec<u8>> {
    let mut br = BitReader::new(payload)?;
    let total_bits = br.total_bits();
    debug!(
        "Decoding {} bits with a dictionary of {} entries.",
        total_bits,
        dict.len()
    );

    // Every bit is implied by the only symbol; the header is the symbol count.
    if let Some(symbol) = dict.single_symbol() {
        debug!(
            "Single symbol {:#04x}: emitting {} copies from the header alone.",
            symbol, total_bits
        );
        if payload.len() > HEADER_BYTES {
            warn!(
                "Ignoring {} bytes after the header of a single-symbol payload.",
                payload.len() - HEADER_BYTES
            );
        }
        return Ok(vec![symbol; total_bits as usize]);
    }
    if dict.is_empty() {
        return match total_bits {
            0 => Ok(Vec::new()),
            _ => Err(Error::InvalidCode { position: 0 }),
        };
    }

    let trie = DecodeTrie::build(dict)?;
    let mut out = Vec::with_capacity(payload.len() * 2);
    let mut node = trie.root();

    for position in 0..total_bits {
        let bit = br
            .bit()
            .ok_or(Error::UnexpectedEndOfData { decoded: out.len() })?;
        node = trie
            .step(node, bit)
            .ok_or(Error::InvalidCode { position })?;
        if let Some(symbol) = trie.symbol(node) {
            out.push(symbol);
            node = trie.root();
        }
    }

    // All declared bits are used up, but the last code is not complete.
    if node != trie.root() {
        trace!("Payload ended mid-code at {}.", br.loc());
        return Err(Error::UnexpectedEndOfData { decoded: out.len() });
    }
    Ok(out)
}

/// Decode `input` with the dictionary file named in `opts`.
pub fn decompress(opts: &ShannonOpts, input: &[u8]) -> Result<Vec<u8>> {
    let dict = Dictionary::load(&opts.dictionary)?;
    let out = decode(&dict, input)?;
    info!("Decoded {} bytes into {} bytes.", input.len(), out.len());
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::encode;

    fn round_trip(data: &[u8]) -> Vec<u8> {
        let dict = Dictionary::from_data(data);
        decode(&dict, &encode(data, &dict).unwrap()).unwrap()
    }

    #[test]
    fn round_trip_test() {
        let cases: [&[u8]; 6] = [
            b"abracadabra",
            b"abababab",
            b"aaaaaa",
            b"",
            b"x",
            &[0, 0, 0, 1, 0, 255, 0],
        ];
        for data in cases {
            assert_eq!(round_trip(data), data.to_vec());
        }
    }

    #[test]
    fn all_byte_values_test() {
        let data = (0..=255_u8).cycle().take(4096).collect::<Vec<u8>>();
        assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn empty_payload_test() {
        let dict = Dictionary::from_data(b"");
        let payload = encode(b"", &dict).unwrap();
        assert_eq!(&payload[..], &[0, 0, 0, 0]);
        assert!(decode(&dict, &payload).unwrap().is_empty());
    }

    #[test]
    fn single_symbol_test() {
        let dict = Dictionary::from_data(b"aaaaaa");
        let payload = encode(b"aaaaaa", &dict).unwrap();
        assert_eq!(decode(&dict, &payload).unwrap(), b"aaaaaa".to_vec());
    }

    #[test]
    fn single_symbol_count_from_header_test() {
        let dict = Dictionary::from_data(b"q");
        let count: u32 = 70_000;
        let out = decode(&dict, &count.to_le_bytes()).unwrap();
        assert_eq!(out.len(), count as usize);
        assert!(out.iter().all(|&b| b == b'q'));
    }

    #[test]
    fn truncated_payload_test() {
        let data = b"abracadabra";
        let dict = Dictionary::from_data(data);
        let payload = encode(data, &dict).unwrap();
        let short = &payload[..payload.len() - 1];
        assert!(matches!(
            decode(&dict, short),
            Err(Error::UnexpectedEndOfData { .. })
        ));
    }

    #[test]
    fn truncated_header_test() {
        let dict = Dictionary::from_data(b"aaaa");
        let payload = encode(b"aaaa", &dict).unwrap();
        assert!(matches!(
            decode(&dict, &payload[..3]),
            Err(Error::UnexpectedEndOfData { decoded: 0 })
        ));
    }

    #[test]
    fn mid_code_test() {
        // a=00, header claims one bit only.
        let dict = Dictionary::from_data(b"abracadabra");
        assert!(matches!(
            decode(&dict, &[1, 0, 0, 0, 0]),
            Err(Error::UnexpectedEndOfData { decoded: 0 })
        ));
    }

    #[test]
    fn invalid_code_test() {
        // Codes 0, 10, 110 leave 111 unused.
        let dict = Dictionary::from_data(b"aaaabbc");
        assert_eq!(dict.len(), 3);
        let payload = [3, 0, 0, 0, 0b1110_0000];
        assert!(matches!(
            decode(&dict, &payload),
            Err(Error::InvalidCode { .. })
        ));
    }

    #[test]
    fn empty_dictionary_with_bits_test() {
        assert!(matches!(
            decode(&Dictionary::default(), &[5, 0, 0, 0, 0]),
            Err(Error::InvalidCode { position: 0 })
        ));
    }

    #[test]
    fn zero_symbol_is_data_test() {
        let data = [0_u8, 1, 0, 0, 2];
        assert_eq!(round_trip(&data), data.to_vec());
    }
}
