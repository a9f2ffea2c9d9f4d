//! Generates Shannon-Fano codes from symbol weights.
//!
//! For a symbol of probability `p = count / total`, preceded (in descending probability order) by symbols
//! whose probabilities add up to `c`, the code is the first `ceil(-log2(p))` fractional bits of `c`.
//!
//! Both quantities are rationals over `total`, so they are evaluated here on the integer counts: the length
//! is the smallest `L` with `count * 2^L >= total`, and each expansion step doubles the numerator and emits
//! a 1 when it reaches `total`. This yields exactly the bits of the real-valued formula, with no
//! floating-point drift.
//!

use log::trace;

use super::dictionary::{Code, DictEntry};
use crate::tools::freq_count::SymbolWeight;

/// Code length for a symbol seen `count` times out of `total`: `ceil(-log2(count / total))`.
/// A symbol that makes up the whole input gets length 0.
pub fn code_len(count: u64, total: u64) -> usize {
    let (count, total) = (count as u128, total as u128);
    let mut len = 0;
    while len < u64::BITS as usize && count << len < total {
        len += 1;
    }
    len
}

/// First `len` bits of the binary expansion of `cumulative / total` (which must be below 1).
pub fn expand(cumulative: u64, total: u64, len: usize) -> Code {
    let total = total as u128;
    let mut frac = cumulative as u128;
    let mut bits = Vec::with_capacity(len);
    for _ in 0..len {
        frac <<= 1;
        let bit = frac >= total;
        if bit {
            frac -= total;
        }
        bits.push(bit);
    }
    Code::new(bits)
}

/// Build one code per symbol. `weights` must be ordered by descending count and `total` must be
/// their sum. The result is ordered by ascending code length; equal lengths keep the input order.
pub fn codes_from_weights(weights: &[SymbolWeight], total: u64) -> Vec<DictEntry> {
    let mut cumulative = 0_u64;
    let mut entries = weights
        .iter()
        .map(|w| {
            let code = expand(cumulative, total, code_len(w.count, total));
            trace!("Symbol {:#04x} x{}: {}", w.symbol, w.count, code);
            cumulative += w.count;
            DictEntry {
                code,
                symbol: w.symbol,
            }
        })
        .collect::<Vec<DictEntry>>();

    entries.sort_by_key(|e| e.code.len());
    entries
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::FrequencyModel;

    fn build(data: &[u8]) -> Vec<DictEntry> {
        let model = FrequencyModel::from_data(data);
        codes_from_weights(model.weights(), model.total())
    }

    fn code_of(entries: &[DictEntry], symbol: u8) -> String {
        entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.code.to_string())
            .unwrap()
    }

    #[test]
    fn code_len_test() {
        assert_eq!(code_len(1, 1), 0);
        assert_eq!(code_len(1, 2), 1);
        assert_eq!(code_len(5, 11), 2);
        assert_eq!(code_len(2, 11), 3);
        assert_eq!(code_len(1, 11), 4);
        assert_eq!(code_len(1, 8), 3);
        assert_eq!(code_len(1, u32::MAX as u64), 32);
    }

    #[test]
    fn expand_test() {
        assert_eq!(expand(0, 4, 2).to_string(), "00");
        assert_eq!(expand(3, 4, 2).to_string(), "11");
        assert_eq!(expand(1, 3, 4).to_string(), "0101");
        assert_eq!(expand(7, 11, 3).to_string(), "101");
    }

    #[test]
    fn abracadabra_test() {
        // a:5 b:2 r:2 c:1 d:1 out of 11
        let entries = build(b"abracadabra");
        assert_eq!(code_of(&entries, b'a'), "00");
        assert_eq!(code_of(&entries, b'b'), "011");
        assert_eq!(code_of(&entries, b'r'), "101");
        assert_eq!(code_of(&entries, b'c'), "1101");
        assert_eq!(code_of(&entries, b'd'), "1110");
        let lens = entries.iter().map(|e| e.code.len()).collect::<Vec<usize>>();
        assert_eq!(lens, vec![2, 3, 3, 4, 4]);
    }

    #[test]
    fn empty_alphabet_test() {
        assert!(codes_from_weights(&[], 0).is_empty());
    }

    #[test]
    fn single_symbol_test() {
        let entries = build(b"aaaaaa");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].code.is_empty());
        assert_eq!(entries[0].symbol, b'a');
    }

    #[test]
    fn two_symbol_test() {
        let entries = build(b"abababab");
        assert_eq!(code_of(&entries, b'a'), "0");
        assert_eq!(code_of(&entries, b'b'), "1");
    }

    #[test]
    fn prefix_free_test() {
        let data = (0..=255_u8)
            .flat_map(|s| std::iter::repeat(s).take(1 + (s as usize * 7) % 23))
            .collect::<Vec<u8>>();
        let entries = build(&data);
        assert_eq!(entries.len(), 256);
        for (i, a) in entries.iter().enumerate() {
            for b in entries.iter().skip(i + 1) {
                assert!(!a.code.is_prefix_of(&b.code), "{} / {}", a.code, b.code);
                assert!(!b.code.is_prefix_of(&a.code), "{} / {}", b.code, a.code);
            }
        }
    }

    #[test]
    fn sorted_by_length_test() {
        let entries = build(b"mississippi river banks");
        assert!(entries.windows(2).all(|w| w[0].code.len() <= w[1].code.len()));
    }
}
