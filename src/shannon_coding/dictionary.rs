//! The dictionary is the ordered symbol/code table shared by encoder and decoder.
//!
//! File layout (all integers little-endian):
//!
//! ```text
//! u16  entry count
//! per entry:
//!   u8                   code length in bits
//!   ceil(length/8) bytes code bits, most significant bit first, last byte zero padded
//!   u8                   symbol
//! ```
//!
//! Entries are stored in the order the code builder produced them (ascending code length), so the same
//! input always produces the same file.
//!

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info};
use rustc_hash::FxHashMap;

use super::shannon_code_from_weights::codes_from_weights;
use crate::error::{Error, Result};
use crate::tools::freq_count::FrequencyModel;

/// The bits of one symbol's code, first bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a proper prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len() < other.len() && other.bits.starts_with(&self.bits)
    }

    /// Pack the bits into whole bytes, most significant bit first, padding the last byte with zeros.
    pub fn pack(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0_u8, |byte, (i, &bit)| byte | ((bit as u8) << (7 - i)))
            })
            .collect()
    }

    /// Inverse of pack(): take `len` bits from the front of `bytes`.
    pub fn unpack(bytes: &[u8], len: usize) -> Self {
        let bits = (0..len)
            .map(|i| bytes[i / 8] & (0x80 >> (i % 8)) != 0)
            .collect();
        Self { bits }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.bits
            .iter()
            .try_for_each(|&bit| write!(f, "{}", if bit { '1' } else { '0' }))
    }
}

/// One row of the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub code: Code,
    pub symbol: u8,
}

/// Ordered symbol <-> code table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
}

/// Split `n` bytes off the front of `rest`, or report what was being read when the data ran out.
fn take<'a>(rest: &mut &'a [u8], n: usize, what: &str) -> Result<&'a [u8]> {
    if rest.len() < n {
        return Err(Error::Format(format!(
            "truncated while reading {} ({} of {} bytes present)",
            what,
            rest.len(),
            n
        )));
    }
    let (head, tail) = rest.split_at(n);
    *rest = tail;
    Ok(head)
}

impl Dictionary {
    /// Wrap an already ordered list of entries.
    pub fn new(entries: Vec<DictEntry>) -> Self {
        Self { entries }
    }

    /// Build the Shannon-Fano code for the alphabet of `model`.
    pub fn from_model(model: &FrequencyModel) -> Self {
        Self {
            entries: codes_from_weights(model.weights(), model.total()),
        }
    }

    /// Count the symbols of `data` and build their code.
    pub fn from_data(data: &[u8]) -> Self {
        Self::from_model(&FrequencyModel::from_data(data))
    }

    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The symbol of a one-entry dictionary. Such a dictionary needs no code bits at all.
    pub fn single_symbol(&self) -> Option<u8> {
        match self.entries.as_slice() {
            [only] => Some(only.symbol),
            _ => None,
        }
    }

    /// Symbol -> code lookup table for encoding.
    pub fn code_map(&self) -> FxHashMap<u8, &Code> {
        self.entries.iter().map(|e| (e.symbol, &e.code)).collect()
    }

    /// Average code length in bits per symbol when coding the input `model` was built from.
    pub fn average_code_len(&self, model: &FrequencyModel) -> f64 {
        if model.total() == 0 {
            return 0.0;
        }
        let map = self.code_map();
        let bits: u64 = model
            .weights()
            .iter()
            .map(|w| w.count * map.get(&w.symbol).map_or(0, |c| c.len()) as u64)
            .sum();
        bits as f64 / model.total() as f64
    }

    /// Serialize into the binary dictionary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let count = u16::try_from(self.entries.len()).map_err(|_| {
            Error::Format(format!("{} entries do not fit the u16 entry count", self.entries.len()))
        })?;
        let mut out = Vec::with_capacity(2 + self.entries.len() * 3);
        out.extend_from_slice(&count.to_le_bytes());
        for entry in &self.entries {
            let len = u8::try_from(entry.code.len()).map_err(|_| {
                Error::Format(format!(
                    "code of {} bits for symbol {:#04x} does not fit the u8 length field",
                    entry.code.len(),
                    entry.symbol
                ))
            })?;
            out.push(len);
            out.extend_from_slice(&entry.code.pack());
            out.push(entry.symbol);
        }
        Ok(out)
    }

    /// Parse the binary dictionary format. The data must hold exactly the declared entries.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut rest = bytes;
        let header = take(&mut rest, 2, "entry count")?;
        let count = u16::from_le_bytes([header[0], header[1]]) as usize;

        let mut entries = Vec::with_capacity(count.min(256));
        for i in 0..count {
            let len = take(&mut rest, 1, &format!("code length of entry {}", i))?[0] as usize;
            let packed = take(&mut rest, (len + 7) / 8, &format!("code of entry {}", i))?;
            let symbol = take(&mut rest, 1, &format!("symbol of entry {}", i))?[0];
            entries.push(DictEntry {
                code: Code::unpack(packed, len),
                symbol,
            });
        }
        if !rest.is_empty() {
            return Err(Error::Format(format!(
                "{} trailing bytes after {} entries",
                rest.len(),
                count
            )));
        }
        Ok(Self { entries })
    }

    /// Write the binary dictionary format to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes()?)?;
        Ok(())
    }

    /// Read a complete binary dictionary from `reader`.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Write the dictionary file at `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        info!("Wrote {} dictionary entries to {}.", self.len(), path.display());
        Ok(())
    }

    /// Read the dictionary file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dict = Self::read_from(&mut BufReader::new(File::open(path)?))?;
        debug!("Read {} dictionary entries from {}.", dict.len(), path.display());
        Ok(dict)
    }
}
