use log::{debug, info};

use crate::bitstream::bitwriter::BitWriter;
use crate::error::{Error, Result};
use crate::shannon_coding::dictionary::Dictionary;
use crate::tools::cli::ShannonOpts;
use crate::tools::freq_count::FrequencyModel;

/// Encode `data` with the codes of `dict` into a payload (bit-count header plus packed codes).
///
/// An empty input or an empty dictionary gives a header declaring zero bits. A one-entry dictionary
/// writes no code bits; the header then holds the number of input symbols.
pub fn encode(data: &[u8], dict: &Dictionary) -> Result<Vec<u8>> {
    if data.is_empty() || dict.is_empty() {
        return BitWriter::header_only(0);
    }

    if let Some(symbol) = dict.single_symbol() {
        if let Some(&other) = data.iter().find(|&&b| b != symbol) {
            return Err(Error::UnknownSymbol(other));
        }
        return BitWriter::header_only(data.len() as u64);
    }

    let codes = dict.code_map();
    let mut bw = BitWriter::new(data.len());
    for &byte in data {
        let code = codes.get(&byte).ok_or(Error::UnknownSymbol(byte))?;
        bw.out_bits(code.bits());
    }
    debug!("Packed {} symbols into {} bits.", data.len(), bw.loc());
    bw.finish()
}

/// Encode `input` with a code built from its own symbol frequencies. The code table is saved to
/// the dictionary file named in `opts`; the returned payload is what goes to the output.
pub fn compress(opts: &ShannonOpts, input: &[u8]) -> Result<Vec<u8>> {
    let model = FrequencyModel::from_data(input);
    let dict = Dictionary::from_model(&model);
    info!(
        "Read {} bytes with an alphabet of {} symbols.",
        model.total(),
        model.len()
    );
    info!(
        "Entropy is {:.4} bits/symbol, average code length is {:.4} bits/symbol.",
        model.entropy(),
        dict.average_code_len(&model)
    );

    dict.save(&opts.dictionary)?;
    let payload = encode(input, &dict)?;
    info!(
        "Encoded {} bytes into {} bytes.",
        input.len(),
        payload.len()
    );
    Ok(payload)
}
