/// One symbol of the alphabet together with how often it occurs in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolWeight {
    pub symbol: u8,
    pub count: u64,
}

/// Returns a frequency count of the input data, indexed by byte value.
pub fn freqs(data: &[u8]) -> Vec<u64> {
    let mut freqs = vec![0_u64; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// Empirical probability model of an input: the observed alphabet ordered by descending
/// count, equal counts ordered by ascending symbol value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyModel {
    weights: Vec<SymbolWeight>,
    total: u64,
}

impl FrequencyModel {
    /// Count every byte of `data`. Empty input gives an empty alphabet.
    pub fn from_data(data: &[u8]) -> Self {
        let mut weights = freqs(data)
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| SymbolWeight {
                symbol: symbol as u8,
                count,
            })
            .collect::<Vec<SymbolWeight>>();
        // Stable sort keeps ascending symbol order among equal counts.
        weights.sort_by(|a, b| b.count.cmp(&a.count));
        Self {
            weights,
            total: data.len() as u64,
        }
    }

    /// The alphabet, most probable symbol first.
    pub fn weights(&self) -> &[SymbolWeight] {
        &self.weights
    }

    /// Length of the input the model was built from.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Size of the alphabet.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Probability of each symbol (count / total), in model order.
    pub fn probabilities(&self) -> Vec<(u8, f64)> {
        self.weights
            .iter()
            .map(|w| (w.symbol, w.count as f64 / self.total as f64))
            .collect()
    }

    /// Shannon entropy of the input in bits per symbol.
    pub fn entropy(&self) -> f64 {
        self.probabilities()
            .iter()
            .map(|&(_, p)| -p * p.log2())
            .sum::<f64>()
            .max(0.0)
    }
}
