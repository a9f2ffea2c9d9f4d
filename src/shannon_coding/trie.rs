//! Decode trie rebuilt from a dictionary for each decode run.
//!
//! Nodes live in one Vec and refer to their children by index. A node that ends a code carries an explicit
//! terminal flag, so symbol 0 is an ordinary symbol.

use log::trace;

use super::dictionary::Dictionary;
use crate::error::{Error, Result};

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child index for bit 0 and bit 1.
    children: [Option<usize>; 2],
    terminal: bool,
    symbol: u8,
}

/// Binary trie mapping code bit paths to symbols.
#[derive(Debug)]
pub struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

impl DecodeTrie {
    /// Build the trie for `dict`, checking that its codes form a usable prefix-free set:
    /// every code non-empty, no symbol listed twice, and no code a prefix of another.
    pub fn build(dict: &Dictionary) -> Result<Self> {
        let mut nodes = vec![TrieNode::default()];
        let mut seen = [false; 256];

        for entry in dict.entries() {
            if entry.code.is_empty() {
                return Err(Error::Format(format!(
                    "empty code for symbol {:#04x} in a dictionary of {} entries",
                    entry.symbol,
                    dict.len()
                )));
            }
            if std::mem::replace(&mut seen[entry.symbol as usize], true) {
                return Err(Error::Format(format!(
                    "symbol {:#04x} appears twice",
                    entry.symbol
                )));
            }

            let mut node = ROOT;
            for &bit in entry.code.bits() {
                if nodes[node].terminal {
                    return Err(Error::Format(format!(
                        "code {} of symbol {:#04x} extends the code of symbol {:#04x}",
                        entry.code, entry.symbol, nodes[node].symbol
                    )));
                }
                let next = nodes[node].children[bit as usize];
                node = match next {
                    Some(child) => child,
                    None => {
                        nodes.push(TrieNode::default());
                        let child = nodes.len() - 1;
                        nodes[node].children[bit as usize] = Some(child);
                        child
                    }
                };
            }
            let leaf = &mut nodes[node];
            if leaf.terminal || leaf.children.iter().any(Option::is_some) {
                return Err(Error::Format(format!(
                    "code {} of symbol {:#04x} is not prefix-free",
                    entry.code, entry.symbol
                )));
            }
            leaf.terminal = true;
            leaf.symbol = entry.symbol;
        }

        trace!("Built decode trie with {} nodes.", nodes.len());
        Ok(Self { nodes })
    }

    /// Start state of every code.
    pub fn root(&self) -> usize {
        ROOT
    }

    /// Follow `bit` from `node`. None if no code continues that way.
    pub fn step(&self, node: usize, bit: bool) -> Option<usize> {
        self.nodes[node].children[bit as usize]
    }

    /// The symbol whose code ends at `node`, if any.
    pub fn symbol(&self, node: usize) -> Option<u8> {
        let node = &self.nodes[node];
        node.terminal.then(|| node.symbol)
    }

    /// Number of nodes, root included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
