//! Code tables derived from a finished tree.
//!
//! Walking left appends a `0` bit, walking right a `1`. A tree whose root is
//! a leaf gets the one-bit code `[0]` so that every occurrence still costs
//! exactly one bit.

use std::collections::BTreeMap;

use tracing::debug;

use crate::bits::to_bit_string;
use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, Node};

/// Mapping from symbol to its code bits (each element `0` or `1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Vec<u8>>,
}

impl CodeTable {
    /// Assign a code to every leaf under `root`.
    pub fn generate(root: &Node) -> Self {
        let mut codes = BTreeMap::new();

        if let Some(symbol) = root.symbol() {
            codes.insert(symbol, vec![0]);
        } else {
            let mut stack = vec![(root, Vec::new())];
            while let Some((node, prefix)) = stack.pop() {
                match node.children() {
                    Some((left, right)) => {
                        let mut right_prefix = prefix.clone();
                        right_prefix.push(1);
                        stack.push((right, right_prefix));

                        let mut left_prefix = prefix;
                        left_prefix.push(0);
                        stack.push((left, left_prefix));
                    }
                    None => {
                        if let Some(symbol) = node.symbol() {
                            codes.insert(symbol, prefix);
                        }
                    }
                }
            }
        }

        let table = Self { codes };
        debug!(
            entries = table.len(),
            max_code_len = table.max_code_len(),
            "generated code table"
        );
        table
    }

    /// Code table for `tree`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        Self::generate(tree.root())
    }

    /// Code bits for `symbol`, or `None` if it is not in the alphabet.
    pub fn get(&self, symbol: u8) -> Option<&[u8]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    /// Code for `symbol` as a `'0'`/`'1'` string.
    pub fn code_string(&self, symbol: u8) -> Option<String> {
        self.get(symbol).map(to_bit_string)
    }

    /// True if `symbol` has a code.
    pub fn contains(&self, symbol: u8) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the table is empty. Never the case for a generated table.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_slice()))
    }

    /// Length of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Total encoded length in bits of `alphabet`: the sum of
    /// `frequency * code length`.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` if a symbol has no code, or
    /// `Error::InvalidAlphabet` if the total does not fit in `u64`.
    pub fn weighted_length(&self, alphabet: &[(u8, u64)]) -> Result<u64> {
        alphabet.iter().try_fold(0u64, |acc, &(symbol, freq)| {
            let code = self.get(symbol).ok_or(Error::UnknownSymbol(symbol))?;
            freq.checked_mul(code.len() as u64)
                .and_then(|bits| acc.checked_add(bits))
                .ok_or_else(|| Error::InvalidAlphabet("weighted length overflows u64".into()))
        })
    }

    /// True if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<&[u8]> = self.codes.values().map(Vec::as_slice).collect();
        sorted.sort_unstable();
        // In lexicographic order a code and any extension of it are separated
        // only by other extensions, so checking neighbours is enough.
        sorted.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}
