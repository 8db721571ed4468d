//! Huffman encoding and decoding.
//!
//! The encoder concatenates per-symbol codes from a [`CodeTable`]; the
//! decoder walks the [`HuffmanTree`] one bit at a time, emitting a symbol and
//! returning to the root whenever it lands on a leaf.

use tracing::trace;

use crate::code::CodeTable;
use crate::error::{malformed, Error, MalformedKind, Result};
use crate::tree::HuffmanTree;

/// Build a tree and its code table from `(symbol, frequency)` pairs.
///
/// # Errors
/// Returns `Error::InvalidAlphabet` if the alphabet is empty, repeats a
/// symbol, or contains a zero frequency.
pub fn build_code(alphabet: &[(u8, u64)]) -> Result<(HuffmanTree, CodeTable)> {
    let tree = HuffmanTree::build(alphabet)?;
    let table = CodeTable::from_tree(&tree);
    Ok((tree, table))
}

/// Encode `data` as the concatenation of each symbol's code.
///
/// # Errors
/// Returns `Error::UnknownSymbol` for the first symbol without a code. No
/// partial output is returned.
pub fn encode(data: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(data.len());
    for &s in data {
        let code = table.get(s).ok_or(Error::UnknownSymbol(s))?;
        bits.extend_from_slice(code);
    }
    trace!(symbols = data.len(), bits = bits.len(), "encoded");
    Ok(bits)
}

/// Decode `bits` by walking `tree`.
///
/// A single-symbol tree decodes every bit, whatever its value, as one
/// occurrence of that symbol.
///
/// # Errors
/// Returns `Error::MalformedBitstring` if a bit is neither 0 nor 1, or if
/// the input ends partway through a code.
pub fn decode(tree: &HuffmanTree, bits: &[u8]) -> Result<Vec<u8>> {
    let root = tree.root();
    let mut out = Vec::new();

    if let Some(symbol) = root.symbol() {
        for (position, &bit) in bits.iter().enumerate() {
            check_bit(position, bit)?;
            out.push(symbol);
        }
        return Ok(out);
    }

    let mut curr = root;
    let mut code_start = 0;
    for (position, &bit) in bits.iter().enumerate() {
        check_bit(position, bit)?;
        // `curr` is internal here: every leaf hit resets to the root, and the
        // root is internal on this path.
        let (left, right) = curr
            .children()
            .ok_or_else(|| malformed(position, MalformedKind::Truncated))?;
        curr = if bit == 0 { left } else { right };

        if let Some(symbol) = curr.symbol() {
            out.push(symbol);
            curr = root;
            code_start = position + 1;
        }
    }

    if code_start != bits.len() {
        return Err(malformed(code_start, MalformedKind::Truncated));
    }
    trace!(bits = bits.len(), symbols = out.len(), "decoded");
    Ok(out)
}

fn check_bit(position: usize, bit: u8) -> Result<()> {
    match bit {
        0 | 1 => Ok(()),
        other => Err(malformed(position, MalformedKind::InvalidBit(other))),
    }
}

/// Huffman encoder.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder {
    table: CodeTable,
}

impl HuffmanEncoder {
    /// Create a new Huffman encoder from a dense count array indexed by
    /// symbol value.
    ///
    /// # Errors
    /// Returns `Error::InvalidAlphabet` if no count is positive.
    pub fn new(counts: &[u64]) -> Result<Self> {
        let tree = HuffmanTree::from_counts(counts)?;
        Ok(Self::from_tree(&tree))
    }

    /// Encoder using the codes of `tree`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        Self {
            table: CodeTable::from_tree(tree),
        }
    }

    /// Encoder over an existing code table.
    pub fn with_table(table: CodeTable) -> Self {
        Self { table }
    }

    /// The code table in use.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Encode a symbol sequence into a bit stream.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` if `data` holds a symbol outside the
    /// alphabet.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        encode(data, &self.table)
    }
}

/// Huffman decoder.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder {
    tree: HuffmanTree,
}

impl HuffmanDecoder {
    /// Create a new Huffman decoder from a dense count array indexed by
    /// symbol value.
    ///
    /// # Errors
    /// Returns `Error::InvalidAlphabet` if no count is positive.
    pub fn new(counts: &[u64]) -> Result<Self> {
        Ok(Self {
            tree: HuffmanTree::from_counts(counts)?,
        })
    }

    /// Decoder over an existing tree.
    pub fn from_tree(tree: HuffmanTree) -> Self {
        Self { tree }
    }

    /// The tree in use.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Decode a bit stream into a symbol sequence.
    ///
    /// # Errors
    /// Returns `Error::MalformedBitstring` on invalid or truncated input.
    pub fn decode(&self, bits: &[u8]) -> Result<Vec<u8>> {
        decode(&self.tree, bits)
    }

    /// Release the decoder and its tree.
    pub fn into_tree(self) -> HuffmanTree {
        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_counts_cover_every_byte() {
        let counts: Vec<u64> = (0..256u64).map(|s| 1 + s % 17).collect();
        let encoder = HuffmanEncoder::new(&counts).unwrap();
        let decoder = HuffmanDecoder::new(&counts).unwrap();
        assert_eq!(encoder.table().len(), 256);
        assert_eq!(decoder.tree().symbol_count(), 256);

        let data: Vec<u8> = (0..=255u8).rev().chain(0..=255u8).collect();
        let bits = encoder.encode(&data).unwrap();
        assert_eq!(decoder.decode(&bits).unwrap(), data);

        let total: usize = data
            .iter()
            .map(|&s| encoder.table().get(s).map_or(0, <[u8]>::len))
            .sum();
        assert_eq!(bits.len(), total);
    }

    #[test]
    fn test_abracadabra_is_23_bits() {
        let counts: Vec<u64> = {
            let mut c = vec![0u64; 256];
            for &b in b"abracadabra" {
                c[b as usize] += 1;
            }
            c
        };
        // Merges 1+1, 2+2, 2+4, 5+6 sum to 23.
        let bits = HuffmanEncoder::new(&counts)
            .unwrap()
            .encode(b"abracadabra")
            .unwrap();
        assert_eq!(bits.len(), 23);
    }

    #[test]
    fn test_encoded_length_is_sum_of_code_lengths() {
        let (_, table) = build_code(&[(b'x', 1), (b'y', 1), (b'z', 2)]).unwrap();
        let bits = encode(b"zzxy", &table).unwrap();
        assert_eq!(bits.len(), 1 + 1 + 2 + 2);
    }

    #[test]
    fn test_empty_input() {
        let (tree, table) = build_code(&[(1, 1), (2, 1)]).unwrap();
        assert!(encode(&[], &table).unwrap().is_empty());
        assert!(decode(&tree, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_symbol() {
        let (tree, table) = build_code(&[(b'k', 4)]).unwrap();
        let bits = encode(b"kkkkk", &table).unwrap();
        assert_eq!(bits, vec![0; 5]);
        assert_eq!(decode(&tree, &[0, 1, 1]).unwrap(), b"kkk".to_vec());
        assert_eq!(
            decode(&tree, &[0, 7]),
            Err(Error::MalformedBitstring {
                position: 1,
                kind: MalformedKind::InvalidBit(7),
            })
        );
    }

    #[test]
    fn test_unknown_symbol() {
        let (_, table) = build_code(&[(b'a', 1), (b'b', 2)]).unwrap();
        assert_eq!(encode(b"abc", &table), Err(Error::UnknownSymbol(b'c')));
    }

    #[test]
    fn test_truncated_code() {
        // Four equal weights: every code is two bits.
        let (tree, _) = build_code(&[(1, 1), (2, 1), (3, 1), (4, 1)]).unwrap();
        assert_eq!(
            decode(&tree, &[0]),
            Err(Error::MalformedBitstring {
                position: 0,
                kind: MalformedKind::Truncated,
            })
        );
        assert_eq!(
            decode(&tree, &[0, 1, 1]),
            Err(Error::MalformedBitstring {
                position: 2,
                kind: MalformedKind::Truncated,
            })
        );
    }

    #[test]
    fn test_invalid_bit() {
        let (tree, _) = build_code(&[(1, 1), (2, 1)]).unwrap();
        assert_eq!(
            decode(&tree, &[1, 0, 2]),
            Err(Error::MalformedBitstring {
                position: 2,
                kind: MalformedKind::InvalidBit(2),
            })
        );
    }
}
