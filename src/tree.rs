//! Huffman tree construction.
//!
//! Leaves are seeded into a [`MinHeap`]; the two lightest nodes are merged
//! until a single root remains. The first node extracted becomes the left
//! child, the second the right child.

use tracing::debug;

use crate::error::{Error, Result};
use crate::heap::MinHeap;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its frequency.
    Leaf {
        /// Symbol value.
        symbol: u8,
        /// Occurrence count.
        freq: u64,
    },
    /// A merge of two subtrees.
    Internal {
        /// Subtree reached by a `0` bit.
        left: Box<Node>,
        /// Subtree reached by a `1` bit.
        right: Box<Node>,
        /// Sum of both children's frequencies.
        freq: u64,
    },
}

impl Node {
    /// Create a leaf.
    pub fn leaf(symbol: u8, freq: u64) -> Self {
        Node::Leaf { symbol, freq }
    }

    /// Merge two nodes under a new internal node, `left` first.
    ///
    /// The caller guarantees the frequency sum fits in `u64`.
    pub fn merge(left: Node, right: Node) -> Self {
        let freq = left.freq() + right.freq();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            freq,
        }
    }

    /// Frequency of this node.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// `(left, right)` for internal nodes, `None` for leaves.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left.as_ref(), right.as_ref())),
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn detach_children(&mut self, into: &mut Vec<Node>) {
        if let Node::Internal { left, right, .. } = self {
            into.push(std::mem::replace(&mut **left, Node::leaf(0, 0)));
            into.push(std::mem::replace(&mut **right, Node::leaf(0, 0)));
        }
    }
}

// Unbalanced trees can be as deep as the alphabet is large; tear them down
// with an explicit stack instead of recursive `Box` drops.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// A finished Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
    symbols: usize,
}

impl HuffmanTree {
    /// Build a tree from `(symbol, frequency)` pairs.
    ///
    /// # Errors
    /// Returns `Error::InvalidAlphabet` if `alphabet` is empty, repeats a
    /// symbol, has a zero frequency, or its total frequency overflows `u64`.
    pub fn build(alphabet: &[(u8, u64)]) -> Result<Self> {
        validate(alphabet)?;

        let leaves = alphabet
            .iter()
            .map(|&(symbol, freq)| Node::leaf(symbol, freq))
            .collect();
        let mut heap = MinHeap::build(leaves);

        while heap.len() > 1 {
            let left = heap.extract_min()?;
            let right = heap.extract_min()?;
            heap.insert(Node::merge(left, right));
        }
        let root = heap.extract_min()?;

        let tree = Self {
            root,
            symbols: alphabet.len(),
        };
        debug!(
            symbols = tree.symbols,
            depth = tree.depth(),
            weight = tree.weight(),
            "built huffman tree"
        );
        Ok(tree)
    }

    /// Build a tree from a dense count array indexed by symbol value.
    ///
    /// Zero counts are skipped.
    ///
    /// # Errors
    /// Returns `Error::InvalidAlphabet` if `counts` has more than 256 entries
    /// or no positive count.
    pub fn from_counts(counts: &[u64]) -> Result<Self> {
        if counts.len() > 256 {
            return Err(Error::InvalidAlphabet(format!(
                "{} counts for a 256-symbol alphabet",
                counts.len()
            )));
        }
        let alphabet: Vec<(u8, u64)> = counts
            .iter()
            .enumerate()
            .filter(|(_, &f)| f > 0)
            .map(|(s, &f)| (s as u8, f))
            .collect();
        Self::build(&alphabet)
    }

    /// Build a tree from the byte frequencies of `data`.
    ///
    /// # Errors
    /// Returns `Error::InvalidAlphabet` if `data` is empty.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::build(&count_frequencies(data))
    }

    /// Root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of leaves.
    pub fn symbol_count(&self) -> usize {
        self.symbols
    }

    /// Root frequency: the sum of all symbol frequencies.
    pub fn weight(&self) -> u64 {
        self.root.freq()
    }

    /// Deepest leaf depth. Zero for a single-symbol tree.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                None => max = max.max(depth),
            }
        }
        max
    }

    /// Consume the tree, releasing every node.
    pub fn release(self) {
        drop(self);
    }
}

/// Count byte occurrences in `data`.
///
/// Returns the non-zero counts in ascending symbol order.
pub fn count_frequencies(data: &[u8]) -> Vec<(u8, u64)> {
    let mut counts = [0u64; 256];
    for &b in data {
        counts[b as usize] += 1;
    }
    counts
        .iter()
        .enumerate()
        .filter(|(_, &c)| c > 0)
        .map(|(s, &c)| (s as u8, c))
        .collect()
}

fn validate(alphabet: &[(u8, u64)]) -> Result<()> {
    if alphabet.is_empty() {
        return Err(Error::InvalidAlphabet("empty alphabet".into()));
    }

    let mut seen = [false; 256];
    let mut total = 0u64;
    for &(symbol, freq) in alphabet {
        if seen[symbol as usize] {
            return Err(Error::InvalidAlphabet(format!(
                "duplicate symbol {symbol:#04x}"
            )));
        }
        seen[symbol as usize] = true;

        if freq == 0 {
            return Err(Error::InvalidAlphabet(format!(
                "zero frequency for symbol {symbol:#04x}"
            )));
        }
        total = total
            .checked_add(freq)
            .ok_or_else(|| Error::InvalidAlphabet("total frequency overflows u64".into()))?;
    }
    Ok(())
}
