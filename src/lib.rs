//! # Huffman Prefix Coding
//!
//! *Optimal variable-length codes for a known symbol distribution.*
//!
//! ## Intuition First
//!
//! Morse code gives `E` a single dot and `Q` four symbols: frequent letters
//! get short codes. Huffman coding makes that idea exact. Put every symbol in
//! a pile weighted by how often it occurs, repeatedly tie the two lightest
//! piles together, and read each symbol's code off the path from the top of
//! the finished tree down to it.
//!
//! ## The Problem
//!
//! Fixed-width codes spend 8 bits on every byte no matter how skewed the
//! data is. A variable-length code can do better, but only if it stays
//! *prefix-free*: no codeword may start another, or the decoder cannot tell
//! where one symbol ends.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down splits, not always optimal
//! 1952  Huffman     Bottom-up merging: provably optimal prefix codes
//! 1973  Faller      Adaptive Huffman coding
//! 1989  Deutsch     DEFLATE (zip, gzip, PNG) pairs LZ77 with Huffman
//! ```
//!
//! ## Mathematical Formulation
//!
//! Given symbols with frequencies $f_s$, Huffman's construction minimizes
//! the total encoded length
//!
//! ```text
//! L = Σ_s f_s · len(code_s)
//! ```
//!
//! over all prefix codes. $L$ equals the sum of the frequencies of the
//! internal nodes created while merging.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n \log n)$ for $n$ symbols (heap merges).
//! - **Encode**: $O(\text{output bits})$ with a table lookup per symbol.
//! - **Decode**: $O(\text{input bits})$, one tree step per bit.
//!
//! ## Failure Modes
//!
//! 1. **Ties**: equal frequencies can produce different, equally optimal
//!    trees. Code strings may differ between builds; total length does not.
//! 2. **Unary alphabets**: a one-symbol tree has no branches. It is given the
//!    code `0` so every occurrence still costs one bit.
//! 3. **Skewed distributions**: Fibonacci-like weights produce trees as deep
//!    as the alphabet is large. Traversals here use explicit stacks.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`MinHeap`]: frequency-ordered priority store used during construction.
//! - [`HuffmanTree`]: the merged tree, built from `(symbol, frequency)` pairs.
//! - [`CodeTable`]: symbol to code bits, derived from a tree.
//! - [`encode`] / [`decode`] and the [`HuffmanEncoder`] / [`HuffmanDecoder`]
//!   wrappers.
//! - [`bits`]: text and packed-byte forms of a bitstring.
//!
//! ```
//! use huffcode::{build_code, decode, encode};
//!
//! let alphabet = [(b'a', 5), (b'b', 9), (b'c', 12), (b'd', 13), (b'e', 16), (b'f', 45)];
//! let (tree, table) = build_code(&alphabet)?;
//! assert_eq!(table.weighted_length(&alphabet)?, 224);
//!
//! let bits = encode(b"cafe", &table)?;
//! assert_eq!(decode(&tree, &bits)?, b"cafe");
//! # Ok::<(), huffcode::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cormen, T. H., et al. *Introduction to Algorithms*, §16.3 "Huffman codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod code;
pub mod error;
pub mod heap;
pub mod huffman;
pub mod tree;

pub use code::CodeTable;
pub use error::{Error, MalformedKind, Result};
pub use heap::MinHeap;
pub use huffman::{build_code, decode, encode, HuffmanDecoder, HuffmanEncoder};
pub use tree::{count_frequencies, HuffmanTree, Node};
