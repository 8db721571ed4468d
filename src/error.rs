//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The alphabet cannot produce a code: empty, duplicate symbol,
    /// zero frequency, or a total frequency that does not fit in `u64`.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// A symbol being encoded has no entry in the code table.
    #[error("unknown symbol: {0:#04x}")]
    UnknownSymbol(u8),

    /// The bitstring does not describe a sequence of complete codes.
    #[error("malformed bitstring at bit {position}: {kind}")]
    MalformedBitstring {
        /// Index of the offending bit. For a truncated stream this is the
        /// first bit of the incomplete trailing code.
        position: usize,
        /// What went wrong at `position`.
        kind: MalformedKind,
    },

    /// `extract_min` was called on an empty priority store.
    ///
    /// Tree construction never does this; seeing it means the store was
    /// driven incorrectly by its caller.
    #[error("extract from empty priority store")]
    EmptyStore,
}

/// Reason a bitstring was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// A bit element was neither 0 nor 1.
    #[error("invalid bit value {0}")]
    InvalidBit(u8),

    /// A textual bitstring held a character other than '0' or '1'.
    #[error("invalid bit character {0:?}")]
    InvalidChar(char),

    /// The input ended partway through a code.
    #[error("truncated code")]
    Truncated,
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn malformed(position: usize, kind: MalformedKind) -> Error {
    Error::MalformedBitstring { position, kind }
}
