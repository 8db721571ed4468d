//! Bitstring helpers.
//!
//! Encoded output is a sequence of bit elements, each `0` or `1`. These
//! helpers move between that form, the textual `"0101"` form, and bytes
//! packed MSB-first.

use bitvec::prelude::*;

use crate::error::{malformed, MalformedKind, Result};

/// Render bits as a `'0'`/`'1'` string. Elements other than 0 print as `'1'`.
pub fn to_bit_string(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

/// Parse a `'0'`/`'1'` string into bits.
///
/// # Errors
/// Returns `Error::MalformedBitstring` at the first other character.
pub fn parse_bit_string(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(i, c)| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(malformed(i, MalformedKind::InvalidChar(other))),
        })
        .collect()
}

/// Pack bits into bytes, most significant bit first. The final byte is
/// zero-padded; keep `bits.len()` to unpack.
///
/// # Errors
/// Returns `Error::MalformedBitstring` if an element is not 0 or 1.
pub fn pack_bits(bits: &[u8]) -> Result<Vec<u8>> {
    let mut packed: BitVec<u8, Msb0> = BitVec::with_capacity(bits.len());
    for (i, &bit) in bits.iter().enumerate() {
        match bit {
            0 => packed.push(false),
            1 => packed.push(true),
            other => return Err(malformed(i, MalformedKind::InvalidBit(other))),
        }
    }
    packed.set_uninitialized(false);
    Ok(packed.into_vec())
}

/// Unpack the first `bit_count` bits of `bytes`, most significant bit first.
///
/// # Errors
/// Returns `Error::MalformedBitstring` if `bytes` holds fewer than
/// `bit_count` bits.
pub fn unpack_bits(bytes: &[u8], bit_count: usize) -> Result<Vec<u8>> {
    let view = BitSlice::<u8, Msb0>::from_slice(bytes);
    if bit_count > view.len() {
        return Err(malformed(view.len(), MalformedKind::Truncated));
    }
    Ok(view[..bit_count].iter().by_vals().map(u8::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_text_form() {
        assert_eq!(to_bit_string(&[0, 1, 1, 0]), "0110");
        assert_eq!(parse_bit_string("0110").unwrap(), vec![0, 1, 1, 0]);
        assert_eq!(parse_bit_string("").unwrap(), Vec::<u8>::new());
        assert_eq!(
            parse_bit_string("01x"),
            Err(Error::MalformedBitstring {
                position: 2,
                kind: MalformedKind::InvalidChar('x'),
            })
        );
    }

    #[test]
    fn test_pack_msb_first() {
        let bits = [1, 0, 1, 1, 0, 0, 0, 1, 1, 1];
        let packed = pack_bits(&bits).unwrap();
        assert_eq!(packed, vec![0b1011_0001, 0b1100_0000]);
        assert_eq!(unpack_bits(&packed, bits.len()).unwrap(), bits.to_vec());
    }

    #[test]
    fn test_pack_pads_with_zeros() {
        assert_eq!(pack_bits(&[1, 1, 1]).unwrap(), vec![0b1110_0000]);
        assert_eq!(pack_bits(&[1; 8]).unwrap(), vec![0xff]);
        assert!(pack_bits(&[]).unwrap().is_empty());
        assert_eq!(unpack_bits(&[0b0100_0000, 0xff], 3).unwrap(), vec![0, 1, 0]);
    }

    #[test]
    fn test_pack_rejects_non_bits() {
        assert_eq!(
            pack_bits(&[0, 1, 2]),
            Err(Error::MalformedBitstring {
                position: 2,
                kind: MalformedKind::InvalidBit(2),
            })
        );
    }

    #[test]
    fn test_unpack_too_short() {
        assert_eq!(
            unpack_bits(&[0xff], 9),
            Err(Error::MalformedBitstring {
                position: 8,
                kind: MalformedKind::Truncated,
            })
        );
    }
}
