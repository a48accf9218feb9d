//! Fixed-length bit vectors in least-significant-bit-first order.

use core::fmt;
use core::ops::Index;
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::CodecError;

/// Fixed-length sequence of bits; index 0 is the least significant bit.
///
/// The length is fixed at construction. Operations that derive a new vector
/// (reversal, splitting) return a fresh value instead of resizing in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    /// Returns the all-zero vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Wraps an existing bit sequence.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Expands `value` into exactly `len` bits.
    ///
    /// Fails with [`CodecError::Overflow`] when `value` needs more than `len` bits.
    pub fn from_u64(value: u64, len: usize) -> Result<Self, CodecError> {
        let required = (u64::BITS - value.leading_zeros()) as usize;
        if required > len {
            return Err(CodecError::Overflow {
                required,
                length: len,
            });
        }
        let bits = (0..len).map(|i| i < 64 && (value >> i) & 1 == 1).collect();
        Ok(Self { bits })
    }

    /// Arbitrary-precision counterpart of [`BitVector::from_u64`].
    pub fn from_biguint(value: &BigUint, len: usize) -> Result<Self, CodecError> {
        let required = value.bits() as usize;
        if required > len {
            return Err(CodecError::Overflow {
                required,
                length: len,
            });
        }
        let mut bits = vec![false; len];
        if !value.is_zero() {
            for (slot, digit) in bits.iter_mut().zip(value.to_radix_le(2)) {
                *slot = digit == 1;
            }
        }
        Ok(Self { bits })
    }

    /// Parses a string of `0`/`1` characters, first character is bit 0.
    pub fn from_bit_string(s: &str) -> Result<Self, CodecError> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(CodecError::InvalidBitChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_bits)
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true for the zero-length vector.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Reads bit `index`, if in range.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Writes bit `index`. Panics when out of range, like slice indexing.
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits[index] = value;
    }

    /// Exposes the bits as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Iterates over the bits, least significant first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Decodes the vector as an unsigned machine integer.
    pub fn to_u64(&self) -> Result<u64, CodecError> {
        lsbf_value(&self.bits)
    }

    /// Decodes the vector as a `usize`.
    pub fn to_usize(&self) -> Result<usize, CodecError> {
        let value = self.to_u64()?;
        usize::try_from(value).map_err(|_| CodecError::TooWide(self.highest_set().unwrap_or(0)))
    }

    /// Decodes the vector as an arbitrary-precision integer.
    pub fn to_biguint(&self) -> BigUint {
        let mut value = BigUint::zero();
        for (i, bit) in self.bits.iter().enumerate() {
            if *bit {
                value += BigUint::one() << i;
            }
        }
        value
    }

    /// Returns the vector in reverse order.
    pub fn reversed(&self) -> Self {
        Self {
            bits: self.bits.iter().rev().copied().collect(),
        }
    }

    /// Hamming weight.
    pub fn weight(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// Scalar product over GF(2): XOR of the pairwise ANDs.
    pub fn dot(&self, other: &Self) -> Result<bool, CodecError> {
        if self.len() != other.len() {
            return Err(CodecError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self
            .bits
            .iter()
            .zip(other.bits.iter())
            .fold(false, |acc, (a, b)| acc ^ (*a && *b)))
    }

    /// Splits into the first `mid` bits and the remainder.
    ///
    /// Panics if `mid > len`, like [`slice::split_at`].
    pub fn split_at(&self, mid: usize) -> (Self, Self) {
        let (low, high) = self.bits.split_at(mid);
        (Self::from_bits(low.to_vec()), Self::from_bits(high.to_vec()))
    }

    /// Renders the vector as `0`/`1` characters, bit 0 first.
    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
    }

    fn highest_set(&self) -> Option<usize> {
        self.bits.iter().rposition(|b| *b)
    }
}

impl Index<usize> for BitVector {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.bits[index]
    }
}

impl From<Vec<bool>> for BitVector {
    fn from(bits: Vec<bool>) -> Self {
        Self::from_bits(bits)
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bits(iter.into_iter().collect())
    }
}

impl FromStr for BitVector {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bit_string(s)
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

/// Integer value of an LSBF bit slice (`bits[0]` weighs 1).
pub fn lsbf_value(bits: &[bool]) -> Result<u64, CodecError> {
    let mut value = 0u64;
    for (i, bit) in bits.iter().enumerate() {
        if *bit {
            if i >= 64 {
                return Err(CodecError::TooWide(i));
            }
            value |= 1u64 << i;
        }
    }
    Ok(value)
}

/// Integer value of a slice read in reverse order (`bits[len - 1]` weighs 1).
///
/// Equivalent to `lsbf_value` of the reversed slice, without allocating.
pub fn msbf_value(bits: &[bool]) -> Result<u64, CodecError> {
    let len = bits.len();
    let mut value = 0u64;
    for (i, bit) in bits.iter().enumerate() {
        if *bit {
            let weight = len - 1 - i;
            if weight >= 64 {
                return Err(CodecError::TooWide(weight));
            }
            value |= 1u64 << weight;
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn from_u64_is_lsbf() {
        let v = BitVector::from_u64(6, 4).unwrap();
        assert_eq!(v.as_slice(), &[false, true, true, false]);
        assert_eq!(v.to_u64().unwrap(), 6);
        assert_eq!(v.to_bit_string(), "0110");
    }

    #[test]
    fn from_u64_pads_with_zeros() {
        let v = BitVector::from_u64(1, 70).unwrap();
        assert_eq!(v.len(), 70);
        assert_eq!(v.weight(), 1);
        assert!(v[0]);
    }

    #[test]
    fn from_u64_rejects_truncation() {
        assert_eq!(
            BitVector::from_u64(8, 3),
            Err(CodecError::Overflow {
                required: 4,
                length: 3
            })
        );
        assert!(BitVector::from_u64(0, 0).unwrap().is_empty());
    }

    #[test]
    fn biguint_matches_machine_integer() {
        let mut rng = ChaCha20Rng::from_seed([30u8; 32]);
        for _ in 0..64 {
            let value: u64 = rng.gen();
            let small = BitVector::from_u64(value, 64).unwrap();
            let big = BitVector::from_biguint(&BigUint::from(value), 64).unwrap();
            assert_eq!(small, big);
            assert_eq!(big.to_biguint(), BigUint::from(value));
        }
    }

    #[test]
    fn biguint_beyond_machine_width() {
        let value = (BigUint::one() << 100u32) + BigUint::from(5u8);
        let v = BitVector::from_biguint(&value, 101).unwrap();
        assert!(v[100] && v[0] && v[2]);
        assert_eq!(v.weight(), 3);
        assert_eq!(v.to_u64(), Err(CodecError::TooWide(100)));
        assert_eq!(v.to_biguint(), value);
        assert!(BitVector::from_biguint(&value, 100).is_err());
    }

    #[test]
    fn reverse_and_msbf_agree() {
        let v = BitVector::from_bit_string("1101").unwrap();
        assert_eq!(v.reversed().to_bit_string(), "1011");
        assert_eq!(
            msbf_value(v.as_slice()).unwrap(),
            v.reversed().to_u64().unwrap()
        );
    }

    #[test]
    fn dot_is_parity_of_and() {
        let a = BitVector::from_bit_string("1101").unwrap();
        let b = BitVector::from_bit_string("1111").unwrap();
        assert!(a.dot(&b).unwrap());
        let c = BitVector::from_bit_string("1100").unwrap();
        assert!(!a.dot(&c).unwrap());
        assert_eq!(
            a.dot(&BitVector::zeros(3)),
            Err(CodecError::LengthMismatch { left: 4, right: 3 })
        );
    }

    #[test]
    fn split_at_keeps_order() {
        let v = BitVector::from_u64(0b101_011, 6).unwrap();
        let (low, high) = v.split_at(3);
        assert_eq!(low.to_u64().unwrap(), 0b011);
        assert_eq!(high.to_u64().unwrap(), 0b101);
    }

    #[test]
    fn bit_string_rejects_garbage() {
        assert_eq!(
            "10x".parse::<BitVector>(),
            Err(CodecError::InvalidBitChar('x'))
        );
    }
}
