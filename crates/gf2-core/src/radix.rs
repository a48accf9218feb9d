//! Radix-n digit codecs, least significant digit first.
//!
//! These generalise the binary conversions of [`crate::BitVector`] to an
//! arbitrary radix. Widths are fixed: encoding a value that needs more digits
//! than requested fails instead of dropping the high digits.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::error::CodecError;

fn check_radix(radix: u32) -> Result<(), CodecError> {
    if radix < 2 {
        return Err(CodecError::InvalidRadix(radix));
    }
    Ok(())
}

/// Expands `value` into exactly `len` base-`radix` digits.
pub fn encode_u64(value: u64, len: usize, radix: u32) -> Result<Vec<u32>, CodecError> {
    check_radix(radix)?;
    let radix = u64::from(radix);
    let mut digits = vec![0u32; len];
    let mut rest = value;
    let mut used = 0usize;
    while rest != 0 {
        if used == len {
            let mut required = used;
            while rest != 0 {
                rest /= radix;
                required += 1;
            }
            return Err(CodecError::Overflow {
                required,
                length: len,
            });
        }
        digits[used] = (rest % radix) as u32;
        rest /= radix;
        used += 1;
    }
    Ok(digits)
}

/// Decodes base-`radix` digits into a machine integer.
pub fn decode_u64(digits: &[u32], radix: u32) -> Result<u64, CodecError> {
    check_radix(radix)?;
    let mut value = 0u64;
    for (pos, digit) in digits.iter().enumerate().rev() {
        if *digit >= radix {
            return Err(CodecError::DigitOutOfRange {
                digit: *digit,
                radix,
            });
        }
        value = value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(*digit)))
            .ok_or(CodecError::TooWide(pos))?;
    }
    Ok(value)
}

/// Arbitrary-precision counterpart of [`encode_u64`].
pub fn encode_big(value: &BigUint, len: usize, radix: u32) -> Result<Vec<u32>, CodecError> {
    check_radix(radix)?;
    let mut digits = vec![0u32; len];
    let mut rest = value.clone();
    let mut used = 0usize;
    while !rest.is_zero() {
        if used == len {
            let mut required = used;
            while !rest.is_zero() {
                rest /= radix;
                required += 1;
            }
            return Err(CodecError::Overflow {
                required,
                length: len,
            });
        }
        let digit = &rest % radix;
        digits[used] = digit.to_u32_digits().first().copied().unwrap_or(0);
        rest /= radix;
        used += 1;
    }
    Ok(digits)
}

/// Arbitrary-precision counterpart of [`decode_u64`].
pub fn decode_big(digits: &[u32], radix: u32) -> Result<BigUint, CodecError> {
    check_radix(radix)?;
    let mut value = BigUint::zero();
    for digit in digits.iter().rev() {
        if *digit >= radix {
            return Err(CodecError::DigitOutOfRange {
                digit: *digit,
                radix,
            });
        }
        value = value * radix + *digit;
    }
    Ok(value)
}

/// Converts an arbitrary-precision value to `u64` when it fits.
pub fn big_to_u64(value: &BigUint) -> Result<u64, CodecError> {
    value
        .to_u64()
        .ok_or_else(|| CodecError::TooWide(value.bits().saturating_sub(1) as usize))
}
