//! Expansion of linear algebraic normal forms into truth tables.

use crate::bits::{lsbf_value, BitVector};
use crate::error::CodecError;

/// Truth table of the linear function `x -> <coefficients, x>` over GF(2).
///
/// Entry `i` is the parity of the AND between the coefficient vector and the
/// LSBF expansion of `i`, for every `i` in `0..2^len`.
pub fn linear_truth_table(coefficients: &BitVector) -> Result<BitVector, CodecError> {
    let nvar = coefficients.len();
    if nvar >= usize::BITS as usize {
        return Err(CodecError::TooWide(nvar));
    }
    let mask = lsbf_value(coefficients.as_slice())?;
    Ok((0..1u64 << nvar)
        .map(|input| (mask & input).count_ones() & 1 == 1)
        .collect())
}
