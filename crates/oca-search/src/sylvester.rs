//! Sylvester resultant matrix of two GF(2) polynomials.

use gf2_core::{BitMatrix, BitVector};

use crate::error::SearchError;

/// Builds the `2n × 2n` Sylvester matrix of two degree-`n` polynomials.
///
/// Coefficient vectors have `n + 1` entries, constant term first. Row `i` of
/// the top half holds the first polynomial shifted right by `i` columns; row
/// `n + i` holds the second one shifted the same way.
pub fn sylvester_matrix(p1: &BitVector, p2: &BitVector) -> Result<BitMatrix, SearchError> {
    if p1.len() != p2.len() || p1.len() < 2 {
        return Err(SearchError::DegreeMismatch {
            left: p1.len(),
            right: p2.len(),
        });
    }
    let degree = p1.len() - 1;
    let mut matrix = BitMatrix::zero(2 * degree)?;
    for i in 0..degree {
        for j in 0..=degree {
            matrix.set(i, i + j, p1[j]);
            matrix.set(i + degree, i + j, p2[j]);
        }
    }
    Ok(matrix)
}
