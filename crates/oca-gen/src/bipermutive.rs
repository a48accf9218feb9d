//! Graph encoding of bipermutive boolean functions.
//!
//! A function of `nvar ≥ 2` variables is bipermutive when flipping either its
//! first or its last input always flips the output. Such a function is fixed
//! by its values on the `2^(nvar-2)` inputs whose first and last coordinates
//! are zero; that bit string is its code.

use gf2_core::{BitVector, CodecError};

fn check_nvar(nvar: usize) -> Result<usize, CodecError> {
    if !(2..usize::BITS as usize).contains(&nvar) {
        return Err(CodecError::TooWide(nvar));
    }
    Ok(1usize << nvar)
}

/// Expands a code of `2^(nvar-2)` bits into the truth table of a bipermutive function.
pub fn decode(code: &BitVector, nvar: usize) -> Result<BitVector, CodecError> {
    let len = check_nvar(nvar)?;
    if code.len() != len / 4 {
        return Err(CodecError::LengthMismatch {
            left: code.len(),
            right: len / 4,
        });
    }
    let half = len / 2;
    let mut table = BitVector::zeros(len);
    for (j, g) in code.iter().enumerate() {
        table.set(2 * j, g);
        table.set(2 * j + 1, !g);
        table.set(2 * j + half, !g);
        table.set(2 * j + half + 1, g);
    }
    Ok(table)
}

/// Reads the code of a bipermutive truth table back.
///
/// Only the inputs with both boundary coordinates at zero are read; use
/// [`is_bipermutive`] to check the rest of the table.
pub fn encode(table: &BitVector, nvar: usize) -> Result<BitVector, CodecError> {
    let len = check_nvar(nvar)?;
    if table.len() != len {
        return Err(CodecError::TableLength {
            len: table.len(),
            nvar,
        });
    }
    Ok((0..len / 4).map(|i| table[2 * i]).collect())
}

/// Returns true iff flipping the first or the last input always flips the output.
pub fn is_bipermutive(table: &BitVector, nvar: usize) -> Result<bool, CodecError> {
    let len = check_nvar(nvar)?;
    if table.len() != len {
        return Err(CodecError::TableLength {
            len: table.len(),
            nvar,
        });
    }
    let last = len / 2;
    Ok((0..len).all(|x| table[x] != table[x ^ 1] && table[x] != table[x ^ last]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf2_core::linear_truth_table;

    #[test]
    fn zero_code_is_rule_90() {
        let table = decode(&BitVector::zeros(2), 3).unwrap();
        assert_eq!(table.to_u64().unwrap(), 90);
        assert!(is_bipermutive(&table, 3).unwrap());
        assert_eq!(encode(&table, 3).unwrap(), BitVector::zeros(2));
    }

    #[test]
    fn linear_rules_with_unit_boundaries_are_bipermutive() {
        for middle in 0..4u64 {
            let coeffs = BitVector::from_u64(1 | middle << 1 | 1 << 3, 4).unwrap();
            let table = linear_truth_table(&coeffs).unwrap();
            assert!(is_bipermutive(&table, 4).unwrap());
            let code = encode(&table, 4).unwrap();
            assert_eq!(decode(&code, 4).unwrap(), table);
        }
    }

    #[test]
    fn every_code_round_trips() {
        for value in 0..16u64 {
            let code = BitVector::from_u64(value, 4).unwrap();
            let table = decode(&code, 4).unwrap();
            assert!(is_bipermutive(&table, 4).unwrap());
            assert_eq!(encode(&table, 4).unwrap(), code);
        }
    }

    #[test]
    fn non_bipermutive_and_bad_lengths() {
        // x2 ignores both boundary inputs.
        let table = BitVector::from_u64(204, 8).unwrap();
        assert!(!is_bipermutive(&table, 3).unwrap());
        assert!(decode(&BitVector::zeros(3), 3).is_err());
        assert!(encode(&BitVector::zeros(4), 3).is_err());
        assert!(decode(&BitVector::zeros(1), 1).is_err());
    }
}
