//! Enumeration of the linear bipermutive rules of a given diameter.

use gf2_core::{linear_truth_table, BitVector, BooleanFunction};
use num_bigint::BigUint;

use crate::error::SearchError;

/// Linear rule `x1 + c2·x2 + ... + c(d-1)·x(d-1) + xd` of diameter `d`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearRule {
    index: u64,
    coefficients: BitVector,
    truth_table: BitVector,
}

impl LinearRule {
    /// Builds the rule whose free coefficients `c2..c(d-1)` are the LSBF bits of `index`.
    pub fn from_index(index: u64, diameter: usize) -> Result<Self, SearchError> {
        if diameter < 2 {
            return Err(SearchError::InvalidDiameter {
                diameter,
                min: 2,
                max: usize::BITS as usize - 1,
            });
        }
        let free = BitVector::from_u64(index, diameter - 2)?;
        let coefficients: BitVector = core::iter::once(true)
            .chain(free.iter())
            .chain(core::iter::once(true))
            .collect();
        let truth_table = linear_truth_table(&coefficients)?;
        Ok(Self {
            index,
            coefficients,
            truth_table,
        })
    }

    /// Index of the rule in the enumeration.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Diameter of the rule.
    pub fn diameter(&self) -> usize {
        self.coefficients.len()
    }

    /// All `d` ANF coefficients, also the coefficients of the rule polynomial
    /// (constant term first).
    pub fn coefficients(&self) -> &BitVector {
        &self.coefficients
    }

    /// Truth table of length `2^d`, usable as an automaton rule.
    pub fn truth_table(&self) -> &BitVector {
        &self.truth_table
    }

    /// Decimal rule number, i.e. the truth table read as an LSBF integer.
    pub fn number(&self) -> BigUint {
        self.truth_table.to_biguint()
    }

    /// The rule as a boolean function of `d` variables.
    pub fn function(&self) -> Result<BooleanFunction, SearchError> {
        Ok(BooleanFunction::new(
            self.truth_table.clone(),
            self.diameter(),
        )?)
    }
}

/// All `2^(d-2)` linear bipermutive rules of diameter `d`, by increasing index.
pub fn linear_rules(diameter: usize) -> Result<Vec<LinearRule>, SearchError> {
    if !(2..usize::BITS as usize).contains(&diameter) {
        return Err(SearchError::InvalidDiameter {
            diameter,
            min: 2,
            max: usize::BITS as usize - 1,
        });
    }
    let count = 1u64 << (diameter - 2);
    (0..count)
        .map(|index| LinearRule::from_index(index, diameter))
        .collect()
}
