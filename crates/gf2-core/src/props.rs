//! Cryptographic properties of boolean functions.
//!
//! Only what the search reports is computed here: the algebraic normal form
//! (via the fast Möbius transform), the algebraic degree, the Walsh spectrum
//! (via the fast Walsh–Hadamard transform) and the nonlinearity derived from it.

use crate::bits::BitVector;
use crate::error::CodecError;

/// Boolean function of `nvar` variables given by its LSBF truth table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanFunction {
    nvar: usize,
    truth_table: BitVector,
}

impl BooleanFunction {
    /// Wraps a truth table, checking that it has `2^nvar` entries.
    pub fn new(truth_table: BitVector, nvar: usize) -> Result<Self, CodecError> {
        let expected = 1usize.checked_shl(nvar as u32).unwrap_or(0);
        if nvar >= usize::BITS as usize || truth_table.len() != expected {
            return Err(CodecError::TableLength {
                len: truth_table.len(),
                nvar,
            });
        }
        Ok(Self { nvar, truth_table })
    }

    /// Number of variables.
    pub fn nvar(&self) -> usize {
        self.nvar
    }

    /// Truth table, entry `i` is `f(x)` for the LSBF expansion `x` of `i`.
    pub fn truth_table(&self) -> &BitVector {
        &self.truth_table
    }

    /// ANF coefficients: entry `i` is the coefficient of the monomial whose
    /// variables are the set bits of `i`.
    pub fn anf(&self) -> BitVector {
        let mut coeffs: Vec<bool> = self.truth_table.iter().collect();
        let len = coeffs.len();
        let mut step = 1;
        while step < len {
            for block in (0..len).step_by(2 * step) {
                for j in block..block + step {
                    coeffs[j + step] ^= coeffs[j];
                }
            }
            step *= 2;
        }
        BitVector::from_bits(coeffs)
    }

    /// Largest Hamming weight among monomials with a non-zero ANF coefficient.
    pub fn algebraic_degree(&self) -> usize {
        self.anf()
            .iter()
            .enumerate()
            .filter(|(_, c)| *c)
            .map(|(i, _)| i.count_ones() as usize)
            .max()
            .unwrap_or(0)
    }

    /// Walsh–Hadamard coefficients `W(w) = sum_x (-1)^(f(x) + w.x)`.
    pub fn walsh_spectrum(&self) -> Vec<i64> {
        let mut coeffs: Vec<i64> = self
            .truth_table
            .iter()
            .map(|bit| if bit { -1 } else { 1 })
            .collect();
        let len = coeffs.len();
        let mut step = 1;
        while step < len {
            for block in (0..len).step_by(2 * step) {
                for j in block..block + step {
                    let (a, b) = (coeffs[j], coeffs[j + step]);
                    coeffs[j] = a + b;
                    coeffs[j + step] = a - b;
                }
            }
            step *= 2;
        }
        coeffs
    }

    /// Maximum absolute Walsh coefficient.
    pub fn spectral_radius(&self) -> u64 {
        self.walsh_spectrum()
            .iter()
            .map(|w| w.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Hamming distance to the closest affine function: `2^(n-1) - radius/2`.
    pub fn nonlinearity(&self) -> u64 {
        let half = (self.truth_table.len() / 2) as u64;
        half.saturating_sub(self.spectral_radius() / 2)
    }

    /// True when the function takes the value 1 on exactly half its inputs.
    pub fn is_balanced(&self) -> bool {
        2 * self.truth_table.weight() == self.truth_table.len()
    }

    /// Renders the ANF as `f(x1,..,xn) = 1 + x1x3 + ...`.
    pub fn anf_string(&self) -> String {
        let vars: Vec<String> = (1..=self.nvar).map(|i| format!("x{i}")).collect();
        let terms: Vec<String> = self
            .anf()
            .iter()
            .enumerate()
            .filter(|(_, c)| *c)
            .map(|(monomial, _)| {
                if monomial == 0 {
                    "1".to_string()
                } else {
                    (0..self.nvar)
                        .filter(|j| (monomial >> j) & 1 == 1)
                        .map(|j| format!("x{}", j + 1))
                        .collect()
                }
            })
            .collect();
        let body = if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" + ")
        };
        format!("f({}) = {}", vars.join(","), body)
    }

    /// Renders the linear (degree-one) ANF terms as a polynomial in `X`.
    ///
    /// The term of variable `x(j+1)` becomes `X^j`, with `X^0` written as `1`,
    /// e.g. `x1 + x2 + x4` renders as `P(X) = 1 + X^1 + X^3`.
    pub fn polynomial(&self) -> String {
        let anf = self.anf();
        let terms: Vec<String> = (0..self.nvar)
            .filter(|j| anf[1usize << j])
            .map(|j| {
                if j == 0 {
                    "1".to_string()
                } else {
                    format!("X^{j}")
                }
            })
            .collect();
        format!("P(X) = {}", terms.join(" + "))
    }
}
