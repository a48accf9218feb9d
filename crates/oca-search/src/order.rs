//! Multiplicative orders of GF(2) matrices.

use gf2_core::{BitMatrix, MatrixError};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Largest period `2^(2·degree) - 1` of a pair of degree-`degree` linear rules.
pub fn max_period(degree: usize) -> BigUint {
    (BigUint::one() << (2 * degree)) - BigUint::one()
}

/// Positive divisors of `value` in ascending order; empty for zero.
///
/// The value is factored by trial division and the divisors are expanded from
/// the factorisation.
pub fn divisors(value: &BigUint) -> Vec<BigUint> {
    if value.is_zero() {
        return Vec::new();
    }
    let mut divs = vec![BigUint::one()];
    for (prime, exponent) in factorize(value) {
        let mut next = Vec::with_capacity(divs.len() * (exponent as usize + 1));
        for d in &divs {
            let mut power = d.clone();
            next.push(power.clone());
            for _ in 0..exponent {
                power *= &prime;
                next.push(power.clone());
            }
        }
        divs = next;
    }
    divs.sort();
    divs
}

fn factorize(value: &BigUint) -> Vec<(BigUint, u32)> {
    let mut factors = Vec::new();
    let mut rest = value.clone();
    let mut p = BigUint::from(2u32);
    while &p * &p <= rest {
        let mut exponent = 0u32;
        while (&rest % &p).is_zero() {
            rest /= &p;
            exponent += 1;
        }
        if exponent > 0 {
            factors.push((p.clone(), exponent));
        }
        p += if p == BigUint::from(2u32) { 1u32 } else { 2u32 };
    }
    if rest > BigUint::one() {
        factors.push((rest, 1));
    }
    factors
}

/// Smallest divisor `e` in `divisors` with `matrix^e = I`.
///
/// `divisors` must be sorted ascending for the result to be the order of the
/// matrix. Every power uses an exponent width of `bit_len` bits. Returns
/// `None` when no candidate yields the identity.
pub fn find_order(
    matrix: &BitMatrix,
    divisors: &[BigUint],
    bit_len: usize,
) -> Result<Option<BigUint>, MatrixError> {
    for d in divisors {
        if matrix.pow(d, bit_len)?.is_identity() {
            return Ok(Some(d.clone()));
        }
    }
    Ok(None)
}
