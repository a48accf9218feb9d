//! Per-pair results of a search.

use core::fmt;

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

/// Properties of one rule of an orthogonal pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleReport {
    /// Decimal rule number.
    #[serde(serialize_with = "decimal")]
    pub number: BigUint,
    /// Nonlinearity of the local rule.
    pub nonlinearity: u64,
    /// Algebraic degree of the local rule.
    pub degree: usize,
    /// Linear part of the ANF as a polynomial in `X`.
    pub polynomial: String,
}

/// An orthogonal pair together with the order of its Sylvester matrix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PairReport {
    /// Rule with the smaller index.
    pub first: RuleReport,
    /// Rule with the larger index.
    pub second: RuleReport,
    /// Counts of the bit pairs `(0,0)`, `(1,0)`, `(0,1)`, `(1,1)` over the two truth tables.
    pub distribution: [usize; 4],
    /// Order of the Sylvester matrix, if it divides the maximal period.
    #[serde(serialize_with = "optional_decimal")]
    pub order: Option<BigUint>,
    /// True when the order equals the maximal period.
    pub maximal: bool,
}

fn decimal<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn optional_decimal<S: Serializer>(
    value: &Option<BigUint>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.collect_str(v),
        None => serializer.serialize_none(),
    }
}

impl fmt::Display for RuleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rule: {} NL: {}; POL: {}",
            self.number, self.nonlinearity, self.polynomial
        )
    }
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}; Order: ", self.first, self.second)?;
        match &self.order {
            Some(order) => write!(f, "{order}"),
            None => f.write_str("-1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(number: u32, polynomial: &str) -> RuleReport {
        RuleReport {
            number: BigUint::from(number),
            nonlinearity: 0,
            degree: 1,
            polynomial: polynomial.to_string(),
        }
    }

    #[test]
    fn line_format() {
        let mut pair = PairReport {
            first: rule(90, "P(X) = 1 + X^2"),
            second: rule(150, "P(X) = 1 + X^1 + X^2"),
            distribution: [2, 2, 2, 2],
            order: Some(BigUint::from(15u32)),
            maximal: true,
        };
        assert_eq!(
            pair.to_string(),
            "Rule: 90 NL: 0; POL: P(X) = 1 + X^2; Rule: 150 NL: 0; POL: P(X) = 1 + X^1 + X^2; Order: 15"
        );
        pair.order = None;
        assert!(pair.to_string().ends_with("Order: -1"));
    }
}
