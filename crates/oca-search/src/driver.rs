//! The maximal-period search over pairs of linear bipermutive rules.

use num_bigint::BigUint;
use oca_gen::{
    are_orthogonal, build_square, pair_distribution, Automaton, AutomatonConfig, Square,
    MAX_BLOCK_LEN,
};
use rayon::prelude::*;

use crate::error::SearchError;
use crate::order::{divisors, find_order, max_period};
use crate::report::{PairReport, RuleReport};
use crate::rules::{linear_rules, LinearRule};
use crate::sylvester::sylvester_matrix;

/// Smallest diameter with at least one pair of rules.
pub const MIN_DIAMETER: usize = 3;
/// Largest diameter whose squares the builder accepts.
///
/// A square of diameter `d` has `4^(d-1)` entries of 4 bytes, so the top of
/// the range needs gigabytes per square.
pub const MAX_DIAMETER: usize = MAX_BLOCK_LEN + 1;

/// Search parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Diameter `d` of the local rules.
    pub diameter: usize,
    /// Whether to evaluate squares and pairs on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            diameter: 4,
            parallel: true,
        }
    }
}

/// Search state for one diameter: the enumerated rules and the divisors of the
/// maximal period, computed once.
#[derive(Clone, Debug)]
pub struct MaxPeriodSearch {
    config: SearchConfig,
    rules: Vec<LinearRule>,
    max_period: BigUint,
    divisors: Vec<BigUint>,
}

impl MaxPeriodSearch {
    /// Prepares a parallel search for the given diameter.
    pub fn new(diameter: usize) -> Result<Self, SearchError> {
        Self::with_config(SearchConfig {
            diameter,
            ..SearchConfig::default()
        })
    }

    /// Prepares a search with explicit configuration.
    pub fn with_config(config: SearchConfig) -> Result<Self, SearchError> {
        let diameter = config.diameter;
        if !(MIN_DIAMETER..=MAX_DIAMETER).contains(&diameter) {
            return Err(SearchError::InvalidDiameter {
                diameter,
                min: MIN_DIAMETER,
                max: MAX_DIAMETER,
            });
        }
        let rules = linear_rules(diameter)?;
        let max_period = max_period(diameter - 1);
        let divisors = divisors(&max_period);
        Ok(Self {
            config,
            rules,
            max_period,
            divisors,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Diameter of the rules.
    pub fn diameter(&self) -> usize {
        self.config.diameter
    }

    /// Degree `n = d - 1` of the rule polynomials, also the block length of the squares.
    pub fn degree(&self) -> usize {
        self.config.diameter - 1
    }

    /// Enumerated rules, by increasing index.
    pub fn rules(&self) -> &[LinearRule] {
        &self.rules
    }

    /// `2^(2n) - 1`.
    pub fn max_period(&self) -> &BigUint {
        &self.max_period
    }

    /// Divisors of the maximal period, ascending.
    pub fn divisors(&self) -> &[BigUint] {
        &self.divisors
    }

    /// Builds the Latin square induced by `rule` on `2n` cells.
    pub fn square(&self, rule: &LinearRule) -> Result<Square, SearchError> {
        let mut ca = Automaton::new(
            2 * self.degree(),
            rule.truth_table().clone(),
            AutomatonConfig::with_neighborhood(self.diameter(), 0),
        )?;
        Ok(build_square(&mut ca, self.degree())?)
    }

    /// Evaluates every unordered pair `(l, m)`, `l < m`, and reports the
    /// orthogonal ones in enumeration order.
    ///
    /// Squares are built per pair, so each task holds two squares of
    /// `4^(d-1)` entries at a time. The parallel and sequential runs return
    /// the same list.
    pub fn run(&self) -> Result<Vec<PairReport>, SearchError> {
        let count = self.rules.len();
        let pairs: Vec<(usize, usize)> = (0..count)
            .flat_map(|l| (l + 1..count).map(move |m| (l, m)))
            .collect();

        let evaluated: Vec<Option<PairReport>> = if self.config.parallel {
            pairs
                .par_iter()
                .map(|&(l, m)| self.pair(l, m))
                .collect::<Result<_, _>>()?
        } else {
            pairs
                .iter()
                .map(|&(l, m)| self.pair(l, m))
                .collect::<Result<_, _>>()?
        };

        Ok(evaluated.into_iter().flatten().collect())
    }

    /// Evaluates the rules of indices `l` and `m`; `None` when their squares
    /// are not orthogonal.
    pub fn pair(&self, l: usize, m: usize) -> Result<Option<PairReport>, SearchError> {
        let (r1, r2) = (self.rule(l)?, self.rule(m)?);
        if !are_orthogonal(&self.square(r1)?, &self.square(r2)?)? {
            return Ok(None);
        }
        let sylvester = sylvester_matrix(r1.coefficients(), r2.coefficients())?;
        let bit_len = self.max_period.bits() as usize;
        let order = find_order(&sylvester, &self.divisors, bit_len)?;
        let maximal = order.as_ref() == Some(&self.max_period);
        Ok(Some(PairReport {
            first: rule_report(r1)?,
            second: rule_report(r2)?,
            distribution: pair_distribution(r1.truth_table(), r2.truth_table())?,
            order,
            maximal,
        }))
    }

    fn rule(&self, index: usize) -> Result<&LinearRule, SearchError> {
        self.rules.get(index).ok_or(SearchError::RuleIndex {
            index,
            count: self.rules.len(),
        })
    }
}

fn rule_report(rule: &LinearRule) -> Result<RuleReport, SearchError> {
    let f = rule.function()?;
    Ok(RuleReport {
        number: rule.number(),
        nonlinearity: f.nonlinearity(),
        degree: f.algebraic_degree(),
        polynomial: f.polynomial(),
    })
}
