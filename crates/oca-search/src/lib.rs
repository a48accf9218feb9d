//! Search for pairs of linear bipermutive cellular automata whose Latin
//! squares are orthogonal and whose combined linear map has maximal period.
//!
//! For a diameter `d` the search enumerates the `2^(d-2)` linear rules with
//! both boundary coefficients set, builds the Latin square of each one, and
//! for every orthogonal pair computes the multiplicative order of the
//! Sylvester matrix of the two coefficient polynomials among the divisors of
//! `2^(2(d-1)) - 1`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod error;
pub mod order;
mod report;
mod rules;
pub mod sylvester;

pub use crate::driver::{MaxPeriodSearch, SearchConfig, MAX_DIAMETER, MIN_DIAMETER};
pub use crate::error::SearchError;
pub use crate::order::{divisors, find_order, max_period};
pub use crate::report::{PairReport, RuleReport};
pub use crate::rules::{linear_rules, LinearRule};
pub use crate::sylvester::sylvester_matrix;
