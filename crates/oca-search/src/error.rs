//! Error type of the search driver.

use gf2_core::{CodecError, MatrixError};
use oca_gen::OcaError;
use thiserror::Error;

/// Failures raised while setting up or running a search.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The diameter is outside the supported range.
    #[error("diameter {diameter} is outside {min}..={max}")]
    InvalidDiameter {
        /// Requested diameter.
        diameter: usize,
        /// Smallest supported diameter.
        min: usize,
        /// Largest supported diameter.
        max: usize,
    },
    /// Two coefficient vectors of different degrees were combined.
    #[error("polynomials have {left} and {right} coefficients")]
    DegreeMismatch {
        /// Coefficients of the first polynomial.
        left: usize,
        /// Coefficients of the second polynomial.
        right: usize,
    },
    /// A rule index past the end of the enumeration.
    #[error("rule index {index} is out of range for {count} rules")]
    RuleIndex {
        /// Requested index.
        index: usize,
        /// Number of enumerated rules.
        count: usize,
    },
    /// Codec failure.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// Matrix engine failure.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// Automaton or Latin-square failure.
    #[error(transparent)]
    Oca(#[from] OcaError),
}
