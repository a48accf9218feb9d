//! One-dimensional cellular automata and the Latin squares they induce.
//!
//! The pipeline is: an [`Automaton`] evolves a configuration of `2·b` cells
//! into `b` cells; [`build_square`] runs it over every initial configuration
//! to fill a `2^b × 2^b` [`Square`]; the [`latin`] module checks the Latin and
//! orthogonality properties and studies the feedback dynamics of a pair of
//! squares.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod automaton;
pub mod bipermutive;
mod builder;
mod entry;
mod error;
pub mod latin;
mod square;

pub use crate::automaton::{Automaton, AutomatonConfig, Evolution};
pub use crate::builder::{build_square, MAX_BLOCK_LEN};
pub use crate::entry::OlsEntry;
pub use crate::error::OcaError;
pub use crate::latin::{
    are_orthogonal, decompose_cycles, is_latin_square, is_permutation, iterate,
    pair_distribution, superpose, Cycle,
};
pub use crate::square::Square;
