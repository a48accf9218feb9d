//! GF(2) primitives for cellular-automata rule search.
//!
//! This crate provides the leaf building blocks shared across the workspace:
//! - Fixed-length bit vectors in least-significant-bit-first (LSBF) order and
//!   their conversions to machine and arbitrary-precision integers.
//! - Radix-n digit codecs.
//! - Square GF(2) matrices with square-and-multiply exponentiation.
//! - Boolean-function representations (linear ANF expansion, Möbius and
//!   Walsh transforms, nonlinearity, algebraic degree).
//!
//! Fixed-width encodings never truncate: asking for fewer bits than a value
//! needs is reported as [`CodecError::Overflow`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod anf;
pub mod bits;
mod error;
pub mod matrix;
pub mod props;
pub mod radix;

pub use crate::anf::linear_truth_table;
pub use crate::bits::BitVector;
pub use crate::error::{CodecError, MatrixError};
pub use crate::matrix::BitMatrix;
pub use crate::props::BooleanFunction;
