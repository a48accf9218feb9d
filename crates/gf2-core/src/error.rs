//! Error types for the codec and matrix engine.

use thiserror::Error;

/// Failures raised by the bit-vector and radix codecs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The value needs more digits than the fixed width provides.
    #[error("value needs {required} digits but the encoding is only {length} wide")]
    Overflow {
        /// Digits required to represent the value exactly.
        required: usize,
        /// Requested encoding width.
        length: usize,
    },
    /// Two vectors that must be aligned have different lengths.
    #[error("vectors have different lengths ({left} and {right})")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// Radix below 2.
    #[error("radix must be at least 2, got {0}")]
    InvalidRadix(u32),
    /// A digit is not smaller than the radix.
    #[error("digit {digit} is out of range for radix {radix}")]
    DigitOutOfRange {
        /// Offending digit.
        digit: u32,
        /// Radix of the encoding.
        radix: u32,
    },
    /// The decoded value does not fit in the target machine integer.
    #[error("value has a set digit at position {0} and does not fit in a machine integer")]
    TooWide(usize),
    /// A character other than `0` or `1` in a bit string.
    #[error("invalid bit character {0:?}")]
    InvalidBitChar(char),
    /// A truth table whose length is not `2^nvar`.
    #[error("truth table has {len} entries, expected 2^{nvar}")]
    TableLength {
        /// Actual table length.
        len: usize,
        /// Declared number of variables.
        nvar: usize,
    },
}

/// Failures raised by the GF(2) matrix engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row does not have as many entries as the matrix has rows.
    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Number of rows.
        expected: usize,
    },
    /// Operands of different order.
    #[error("matrix orders differ ({left} and {right})")]
    DimensionMismatch {
        /// Order of the left operand.
        left: usize,
        /// Order of the right operand.
        right: usize,
    },
    /// Rows are packed into `u64`, so the order is bounded.
    #[error("matrix order {0} exceeds the supported maximum of 64")]
    TooLarge(usize),
    /// The exponent bit length supplied to `pow` cannot hold the exponent.
    #[error("exponent needs {required} bits but only {length} were supplied")]
    ExponentTooWide {
        /// Bit length of the exponent.
        required: u64,
        /// Bit length supplied by the caller.
        length: usize,
    },
}
