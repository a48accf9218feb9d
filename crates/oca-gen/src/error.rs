//! Error type shared by the automaton, the builder and the Latin-square tools.

use gf2_core::CodecError;
use thiserror::Error;

use crate::entry::OlsEntry;

/// Precondition violations detected by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OcaError {
    /// The rule table does not have `2^neighborhood` entries.
    #[error("rule table has {len} entries but a neighborhood of {neighborhood} needs {expected}")]
    RuleLength {
        /// Actual table length.
        len: usize,
        /// Neighborhood size the table must index.
        neighborhood: usize,
        /// Required table length.
        expected: usize,
    },
    /// The update offset does not point inside the neighborhood.
    #[error("update offset {offset} is outside a neighborhood of {neighborhood} cells")]
    InvalidOffset {
        /// Configured offset.
        offset: usize,
        /// Neighborhood size.
        neighborhood: usize,
    },
    /// The configuration is too short for the evolution step.
    #[error("{cells} cells are too few for a window of {window}")]
    TooFewCells {
        /// Current number of cells.
        cells: usize,
        /// Window width of the evolution mode.
        window: usize,
    },
    /// The freeze mask does not match the output length.
    #[error("mask has {len} entries, expected {expected}")]
    MaskLength {
        /// Mask length.
        len: usize,
        /// Length of the next configuration.
        expected: usize,
    },
    /// A square entry is not a symbol in `1..=order`.
    #[error("symbol {symbol} is outside 1..={order}")]
    SymbolOutOfRange {
        /// Offending symbol.
        symbol: u32,
        /// Order of the square.
        order: usize,
    },
    /// A row does not have `order` entries.
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Number of rows.
        expected: usize,
    },
    /// Two squares that must be superposed have different orders.
    #[error("squares have different orders ({left} and {right})")]
    OrderMismatch {
        /// Order of the first square.
        left: usize,
        /// Order of the second square.
        right: usize,
    },
    /// The block length exceeds [`crate::MAX_BLOCK_LEN`].
    #[error("block length {0} is too wide to build a square")]
    BlockTooWide(usize),
    /// The automaton output does not fit in a block.
    #[error("automaton output {value} does not fit in a block of {block_len} bits")]
    ValueOutOfRange {
        /// Decoded final configuration.
        value: u64,
        /// Block length of the square.
        block_len: usize,
    },
    /// The feedback map of two squares is not a bijection.
    #[error("feedback map is not a bijection: {0} is reached twice")]
    NotBijective(OlsEntry),
    /// Codec failure while encoding or decoding a configuration.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
