//! Entries of a superposed pair of squares.

use core::fmt;

/// Ordered pair of 1-based symbols; equality is by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OlsEntry {
    /// Symbol of the first square, also the next row.
    pub row: u32,
    /// Symbol of the second square, also the next column.
    pub col: u32,
}

impl OlsEntry {
    /// Creates an entry from its two coordinates.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl From<(u32, u32)> for OlsEntry {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for OlsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
