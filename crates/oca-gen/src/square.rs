//! Dense square matrices of 1-based symbols.

use core::fmt;

use crate::error::OcaError;

/// `order × order` matrix of symbols, stored row-major.
///
/// Entries are 1-based symbols once populated; 0 marks an unset entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    order: usize,
    cells: Vec<u32>,
}

impl Square {
    /// Returns an all-unset square.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            cells: vec![0; order * order],
        }
    }

    /// Builds a square from its rows, checking the shape.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, OcaError> {
        let order = rows.len();
        let mut cells = Vec::with_capacity(order * order);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != order {
                return Err(OcaError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: order,
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { order, cells })
    }

    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Entry at `(row, col)`, 0-based coordinates. Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        assert!(row < self.order && col < self.order, "index out of bounds");
        self.cells[row * self.order + col]
    }

    /// Writes the entry at `(row, col)`. Panics when out of range.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        assert!(row < self.order && col < self.order, "index out of bounds");
        self.cells[row * self.order + col] = value;
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> &[u32] {
        &self.cells[row * self.order..(row + 1) * self.order]
    }

    /// Column `col`, copied out.
    pub fn column(&self, col: usize) -> Vec<u32> {
        (0..self.order).map(|row| self.get(row, col)).collect()
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        // `chunks` rejects a zero chunk size.
        self.cells.chunks(self.order.max(1))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(u32::to_string).collect();
            writeln!(f, "{}", line.join("\t"))?;
        }
        Ok(())
    }
}
