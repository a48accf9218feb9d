//! Square GF(2) matrices of order up to 64.

use core::fmt;

use num_bigint::BigUint;

use crate::bits::BitVector;
use crate::error::MatrixError;

const MAX_ORDER: usize = 64;

/// Square binary matrix over GF(2), stored row-major with each row packed into a `u64`.
///
/// Bit `j` of `rows[i]` is the entry at `(i, j)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    order: usize,
    rows: Vec<u64>,
}

impl BitMatrix {
    /// Returns the zero matrix of the given order.
    pub fn zero(order: usize) -> Result<Self, MatrixError> {
        if order > MAX_ORDER {
            return Err(MatrixError::TooLarge(order));
        }
        Ok(Self {
            order,
            rows: vec![0u64; order],
        })
    }

    /// Returns the identity matrix of the given order.
    pub fn identity(order: usize) -> Result<Self, MatrixError> {
        let mut mat = Self::zero(order)?;
        for (i, row) in mat.rows.iter_mut().enumerate() {
            *row = 1u64 << i;
        }
        Ok(mat)
    }

    /// Builds a matrix from boolean rows, checking that it is square.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let order = rows.len();
        let mut mat = Self::zero(order)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != order {
                return Err(MatrixError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: order,
                });
            }
            for (j, bit) in row.iter().enumerate() {
                if *bit {
                    mat.rows[i] |= 1u64 << j;
                }
            }
        }
        Ok(mat)
    }

    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Reads the entry at `(row, col)`. Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(col < self.order, "column index out of range");
        (self.rows[row] >> col) & 1 == 1
    }

    /// Writes the entry at `(row, col)`. Panics when out of range.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(col < self.order, "column index out of range");
        let mask = 1u64 << col;
        if value {
            self.rows[row] |= mask;
        } else {
            self.rows[row] &= !mask;
        }
    }

    /// Returns row `row` as a bit vector.
    pub fn row(&self, row: usize) -> BitVector {
        (0..self.order).map(|col| self.get(row, col)).collect()
    }

    /// Returns column `col` as a bit vector.
    pub fn column(&self, col: usize) -> BitVector {
        (0..self.order).map(|row| self.get(row, col)).collect()
    }

    /// Multiplies two matrices (`self * rhs`) with AND as product and XOR as sum.
    pub fn mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.order != rhs.order {
            return Err(MatrixError::DimensionMismatch {
                left: self.order,
                right: rhs.order,
            });
        }
        Ok(self.mul_same_order(rhs))
    }

    // Entry (i, j) is the scalar product of row i with column j; XOR-ing the rows
    // of `rhs` selected by the set bits of row i computes the whole row at once.
    fn mul_same_order(&self, rhs: &Self) -> Self {
        let mut rows = vec![0u64; self.order];
        for (row_idx, row_bits) in self.rows.iter().enumerate() {
            let mut acc = 0u64;
            let mut bits = *row_bits;
            while bits != 0 {
                let bit = bits.trailing_zeros() as usize;
                acc ^= rhs.rows[bit];
                bits &= bits - 1;
            }
            rows[row_idx] = acc;
        }
        Self {
            order: self.order,
            rows,
        }
    }

    /// Raises the matrix to `exponent` by square-and-multiply.
    ///
    /// The exponent is read as a `bit_len`-bit LSBF vector and scanned from the
    /// most significant position down: the accumulator is squared at every
    /// position and multiplied by `self` when the bit is set. `bit_len` must be
    /// at least the bit length of `exponent`; a shorter width is rejected with
    /// [`MatrixError::ExponentTooWide`].
    pub fn pow(&self, exponent: &BigUint, bit_len: usize) -> Result<Self, MatrixError> {
        let required = exponent.bits();
        if required > bit_len as u64 {
            return Err(MatrixError::ExponentTooWide {
                required,
                length: bit_len,
            });
        }
        let mut exp_bits = vec![false; bit_len];
        for (slot, digit) in exp_bits.iter_mut().zip(exponent.to_radix_le(2)) {
            *slot = digit == 1;
        }

        let mut res = Self::identity(self.order)?;
        for bit in exp_bits.iter().rev() {
            res = res.mul_same_order(&res);
            if *bit {
                res = res.mul_same_order(self);
            }
        }
        Ok(res)
    }

    /// Raises the matrix to `exponent` by repeated multiplication.
    pub fn pow_naive(&self, exponent: u64) -> Self {
        let mut res = Self {
            order: self.order,
            rows: (0..self.order).map(|i| 1u64 << i).collect(),
        };
        for _ in 0..exponent {
            res = res.mul_same_order(self);
        }
        res
    }

    /// Returns true iff all diagonal entries are 1 and all others are 0.
    pub fn is_identity(&self) -> bool {
        self.rows
            .iter()
            .enumerate()
            .all(|(i, row)| *row == 1u64 << i)
    }

    /// Applies the matrix to a column vector.
    pub fn apply(&self, input: &BitVector) -> Result<BitVector, MatrixError> {
        if input.len() != self.order {
            return Err(MatrixError::DimensionMismatch {
                left: self.order,
                right: input.len(),
            });
        }
        let mut packed = 0u64;
        for (i, bit) in input.iter().enumerate() {
            if bit {
                packed |= 1u64 << i;
            }
        }
        Ok(self
            .rows
            .iter()
            .map(|row| (row & packed).count_ones() & 1 == 1)
            .collect())
    }

    /// Exposes the packed rows (bit `j` of row `i` is entry `(i, j)`).
    pub fn rows(&self) -> &[u64] {
        &self.rows
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.order {
            writeln!(f, "{}", self.row(row))?;
        }
        Ok(())
    }
}
