//! Latin-square checks and the dynamics of a superposed pair of squares.
//!
//! Two squares `A` and `B` of order `n` define the feedback map
//! `(i, j) ↦ (A[i][j], B[i][j])` on the `n²` entries `{1..n}×{1..n}`. When the
//! squares are orthogonal the map is a bijection and [`decompose_cycles`]
//! splits the state space into its cycles.

use core::fmt;

use gf2_core::{BitVector, CodecError};

use crate::entry::OlsEntry;
use crate::error::OcaError;
use crate::square::Square;

/// Returns true iff the 1-based symbols of `row` hit every value of `1..=len` once.
///
/// Symbols outside `1..=len` are rejected with [`OcaError::SymbolOutOfRange`].
pub fn is_permutation(row: &[u32]) -> Result<bool, OcaError> {
    let order = row.len();
    let mut seen = vec![false; order];
    for symbol in row {
        let slot = symbol_index(*symbol, order)?;
        if seen[slot] {
            return Ok(false);
        }
        seen[slot] = true;
    }
    Ok(true)
}

/// Returns true iff every row and every column is a permutation.
pub fn is_latin_square(square: &Square) -> Result<bool, OcaError> {
    for i in 0..square.order() {
        if !is_permutation(square.row(i))? || !is_permutation(&square.column(i))? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns true iff superposing `a` and `b` yields every ordered symbol pair once.
pub fn are_orthogonal(a: &Square, b: &Square) -> Result<bool, OcaError> {
    let order = check_orders(a, b)?;
    let mut occupied = vec![false; order * order];
    for i in 0..order {
        for j in 0..order {
            let x = symbol_index(a.get(i, j), order)?;
            let y = symbol_index(b.get(i, j), order)?;
            let slot = x * order + y;
            if occupied[slot] {
                return Ok(false);
            }
            occupied[slot] = true;
        }
    }
    Ok(true)
}

/// Counts the bit pairs of two aligned vectors.
///
/// Slot `b1 + 2·b2` counts the positions holding `(b1, b2)`, so the slots are
/// `(0,0)`, `(1,0)`, `(0,1)`, `(1,1)` in that order.
pub fn pair_distribution(first: &BitVector, second: &BitVector) -> Result<[usize; 4], OcaError> {
    if first.len() != second.len() {
        return Err(CodecError::LengthMismatch {
            left: first.len(),
            right: second.len(),
        }
        .into());
    }
    let mut counts = [0usize; 4];
    for (b1, b2) in first.iter().zip(second.iter()) {
        counts[usize::from(b1) + 2 * usize::from(b2)] += 1;
    }
    Ok(counts)
}

/// Superposed entry `(a[row][col], b[row][col])` at 0-based coordinates.
///
/// Panics when the coordinates are outside either square.
pub fn superpose(a: &Square, b: &Square, row: usize, col: usize) -> OlsEntry {
    OlsEntry::new(a.get(row, col), b.get(row, col))
}

/// Follows the feedback map for `steps` steps from the 1-based entry `start`.
///
/// The returned orbit holds the successive images, not `start` itself.
pub fn iterate(
    a: &Square,
    b: &Square,
    start: OlsEntry,
    steps: usize,
) -> Result<Vec<OlsEntry>, OcaError> {
    let order = check_orders(a, b)?;
    let mut orbit = Vec::with_capacity(steps);
    let mut current = start;
    for _ in 0..steps {
        current = feedback(a, b, current, order)?;
        orbit.push(current);
    }
    Ok(orbit)
}

/// One cycle of the feedback map, listed from its first discovered entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    entries: Vec<OlsEntry>,
}

impl Cycle {
    /// Number of entries on the cycle.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a cycle holds at least its starting entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in visiting order.
    pub fn entries(&self) -> &[OlsEntry] {
        &self.entries
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cycle of length {} : [ ", self.len())?;
        for entry in &self.entries {
            write!(f, "{entry} ")?;
        }
        f.write_str("]")
    }
}

/// Splits `{1..n}×{1..n}` into the cycles of the feedback map of `a` and `b`.
///
/// States are picked in row-major order; each unvisited state starts a new
/// cycle that is followed until it returns to its start. Reaching an already
/// visited state first means the map is not a bijection, reported as
/// [`OcaError::NotBijective`].
pub fn decompose_cycles(a: &Square, b: &Square) -> Result<Vec<Cycle>, OcaError> {
    let order = check_orders(a, b)?;
    let mut visited = vec![false; order * order];
    let mut cycles = Vec::new();

    for slot in 0..order * order {
        if visited[slot] {
            continue;
        }
        visited[slot] = true;
        let start = OlsEntry::new((slot / order) as u32 + 1, (slot % order) as u32 + 1);
        let mut entries = vec![start];
        let mut current = feedback(a, b, start, order)?;
        while current != start {
            let next = entry_slot(current, order)?;
            if visited[next] {
                return Err(OcaError::NotBijective(current));
            }
            visited[next] = true;
            entries.push(current);
            current = feedback(a, b, current, order)?;
        }
        cycles.push(Cycle { entries });
    }

    Ok(cycles)
}

fn check_orders(a: &Square, b: &Square) -> Result<usize, OcaError> {
    if a.order() != b.order() {
        return Err(OcaError::OrderMismatch {
            left: a.order(),
            right: b.order(),
        });
    }
    Ok(a.order())
}

fn symbol_index(symbol: u32, order: usize) -> Result<usize, OcaError> {
    let s = symbol as usize;
    if (1..=order).contains(&s) {
        Ok(s - 1)
    } else {
        Err(OcaError::SymbolOutOfRange { symbol, order })
    }
}

// 0-based slot of a 1-based entry in a row-major `order × order` grid.
fn entry_slot(entry: OlsEntry, order: usize) -> Result<usize, OcaError> {
    Ok(symbol_index(entry.row, order)? * order + symbol_index(entry.col, order)?)
}

fn feedback(a: &Square, b: &Square, entry: OlsEntry, order: usize) -> Result<OlsEntry, OcaError> {
    let row = symbol_index(entry.row, order)?;
    let col = symbol_index(entry.col, order)?;
    Ok(superpose(a, b, row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cyclic square L[i][j] = (i + j) mod 3 and its orthogonal mate (i + 2j) mod 3.
    fn cyclic_pair() -> (Square, Square) {
        let a = Square::from_rows(&[[1, 2, 3], [2, 3, 1], [3, 1, 2]]).unwrap();
        let b = Square::from_rows(&[[1, 3, 2], [2, 1, 3], [3, 2, 1]]).unwrap();
        (a, b)
    }

    #[test]
    fn permutation_check() {
        assert!(is_permutation(&[3, 1, 2]).unwrap());
        assert!(!is_permutation(&[1, 1, 2]).unwrap());
        assert!(is_permutation(&[]).unwrap());
        assert_eq!(
            is_permutation(&[1, 4, 2]),
            Err(OcaError::SymbolOutOfRange {
                symbol: 4,
                order: 3
            })
        );
        assert!(is_permutation(&[0, 1]).is_err());
    }

    #[test]
    fn latin_square_checks_columns() {
        let (a, _) = cyclic_pair();
        assert!(is_latin_square(&a).unwrap());
        // Every row is a permutation but the columns repeat.
        let rows_only = Square::from_rows(&[[1, 2, 3], [1, 2, 3], [1, 2, 3]]).unwrap();
        assert!(!is_latin_square(&rows_only).unwrap());
    }

    #[test]
    fn orthogonality() {
        let (a, b) = cyclic_pair();
        assert!(are_orthogonal(&a, &b).unwrap());
        assert!(are_orthogonal(&b, &a).unwrap());
        assert!(!are_orthogonal(&a, &a).unwrap());
        assert_eq!(
            are_orthogonal(&a, &Square::new(2)),
            Err(OcaError::OrderMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn pair_distribution_of_projections() {
        let first = BitVector::from_bit_string("0101").unwrap();
        let second = BitVector::from_bit_string("0011").unwrap();
        assert_eq!(pair_distribution(&first, &second).unwrap(), [1, 1, 1, 1]);
        let third = BitVector::from_bit_string("0111").unwrap();
        assert_eq!(pair_distribution(&first, &third).unwrap(), [1, 0, 1, 2]);
        assert!(pair_distribution(&first, &BitVector::zeros(3)).is_err());
    }

    #[test]
    fn iterate_follows_feedback() {
        let (a, b) = cyclic_pair();
        assert_eq!(superpose(&a, &b, 0, 1), OlsEntry::new(2, 3));
        // (1,2) -> (2,3) -> (1,3) -> (3,2) -> (1,2)
        let orbit = iterate(&a, &b, OlsEntry::new(1, 2), 4).unwrap();
        assert_eq!(
            orbit,
            vec![
                OlsEntry::new(2, 3),
                OlsEntry::new(1, 3),
                OlsEntry::new(3, 2),
                OlsEntry::new(1, 2),
            ]
        );
        assert!(iterate(&a, &b, OlsEntry::new(0, 1), 1).is_err());
    }

    #[test]
    fn cycle_decomposition_of_cyclic_pair() {
        let (a, b) = cyclic_pair();
        let cycles = decompose_cycles(&a, &b).unwrap();
        let lengths: Vec<usize> = cycles.iter().map(Cycle::len).collect();
        assert_eq!(lengths, vec![1, 4, 4]);
        assert_eq!(cycles[0].to_string(), "Cycle of length 1 : [ (1,1) ]");
        assert_eq!(
            cycles[1].to_string(),
            "Cycle of length 4 : [ (1,2) (2,3) (1,3) (3,2) ]"
        );
        assert_eq!(cycles[2].entries()[0], OlsEntry::new(2, 1));
    }

    #[test]
    fn non_bijective_map_is_rejected() {
        let (a, _) = cyclic_pair();
        // (1,1) -> (1,1) fixed, (1,2) -> (2,2) -> (3,3) -> (2,2) revisits.
        assert!(matches!(
            decompose_cycles(&a, &a),
            Err(OcaError::NotBijective(_))
        ));
    }
}
