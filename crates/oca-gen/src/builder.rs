//! Latin squares induced by a cellular automaton.

use gf2_core::BitVector;

use crate::automaton::Automaton;
use crate::error::OcaError;
use crate::square::Square;

/// Largest block length accepted by [`build_square`].
pub const MAX_BLOCK_LEN: usize = 15;

/// Builds the `2^block_len × 2^block_len` square induced by one masked step of `ca`.
///
/// Every configuration of `2·block_len` bits is loaded into the automaton; its
/// first half is the row, its second half the column, and the final
/// configuration (read as an integer) plus one is the entry. The automaton must
/// map `2·block_len` cells to `block_len` cells, i.e. have a neighborhood of
/// `block_len + 1`. The automaton's cells hold the last probed configuration
/// afterwards.
pub fn build_square(ca: &mut Automaton, block_len: usize) -> Result<Square, OcaError> {
    if block_len > MAX_BLOCK_LEN {
        return Err(OcaError::BlockTooWide(block_len));
    }
    let order = 1usize << block_len;
    let mut square = Square::new(order);

    for i in 0..(order * order) as u64 {
        let initial = BitVector::from_u64(i, 2 * block_len)?;
        let (row_bits, col_bits) = initial.split_at(block_len);
        ca.set_cells(initial);
        ca.step()?;

        let value = ca.cells().to_u64()?;
        if value >= order as u64 {
            return Err(OcaError::ValueOutOfRange { value, block_len });
        }
        square.set(row_bits.to_usize()?, col_bits.to_usize()?, value as u32 + 1);
    }

    Ok(square)
}
