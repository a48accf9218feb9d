//! Property-based tests for the codec and the matrix engine.

use gf2_core::{BitMatrix, BitVector};
use num_bigint::BigUint;
use proptest::prelude::*;

fn square_rows(max_order: usize) -> impl Strategy<Value = Vec<Vec<bool>>> {
    (1..=max_order).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(any::<bool>(), n), n))
}

proptest! {
    /// Encoding, decoding and re-encoding a value that fits gives the same bits.
    #[test]
    fn prop_u64_round_trip(len in 0usize..=64, raw in any::<u64>()) {
        let value = if len == 64 { raw } else { raw & ((1u64 << len) - 1) };
        let bits = BitVector::from_u64(value, len).unwrap();
        prop_assert_eq!(bits.len(), len);
        let decoded = bits.to_u64().unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(BitVector::from_u64(decoded, len).unwrap(), bits);
    }

    /// The arbitrary-precision codec round-trips values wider than a machine word.
    #[test]
    fn prop_big_round_trip(raw in any::<u64>(), shift in 0usize..130, slack in 0usize..70) {
        let value = BigUint::from(raw) << shift;
        let len = value.bits() as usize + slack;
        let bits = BitVector::from_biguint(&value, len).unwrap();
        prop_assert_eq!(bits.len(), len);
        prop_assert_eq!(bits.to_biguint(), value);
        prop_assert_eq!(bits.weight(), raw.count_ones() as usize);
    }

    /// Values wider than the requested length are rejected, never truncated.
    #[test]
    fn prop_truncation_is_an_error(len in 0usize..64) {
        let value = 1u64 << len;
        prop_assert!(BitVector::from_u64(value, len).is_err());
        prop_assert!(BitVector::from_biguint(&BigUint::from(value), len).is_err());
    }

    /// Reversal is an involution and preserves the weight.
    #[test]
    fn prop_reverse_involution(bits in prop::collection::vec(any::<bool>(), 0..100)) {
        let v = BitVector::from_bits(bits);
        prop_assert_eq!(v.reversed().reversed(), v.clone());
        prop_assert_eq!(v.reversed().weight(), v.weight());
    }

    /// Square-and-multiply agrees with repeated multiplication.
    #[test]
    fn prop_pow_matches_naive(rows in square_rows(10), e in 0u64..300) {
        let m = BitMatrix::from_rows(&rows).unwrap();
        let fast = m.pow(&BigUint::from(e), 9).unwrap();
        prop_assert_eq!(fast, m.pow_naive(e));
    }

    /// Only the identity matrix passes `is_identity`.
    #[test]
    fn prop_is_identity_only_for_identity(rows in square_rows(10)) {
        let n = rows.len();
        let expected = rows
            .iter()
            .enumerate()
            .all(|(i, row)| row.iter().enumerate().all(|(j, bit)| *bit == (i == j)));
        let m = BitMatrix::from_rows(&rows).unwrap();
        prop_assert_eq!(m.is_identity(), expected);
        prop_assert!(BitMatrix::identity(n).unwrap().is_identity());
    }
}

#[test]
fn identity_detection_up_to_order_eight() {
    for n in 1..=8 {
        let id = BitMatrix::identity(n).unwrap();
        assert!(id.is_identity());
        for i in 0..n {
            for j in 0..n {
                let mut flipped = id.clone();
                flipped.set(i, j, !id.get(i, j));
                assert!(!flipped.is_identity(), "order {n}, flipped ({i}, {j})");
            }
        }
    }
}
