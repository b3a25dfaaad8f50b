//! GF(2) bit-matrix arithmetic for the CRC-32 shift register.
//!
//! A reflected CRC-32 register evolves linearly over GF(2): appending a zero
//! bit maps the 32-bit state through a fixed 32×32 bit-matrix. Powers of that
//! matrix describe longer zero runs, and squaring a matrix doubles the run it
//! represents. The combine operation exponentiates these operators instead of
//! feeding data through the register.
//!
//! A matrix is stored as 32 `u32` rows; row `j` is the operator's image of
//! input bit `j`. Applying the matrix to a vector XORs together the rows
//! selected by the vector's set bits (addition in GF(2) is XOR).

// SAFETY: All array indexing in this module uses loop indices bounded by the
// row count. `mul_vec` indexes at most `rows[i + 3]` with `i <= 28`, since the
// shifted vector is exhausted after eight 4-bit steps.
#![allow(clippy::indexing_slicing)]

/// A 32×32 matrix over GF(2), one `u32` row per input bit.
#[derive(Clone, Copy)]
pub(crate) struct Gf2Matrix(pub(crate) [u32; 32]);

impl Gf2Matrix {
  /// Multiply the matrix by a 32-bit column vector.
  ///
  /// Scans the vector four bits at a time and stops as soon as the remaining
  /// shifted vector is zero; XOR is commutative, so the grouping does not
  /// affect the result.
  #[inline]
  #[must_use]
  pub(crate) const fn mul_vec(&self, vec: u32) -> u32 {
    let mut sum = 0u32;
    let mut v = vec;
    let mut i = 0;
    while v != 0 {
      sum ^= (self.0[i] * (v & 1))
        ^ (self.0[i + 1] * ((v >> 1) & 1))
        ^ (self.0[i + 2] * ((v >> 2) & 1))
        ^ (self.0[i + 3] * ((v >> 3) & 1));
      i += 4;
      v >>= 4;
    }
    sum
  }

  /// Fill `self` with `src * src`.
  ///
  /// Row `n` of the square is `src` applied to row `n` of `src`, i.e. the
  /// image of input bit `n` under the operator applied twice. `src` must stay
  /// intact while every row is derived, so the destination is a separate
  /// buffer rather than an in-place update.
  #[inline]
  pub(crate) fn square_from(&mut self, src: &Gf2Matrix) {
    let mut n = 0;
    while n < 32 {
      self.0[n] = src.mul_vec(src.0[n]);
      n += 1;
    }
  }
}

/// Build a prototype whose row `j` is `1 << (j - offset)` for `j >= offset`.
///
/// This is the polynomial-independent part of the zero-run operators: a pure
/// right shift of the register by `offset` bits. The first `offset` rows stay
/// zero until they are seeded from the caller's CRC table.
const fn shift_prototype(offset: usize) -> Gf2Matrix {
  let mut rows = [0u32; 32];
  let mut j = offset;
  while j < 32 {
    rows[j] = 1 << (j - offset);
    j += 1;
  }
  Gf2Matrix(rows)
}

/// Prototype for the odd-phase operator (four zero bits once seeded).
pub(crate) const INIT_ODD: Gf2Matrix = shift_prototype(4);

/// Prototype for the even-phase operator (two zero bits once seeded).
pub(crate) const INIT_EVEN: Gf2Matrix = shift_prototype(2);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::table::{Table, IEEE};

  /// Seed the odd prototype from a table, as `combine` does.
  fn seeded_odd(table: &Table) -> Gf2Matrix {
    let entries = table.entries();
    let mut odd = INIT_ODD;
    odd.0[0] = entries[1 << 4];
    odd.0[1] = entries[1 << 5];
    odd.0[2] = entries[1 << 6];
    odd.0[3] = entries[1 << 7];
    odd
  }

  #[test]
  fn prototype_rows_encode_pure_shift() {
    for j in 4..32 {
      assert_eq!(INIT_ODD.0[j], 1 << (j - 4), "odd row {j}");
    }
    for j in 2..32 {
      assert_eq!(INIT_EVEN.0[j], 1 << (j - 2), "even row {j}");
    }
    assert_eq!(&INIT_ODD.0[..4], &[0, 0, 0, 0]);
    assert_eq!(&INIT_EVEN.0[..2], &[0, 0]);
  }

  #[test]
  fn mul_vec_zero_is_zero() {
    let table = Table::new(IEEE);
    assert_eq!(seeded_odd(&table).mul_vec(0), 0);
  }

  #[test]
  fn mul_vec_selects_single_rows() {
    let m = seeded_odd(&Table::new(IEEE));
    for j in 0..32 {
      assert_eq!(m.mul_vec(1 << j), m.0[j], "row {j}");
    }
  }

  #[test]
  fn mul_vec_is_linear() {
    let m = seeded_odd(&Table::new(IEEE));
    let pairs = [
      (0x0000_0001u32, 0x8000_0000u32),
      (0x1234_5678, 0x9ABC_DEF0),
      (0xFFFF_FFFF, 0x0F0F_0F0F),
    ];
    for (a, b) in pairs {
      assert_eq!(m.mul_vec(a ^ b), m.mul_vec(a) ^ m.mul_vec(b));
    }
  }

  #[test]
  fn square_is_apply_twice() {
    let m = seeded_odd(&Table::new(IEEE));
    let mut sq = INIT_EVEN;
    sq.square_from(&m);

    let vectors = [1u32, 0x8000_0000, 0xDEAD_BEEF, 0x0101_0101, 0xFFFF_FFFF];
    for v in vectors {
      assert_eq!(sq.mul_vec(v), m.mul_vec(m.mul_vec(v)), "vector {v:#010x}");
    }
  }
}
