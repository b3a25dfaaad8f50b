//! The CRC-32 combine operation.
//!
//! Computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)` in
//! O(log len(B)) time.
//!
//! # Mathematical Background
//!
//! Appending `len(B)` zero bytes to stream A maps `crc(A)` through a
//! GF(2)-linear operator; XORing in `crc(B)` then accounts for B's actual
//! bytes, because the CRC register process is linear over GF(2). The zero-run
//! operator for `len(B)` bytes is built by square-and-multiply over the
//! binary expansion of the length, starting from an elementary zero-run
//! matrix seeded out of the caller's lookup table. This is zlib's
//! `crc32_combine`, driven by the table instead of a hard-coded polynomial.

// SAFETY: Indexing in this module touches fixed matrix rows 0..4 and table
// entries at the constant single-bit indices 16..=128, all within the fixed
// array sizes.
#![allow(clippy::indexing_slicing)]

use core::mem;

use crate::gf2::{INIT_EVEN, INIT_ODD};
use crate::table::{Table, CASTAGNOLI_TABLE, IEEE_TABLE, KOOPMAN_TABLE};

/// Combine two CRC-32 values computed under the same reflected polynomial.
///
/// Given `crc1 = crc(A)` and `crc2 = crc(B)`, returns `crc(A || B)` where
/// `||` is byte-stream concatenation. Neither stream's data is needed; the
/// cost depends only on the bit length of `len2`.
///
/// # Arguments
///
/// * `table` - Byte-wise lookup table for the polynomial (see [`Table`])
/// * `crc1` - Checksum of the first stream
/// * `crc2` - Checksum of the second stream
/// * `len2` - Length of the second stream in bytes
///
/// A zero `len2` returns `crc1` unchanged and ignores `crc2`: an empty
/// continuation is the identity. All three checksum inputs must correspond
/// to the polynomial the table was built for; a mismatch yields a
/// well-defined but wrong result, with no error signaled.
#[must_use]
pub fn combine(table: &Table, crc1: u32, crc2: u32, len2: usize) -> u32 {
  if len2 == 0 {
    return crc1;
  }

  let entries = table.entries();

  // Copy the prototype operators and seed their polynomial-dependent rows
  // from the single-bit table entries. `odd` becomes the four-zero-bit
  // operator; `even` is its two-bit counterpart, overwritten by the first
  // squaring below.
  let mut odd = INIT_ODD;
  odd.0[0] = entries[1 << 4];
  odd.0[1] = entries[1 << 5];
  odd.0[2] = entries[1 << 6];
  odd.0[3] = entries[1 << 7];

  let mut even = INIT_EVEN;
  even.0[0] = entries[1 << 6];
  even.0[1] = entries[1 << 7];

  // Square-and-multiply over the binary expansion of the length. Each
  // squaring doubles the zero-run the operator represents, so after the
  // first squaring `even` stands for one zero byte, then two, four, ...
  // The two buffers ping-pong roles each iteration.
  let mut crc = crc1;
  let mut len = len2;
  while len != 0 {
    even.square_from(&odd);
    if len & 1 != 0 {
      crc = even.mul_vec(crc);
    }
    len >>= 1;
    mem::swap(&mut odd, &mut even);
  }

  // `crc` now reflects A followed by len2 zero bytes; XOR folds in B.
  crc ^ crc2
}

/// Combine two CRC-32 (ISO-HDLC / IEEE 802.3) values.
#[inline]
#[must_use]
pub fn combine_ieee(crc1: u32, crc2: u32, len2: usize) -> u32 {
  combine(&IEEE_TABLE, crc1, crc2, len2)
}

/// Combine two CRC-32C (Castagnoli) values.
#[inline]
#[must_use]
pub fn combine_castagnoli(crc1: u32, crc2: u32, len2: usize) -> u32 {
  combine(&CASTAGNOLI_TABLE, crc1, crc2, len2)
}

/// Combine two CRC-32K (Koopman) values.
#[inline]
#[must_use]
pub fn combine_koopman(crc1: u32, crc2: u32, len2: usize) -> u32 {
  combine(&KOOPMAN_TABLE, crc1, crc2, len2)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::table::{CASTAGNOLI, IEEE, KOOPMAN};

  /// Table-driven CRC-32 with the conventional init and final XOR.
  fn checksum(table: &Table, data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in data {
      crc = table.entries()[((crc ^ b as u32) & 0xFF) as usize] ^ (crc >> 8);
    }
    crc ^ 0xFFFF_FFFF
  }

  #[test]
  fn combine_simple() {
    let a = b"hello ";
    let b = b"world";
    let ab = b"hello world";

    for table in [&IEEE_TABLE, &CASTAGNOLI_TABLE, &KOOPMAN_TABLE] {
      let crc_a = checksum(table, a);
      let crc_b = checksum(table, b);
      let crc_ab = checksum(table, ab);

      assert_eq!(combine(table, crc_a, crc_b, b.len()), crc_ab);
    }
  }

  #[test]
  fn combine_empty_second() {
    let crc_a = checksum(&IEEE_TABLE, b"hello");

    // Combining with an empty second stream returns the first CRC and
    // ignores whatever is passed for crc2.
    assert_eq!(combine(&IEEE_TABLE, crc_a, 0, 0), crc_a);
    assert_eq!(combine(&IEEE_TABLE, crc_a, 0xDEAD_BEEF, 0), crc_a);
  }

  #[test]
  fn combine_empty_first() {
    let b = b"world";
    let crc_empty = checksum(&IEEE_TABLE, b"");
    let crc_b = checksum(&IEEE_TABLE, b);

    assert_eq!(combine(&IEEE_TABLE, crc_empty, crc_b, b.len()), crc_b);
  }

  #[test]
  fn combine_various_splits() {
    let data = b"The quick brown fox jumps over the lazy dog";

    for split in 1..data.len() {
      let (a, b) = data.split_at(split);
      let crc_a = checksum(&IEEE_TABLE, a);
      let crc_b = checksum(&IEEE_TABLE, b);
      let crc_ab = checksum(&IEEE_TABLE, data);

      assert_eq!(
        combine(&IEEE_TABLE, crc_a, crc_b, b.len()),
        crc_ab,
        "failed at split {}",
        split
      );
    }
  }

  #[test]
  fn wrappers_match_explicit_tables() {
    let data = b"wrapper parity check";
    let (a, b) = data.split_at(7);

    for (poly, wrapper) in [
      (IEEE, combine_ieee as fn(u32, u32, usize) -> u32),
      (CASTAGNOLI, combine_castagnoli),
      (KOOPMAN, combine_koopman),
    ] {
      let table = Table::new(poly);
      let crc_a = checksum(&table, a);
      let crc_b = checksum(&table, b);

      assert_eq!(
        wrapper(crc_a, crc_b, b.len()),
        combine(&table, crc_a, crc_b, b.len())
      );
    }
  }

  #[test]
  fn combine_is_deterministic() {
    let first = combine(&IEEE_TABLE, 0x1234_5678, 0x8765_4321, 1 << 20);
    for _ in 0..8 {
      assert_eq!(combine(&IEEE_TABLE, 0x1234_5678, 0x8765_4321, 1 << 20), first);
    }
  }
}
