//! Fuzz target for the combine operation.
//!
//! Chains combines over arbitrary splits of arbitrary data and checks the
//! result against a directly computed checksum, for each bundled polynomial.

#![no_main]

use arbitrary::Arbitrary;
use crc32_combine::{combine, Table, CASTAGNOLI, IEEE, KOOPMAN};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

/// Table-driven CRC-32, init and xorout 0xFFFFFFFF.
fn checksum(table: &Table, data: &[u8]) -> u32 {
  let mut crc = 0xFFFF_FFFFu32;
  for &b in data {
    crc = table.entries()[((crc ^ b as u32) & 0xFF) as usize] ^ (crc >> 8);
  }
  crc ^ 0xFFFF_FFFF
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  if data.is_empty() {
    return;
  }

  // Normalize splits to valid range and sort
  let mut splits: Vec<usize> = input.splits.iter().map(|s| *s % data.len()).collect();
  splits.sort_unstable();
  splits.dedup();

  for poly in [IEEE, CASTAGNOLI, KOOPMAN] {
    let table = Table::new(poly);
    let expected = checksum(&table, data);

    let mut chunks = Vec::new();
    let mut prev = 0;
    for &split in &splits {
      if split > prev {
        chunks.push(&data[prev..split]);
        prev = split;
      }
    }
    chunks.push(&data[prev..]);

    let mut combined = checksum(&table, chunks[0]);
    for chunk in &chunks[1..] {
      let chunk_crc = checksum(&table, chunk);
      combined = combine(&table, combined, chunk_crc, chunk.len());
    }

    assert_eq!(combined, expected, "combine chain mismatch for {poly:#010x}");
  }
});
