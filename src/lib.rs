//! Merge two CRC-32 checksums without touching either stream's data.
//!
//! When two chunks of data are checksummed independently (in parallel, or at
//! different times), the checksum of their concatenation can be derived from
//! `crc(A)`, `crc(B)`, and `len(B)` alone:
//!
//! ```text
//! crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
//! ```
//!
//! The multiplication by `x^(8*len(B))` is performed as square-and-multiply
//! exponentiation of a 32×32 GF(2) transition matrix, so a combine costs
//! O(log len(B)) regardless of how large either stream was. This is zlib's
//! well-known `crc32_combine` construction, driven by the caller's byte-wise
//! lookup table rather than a hard-coded polynomial.
//!
//! # Example
//!
//! ```rust
//! use crc32_combine::{combine, IEEE_TABLE};
//!
//! // Checksums are computed elsewhere, e.g. by a standard CRC-32 library.
//! let crc_abc = 0x3524_41C2; // crc32(b"abc")
//!
//! // An empty second stream contributes nothing.
//! assert_eq!(combine(&IEEE_TABLE, crc_abc, 0xDEAD_BEEF, 0), crc_abc);
//!
//! // Extending the empty stream's checksum (0) by B yields crc(B).
//! assert_eq!(combine(&IEEE_TABLE, 0, crc_abc, 3), crc_abc);
//! ```
//!
//! # Caller Contract
//!
//! `crc1`, `crc2`, and the table must all correspond to the same reflected
//! (LSB-first) polynomial, and the checksums must use the conventional
//! `0xFFFFFFFF` initial value and final XOR. A table built under the
//! non-reflected convention, or checksums from a different polynomial,
//! produce a well-defined but wrong result; no mismatch is detected.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible and has no dependencies. Disable the
//! `std` feature for embedded use.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod combine;
mod gf2;
mod table;

pub use combine::{combine, combine_castagnoli, combine_ieee, combine_koopman};
pub use table::{Table, CASTAGNOLI, CASTAGNOLI_TABLE, IEEE, IEEE_TABLE, KOOPMAN, KOOPMAN_TABLE};
