//! Byte-wise CRC-32 lookup tables (reflected form).
//!
//! The combiner does not hash data, but it is driven by the same 256-entry
//! lookup table a standard byte-at-a-time CRC-32 implementation uses: entry
//! `b` is the register state after feeding byte `b` through eight reflected
//! shift steps. Only the four entries at the single-bit indices `1<<4` through
//! `1<<7` are ever read by the combine operation.
//!
//! Tables can be generated here at compile time from a reflected polynomial,
//! or supplied verbatim from another CRC-32 library via
//! [`Table::from_entries`].

// SAFETY: All array indexing in this module uses loop indices bounded by the
// table size (0..256). Clippy cannot prove this in const fn contexts, but the
// bounds are statically guaranteed by the loop conditions.
#![allow(clippy::indexing_slicing)]

/// CRC-32 (ISO-HDLC / IEEE 802.3) polynomial in reflected form.
///
/// Normal form 0x04C11DB7. Used by Ethernet, gzip, zip, PNG, zlib.
pub const IEEE: u32 = 0xEDB8_8320;

/// CRC-32C (Castagnoli) polynomial in reflected form.
///
/// Normal form 0x1EDC6F41. Used by iSCSI, SCTP, ext4, Btrfs.
pub const CASTAGNOLI: u32 = 0x82F6_3B78;

/// CRC-32K (Koopman) polynomial in reflected form.
///
/// Normal form 0x741B8CD7. Used in some embedded networks.
pub const KOOPMAN: u32 = 0xEB31_D82E;

/// A 256-entry byte-wise CRC-32 lookup table in reflected form.
///
/// # Table Convention
///
/// Entries must follow the reflected ("right-shifting") register convention:
/// `entries[b]` is the state reached from initial state `b` after eight
/// LSB-first shift steps with conditional polynomial XOR. Every mainstream
/// table-driven CRC-32 implementation builds its first-level table this way.
/// A table built under the non-reflected (MSB-first) convention is silently
/// wrong here; no mismatch is detected.
#[derive(Clone)]
pub struct Table([u32; 256]);

impl Table {
  /// Generate the lookup table for a reflected polynomial.
  ///
  /// Runs at compile time; the bundled [`IEEE_TABLE`], [`CASTAGNOLI_TABLE`],
  /// and [`KOOPMAN_TABLE`] statics are built with this.
  #[must_use]
  pub const fn new(poly: u32) -> Self {
    let mut entries = [0u32; 256];
    let mut n = 0usize;
    while n < 256 {
      let mut crc = n as u32;
      let mut bit = 0;
      while bit < 8 {
        crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
        bit += 1;
      }
      entries[n] = crc;
      n += 1;
    }
    Self(entries)
  }

  /// Wrap a table built by an external CRC-32 implementation.
  ///
  /// The entries must follow the reflected convention documented on
  /// [`Table`]; they are used as-is.
  #[inline]
  #[must_use]
  pub const fn from_entries(entries: [u32; 256]) -> Self {
    Self(entries)
  }

  /// Borrow the raw table entries.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u32; 256] {
    &self.0
  }
}

/// Compile-time table for the [`IEEE`] polynomial.
pub static IEEE_TABLE: Table = Table::new(IEEE);

/// Compile-time table for the [`CASTAGNOLI`] polynomial.
pub static CASTAGNOLI_TABLE: Table = Table::new(CASTAGNOLI);

/// Compile-time table for the [`KOOPMAN`] polynomial.
pub static KOOPMAN_TABLE: Table = Table::new(KOOPMAN);

// Compile-time verification against published table entries. If these fail,
// the build fails.

const _: () = {
  let t = Table::new(IEEE).0;
  assert!(t[0] == 0);
  assert!(t[1] == 0x7707_3096);
  assert!(t[2] == 0xEE0E_612C);
  assert!(t[255] == 0x2D02_EF8D);
};

const _: () = {
  let t = Table::new(CASTAGNOLI).0;
  assert!(t[0] == 0);
  assert!(t[1] == 0xF26B_8303);
};
