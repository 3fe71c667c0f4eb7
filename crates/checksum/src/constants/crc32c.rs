//! CRC-32C (Castagnoli) constants.
//!
//! Polynomial: 0x1EDC6F41 (reflected: 0x82F63B78)
//! Used by: iSCSI, SCTP, Btrfs, ext4, RocksDB, LevelDB

/// CRC-32C polynomial in reflected (bit-reversed) form.
///
/// The normal form is 0x1EDC6F41; the reflected form suits LSB-first
/// processing.
pub const POLYNOMIAL: u32 = 0x82F63B78;

/// Slicing-by-8 lookup tables, built once at compile time.
///
/// Indexed `[slice][byte]`. Read-only after construction; concurrent readers
/// need no synchronization. Total size: 8 * 256 * 4 = 8KB, 64-byte aligned.
pub static TABLES: super::Aligned64<[[u32; 256]; 8]> =
  super::Aligned64(super::tables::generate_slicing_tables(POLYNOMIAL));

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn polynomial_is_reflected_castagnoli() {
    // 0x1EDC6F41 bit-reversed in 32 bits.
    assert_eq!(POLYNOMIAL, 0x82F6_3B78);
    assert_eq!(POLYNOMIAL.reverse_bits(), 0x1EDC_6F41);
  }

  #[test]
  fn static_tables_match_generator() {
    assert_eq!(TABLES.0, super::super::tables::generate_slicing_tables(POLYNOMIAL));
  }

  #[test]
  fn table_0_spot_checks() {
    assert_eq!(TABLES.0[0][0], 0);
    assert_eq!(TABLES.0[0][1], 0xF26B_8303);
    assert_eq!(TABLES.0[0][255], 0xAD7D_5351);
  }
}
