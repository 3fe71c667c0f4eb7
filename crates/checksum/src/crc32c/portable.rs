//! Portable CRC-32C implementation using slicing-by-8.
//!
//! # Algorithm
//!
//! The slicing-by-8 algorithm (Sarwate's table lookup extended to N tables)
//! processes 8 bytes per iteration:
//!
//! 1. XOR the next 8 input bytes into the running CRC
//! 2. Look up each byte in its positional table
//! 3. XOR all 8 entries to get the new CRC
//!
//! The 8 lookups are independent, which hides table-load latency that a
//! byte-at-a-time loop would serialize.
//!
//! Bytes are extracted with explicit shifts and masks from a value assembled
//! via `u64::from_le_bytes`, never by reinterpreting memory as a wider
//! integer, so results are identical on big- and little-endian hosts.

use super::COMPLEMENT;
use crate::constants::crc32c::TABLES;

/// Compute CRC-32C over `data`, seeded with `initial_crc`.
///
/// An empty buffer is a true no-op: `initial_crc` comes back unchanged, with
/// no complement applied. For non-empty input the accumulator enters the
/// complemented domain, folds the data, and leaves it again, so feeding one
/// call's result into the next call's seed chains correctly.
#[must_use]
pub fn compute(initial_crc: u32, data: &[u8]) -> u32 {
  if data.is_empty() {
    return initial_crc;
  }

  let mut crc = initial_crc ^ COMPLEMENT;

  // Single-byte steps until the cursor sits on an 8-byte boundary, so the
  // bulk loop below always reads aligned words.
  let head_len = data.as_ptr().align_offset(8).min(data.len());
  let (head, body) = data.split_at(head_len);
  for &byte in head {
    crc = step(crc, byte);
  }

  let mut chunks = body.chunks_exact(8);
  for chunk in chunks.by_ref() {
    let mut word = [0u8; 8];
    word.copy_from_slice(chunk);
    let d = u64::from_le_bytes(word);

    // XOR the CRC into the low half, then fold all 8 bytes at once.
    let lo = (crc as u64) ^ (d & 0xFFFF_FFFF);
    let hi = d >> 32;

    // Table 7 takes the least-significant byte, table 0 the most.
    let b0 = lo as u8 as usize;
    let b1 = (lo >> 8) as u8 as usize;
    let b2 = (lo >> 16) as u8 as usize;
    let b3 = (lo >> 24) as u8 as usize;
    let b4 = hi as u8 as usize;
    let b5 = (hi >> 8) as u8 as usize;
    let b6 = (hi >> 16) as u8 as usize;
    let b7 = (hi >> 24) as u8 as usize;

    crc = TABLES.0[7][b0]
      ^ TABLES.0[6][b1]
      ^ TABLES.0[5][b2]
      ^ TABLES.0[4][b3]
      ^ TABLES.0[3][b4]
      ^ TABLES.0[2][b5]
      ^ TABLES.0[1][b6]
      ^ TABLES.0[0][b7];
  }

  // Trailing bytes (< 8).
  for &byte in chunks.remainder() {
    crc = step(crc, byte);
  }

  crc ^ COMPLEMENT
}

/// Fold a single byte into the raw (complemented-domain) CRC state.
#[inline]
fn step(crc: u32, byte: u8) -> u32 {
  let idx = (crc as u8 ^ byte) as usize;
  (crc >> 8) ^ TABLES.0[0][idx]
}

#[cfg(test)]
mod tests {
  extern crate std;

  use alloc::vec;
  use alloc::vec::Vec;

  use super::*;

  /// Standard CRC-32C test vector: "123456789" -> 0xE3069283
  const CHECK_VALUE: u32 = 0xE306_9283;

  #[test]
  fn test_check_string() {
    assert_eq!(compute(0, b"123456789"), CHECK_VALUE);
  }

  #[test]
  fn test_empty_returns_seed() {
    // A no-data call is a no-op for every seed, including the complement
    // sentinels.
    for seed in [0u32, 1, 0xDEAD_BEEF, 0xFFFF_FFFF] {
      assert_eq!(compute(seed, b""), seed);
    }
  }

  #[test]
  fn test_zeros() {
    assert_eq!(compute(0, &[0u8; 32]), 0x8A91_36AA);
  }

  #[test]
  fn test_ones() {
    assert_eq!(compute(0, &[0xFFu8; 32]), 0x62A8_AB43);
  }

  #[test]
  fn test_single_byte() {
    assert_eq!(compute(0, &[0x00]), 0x527D_5351);
  }

  #[test]
  fn test_seed_chaining_matches_oneshot() {
    let data = b"hello world, this is a test of seeded CRC chaining";
    let oneshot = compute(0, data);

    for split in 0..data.len() {
      let (a, b) = data.split_at(split);
      let chained = compute(compute(0, a), b);
      assert_eq!(chained, oneshot, "mismatch at split point {split}");
    }
  }

  #[test]
  fn test_alignment_invariance() {
    // The same content must produce the same checksum no matter where in
    // memory the slice starts.
    let content: Vec<u8> = (0u8..=255).cycle().take(219).collect();
    let expected = compute(0, &content);

    let mut backing = vec![0u8; content.len() + 8];
    for offset in 0..8 {
      backing[offset..offset + content.len()].copy_from_slice(&content);
      assert_eq!(compute(0, &backing[offset..offset + content.len()]), expected, "offset {offset}");
    }
  }

  #[test]
  fn test_various_lengths() {
    // No panics across head/bulk/tail boundaries.
    for len in 0..=128 {
      let data = vec![0xABu8; len];
      let _ = compute(0, &data);
    }
  }
}
