//! x86_64-accelerated CRC-32C (Castagnoli).
//!
//! Uses the SSE4.2 `crc32` instruction family, which implements exactly the
//! Castagnoli polynomial. The kernel consumes the buffer through an
//! 8/4/2/1-byte instruction ladder.
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - Callers must verify SSE4.2 support before invoking the kernel.

#![allow(unsafe_code)]

use core::arch::x86_64::{_mm_crc32_u8, _mm_crc32_u16, _mm_crc32_u32, _mm_crc32_u64};

/// Fold `data` into the raw (complemented-domain) CRC state using SSE4.2.
///
/// # Safety
///
/// The CPU must support the `sse4.2` target feature; see
/// [`platform::hardware_crc_available`].
#[target_feature(enable = "sse4.2")]
pub(crate) unsafe fn compute_sse42_unchecked(crc: u32, data: &[u8]) -> u32 {
  let mut wide = crc as u64;

  let mut chunks = data.chunks_exact(8);
  for chunk in chunks.by_ref() {
    let mut word = [0u8; 8];
    word.copy_from_slice(chunk);
    wide = _mm_crc32_u64(wide, u64::from_le_bytes(word));
  }

  // The instruction keeps the CRC in the low 32 bits.
  let mut current = wide as u32;
  let mut rest = chunks.remainder();

  if rest.len() >= 4 {
    let (word, tail) = rest.split_at(4);
    let mut buf = [0u8; 4];
    buf.copy_from_slice(word);
    current = _mm_crc32_u32(current, u32::from_le_bytes(buf));
    rest = tail;
  }

  if rest.len() >= 2 {
    let (word, tail) = rest.split_at(2);
    let mut buf = [0u8; 2];
    buf.copy_from_slice(word);
    current = _mm_crc32_u16(current, u16::from_le_bytes(buf));
    rest = tail;
  }

  if let [byte] = rest {
    current = _mm_crc32_u8(current, *byte);
  }

  current
}
