//! aarch64-accelerated CRC-32C (Castagnoli).
//!
//! Uses the ARMv8 CRC32 extension (`crc32c*` instructions), consuming the
//! buffer through an 8/4/2/1-byte instruction ladder.
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - Callers must verify the `crc` extension before invoking the kernel.

#![allow(unsafe_code)]

use core::arch::aarch64::{__crc32cb, __crc32cd, __crc32ch, __crc32cw};

/// Fold `data` into the raw (complemented-domain) CRC state using the CRC32
/// extension.
///
/// # Safety
///
/// The CPU must support the `crc` target feature; see
/// [`platform::hardware_crc_available`].
#[target_feature(enable = "crc")]
pub(crate) unsafe fn compute_crc_unchecked(crc: u32, data: &[u8]) -> u32 {
  let mut current = crc;

  let mut chunks = data.chunks_exact(8);
  for chunk in chunks.by_ref() {
    let mut word = [0u8; 8];
    word.copy_from_slice(chunk);
    current = __crc32cd(current, u64::from_le_bytes(word));
  }

  let mut rest = chunks.remainder();

  if rest.len() >= 4 {
    let (word, tail) = rest.split_at(4);
    let mut buf = [0u8; 4];
    buf.copy_from_slice(word);
    current = __crc32cw(current, u32::from_le_bytes(buf));
    rest = tail;
  }

  if rest.len() >= 2 {
    let (word, tail) = rest.split_at(2);
    let mut buf = [0u8; 2];
    buf.copy_from_slice(word);
    current = __crc32ch(current, u16::from_le_bytes(buf));
    rest = tail;
  }

  if let [byte] = rest {
    current = __crc32cb(current, *byte);
  }

  current
}
