//! x86_64 feature detection via CPUID.
//!
//! The `crc32` instruction (CRC-32C polynomial) arrived with SSE4.2 on
//! Nehalem. Its presence is reported by CPUID leaf 1: bit 20 of ECX.

#![allow(unsafe_code)] // Required for the CPUID intrinsic.

use core::arch::x86_64::__cpuid;

/// SSE4.2 flag: CPUID leaf 1, ECX bit 20.
const SSE42_ECX_BIT: u32 = 20;

/// Returns `true` if the `crc32` instruction (SSE4.2) is available.
///
/// Works without `std`: CPUID is architecturally guaranteed on x86_64, so
/// the query needs no OS support.
#[inline]
#[must_use]
pub fn has_crc32_instruction() -> bool {
  // SAFETY: CPUID is always available on x86_64.
  let leaf1 = unsafe { __cpuid(1) };
  (leaf1.ecx >> SSE42_ECX_BIT) & 1 == 1
}
