//! CPU capability detection for hardware CRC-32C.
//!
//! This crate is the single source of truth for answering one question:
//! does the current processor carry a dedicated CRC-32C instruction?
//!
//! - **x86_64**: the `crc32` instruction ships with SSE4.2, reported by
//!   CPUID leaf 1, ECX bit 20.
//! - **aarch64**: the ARMv8 CRC32 extension (`crc*c` instructions).
//! - Anything else: no hardware path, the query reports `false`.
//!
//! # Main Entry Point
//!
//! ```
//! if platform::hardware_crc_available() {
//!     // Safe to run the hardware CRC-32C kernel.
//! }
//! ```
//!
//! # Design
//!
//! 1. **Read-only**: detection issues a feature-identification query and
//!    inspects flag bits. No state is written, so it is safe to call from
//!    any thread at any time.
//! 2. **Cached with `std`**: the answer cannot change within a process, so
//!    it is computed once behind a `OnceLock`. Without `std`, the query
//!    reruns each call (a handful of cycles on x86_64).
//! 3. **Fail safe**: on architectures where the query is unsupported, the
//!    answer is `false` and callers take the software path.
//! 4. **Miri-safe**: under Miri the query reports `false` rather than
//!    interpreting CPUID or OS feature probes.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;

/// Returns `true` if the processor carries a dedicated CRC-32C instruction.
///
/// The result is constant for the lifetime of the process. With the `std`
/// feature it is detected once and cached; repeated calls return the same
/// value either way.
#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn hardware_crc_available() -> bool {
  use std::sync::OnceLock;
  static CACHED: OnceLock<bool> = OnceLock::new();
  *CACHED.get_or_init(hardware_crc_available_uncached)
}

/// Returns `true` if the processor carries a dedicated CRC-32C instruction.
///
/// Without `std` there is nowhere to cache the answer, so the query runs
/// each call.
#[cfg(not(feature = "std"))]
#[inline]
#[must_use]
pub fn hardware_crc_available() -> bool {
  hardware_crc_available_uncached()
}

/// Detect hardware CRC-32C support without caching.
///
/// Prefer [`hardware_crc_available`], which caches under `std`.
#[inline]
#[must_use]
pub fn hardware_crc_available_uncached() -> bool {
  #[cfg(miri)]
  {
    false
  }

  #[cfg(all(not(miri), target_arch = "x86_64"))]
  {
    x86_64::has_crc32_instruction()
  }

  #[cfg(all(not(miri), target_arch = "aarch64"))]
  {
    aarch64::has_crc32_instruction()
  }

  #[cfg(all(not(miri), not(any(target_arch = "x86_64", target_arch = "aarch64"))))]
  {
    false
  }
}
