//! CRC-32C (Castagnoli) with hardware acceleration.
//!
//! This crate computes CRC-32C checksums over byte buffers, selecting
//! between a hardware engine (the processor's dedicated CRC instruction)
//! and a portable software engine (slicing-by-8 over compile-time lookup
//! tables). The two engines are bit-identical for every input; hardware
//! availability only changes the computation path, never the value.
//!
//! | Engine | Path | Availability |
//! |--------|------|--------------|
//! | [`Engine::Hardware`] | SSE4.2 `crc32` (x86_64), CRC32 extension (aarch64) | [`hardware_available`] |
//! | [`Engine::Software`] | slicing-by-8, 8KB tables | always |
//!
//! # Example
//!
//! ```
//! use checksum::{Engine, compute, hardware_available};
//!
//! // Known test vector.
//! assert_eq!(checksum::checksum(b"123456789"), 0xE3069283);
//!
//! // Explicit engine selection: the caller checks availability, the
//! // dispatcher never falls back on its own.
//! let engine = if hardware_available() { Engine::Hardware } else { Engine::Software };
//! let crc = compute(engine, 0, b"123456789");
//! assert_eq!(crc, 0xE3069283);
//!
//! // Seeds chain: crc(a ++ b) == crc(b) seeded with crc(a).
//! let seed = compute(engine, 0, b"12345");
//! assert_eq!(compute(engine, seed, b"6789"), crc);
//! ```
//!
//! # no_std Support
//!
//! The software engine is `no_std`. Disable the `std` feature for embedded
//! use; runtime hardware detection then degrades to compile-time target
//! features on aarch64 (x86_64 CPUID works without an OS).
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod constants;
pub mod crc32c;

pub use crc32c::{Engine, checksum, compute, crc32c};
/// Re-export of [`platform::hardware_crc_available`].
pub use platform::hardware_crc_available as hardware_available;
