//! Precomputed constants for CRC-32C.
//!
//! The lookup tables are computed at compile time and 64-byte (cache line)
//! aligned using [`Aligned64`] to avoid cache line splits during lookups.

pub mod crc32c;
pub mod tables;

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// The inner type `T` is accessible via `.0`.
#[repr(align(64))]
pub struct Aligned64<T>(pub T);
