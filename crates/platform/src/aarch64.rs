//! aarch64 feature detection.
//!
//! The ARMv8 CRC32 extension provides `crc32cb`/`crc32ch`/`crc32cw`/`crc32cd`
//! (CRC-32C polynomial). Unlike x86_64 there is no unprivileged CPUID, so
//! runtime detection goes through the OS probe exposed by the standard
//! library; without `std`, only compile-time target features are visible.

/// Returns `true` if the ARMv8 CRC32 extension is available.
#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn has_crc32_instruction() -> bool {
  std::arch::is_aarch64_feature_detected!("crc")
}

/// Returns `true` if the ARMv8 CRC32 extension is available.
///
/// Without `std`, runtime probing is impossible; the answer reflects the
/// compile-time target features.
#[cfg(not(feature = "std"))]
#[inline]
#[must_use]
pub fn has_crc32_instruction() -> bool {
  cfg!(target_feature = "crc")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn query_runs() {
    let _ = has_crc32_instruction();
  }

  #[test]
  #[cfg(all(feature = "std", target_feature = "crc"))]
  fn compile_time_feature_implies_runtime() {
    // A binary compiled with the extension must detect it at runtime.
    assert!(has_crc32_instruction());
  }
}
