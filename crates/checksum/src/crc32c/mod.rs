//! CRC-32C (Castagnoli) checksum.
//!
//! CRC-32C uses polynomial 0x1EDC6F41 (reflected: 0x82F63B78), chosen for
//! its error-detection properties in storage and networking protocols.
//!
//! Two engines produce bit-identical results for every input:
//!
//! - [`Engine::Software`]: portable slicing-by-8 over compile-time tables.
//! - [`Engine::Hardware`]: the processor's dedicated CRC instruction
//!   (SSE4.2 `crc32` on x86_64, the CRC32 extension on aarch64).
//!
//! The caller picks the engine; there is no hidden fallback. Check
//! [`platform::hardware_crc_available`] (re-exported as
//! [`hardware_available`](crate::hardware_available)) before requesting the
//! hardware engine, or use [`Engine::preferred`].
//!
//! # Usage
//!
//! ```
//! use checksum::{Engine, crc32c};
//!
//! // Explicit engine selection with a seed.
//! let crc = checksum::compute(Engine::Software, 0, b"123456789");
//! assert_eq!(crc, 0xE3069283);
//!
//! // Boolean selector, as exposed to host bindings.
//! assert_eq!(crc32c(false, 0, b"123456789"), crc);
//!
//! // Convenience: preferred engine, zero seed, bytes or text.
//! assert_eq!(checksum::checksum("123456789"), crc);
//! ```

pub(crate) mod portable;

#[cfg(target_arch = "aarch64")]
pub(crate) mod aarch64;

#[cfg(target_arch = "x86_64")]
pub(crate) mod x86_64;

mod proptests;

/// Pre/post XOR mask (the CRC "complement convention").
///
/// Applied when entering and leaving a non-empty computation so an all-zero
/// buffer does not produce an all-zero checksum and seeds chain across calls.
pub(crate) const COMPLEMENT: u32 = 0xFFFF_FFFF;

/// Computation strategy for [`compute`].
///
/// Exactly two implementations of one capability; the choice is made per
/// call by the caller, not by runtime type inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Engine {
  /// Portable slicing-by-8 over precomputed tables. Always available.
  Software,
  /// Dedicated CRC instruction. Only valid when
  /// [`platform::hardware_crc_available`] reports `true`.
  Hardware,
}

impl Engine {
  /// The fastest engine this machine supports.
  #[inline]
  #[must_use]
  pub fn preferred() -> Self {
    if platform::hardware_crc_available() {
      Self::Hardware
    } else {
      Self::Software
    }
  }

  /// Returns `true` if this engine may be passed to [`compute`] on the
  /// current machine.
  #[inline]
  #[must_use]
  pub fn is_available(self) -> bool {
    match self {
      Self::Software => true,
      Self::Hardware => platform::hardware_crc_available(),
    }
  }
}

/// Compute CRC-32C over `data` with the selected engine, seeded with
/// `initial_crc`.
///
/// Both engines share one contract:
///
/// - An empty buffer returns `initial_crc` unchanged.
/// - Non-empty input is folded inside the complemented domain
///   (pre/post XOR with `0xFFFF_FFFF`), so `compute(e, compute(e, 0, a), b)`
///   equals `compute(e, 0, ab)` for `ab = a ++ b`.
/// - The result is identical across engines, architectures, and host byte
///   order.
///
/// # Panics
///
/// Panics if [`Engine::Hardware`] is requested on a machine without the CRC
/// instruction. That is a caller precondition violation, not a recoverable
/// state; check [`Engine::is_available`] first.
#[inline]
#[must_use]
pub fn compute(engine: Engine, initial_crc: u32, data: &[u8]) -> u32 {
  match engine {
    Engine::Software => portable::compute(initial_crc, data),
    Engine::Hardware => compute_hardware(initial_crc, data),
  }
}

/// Compute CRC-32C with a boolean engine selector.
///
/// This mirrors the shape of the host-facing entry point
/// (`calculateCrc(useHardwareCrc, data, initialCrc)`): `true` selects the
/// hardware engine, `false` the software engine. No fallback happens in
/// either direction.
#[inline]
#[must_use]
pub fn crc32c(use_hardware: bool, initial_crc: u32, data: &[u8]) -> u32 {
  let engine = if use_hardware { Engine::Hardware } else { Engine::Software };
  compute(engine, initial_crc, data)
}

/// Compute CRC-32C of `data` with the preferred engine and a zero seed.
///
/// Accepts anything byte-like; text input is checksummed over its UTF-8
/// byte representation.
///
/// ```
/// assert_eq!(checksum::checksum(b"123456789"), 0xE3069283);
/// assert_eq!(checksum::checksum("123456789"), 0xE3069283);
/// ```
#[inline]
#[must_use]
pub fn checksum(data: impl AsRef<[u8]>) -> u32 {
  compute(Engine::preferred(), 0, data.as_ref())
}

/// Hardware-engine entry point: seed handling plus the arch kernel.
#[allow(unsafe_code)]
fn compute_hardware(initial_crc: u32, data: &[u8]) -> u32 {
  assert!(
    platform::hardware_crc_available(),
    "Engine::Hardware requested on a CPU without a CRC-32C instruction"
  );

  #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
  {
    // The assert above always fails here.
    let _ = (initial_crc, data);
    unreachable!("hardware_crc_available() never reports true on this architecture");
  }

  #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
  {
    if data.is_empty() {
      return initial_crc;
    }

    let state = initial_crc ^ COMPLEMENT;

    // SAFETY: hardware availability was asserted above.
    #[cfg(target_arch = "x86_64")]
    let state = unsafe { x86_64::compute_sse42_unchecked(state, data) };

    // SAFETY: hardware availability was asserted above.
    #[cfg(target_arch = "aarch64")]
    let state = unsafe { aarch64::compute_crc_unchecked(state, data) };

    state ^ COMPLEMENT
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use alloc::vec::Vec;

  use super::*;

  #[test]
  fn test_known_vectors_software() {
    assert_eq!(compute(Engine::Software, 0, b"123456789"), 0xE306_9283);
    assert_eq!(compute(Engine::Software, 0, b""), 0x0000_0000);
    assert_eq!(compute(Engine::Software, 0, &[0u8; 32]), 0x8A91_36AA);
    assert_eq!(compute(Engine::Software, 0, &[0xFFu8; 32]), 0x62A8_AB43);
  }

  #[test]
  fn test_empty_is_identity_for_all_seeds() {
    for seed in [0u32, 1, 0x1234_5678, 0xFFFF_FFFF] {
      assert_eq!(compute(Engine::Software, seed, b""), seed);
      if Engine::Hardware.is_available() {
        assert_eq!(compute(Engine::Hardware, seed, b""), seed);
      }
    }
  }

  #[test]
  fn test_boolean_selector_routes_to_software() {
    assert_eq!(crc32c(false, 0, b"123456789"), 0xE306_9283);
  }

  #[test]
  fn test_boolean_selector_routes_to_hardware() {
    if Engine::Hardware.is_available() {
      assert_eq!(crc32c(true, 0, b"123456789"), 0xE306_9283);
    }
  }

  #[test]
  fn test_engines_agree() {
    if !Engine::Hardware.is_available() {
      return;
    }

    let data: Vec<u8> = (0u8..=255).cycle().take(1021).collect();
    for len in [0usize, 1, 3, 7, 8, 9, 63, 64, 65, 255, 256, 1021] {
      for seed in [0u32, 0xFFFF_FFFF, 0x0123_4567] {
        assert_eq!(
          compute(Engine::Hardware, seed, &data[..len]),
          compute(Engine::Software, seed, &data[..len]),
          "engine divergence at len={len} seed={seed:#x}"
        );
      }
    }
  }

  #[test]
  fn test_seed_chaining_across_engines() {
    let data = b"chained across two engine calls";
    let (a, b) = data.split_at(11);
    let expected = compute(Engine::Software, 0, data);

    assert_eq!(compute(Engine::Software, compute(Engine::Software, 0, a), b), expected);

    if Engine::Hardware.is_available() {
      // Seeds chain across engines too: the intermediate CRC is engine-neutral.
      assert_eq!(compute(Engine::Hardware, compute(Engine::Software, 0, a), b), expected);
      assert_eq!(compute(Engine::Software, compute(Engine::Hardware, 0, a), b), expected);
    }
  }

  #[test]
  fn test_preferred_matches_availability() {
    let preferred = Engine::preferred();
    if platform::hardware_crc_available() {
      assert_eq!(preferred, Engine::Hardware);
    } else {
      assert_eq!(preferred, Engine::Software);
    }
    assert!(preferred.is_available());
  }

  #[test]
  fn test_checksum_accepts_text_and_bytes() {
    assert_eq!(checksum("123456789"), 0xE306_9283);
    assert_eq!(checksum(b"123456789"), 0xE306_9283);
    assert_eq!(checksum(""), 0);
  }

  #[test]
  #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
  fn test_hardware_request_panics_without_support() {
    let result = std::panic::catch_unwind(|| compute(Engine::Hardware, 0, b"x"));
    assert!(result.is_err());
  }
}
