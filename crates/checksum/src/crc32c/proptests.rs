//! Property tests for the CRC-32C engines.
//!
//! These verify the contract laws against a bit-at-a-time oracle (the
//! mathematical definition of a reflected CRC):
//!
//! 1. **Oracle agreement**: slicing-by-8 equals bitwise reduction for every
//!    input and seed.
//! 2. **Chaining**: `crc(A ++ B, s) == crc(B, crc(A, s))` at every split.
//! 3. **Alignment invariance**: the starting address of the slice never
//!    changes the checksum.
//! 4. **Engine equivalence**: hardware and software agree whenever hardware
//!    is available.

#![cfg(all(test, not(miri)))]

extern crate std;

use alloc::vec;
use proptest::prelude::*;

use super::{Engine, compute, portable};
use crate::constants::crc32c::POLYNOMIAL;

/// Bit-at-a-time reference, same seed and complement convention as the
/// engines.
fn crc32c_bitwise(initial_crc: u32, data: &[u8]) -> u32 {
  if data.is_empty() {
    return initial_crc;
  }

  let mut crc = initial_crc ^ 0xFFFF_FFFF;
  for &byte in data {
    crc ^= byte as u32;
    for _ in 0..8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ POLYNOMIAL } else { crc >> 1 };
    }
  }
  crc ^ 0xFFFF_FFFF
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn software_matches_bitwise_oracle(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    seed in any::<u32>()
  ) {
    prop_assert_eq!(portable::compute(seed, &data), crc32c_bitwise(seed, &data));
  }

  #[test]
  fn chaining_law(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    seed in any::<u32>(),
    split in any::<usize>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let chained = portable::compute(portable::compute(seed, a), b);
    prop_assert_eq!(
      chained,
      portable::compute(seed, &data),
      "chaining mismatch at split {}/{}", split, data.len()
    );
  }

  #[test]
  fn alignment_invariance(
    data in proptest::collection::vec(any::<u8>(), 1..=512),
    offset in 0usize..8
  ) {
    let expected = portable::compute(0, &data);

    let mut backing = vec![0u8; data.len() + 8];
    backing[offset..offset + data.len()].copy_from_slice(&data);
    prop_assert_eq!(portable::compute(0, &backing[offset..offset + data.len()]), expected);
  }

  #[test]
  fn engines_agree(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    seed in any::<u32>()
  ) {
    if Engine::Hardware.is_available() {
      prop_assert_eq!(
        compute(Engine::Hardware, seed, &data),
        compute(Engine::Software, seed, &data)
      );
    }
  }

  #[test]
  fn empty_input_is_identity(seed in any::<u32>()) {
    prop_assert_eq!(compute(Engine::Software, seed, &[]), seed);
    if Engine::Hardware.is_available() {
      prop_assert_eq!(compute(Engine::Hardware, seed, &[]), seed);
    }
  }
}
