//! Slicing-by-8 lookup table generation.
//!
//! Tables are generated by `const fn` evaluation, so construction happens
//! once, at compile time, before any reader can exist. Generation is a pure
//! function of the polynomial: rebuilding yields bit-identical tables.
//!
//! # Table Structure
//!
//! 8 tables of 256 entries each (8KB total for a 32-bit CRC):
//! - Table 0: CRC contribution of each byte value
//! - Tables 1-7: contribution of bytes at positions 1-7 earlier in the stream
//!
//! The derived rows let the bulk loop fold 8 input bytes with 8 independent
//! lookups combined by XOR instead of 8 serial single-byte steps.

/// Generate the base lookup table (table 0) for a reflected polynomial.
///
/// Standard bit-reversed CRC reduction: for each byte value, run 8 rounds of
/// "if the low bit is set, shift right and XOR the polynomial, else shift
/// right".
pub const fn generate_table_0(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;

  while i < 256 {
    let mut crc = i as u32;
    let mut j = 0;
    while j < 8 {
      if crc & 1 != 0 {
        crc = (crc >> 1) ^ poly;
      } else {
        crc >>= 1;
      }
      j += 1;
    }
    table[i] = crc;
    i += 1;
  }

  table
}

/// Generate all 8 slicing-by-8 tables for a reflected polynomial.
///
/// Row `t` entry `i` is derived from row `t-1` by pushing one more zero byte
/// through the CRC: `(prev >> 8) ^ table0[prev & 0xFF]`.
pub const fn generate_slicing_tables(poly: u32) -> [[u32; 256]; 8] {
  let table0 = generate_table_0(poly);
  let mut tables = [[0u32; 256]; 8];

  let mut i = 0;
  while i < 256 {
    tables[0][i] = table0[i];
    i += 1;
  }

  let mut t = 1;
  while t < 8 {
    let mut i = 0;
    while i < 256 {
      let prev = tables[t - 1][i];
      tables[t][i] = (prev >> 8) ^ table0[(prev & 0xFF) as usize];
      i += 1;
    }
    t += 1;
  }

  tables
}
