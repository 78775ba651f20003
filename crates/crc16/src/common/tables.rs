//! Const-fn CRC-16 lookup table generation.
//!
//! Two table conventions exist for CRC-16:
//!
//! | Convention | Register bit for X^0 | Shift | Polynomial form |
//! |------------|----------------------|-------|-----------------|
//! | Reflected | bit 15 | right | bit-reversed (`0x8005` → `0xA001`) |
//! | Normal | bit 0 | left | as published (`0x1021`) |
//!
//! Each table holds the register contribution of every possible byte, so the
//! fold in [`super::portable`] can process one byte per lookup.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// A 256-entry CRC-16 lookup table, indexed by byte value.
pub type Table = [u16; 256];

/// Reverse the bit order of a 16-bit value (bit 0 ↔ bit 15, bit 1 ↔ bit 14, ...).
///
/// Converts a naturally written polynomial into the form expected by
/// [`make_table_reflected`]: `reverse(0x8005) == 0xA001`.
#[inline]
#[must_use]
pub const fn reverse(v: u16) -> u16 {
  v.reverse_bits()
}

/// Generate a single reflected table entry.
#[inline]
#[must_use]
pub const fn reflected_entry(poly_reflected: u16, index: u8) -> u16 {
  let mut crc = index as u16;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly_reflected;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate a single normal (MSB-first) table entry.
#[inline]
#[must_use]
pub const fn normal_entry(poly: u16, index: u8) -> u16 {
  let mut crc = (index as u16) << 8;
  let mut i = 0;
  while i < 8 {
    if crc & 0x8000 != 0 {
      crc = (crc << 1) ^ poly;
    } else {
      crc <<= 1;
    }
    i += 1;
  }
  crc
}

/// Build the lookup table for a reflected CRC-16.
///
/// # Arguments
///
/// * `poly_reflected` - The polynomial, already bit-reversed (e.g. `0xA001` for `0x8005`)
#[must_use]
pub const fn make_table_reflected(poly_reflected: u16) -> Table {
  let mut table = [0u16; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = reflected_entry(poly_reflected, i as u8);
    i += 1;
  }
  table
}

/// Build the lookup table for a normal (non-reflected) CRC-16.
///
/// # Arguments
///
/// * `poly` - The polynomial as published (e.g. `0x1021`)
#[must_use]
pub const fn make_table_normal(poly: u16) -> Table {
  let mut table = [0u16; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = normal_entry(poly, i as u8);
    i += 1;
  }
  table
}
