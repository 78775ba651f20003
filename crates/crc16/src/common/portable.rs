//! Portable table-driven CRC-16 folds.
//!
//! One function per bit-order convention. Both take the *raw* register
//! (before any final XOR) and return the raw register after folding `data`.
//! Folding is split-invariant: folding `a ++ b` from `crc` equals folding `b`
//! from the result of folding `a`.

// SAFETY: Table indices are `u8` values widened to `usize` (0..=255) into a 256-entry table.
#![allow(clippy::indexing_slicing)]

use super::tables::Table;

/// Fold `data` into `crc` using a table from [`make_table_reflected`](super::tables::make_table_reflected).
#[inline]
#[must_use]
pub fn update_reflected(mut crc: u16, table: &Table, data: &[u8]) -> u16 {
  for &byte in data {
    let idx = (crc as u8) ^ byte;
    crc = table[usize::from(idx)] ^ (crc >> 8);
  }
  crc
}

/// Fold `data` into `crc` using a table from [`make_table_normal`](super::tables::make_table_normal).
#[inline]
#[must_use]
pub fn update_normal(mut crc: u16, table: &Table, data: &[u8]) -> u16 {
  for &byte in data {
    let idx = ((crc >> 8) as u8) ^ byte;
    crc = table[usize::from(idx)] ^ (crc << 8);
  }
  crc
}
