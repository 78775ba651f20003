//! Incremental CRC-16 computation over a [`Crc16Conf`].
//!
//! A [`Crc16Digest`] borrows its configuration and owns the CRC register.
//! Writes take `&mut self`, so a digest has exactly one writer at a time;
//! wrap it in a `Mutex` if several threads must feed the same digest.

use core::fmt;

use crate::{
  common::tables::Table,
  conf::{Crc16Conf, fold},
};

/// Streaming CRC-16 hasher for a runtime-selected configuration.
///
/// # Example
///
/// ```
/// use crc16::PPP;
///
/// let mut d = PPP.digest();
/// d.update(b"ab");
/// d.update(b"c");
/// assert_eq!(d.finalize(), 0x9E25);
///
/// let mut out = Vec::new();
/// d.finalize_into(&mut out);
/// assert_eq!(out, [0x25, 0x9E]);
/// ```
#[derive(Clone)]
pub struct Crc16Digest<'a> {
  conf: &'a Crc16Conf,
  table: &'a Table,
  /// Current raw CRC register.
  state: u16,
  /// Register value restored by `reset`.
  initial: u16,
}

impl<'a> Crc16Digest<'a> {
  /// Size of a serialized checksum in bytes.
  pub const SIZE: usize = 2;

  /// Create a digest with the register at the configuration's initial value.
  ///
  /// Builds the configuration's table if this is its first use.
  #[inline]
  #[must_use]
  pub fn new(conf: &'a Crc16Conf) -> Self {
    let initial = conf.params().initial;
    Self {
      conf,
      table: conf.table(),
      state: initial,
      initial,
    }
  }

  /// Create a digest that continues from a previously finalized checksum.
  ///
  /// `reset` returns to `crc`, not to the configuration's initial value.
  #[inline]
  #[must_use]
  pub fn resume(conf: &'a Crc16Conf, crc: u16) -> Self {
    let state = crc ^ conf.params().xor_out;
    Self {
      conf,
      table: conf.table(),
      state,
      initial: state,
    }
  }

  /// The configuration this digest computes.
  #[inline]
  #[must_use]
  pub const fn conf(&self) -> &'a Crc16Conf {
    self.conf
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = fold(self.conf.params().bit_order, self.table, self.state, data);
  }

  /// Fold `data` into the register and report how many bytes were consumed.
  ///
  /// Always consumes all of `data`.
  #[inline]
  pub fn write(&mut self, data: &[u8]) -> usize {
    self.update(data);
    data.len()
  }

  #[inline]
  pub fn reset(&mut self) {
    self.state = self.initial;
  }

  /// Return the checksum of everything written so far.
  ///
  /// Does not consume or alter the digest; further writes continue from the
  /// same register.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u16 {
    self.state ^ self.conf.params().xor_out
  }

  /// The finalized checksum serialized in the configuration's byte order.
  #[inline]
  #[must_use]
  pub fn to_bytes(&self) -> [u8; 2] {
    self.conf.params().to_bytes(self.finalize())
  }

  /// Append the serialized checksum to `sink`.
  #[inline]
  pub fn finalize_into<E: Extend<u8>>(&self, sink: &mut E) {
    sink.extend(self.to_bytes());
  }

  /// Serialized checksum size in bytes.
  #[inline]
  #[must_use]
  pub const fn size(&self) -> usize {
    Self::SIZE
  }

  /// Input granularity in bytes. Every byte is folded immediately.
  #[inline]
  #[must_use]
  pub const fn block_size(&self) -> usize {
    1
  }
}

impl fmt::Debug for Crc16Digest<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc16Digest")
      .field("params", self.conf.params())
      .field("state", &format_args!("{:#06x}", self.state))
      .finish_non_exhaustive()
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc16Digest<'_> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    Ok(Crc16Digest::write(self, buf))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec::Vec;

  use super::*;
  use crate::params::Crc16Params;

  static PPP: Crc16Conf = Crc16Conf::new(Crc16Params::X25);
  static MODBUS: Crc16Conf = Crc16Conf::new(Crc16Params::MODBUS);
  static XMODEM: Crc16Conf = Crc16Conf::new(Crc16Params::XMODEM);

  #[test]
  fn test_golden_short() {
    for (input, ppp, modbus) in [
      (&b""[..], 0x0000, 0xFFFF),
      (&b"a"[..], 0x82F7, 0xA87E),
      (&b"abc"[..], 0x9E25, 0x5749),
    ] {
      let mut d = PPP.digest();
      d.update(input);
      assert_eq!(d.finalize(), ppp);

      let mut d = MODBUS.digest();
      d.update(input);
      assert_eq!(d.finalize(), modbus);
    }
  }

  #[test]
  fn test_write_returns_len() {
    let mut d = PPP.digest();
    assert_eq!(d.write(b"12345"), 5);
    assert_eq!(d.write(b""), 0);
    assert_eq!(d.write(b"6789"), 4);
    assert_eq!(d.finalize(), 0x906E);
  }

  #[test]
  fn test_incremental() {
    let mut d = MODBUS.digest();
    d.update(b"1234");
    d.update(b"56789");
    assert_eq!(d.finalize(), 0x4B37);
  }

  #[test]
  fn test_finalize_is_non_mutating() {
    let mut d = XMODEM.digest();
    d.update(b"1234");
    let mid = d.finalize();
    assert_eq!(d.finalize(), mid);
    d.update(b"56789");
    assert_eq!(d.finalize(), 0x31C3);
  }

  #[test]
  fn test_reset() {
    let mut d = PPP.digest();
    d.update(b"garbage");
    d.reset();
    d.update(b"123456789");
    assert_eq!(d.finalize(), 0x906E);
  }

  #[test]
  fn test_resume() {
    let data = b"hello world";
    let (a, b) = data.split_at(6);

    let mut d = Crc16Digest::resume(&MODBUS, MODBUS.checksum(a));
    d.update(b);
    assert_eq!(d.finalize(), MODBUS.checksum(data));
  }

  #[test]
  fn test_finalize_into_little_endian() {
    let mut d = PPP.digest();
    d.update(b"a");
    let mut out = Vec::from([0xAAu8]);
    d.finalize_into(&mut out);
    assert_eq!(out, [0xAA, 0xF7, 0x82]);
  }

  #[test]
  fn test_finalize_into_big_endian() {
    let mut d = XMODEM.digest();
    d.update(b"123456789");
    let mut out = Vec::new();
    d.finalize_into(&mut out);
    assert_eq!(out, [0x31, 0xC3]);
    assert_eq!(d.to_bytes(), [0x31, 0xC3]);
  }

  #[test]
  fn test_sizes() {
    let d = PPP.digest();
    assert_eq!(d.size(), 2);
    assert_eq!(d.block_size(), 1);
    assert_eq!(Crc16Digest::SIZE, 2);
  }

  #[test]
  fn test_clone() {
    let mut h = XMODEM.digest();
    h.update(b"1234");

    let mut clone = h.clone();
    h.update(b"56789");
    clone.update(b"56789");

    assert_eq!(h.finalize(), clone.finalize());
  }

  #[cfg(feature = "std")]
  #[test]
  fn test_io_write() {
    use std::io::Write as _;

    let mut d = MODBUS.digest();
    std::io::copy(&mut &b"123456789"[..], &mut d).unwrap();
    d.flush().unwrap();
    assert_eq!(d.finalize(), 0x4B37);
  }
}
