//! CRC-16 algorithm parameters.
//!
//! This module defines the five parameters that pick a CRC-16 variant, in the
//! spirit of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//! Unlike the catalogue's `refin`/`refout` pair, a single [`BitOrder`] selects
//! both the table convention and the fold direction.

use core::fmt;

/// Bit-order convention of a CRC-16 variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitOrder {
  /// Bit-reversed (LSB-first) processing: bit 15 of the register is the X^0 term.
  ///
  /// Used by X.25/PPP, Modbus, Kermit and CRC-16/ARC.
  Reflected,
  /// Natural (MSB-first) processing: bit 0 of the register is the X^0 term.
  ///
  /// Used by XMODEM and CCITT-FALSE.
  Normal,
}

impl BitOrder {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Reflected => "reflected",
      Self::Normal => "normal",
    }
  }

  /// Returns `true` for [`BitOrder::Reflected`].
  #[inline]
  #[must_use]
  pub const fn is_reflected(self) -> bool {
    matches!(self, Self::Reflected)
  }
}

impl fmt::Display for BitOrder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// CRC-16 algorithm parameters.
///
/// # Parameters
///
/// - `polynomial`: Generator polynomial as published, without the implicit X^16 term
///   (always the natural form; reflected variants reverse it internally)
/// - `bit_order`: Table/fold convention
/// - `initial`: Initial value of the CRC register, as the register holds it. For
///   reflected variants this is the catalogue's `init` bit-reversed
/// - `xor_out`: Value XORed into the register after all input is folded
/// - `big_endian`: Serialize the 2-byte checksum most-significant byte first
///
/// # Example
///
/// ```
/// use crc16::{BitOrder, Crc16Params};
///
/// let genibus = Crc16Params::new(0x1021, BitOrder::Normal, 0xFFFF, 0xFFFF, true);
/// assert_eq!(genibus.with_xor_out(0).xor_out, 0);
///
/// // CRC-16/RIELLO is published with init 0xB2AA, refin/refout true.
/// let riello = Crc16Params::new(0x1021, BitOrder::Reflected, 0xB2AA_u16.reverse_bits(), 0x0000, false);
/// assert_eq!(crc16::Crc16Conf::new(riello).checksum(b"123456789"), 0x63D0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crc16Params {
  /// Generator polynomial (natural form, without the implicit high bit).
  pub polynomial: u16,
  /// Bit-order convention.
  pub bit_order: BitOrder,
  /// Initial value for the CRC register (raw, so bit-reversed for reflected
  /// variants relative to catalogue `init`).
  pub initial: u16,
  /// XOR value applied to the final CRC.
  pub xor_out: u16,
  /// Emit the serialized checksum most-significant byte first.
  pub big_endian: bool,
}

impl Crc16Params {
  /// CRC-16/X-25 (also PPP, IBM-SDLC, ISO-HDLC).
  pub const X25: Self = Self::new(0x1021, BitOrder::Reflected, 0xFFFF, 0xFFFF, false);

  /// CRC-16/MODBUS.
  pub const MODBUS: Self = Self::new(0x8005, BitOrder::Reflected, 0xFFFF, 0x0000, false);

  /// CRC-16/XMODEM (also ZMODEM, ACORN, LTE).
  pub const XMODEM: Self = Self::new(0x1021, BitOrder::Normal, 0x0000, 0x0000, true);

  /// CRC-16/KERMIT (also CCITT-TRUE).
  pub const KERMIT: Self = Self::new(0x1021, BitOrder::Reflected, 0x0000, 0x0000, false);

  /// CRC-16/ARC (also IBM, LHA).
  pub const ARC: Self = Self::new(0x8005, BitOrder::Reflected, 0x0000, 0x0000, false);

  /// CRC-16/IBM-3740, better known as CCITT-FALSE.
  pub const CCITT_FALSE: Self = Self::new(0x1021, BitOrder::Normal, 0xFFFF, 0x0000, true);

  #[inline]
  #[must_use]
  pub const fn new(polynomial: u16, bit_order: BitOrder, initial: u16, xor_out: u16, big_endian: bool) -> Self {
    Self {
      polynomial,
      bit_order,
      initial,
      xor_out,
      big_endian,
    }
  }

  #[inline]
  #[must_use]
  pub const fn with_polynomial(mut self, polynomial: u16) -> Self {
    self.polynomial = polynomial;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
    self.bit_order = bit_order;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_initial(mut self, initial: u16) -> Self {
    self.initial = initial;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_xor_out(mut self, xor_out: u16) -> Self {
    self.xor_out = xor_out;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_big_endian(mut self, big_endian: bool) -> Self {
    self.big_endian = big_endian;
    self
  }

  /// Checksum of the empty input: `initial ^ xor_out`.
  #[inline]
  #[must_use]
  pub const fn empty_checksum(&self) -> u16 {
    self.initial ^ self.xor_out
  }

  /// Serialize a finalized checksum in this variant's output byte order.
  #[inline]
  #[must_use]
  pub const fn to_bytes(&self, crc: u16) -> [u8; 2] {
    if self.big_endian { crc.to_be_bytes() } else { crc.to_le_bytes() }
  }
}
