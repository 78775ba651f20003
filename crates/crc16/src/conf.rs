//! CRC-16 configuration with a lazily built lookup table.
//!
//! A [`Crc16Conf`] bundles [`Crc16Params`] with the 256-entry table derived
//! from them. The table is built on first use and then shared by every
//! checksum and digest computed with that configuration:
//!
//! - With `std`, construction goes through [`std::sync::OnceLock`]: concurrent
//!   first users block until exactly one build completes, and all of them
//!   observe the same table.
//! - Without `std`, the table is built eagerly by the `const fn` constructor,
//!   so `static` configurations carry it in the binary.
//!
//! Either way the table is never rebuilt or mutated after it exists.

use core::fmt;

use traits::MismatchError;

use crate::{
  common::{
    combine::{Gf2Matrix16, combine_crc16},
    portable,
    tables::{self, Table},
  },
  digest::Crc16Digest,
  params::{BitOrder, Crc16Params},
};

/// Build the lookup table selected by `params.bit_order`.
#[must_use]
const fn build_table(params: &Crc16Params) -> Table {
  match params.bit_order {
    BitOrder::Reflected => tables::make_table_reflected(tables::reverse(params.polynomial)),
    BitOrder::Normal => tables::make_table_normal(params.polynomial),
  }
}

#[cfg(feature = "std")]
#[derive(Clone)]
struct TableCell(std::sync::OnceLock<Table>);

#[cfg(feature = "std")]
impl TableCell {
  const fn new(_params: &Crc16Params) -> Self {
    Self(std::sync::OnceLock::new())
  }

  #[inline]
  fn get(&self, params: &Crc16Params) -> &Table {
    self.0.get_or_init(|| {
      #[cfg(feature = "tracing")]
      tracing::debug!(
        polynomial = params.polynomial,
        bit_order = params.bit_order.as_str(),
        "building crc16 table"
      );
      build_table(params)
    })
  }

  #[inline]
  fn is_built(&self) -> bool {
    self.0.get().is_some()
  }
}

#[cfg(not(feature = "std"))]
#[derive(Clone)]
struct TableCell(Table);

#[cfg(not(feature = "std"))]
impl TableCell {
  const fn new(params: &Crc16Params) -> Self {
    Self(build_table(params))
  }

  #[inline]
  fn get(&self, _params: &Crc16Params) -> &Table {
    &self.0
  }

  #[inline]
  fn is_built(&self) -> bool {
    true
  }
}

/// A CRC-16 variant: parameters plus the memoized lookup table.
///
/// Configurations are usually `static`, either one of the predefined
/// [catalogue](crate::catalog) entries or a custom one:
///
/// ```
/// use crc16::{BitOrder, Crc16Conf, Crc16Params};
///
/// static CRC16_DNP: Crc16Conf = Crc16Conf::new(Crc16Params::new(0x3D65, BitOrder::Reflected, 0x0000, 0xFFFF, false));
///
/// assert_eq!(CRC16_DNP.checksum(b"123456789"), 0xEA82);
/// ```
#[derive(Clone)]
pub struct Crc16Conf {
  params: Crc16Params,
  table: TableCell,
}

impl Crc16Conf {
  #[inline]
  #[must_use]
  pub const fn new(params: Crc16Params) -> Self {
    Self {
      table: TableCell::new(&params),
      params,
    }
  }

  /// The parameters this configuration was created with.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &Crc16Params {
    &self.params
  }

  /// Return the lookup table, building it on first call.
  ///
  /// Subsequent calls (from any thread) return the same table.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &Table {
    self.table.get(&self.params)
  }

  /// Whether the lookup table has been built yet.
  #[inline]
  #[must_use]
  pub fn is_table_built(&self) -> bool {
    self.table.is_built()
  }

  /// Fold `data` into a *raw* register value (no initial value, no final XOR).
  #[inline]
  #[must_use]
  pub fn update(&self, crc: u16, data: &[u8]) -> u16 {
    fold(self.params.bit_order, self.table(), crc, data)
  }

  /// Compute the checksum of `data` in one shot.
  ///
  /// Empty input yields `initial ^ xor_out`.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u16 {
    self.update(self.params.initial, data) ^ self.params.xor_out
  }

  /// Start an incremental computation.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> Crc16Digest<'_> {
    Crc16Digest::new(self)
  }

  /// Combine two checksums: `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)`.
  #[must_use]
  pub fn combine(&self, crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
    let table = self.table();
    let order = self.params.bit_order;
    let shift8 = Gf2Matrix16::from_linear_map(|r| fold(order, table, r, &[0]));
    combine_crc16(crc_a, crc_b, len_b, self.params.initial, self.params.xor_out, shift8)
  }

  /// Check `data` against an expected checksum.
  ///
  /// # Errors
  ///
  /// Returns [`MismatchError`] carrying both values when they differ.
  #[inline]
  pub fn verify(&self, data: &[u8], expected: u16) -> Result<(), MismatchError<u16>> {
    let computed = self.checksum(data);
    if computed == expected {
      Ok(())
    } else {
      Err(MismatchError::new(expected, computed))
    }
  }
}

impl fmt::Debug for Crc16Conf {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc16Conf")
      .field("params", &self.params)
      .field("table_built", &self.is_table_built())
      .finish()
  }
}

impl From<Crc16Params> for Crc16Conf {
  #[inline]
  fn from(params: Crc16Params) -> Self {
    Self::new(params)
  }
}

/// Dispatch to the fold matching `order`.
#[inline]
pub(crate) fn fold(order: BitOrder, table: &Table, crc: u16, data: &[u8]) -> u16 {
  match order {
    BitOrder::Reflected => portable::update_reflected(crc, table, data),
    BitOrder::Normal => portable::update_normal(crc, table, data),
  }
}

/// Compute the checksum of `data` with `conf` in one shot.
///
/// Equivalent to [`Crc16Conf::checksum`].
///
/// ```
/// assert_eq!(crc16::checksum(&crc16::MODBUS, b"123456789"), 0x4B37);
/// ```
#[inline]
#[must_use]
pub fn checksum(conf: &Crc16Conf, data: &[u8]) -> u16 {
  conf.checksum(data)
}
