//! Error types for the CRC-16 crate.
//!
//! Computing a checksum cannot fail. The only fallible operation is looking a
//! variant up by name; verification failures use
//! [`traits::MismatchError`](traits::MismatchError).

use core::fmt;

/// No predefined CRC-16 variant matches the requested name.
///
/// # Examples
///
/// ```
/// use crc16::{UnknownVariant, catalog};
///
/// assert_eq!(catalog::by_name("crc-16/nope").unwrap_err(), UnknownVariant);
/// assert_eq!(UnknownVariant.to_string(), "unknown crc-16 variant");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnknownVariant;

impl fmt::Display for UnknownVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown crc-16 variant")
  }
}

impl core::error::Error for UnknownVariant {}
