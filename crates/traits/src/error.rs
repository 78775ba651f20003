//! Error types for checksum verification.

use core::fmt;

/// A computed checksum did not match the expected value.
///
/// Checksums are not secrets, so unlike MAC verification errors this carries
/// both values for diagnostics.
///
/// # Examples
///
/// ```
/// use traits::MismatchError;
///
/// fn check(expected: u16, computed: u16) -> Result<(), MismatchError<u16>> {
///   if expected == computed {
///     Ok(())
///   } else {
///     Err(MismatchError::new(expected, computed))
///   }
/// }
///
/// let err = check(0x906E, 0x1234).unwrap_err();
/// assert_eq!(err.to_string(), "checksum mismatch: expected 0x906e, computed 0x1234");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MismatchError<T> {
  /// The checksum the caller expected (e.g. read from a frame trailer).
  pub expected: T,
  /// The checksum computed over the data.
  pub computed: T,
}

impl<T> MismatchError<T> {
  #[inline]
  #[must_use]
  pub const fn new(expected: T, computed: T) -> Self {
    Self { expected, computed }
  }
}

impl<T: fmt::LowerHex> fmt::Display for MismatchError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "checksum mismatch: expected {:#x}, computed {:#x}",
      self.expected, self.computed
    )
  }
}

impl<T: fmt::Debug + fmt::LowerHex> core::error::Error for MismatchError<T> {}
