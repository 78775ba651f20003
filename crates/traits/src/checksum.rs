//! Non-cryptographic checksum traits.
//!
//! - **Streaming**: Incremental updates for data that arrives in pieces
//! - **One-shot**: A single call for data already in memory
//! - **Combine**: Join the checksums of adjacent chunks

use core::fmt::Debug;

use crate::MismatchError;

/// Non-cryptographic checksum algorithm with a fixed parameter set.
///
/// # Usage
///
/// ```rust,ignore
/// use crc16::{Checksum, Crc16Modbus};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc16Modbus::checksum(b"123456789");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Crc16Modbus::new();
/// hasher.update(b"12345");
/// hasher.update(b"6789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Serialized output size in bytes (2 for CRC-16).
  const OUTPUT_SIZE: usize;

  /// The checksum output type (`u16` for CRC-16).
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that continues from a previously finalized checksum.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Identical to calling [`update`](Self::update) on each buffer in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// Does not consume the hasher; later updates extend the same computation.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Compare the checksum of `data` against `expected`.
  ///
  /// # Errors
  ///
  /// Returns [`MismatchError`] with both values when they differ.
  #[inline]
  fn verify(data: &[u8], expected: Self::Output) -> Result<(), MismatchError<Self::Output>> {
    let computed = Self::checksum(data);
    if computed == expected {
      Ok(())
    } else {
      Err(MismatchError::new(expected, computed))
    }
  }

  /// Wrap a reader to compute the checksum of everything read through it.
  ///
  /// ```rust,ignore
  /// use crc16::{Checksum, Crc16Xmodem};
  ///
  /// let mut reader = Crc16Xmodem::reader(std::fs::File::open("frame.bin")?);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:04x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute the checksum of everything written through it.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}

/// Checksums that support combining the results of adjacent chunks.
///
/// `combine(crc(A), crc(B), len(B)) == crc(A || B)`, in O(log len(B)) time:
///
/// ```text
/// crc(A || B) = x^(8*len(B)) · (crc(A) ⊕ xorout ⊕ init) mod G(x) ⊕ crc(B)
/// ```
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
