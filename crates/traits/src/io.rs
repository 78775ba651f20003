//! `std::io` adapters that checksum data in transit.
//!
//! - [`ChecksumReader`] hashes exactly the bytes each `read` returned (short
//!   reads are handled).
//! - [`ChecksumWriter`] hashes each buffer before handing it to the inner writer.

use crate::Checksum;

/// Wraps a [`Read`](std::io::Read) and computes a checksum transparently.
///
/// # Example
///
/// ```rust
/// # use traits::Checksum;
/// # #[derive(Clone, Default)]
/// # struct Xor(u16);
/// # impl Checksum for Xor {
/// #   const OUTPUT_SIZE: usize = 2;
/// #   type Output = u16;
/// #   fn new() -> Self { Self(0) }
/// #   fn with_initial(initial: Self::Output) -> Self { Self(initial) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc ^ u16::from(b));
/// #   }
/// #   fn finalize(&self) -> Self::Output { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// # use std::io::Cursor;
/// let mut reader = Xor::reader(Cursor::new(b"abc".to_vec()));
/// std::io::copy(&mut reader, &mut std::io::sink())?;
/// assert_eq!(reader.crc(), u16::from(b'a' ^ b'b' ^ b'c'));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ChecksumReader<R, C: Checksum> {
  inner: R,
  hasher: C,
}

impl<R, C: Checksum> ChecksumReader<R, C> {
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: C::new(),
    }
  }

  /// Create a reader that continues from a previously finalized checksum.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: R, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// Checksum of everything read so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Unwrap into the inner reader and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (R, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }
}

impl<R: std::io::Read, C: Checksum> std::io::Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }
}

/// Wraps a [`Write`](std::io::Write) and computes a checksum transparently.
///
/// The checksum covers the bytes the inner writer *accepted*: if `write`
/// reports a short count, only that prefix is hashed.
#[derive(Clone, Debug)]
pub struct ChecksumWriter<W, C: Checksum> {
  inner: W,
  hasher: C,
}

impl<W, C: Checksum> ChecksumWriter<W, C> {
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: C::new(),
    }
  }

  /// Create a writer that continues from a previously finalized checksum.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: W, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// Checksum of everything written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Unwrap into the inner writer and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (W, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }
}

impl<W: std::io::Write, C: Checksum> std::io::Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(test)]
mod tests {
  use std::{
    io::{Cursor, Read, Write},
    vec::Vec,
  };

  use super::*;

  #[derive(Clone, Default)]
  struct Xor(u16);

  impl Checksum for Xor {
    const OUTPUT_SIZE: usize = 2;
    type Output = u16;

    fn new() -> Self {
      Self(0)
    }
    fn with_initial(initial: u16) -> Self {
      Self(initial)
    }
    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc ^ u16::from(b));
    }
    fn finalize(&self) -> u16 {
      self.0
    }
    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  /// Accepts at most `limit` bytes per call.
  struct Trickle {
    out: Vec<u8>,
    limit: usize,
  }

  impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      let n = buf.len().min(self.limit);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }
    fn flush(&mut self) -> std::io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn reader_hashes_bytes_read() {
    let mut reader = ChecksumReader::<_, Xor>::new(Cursor::new(b"hello".to_vec()));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, b"hello");
    assert_eq!(reader.crc(), Xor::checksum(b"hello"));
  }

  #[test]
  fn writer_hashes_only_accepted_bytes() {
    let mut writer = ChecksumWriter::<_, Xor>::new(Trickle { out: Vec::new(), limit: 3 });
    let n = writer.write(b"abcdef").unwrap();
    assert_eq!(n, 3);
    assert_eq!(writer.crc(), Xor::checksum(b"abc"));

    writer.write_all(b"def").unwrap();
    let (inner, crc) = writer.into_parts();
    assert_eq!(inner.out, b"abcdef");
    assert_eq!(crc, Xor::checksum(b"abcdef"));
  }

  #[test]
  fn with_initial_resumes() {
    let reader = ChecksumReader::<_, Xor>::with_initial(Cursor::new(Vec::<u8>::new()), 0x7F);
    assert_eq!(reader.crc(), 0x7F);
  }
}
