//! Internal macros for CRC-16 variant generation.
//!
//! Every predefined variant gets a zero-argument hasher type so it can be
//! used through [`Checksum`](traits::Checksum) generics and the I/O adapters.
//! The types differ only in which catalogue entry they read their table and
//! parameters from.

/// Generate a typed CRC-16 hasher with all trait implementations.
///
/// This macro creates:
/// - The struct definition with `state: u16` and `initial: u16`
/// - Inherent `new`/`resume`/`checksum`/`update`/`finalize`/`reset`/`combine`
/// - `Default`, `Checksum`, `ChecksumCombine` and (with `std`) `std::io::Write`
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc16Modbus`)
/// - `$conf`: The catalogue `static` holding the table (e.g., `crate::catalog::MODBUS`)
/// - `$params`: The matching `Crc16Params` constant, needed in `const fn` contexts
macro_rules! define_crc16_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      conf: $conf:path,
      params: $params:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    $vis struct $name {
      /// Current raw CRC register.
      state: u16,
      /// Register value restored by `reset`.
      initial: u16,
    }

    impl $name {
      const PARAMS: $crate::Crc16Params = $params;

      #[inline]
      #[must_use]
      pub const fn new() -> Self {
        Self {
          state: Self::PARAMS.initial,
          initial: Self::PARAMS.initial,
        }
      }

      /// Create a hasher that will resume from a previous CRC.
      #[inline]
      #[must_use]
      pub const fn resume(crc: u16) -> Self {
        let state = crc ^ Self::PARAMS.xor_out;
        Self { state, initial: state }
      }

      /// The shared configuration backing this type.
      #[inline]
      #[must_use]
      pub fn conf() -> &'static $crate::Crc16Conf {
        &$conf
      }

      /// Compute the checksum of `data` in one shot.
      #[inline]
      #[must_use]
      pub fn checksum(data: &[u8]) -> u16 {
        $conf.checksum(data)
      }

      #[inline]
      pub fn update(&mut self, data: &[u8]) {
        self.state = $conf.update(self.state, data);
      }

      #[inline]
      #[must_use]
      pub const fn finalize(&self) -> u16 {
        self.state ^ Self::PARAMS.xor_out
      }

      /// The finalized checksum in the variant's output byte order.
      #[inline]
      #[must_use]
      pub const fn to_bytes(&self) -> [u8; 2] {
        Self::PARAMS.to_bytes(self.finalize())
      }

      #[inline]
      pub fn reset(&mut self) {
        self.state = self.initial;
      }

      /// Combine two checksums: `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)`.
      #[inline]
      #[must_use]
      pub fn combine(crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
        $conf.combine(crc_a, crc_b, len_b)
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = 2;
      type Output = u16;

      #[inline]
      fn new() -> Self {
        $name::new()
      }

      #[inline]
      fn with_initial(initial: u16) -> Self {
        $name::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        $name::update(self, data);
      }

      #[inline]
      fn finalize(&self) -> u16 {
        $name::finalize(self)
      }

      #[inline]
      fn reset(&mut self) {
        $name::reset(self);
      }

      #[inline]
      fn checksum(data: &[u8]) -> u16 {
        $name::checksum(data)
      }
    }

    impl $crate::ChecksumCombine for $name {
      #[inline]
      fn combine(crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
        $name::combine(crc_a, crc_b, len_b)
      }
    }

    #[cfg(feature = "std")]
    impl std::io::Write for $name {
      #[inline]
      fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
      }

      #[inline]
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }
  };
}
