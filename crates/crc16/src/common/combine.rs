//! GF(2) matrix operations for CRC-16 combination.
//!
//! Given `crc(A)`, `crc(B)` and `len(B)`, computes `crc(A || B)` without
//! reprocessing `A`, in O(log len(B)) time.
//!
//! # Mathematical Background
//!
//! Folding is affine in the register: `fold(r, D) = M^n · r ⊕ fold(0, D)`
//! where `M` is the effect of one zero byte and `n = len(D)`. With an initial
//! value `I` and final XOR `X`:
//!
//! ```text
//! crc(A || B) = M^len(B) · (crc(A) ⊕ X ⊕ I) ⊕ crc(B)
//! ```
//!
//! `M` is derived from the variant's own fold, so the same code serves both
//! bit-order conventions.

// SAFETY: All array indexing in this module uses bounded loop indices (0..16).
#![allow(clippy::indexing_slicing)]

/// A 16x16 GF(2) matrix stored as 16 columns.
///
/// Column `i` is the image of the basis vector `1 << i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gf2Matrix16([u16; 16]);

impl Gf2Matrix16 {
  /// Create the identity matrix.
  #[must_use]
  pub const fn identity() -> Self {
    let mut m = [0u16; 16];
    let mut i = 0;
    while i < 16 {
      m[i] = 1 << i;
      i += 1;
    }
    Self(m)
  }

  /// Build the operator of a linear map by sampling it on each basis vector.
  #[must_use]
  pub fn from_linear_map(f: impl Fn(u16) -> u16) -> Self {
    let mut m = [0u16; 16];
    for (i, col) in m.iter_mut().enumerate() {
      *col = f(1 << i);
    }
    Self(m)
  }

  /// Multiply matrix by a vector.
  #[inline]
  #[must_use]
  pub const fn mul_vec(self, vec: u16) -> u16 {
    let mut result = 0u16;
    let mut i = 0;
    while i < 16 {
      if vec & (1 << i) != 0 {
        result ^= self.0[i];
      }
      i += 1;
    }
    result
  }

  /// Multiply two matrices (self * other).
  #[must_use]
  pub const fn mul_mat(self, other: Self) -> Self {
    let mut result = [0u16; 16];
    let mut i = 0;
    while i < 16 {
      result[i] = self.mul_vec(other.0[i]);
      i += 1;
    }
    Self(result)
  }

  /// Square the matrix (self * self).
  #[inline]
  #[must_use]
  pub const fn square(self) -> Self {
    self.mul_mat(self)
  }
}

/// Combine two finalized CRC-16 values.
///
/// # Arguments
///
/// * `crc_a` - Finalized CRC of the first part
/// * `crc_b` - Finalized CRC of the second part
/// * `len_b` - Length of the second part in bytes
/// * `init` / `xor_out` - The variant's initial value and final XOR
/// * `shift8` - Operator for folding one zero byte
#[must_use]
pub fn combine_crc16(crc_a: u16, crc_b: u16, len_b: usize, init: u16, xor_out: u16, shift8: Gf2Matrix16) -> u16 {
  if len_b == 0 {
    return crc_a;
  }

  let mut mat = shift8;
  let mut result_mat = Gf2Matrix16::identity();
  let mut remaining = len_b;

  while remaining > 0 {
    if remaining & 1 != 0 {
      result_mat = result_mat.mul_mat(mat);
    }
    mat = mat.square();
    remaining >>= 1;
  }

  result_mat.mul_vec(crc_a ^ xor_out ^ init) ^ crc_b
}
