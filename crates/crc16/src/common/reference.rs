//! Bitwise reference implementations for CRC-16.
//!
//! These process one bit at a time with no lookup tables, directly mirroring
//! the polynomial-division definition. They are the source of truth the
//! table-driven folds are checked against, and are intentionally slow.

/// Bitwise CRC-16 (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly_reflected` - Bit-reversed polynomial (e.g. `0x8408` for `0x1021`)
/// * `init` - Initial register value
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw register (caller applies the final XOR).
#[must_use]
pub fn crc16_reflected_bitwise(poly_reflected: u16, init: u16, data: &[u8]) -> u16 {
  let mut crc = init;
  for &byte in data {
    crc ^= u16::from(byte);
    for _ in 0..8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly_reflected } else { crc >> 1 };
    }
  }
  crc
}

/// Bitwise CRC-16 (normal, MSB-first).
///
/// # Arguments
///
/// * `poly` - Polynomial as published (e.g. `0x1021`)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub fn crc16_normal_bitwise(poly: u16, init: u16, data: &[u8]) -> u16 {
  let mut crc = init;
  for &byte in data {
    crc ^= u16::from(byte) << 8;
    for _ in 0..8 {
      crc = if crc & 0x8000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
    }
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_check_values() {
    // CRC-16/ARC
    assert_eq!(crc16_reflected_bitwise(0xA001, 0x0000, b"123456789"), 0xBB3D);
    // CRC-16/KERMIT
    assert_eq!(crc16_reflected_bitwise(0x8408, 0x0000, b"123456789"), 0x2189);
    // CRC-16/XMODEM
    assert_eq!(crc16_normal_bitwise(0x1021, 0x0000, b"123456789"), 0x31C3);
    // CRC-16/IBM-3740 (CCITT-FALSE)
    assert_eq!(crc16_normal_bitwise(0x1021, 0xFFFF, b"123456789"), 0x29B1);
  }
}
