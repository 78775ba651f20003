//! Typed hashers for the predefined CRC-16 variants.
//!
//! These are thin wrappers over the [catalogue](crate::catalog) statics for
//! code that wants a concrete type instead of a runtime configuration, e.g.
//! `ChecksumWriter<File, Crc16Xmodem>`.
//!
//! ```
//! use crc16::{Checksum, Crc16Kermit};
//!
//! let mut h = Crc16Kermit::new();
//! h.update(b"1234");
//! h.update(b"56789");
//! assert_eq!(h.finalize(), 0x2189);
//! assert_eq!(Crc16Kermit::checksum(b"123456789"), 0x2189);
//! ```

use crate::params::Crc16Params;

define_crc16_type! {
  /// CRC-16/X-25 (PPP, HDLC) hasher.
  pub struct Crc16X25 {
    conf: crate::catalog::X25,
    params: Crc16Params::X25,
  }
}

define_crc16_type! {
  /// CRC-16/MODBUS hasher.
  pub struct Crc16Modbus {
    conf: crate::catalog::MODBUS,
    params: Crc16Params::MODBUS,
  }
}

define_crc16_type! {
  /// CRC-16/XMODEM hasher.
  pub struct Crc16Xmodem {
    conf: crate::catalog::XMODEM,
    params: Crc16Params::XMODEM,
  }
}

define_crc16_type! {
  /// CRC-16/KERMIT hasher.
  pub struct Crc16Kermit {
    conf: crate::catalog::KERMIT,
    params: Crc16Params::KERMIT,
  }
}

define_crc16_type! {
  /// CRC-16/ARC (IBM) hasher.
  pub struct Crc16Arc {
    conf: crate::catalog::ARC,
    params: Crc16Params::ARC,
  }
}

define_crc16_type! {
  /// CRC-16/IBM-3740 (CCITT-FALSE) hasher.
  pub struct Crc16CcittFalse {
    conf: crate::catalog::CCITT_FALSE,
    params: Crc16Params::CCITT_FALSE,
  }
}

/// PPP uses the X.25 frame check sequence.
pub type Crc16Ppp = Crc16X25;

/// CRC-16/IBM is another name for CRC-16/ARC.
pub type Crc16Ibm = Crc16Arc;
