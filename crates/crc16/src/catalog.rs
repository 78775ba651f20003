//! Predefined CRC-16 configurations.
//!
//! | Name | Polynomial | Bit order | Init | XorOut | Output | Check |
//! |------|------------|-----------|------|--------|--------|-------|
//! | [`X25`] / [`PPP`] | 0x1021 | reflected | 0xFFFF | 0xFFFF | LE | 0x906E |
//! | [`MODBUS`] | 0x8005 | reflected | 0xFFFF | 0x0000 | LE | 0x4B37 |
//! | [`XMODEM`] | 0x1021 | normal | 0x0000 | 0x0000 | BE | 0x31C3 |
//! | [`KERMIT`] | 0x1021 | reflected | 0x0000 | 0x0000 | LE | 0x2189 |
//! | [`ARC`] / [`IBM`] | 0x8005 | reflected | 0x0000 | 0x0000 | LE | 0xBB3D |
//! | [`CCITT_FALSE`] | 0x1021 | normal | 0xFFFF | 0x0000 | BE | 0x29B1 |
//!
//! "Check" is the checksum of the ASCII string `"123456789"`. For more
//! variants see the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/16.htm)
//! and build them with [`Crc16Conf::new`]. For reflected entries the
//! catalogue's `init` must be bit-reversed, since
//! [`Crc16Params::initial`] seeds the raw register.
//!
//! Aliases are re-exports of the same `static`, so they share one table.

use crate::{conf::Crc16Conf, error::UnknownVariant, params::Crc16Params};

/// CRC-16/X-25: HDLC, X.25, PPP, IrDA.
pub static X25: Crc16Conf = Crc16Conf::new(Crc16Params::X25);

/// CRC-16/MODBUS.
pub static MODBUS: Crc16Conf = Crc16Conf::new(Crc16Params::MODBUS);

/// CRC-16/XMODEM: XMODEM, ZMODEM, Bluetooth ACL.
pub static XMODEM: Crc16Conf = Crc16Conf::new(Crc16Params::XMODEM);

/// CRC-16/KERMIT.
pub static KERMIT: Crc16Conf = Crc16Conf::new(Crc16Params::KERMIT);

/// CRC-16/ARC: ARC archives, LHA.
pub static ARC: Crc16Conf = Crc16Conf::new(Crc16Params::ARC);

/// CRC-16/IBM-3740 (CCITT-FALSE).
pub static CCITT_FALSE: Crc16Conf = Crc16Conf::new(Crc16Params::CCITT_FALSE);

/// PPP uses the X.25 frame check sequence.
pub use self::X25 as PPP;

/// CRC-16/IBM is another name for CRC-16/ARC.
pub use self::ARC as IBM;

/// Every predefined configuration with its canonical name.
pub static ALL: [(&str, &Crc16Conf); 6] = [
  ("x25", &X25),
  ("modbus", &MODBUS),
  ("xmodem", &XMODEM),
  ("kermit", &KERMIT),
  ("arc", &ARC),
  ("ccitt-false", &CCITT_FALSE),
];

const PREFIXES: [&[u8]; 2] = [b"crc-16-", b"crc16-"];

/// Look up a predefined configuration by name.
///
/// Matching is ASCII case-insensitive, treats `-`, `_`, `/` and spaces as
/// equivalent separators, and accepts an optional `crc-16/` or `crc16_` prefix.
/// Aliases (`ppp`, `ibm`, `x.25`, `ibm-sdlc`, `zmodem`, `ibm-3740`, ...) resolve
/// to the same configuration as their canonical name.
///
/// # Errors
///
/// Returns [`UnknownVariant`] if `name` matches nothing.
///
/// # Example
///
/// ```
/// let conf = crc16::catalog::by_name("CRC-16/MODBUS")?;
/// assert_eq!(conf.checksum(b"123456789"), 0x4B37);
/// assert!(crc16::catalog::by_name("crc-16/unknown").is_err());
/// # Ok::<(), crc16::UnknownVariant>(())
/// ```
pub fn by_name(name: &str) -> Result<&'static Crc16Conf, UnknownVariant> {
  let mut buf = [0u8; 32];
  let key = normalize(name, &mut buf).ok_or(UnknownVariant)?;
  let key = PREFIXES.iter().find_map(|p| key.strip_prefix(*p)).unwrap_or(key);

  let conf: &'static Crc16Conf = match key {
    b"x25" | b"x-25" | b"x.25" | b"ppp" | b"ibm-sdlc" | b"iso-hdlc" | b"hdlc" => &X25,
    b"modbus" => &MODBUS,
    b"xmodem" | b"zmodem" | b"acorn" | b"lte" => &XMODEM,
    b"kermit" | b"ccitt" | b"ccitt-true" => &KERMIT,
    b"arc" | b"ibm" | b"lha" => &ARC,
    b"ccitt-false" | b"ibm-3740" | b"autosar" => &CCITT_FALSE,
    _ => return Err(UnknownVariant),
  };
  Ok(conf)
}

/// Lowercase `name` into `buf`, folding separators to `-`.
///
/// Returns `None` if the name does not fit or is not ASCII.
fn normalize<'b>(name: &str, buf: &'b mut [u8; 32]) -> Option<&'b [u8]> {
  let name = name.trim();
  if name.len() > buf.len() || !name.is_ascii() {
    return None;
  }
  for (dst, &src) in buf.iter_mut().zip(name.as_bytes()) {
    *dst = match src {
      b'_' | b'/' | b' ' => b'-',
      other => other.to_ascii_lowercase(),
    };
  }
  buf.get(..name.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_check_values() {
    assert_eq!(X25.checksum(b"123456789"), 0x906E);
    assert_eq!(PPP.checksum(b"123456789"), 0x906E);
    assert_eq!(MODBUS.checksum(b"123456789"), 0x4B37);
    assert_eq!(XMODEM.checksum(b"123456789"), 0x31C3);
    assert_eq!(KERMIT.checksum(b"123456789"), 0x2189);
    assert_eq!(ARC.checksum(b"123456789"), 0xBB3D);
    assert_eq!(IBM.checksum(b"123456789"), 0xBB3D);
    assert_eq!(CCITT_FALSE.checksum(b"123456789"), 0x29B1);
  }

  #[test]
  fn test_aliases_share_table() {
    assert!(core::ptr::eq(&PPP, &X25));
    assert!(core::ptr::eq(PPP.table(), X25.table()));
    assert!(core::ptr::eq(&IBM, &ARC));
  }

  #[test]
  fn test_all_is_consistent() {
    for (name, conf) in ALL {
      let found = by_name(name).unwrap();
      assert!(core::ptr::eq(found, conf), "{name}");
    }
  }

  #[test]
  fn test_by_name_aliases() {
    let cases: [(&str, &Crc16Conf); 12] = [
      ("PPP", &X25),
      ("CRC-16/X-25", &X25),
      ("crc16_ibm_sdlc", &X25),
      ("x.25", &X25),
      ("CRC-16/MODBUS", &MODBUS),
      ("crc16-modbus", &MODBUS),
      ("ZMODEM", &XMODEM),
      ("crc-16/kermit", &KERMIT),
      ("IBM", &ARC),
      ("CRC-16/ARC", &ARC),
      ("ccitt_false", &CCITT_FALSE),
      ("  CRC-16/IBM-3740 ", &CCITT_FALSE),
    ];
    for (name, expected) in cases {
      let found = by_name(name).unwrap();
      assert!(core::ptr::eq(found, expected), "{name}");
    }
  }

  #[test]
  fn test_by_name_unknown() {
    assert_eq!(by_name("").unwrap_err(), UnknownVariant);
    assert_eq!(by_name("crc-32").unwrap_err(), UnknownVariant);
    assert_eq!(by_name("crc-16/").unwrap_err(), UnknownVariant);
    assert_eq!(by_name("modbüs").unwrap_err(), UnknownVariant);
    assert_eq!(
      by_name("a-name-that-is-definitely-far-too-long-to-fit").unwrap_err(),
      UnknownVariant
    );
  }
}
