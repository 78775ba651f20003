//! Configurable CRC-16 checksums.
//!
//! This crate computes any CRC-16 variant described by five parameters
//! (polynomial, bit order, initial value, final XOR, output byte order), one
//! shot or incrementally, and ships the common variants predefined.
//!
//! # Supported Variants
//!
//! | Configuration | Typed hasher | Polynomial | Use Cases |
//! |---------------|--------------|------------|-----------|
//! | [`X25`] / [`PPP`] | [`Crc16X25`] | 0x1021 (reflected) | X.25, HDLC, PPP, IrDA |
//! | [`MODBUS`] | [`Crc16Modbus`] | 0x8005 (reflected) | Modbus RTU |
//! | [`XMODEM`] | [`Crc16Xmodem`] | 0x1021 | XMODEM, ZMODEM |
//! | [`KERMIT`] | [`Crc16Kermit`] | 0x1021 (reflected) | Kermit |
//! | [`ARC`] / [`IBM`] | [`Crc16Arc`] | 0x8005 (reflected) | ARC, LHA |
//! | [`CCITT_FALSE`] | [`Crc16CcittFalse`] | 0x1021 | Bluetooth, SD, many embedded protocols |
//!
//! Anything else in the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/16.htm)
//! can be built with [`Crc16Conf::new`]. [`Crc16Params::initial`] is the raw
//! register seed: for reflected entries pass the catalogue's `init` bit-reversed.
//!
//! # Example
//!
//! ```rust
//! use crc16::{MODBUS, PPP, XMODEM};
//!
//! // One-shot computation
//! assert_eq!(crc16::checksum(&MODBUS, b"123456789"), 0x4B37);
//!
//! // Streaming computation
//! let mut d = PPP.digest();
//! d.update(b"1234");
//! d.update(b"56789");
//! assert_eq!(d.finalize(), 0x906E);
//!
//! // Serialized in the variant's byte order
//! let mut frame = b"123456789".to_vec();
//! let mut d = XMODEM.digest();
//! d.update(&frame);
//! d.finalize_into(&mut frame);
//! assert_eq!(&frame[9..], &[0x31, 0xC3]);
//! ```
//!
//! # Lookup Tables
//!
//! Each [`Crc16Conf`] builds its 256-entry table once, on first use, and
//! shares it between all checksums and digests. With the default `std`
//! feature this goes through `OnceLock`, so concurrent first use is safe.
//! Without `std` the table is built at compile time instead.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Lazy tables, `std::io::Write` impls, reader/writer adapters |
//! | `tracing` | No | `debug` event when a configuration builds its table |
//!
//! # no_std Support
//!
//! ```toml
//! [dependencies]
//! crc16 = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod common;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod catalog;
mod conf;
mod digest;
mod error;
#[cfg(feature = "std")]
pub mod io;
mod params;
mod variants;

#[cfg(test)]
mod proptests;

pub use catalog::{ARC, CCITT_FALSE, IBM, KERMIT, MODBUS, PPP, X25, XMODEM};
pub use common::tables::{Table, make_table_normal, make_table_reflected, reverse};
pub use conf::{Crc16Conf, checksum};
pub use digest::Crc16Digest;
pub use error::UnknownVariant;
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
pub use params::{BitOrder, Crc16Params};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine, MismatchError};
pub use variants::{Crc16Arc, Crc16CcittFalse, Crc16Ibm, Crc16Kermit, Crc16Modbus, Crc16Ppp, Crc16X25, Crc16Xmodem};

/// Size of a serialized CRC-16 checksum in bytes.
pub const SIZE: usize = 2;

/// Fold `data` into `crc` with a reflected table. See [`common::portable::update_reflected`].
pub use common::portable::update_reflected;

/// Fold `data` into `crc` with a normal table. See [`common::portable::update_normal`].
pub use common::portable::update_normal;
