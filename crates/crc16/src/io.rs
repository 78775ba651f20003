//! I/O adapters for checksum computation.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and checksum the bytes that actually
//! pass through them. They work with any typed hasher from this crate.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use crc16::{Checksum, ChecksumReader, Crc16Xmodem};
//!
//! let mut reader: ChecksumReader<_, Crc16Xmodem> = Crc16Xmodem::reader(Cursor::new(b"123456789".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.crc(), 0x31C3);
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{ChecksumReader, ChecksumWriter};
