//! Checksum traits shared by the CRC-16 crates.
//!
//! This crate is `no_std` compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | One-shot and streaming checksum computation |
//! | [`ChecksumCombine`] | `crc(A ‖ B)` from `crc(A)`, `crc(B)` and `len(B)` |
//! | [`MismatchError`] | A computed checksum differs from the expected one |
//! | [`io::ChecksumReader`] / [`io::ChecksumWriter`] | Checksum bytes as they pass through `std::io` (`std` feature) |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
pub use error::MismatchError;
