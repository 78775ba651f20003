//! Common utilities for CRC-16 computation.
//!
//! This module provides:
//! - Const-fn lookup table generation for both bit-order conventions
//! - Table-driven fold functions
//! - GF(2) matrix operations for `combine()`

pub mod combine;
pub mod portable;
#[cfg(test)]
pub mod reference;
pub mod tables;
