//! Universal bit-parallel CRC computation.
//!
//! Any CRC of degree 4, 5, 7, 8, 15, 16, 24 or 32 can be described by the
//! Rocksoft parameters {degree, polynomial, initial value, input reflection,
//! output reflection, output XOR}. This module computes all of them with one
//! engine:
//!
//! - [`BitVector`]: a 32-bit register with indexed bit access
//! - [`Lfsr`] / [`Matrices`]: the Galois LFSR and the two transition matrices
//!   derived from it, which advance the register one whole byte at a time
//! - [`CrcDescriptor`]: a validated CRC definition plus its last result
//! - [`compute_crc`]: the one-shot driver
//! - [`Crc`]: a streaming hasher, optionally backed by a [`MatrixCache`]
//! - [`catalog`]: named standard variants
//!
//! CRCs detect accidental corruption. They provide no protection against
//! deliberate tampering.
//!
//! # How it works
//!
//! Clocking a Galois LFSR eight times with the bits of one input byte is a
//! linear map of (state, byte). The H1 matrix captures the byte's contribution
//! and the H2 matrix the state's; each output bit is the parity of two masked
//! words instead of a chain of eight dependent clocks.
//!
//! # Examples
//!
//! ```
//! use unicrc::crc::{catalog, compute_crc, CrcDescriptor, Degree};
//!
//! let mut crc = CrcDescriptor::new(
//!     Degree::Crc32,
//!     "CRC-32/ISO-HDLC",
//!     0x04C11DB7,
//!     0xFFFFFFFF,
//!     true,
//!     true,
//!     0xFFFFFFFF,
//! )
//! .unwrap();
//! compute_crc(&mut crc, b"123456789");
//! assert_eq!(crc.result(), 0xCBF43926);
//!
//! let mut modbus = catalog::find("CRC-16/MODBUS").unwrap().descriptor().unwrap();
//! assert_eq!(modbus.compute(b"123456789"), 0x4B37);
//! ```

pub mod bit_vector;
pub mod cache;
pub mod catalog;
pub mod compute;
pub mod degree;
pub mod descriptor;
pub mod digest;
pub mod lfsr;

#[cfg(test)]
mod tests;

pub use bit_vector::BitVector;
pub use cache::MatrixCache;
pub use catalog::CrcParams;
pub use compute::compute_crc;
pub use degree::Degree;
pub use descriptor::{CrcBuilder, CrcDescriptor};
pub use digest::Crc;
pub use lfsr::{Lfsr, Matrices};

use std::fmt::{Debug, Display};

/// Trait for CRC algorithm implementations
pub trait CrcAlgorithm: Debug + Display {
    /// Calculate CRC for the given data
    fn calculate(&self, data: &[u8]) -> u32;

    /// Get name of the CRC algorithm
    fn name(&self) -> &str;

    /// Get the polynomial used by the algorithm
    fn polynomial(&self) -> u32;

    /// Get the width of the CRC in bits
    fn width(&self) -> u8;

    /// Verify that data has the expected checksum
    fn verify(&self, data: &[u8], expected_crc: u32) -> bool {
        self.calculate(data) == expected_crc
    }
}
