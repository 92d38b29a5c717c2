//! Fixed-width bit vector used for every intermediate quantity of the engine.
//!
//! A `BitVector` is a plain 32-bit register with indexed bit access. Indices
//! are always bounded by the CRC degree (at most 32) or by the byte width, so
//! out-of-range access is unreachable from the engine.

use bitvec::prelude::*;
use std::fmt;
use std::ops::{BitAnd, BitXor};

/// A 32-bit register addressable one bit at a time (bit 0 is the LSB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitVector(u32);

impl BitVector {
    /// Number of addressable bits.
    pub const WIDTH: usize = 32;

    /// Wraps a raw register value.
    pub const fn new(value: u32) -> Self {
        BitVector(value)
    }

    /// Vector with only bit `idx` set.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 32`.
    pub fn unit(idx: usize) -> Self {
        let mut v = BitVector::default();
        v.set_bit(idx, true);
        v
    }

    /// Returns the raw register value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Replaces the raw register value.
    pub fn set(&mut self, value: u32) {
        self.0 = value;
    }

    /// Returns bit `idx`.
    pub fn bit(&self, idx: usize) -> bool {
        self.0.view_bits::<Lsb0>()[idx]
    }

    /// Sets or clears bit `idx`.
    pub fn set_bit(&mut self, idx: usize, bit: bool) {
        self.0.view_bits_mut::<Lsb0>().set(idx, bit);
    }

    /// Reverses the order of the low `width` bits; bits above `width` are left
    /// untouched. Applying it twice with the same width is the identity.
    ///
    /// # Panics
    ///
    /// Panics if `width > 32`.
    pub fn reflect(&self, width: usize) -> Self {
        let mut out = *self;
        out.0.view_bits_mut::<Lsb0>()[..width].reverse();
        out
    }

    /// Clears every bit at or above `width`.
    ///
    /// # Panics
    ///
    /// Panics if `width > 32`.
    pub fn truncate(&self, width: usize) -> Self {
        let mut out = *self;
        out.0.view_bits_mut::<Lsb0>()[width..].fill(false);
        out
    }

    /// XOR of all bits (1 when an odd number of bits is set).
    pub fn parity(&self) -> bool {
        self.0.view_bits::<Lsb0>().count_ones() % 2 == 1
    }
}

impl From<u32> for BitVector {
    fn from(value: u32) -> Self {
        BitVector(value)
    }
}

impl From<BitVector> for u32 {
    fn from(v: BitVector) -> Self {
        v.0
    }
}

impl BitAnd for BitVector {
    type Output = BitVector;

    fn bitand(self, rhs: BitVector) -> BitVector {
        BitVector(self.0 & rhs.0)
    }
}

impl BitXor for BitVector {
    type Output = BitVector;

    fn bitxor(self, rhs: BitVector) -> BitVector {
        BitVector(self.0 ^ rhs.0)
    }
}

impl fmt::Binary for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
