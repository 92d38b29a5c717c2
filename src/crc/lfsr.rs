//! Galois LFSR engine and the two transition matrices derived from it.
//!
//! A CRC register of `degree` bits advances one clock at a time through the
//! Galois recurrence implemented by [`Lfsr::serial`]. Clocking eight times per
//! input byte is replaced here by two precomputed matrices:
//!
//! - **H1** (8 columns): column `n` is the polynomial itself, used as a seed,
//!   clocked `n` times with zero input. Row `i` tells which bits of an input
//!   byte reach state bit `i` after one byte.
//! - **H2** (`degree` columns): column `n` is the unit state `1 << n` clocked
//!   eight times with zero input. Row `i` tells which bits of the current state
//!   reach state bit `i` after one byte.
//!
//! Both depend only on `(poly, degree)`, so they can be built once and shared
//! (see [`MatrixCache`](super::cache::MatrixCache)).

use super::bit_vector::BitVector;
use super::degree::Degree;
use log::debug;

/// Bits clocked in per input byte.
pub const BYTE_BITS: usize = 8;

/// A Galois LFSR parametrized by a generator polynomial (implicit leading term
/// omitted) and its degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lfsr {
    poly: BitVector,
    degree: Degree,
}

impl Lfsr {
    /// Creates an LFSR for `poly` (implicit leading term omitted) of the given degree.
    pub fn new(poly: u32, degree: Degree) -> Self {
        Lfsr {
            poly: BitVector::new(poly),
            degree,
        }
    }

    /// Generator polynomial taps.
    pub fn poly(&self) -> BitVector {
        self.poly
    }

    /// Register width.
    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// One LFSR clock. The top state bit is the single feedback source, gated
    /// through each polynomial tap; `din` is shifted into bit 0.
    pub fn serial(&self, prev: BitVector, din: bool) -> BitVector {
        let width = self.degree.bits();
        let feedback = prev.bit(width - 1);
        let mut next = BitVector::default();

        for i in 0..width {
            let tap = self.poly.bit(i) & feedback;
            let shifted = if i == 0 { din } else { prev.bit(i - 1) };
            next.set_bit(i, shifted ^ tap);
        }

        next
    }

    /// `n` serial clocks starting from `init`. Clock `i` (counting from 1)
    /// injects bit `i` of `din` while `i < 8`, and zero afterwards.
    pub fn parallel(&self, n: usize, din: u8, init: BitVector) -> BitVector {
        let din = BitVector::new(u32::from(din));
        (1..=n).fold(init, |state, i| {
            self.serial(state, i < BYTE_BITS && din.bit(i))
        })
    }
}

/// The H1/H2 transition matrices for one `(poly, degree)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrices {
    lfsr: Lfsr,
    h1: [BitVector; BYTE_BITS],
    h2: Vec<BitVector>,
    // Row `i` of each matrix, gathered across its columns.
    h1_rows: Vec<BitVector>,
    h2_rows: Vec<BitVector>,
}

impl Matrices {
    /// Derives H1 and H2 from the polynomial.
    ///
    /// The polynomial must not have bits set at or above `degree`; that is
    /// checked when a [`CrcDescriptor`](super::descriptor::CrcDescriptor) is
    /// built, not here.
    pub fn build(poly: u32, degree: Degree) -> Self {
        let lfsr = Lfsr::new(poly, degree);
        let width = degree.bits();

        let h1: [BitVector; BYTE_BITS] =
            std::array::from_fn(|n| lfsr.parallel(n, 0, lfsr.poly()));
        let h2 = h2_columns(&lfsr);

        let h1_rows = transpose(&h1, width);
        let h2_rows = transpose(&h2, width);

        debug!(
            "built transition matrices for poly 0x{:X} ({})",
            poly, degree
        );

        Matrices {
            lfsr,
            h1,
            h2,
            h1_rows,
            h2_rows,
        }
    }

    /// Polynomial the matrices were derived from.
    pub fn poly(&self) -> u32 {
        self.lfsr.poly().get()
    }

    /// Register width the matrices were derived for.
    pub fn degree(&self) -> Degree {
        self.lfsr.degree()
    }

    /// The LFSR the matrices were derived from.
    pub fn lfsr(&self) -> &Lfsr {
        &self.lfsr
    }

    /// Byte-contribution matrix, one column per input bit position.
    pub fn h1(&self) -> &[BitVector; BYTE_BITS] {
        &self.h1
    }

    /// State-propagation matrix, one column per state bit.
    pub fn h2(&self) -> &[BitVector] {
        &self.h2
    }

    /// Advances `state` by one input byte. `data` holds the byte in its low
    /// eight bits, already reflected if the variant reflects its input.
    pub fn fold(&self, state: BitVector, data: BitVector) -> BitVector {
        let mut next = BitVector::default();

        for (i, (h1_row, h2_row)) in self.h1_rows.iter().zip(&self.h2_rows).enumerate() {
            let from_data = (*h1_row & data).parity();
            let from_state = (*h2_row & state).parity();
            next.set_bit(i, from_data ^ from_state);
        }

        next
    }

    /// Folds every byte of `data`, in order, into `state`.
    pub fn fold_bytes(&self, state: BitVector, data: &[u8], ref_in: bool) -> BitVector {
        data.iter().fold(state, |state, &byte| {
            let byte = BitVector::new(u32::from(byte));
            let byte = if ref_in { byte.reflect(BYTE_BITS) } else { byte };
            self.fold(state, byte)
        })
    }
}

#[cfg(feature = "parallel")]
fn h2_columns(lfsr: &Lfsr) -> Vec<BitVector> {
    use rayon::prelude::*;

    (0..lfsr.degree().bits())
        .into_par_iter()
        .map(|n| lfsr.parallel(BYTE_BITS, 0, BitVector::unit(n)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn h2_columns(lfsr: &Lfsr) -> Vec<BitVector> {
    (0..lfsr.degree().bits())
        .map(|n| lfsr.parallel(BYTE_BITS, 0, BitVector::unit(n)))
        .collect()
}

/// Gathers bit `i` of every column into row `i`, for `i` in `0..rows`.
fn transpose(columns: &[BitVector], rows: usize) -> Vec<BitVector> {
    (0..rows)
        .map(|i| {
            let mut row = BitVector::default();
            for (c, column) in columns.iter().enumerate() {
                row.set_bit(c, column.bit(i));
            }
            row
        })
        .collect()
}
