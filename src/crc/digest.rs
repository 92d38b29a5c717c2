//! Streaming CRC computation over data that arrives in pieces.

use super::bit_vector::BitVector;
use super::cache::MatrixCache;
use super::compute::finalize;
use super::descriptor::CrcDescriptor;
use super::lfsr::Matrices;
use super::CrcAlgorithm;
use std::fmt::{Display, Formatter};
use std::io;
use std::sync::Arc;

/// A CRC hasher bound to one descriptor. Matrices are built (or fetched from a
/// cache) once, then every `update` folds bytes into the running register.
#[derive(Debug, Clone)]
pub struct Crc {
    descriptor: CrcDescriptor,
    matrices: Arc<Matrices>,
    state: BitVector,
}

impl Crc {
    /// Creates a hasher, building the matrices for `descriptor`.
    pub fn new(descriptor: CrcDescriptor) -> Self {
        let matrices = Arc::new(Matrices::build(descriptor.poly(), descriptor.degree()));
        Self::from_parts(descriptor, matrices)
    }

    /// Like [`Crc::new`], but takes the matrices from `cache`.
    pub fn with_cache(descriptor: CrcDescriptor, cache: &MatrixCache) -> Self {
        let matrices = cache.get_or_build(descriptor.poly(), descriptor.degree());
        Self::from_parts(descriptor, matrices)
    }

    fn from_parts(descriptor: CrcDescriptor, matrices: Arc<Matrices>) -> Self {
        let state = BitVector::new(descriptor.init());
        Self {
            descriptor,
            matrices,
            state,
        }
    }

    /// Resets the register to the descriptor's initial value.
    pub fn reset(&mut self) {
        self.state = BitVector::new(self.descriptor.init());
    }

    /// Folds `data` into the running register.
    pub fn update(&mut self, data: &[u8]) {
        self.state = self
            .matrices
            .fold_bytes(self.state, data, self.descriptor.ref_in());
    }

    /// Returns the check value for everything fed so far. The register is left
    /// as is, so further updates continue from the same point.
    pub fn finalize(&self) -> u32 {
        finalize(&self.descriptor, self.state)
    }

    /// Computes the CRC of `data` alone without touching the running state.
    pub fn compute_one_shot(&self, data: &[u8]) -> u32 {
        let state = self.matrices.fold_bytes(
            BitVector::new(self.descriptor.init()),
            data,
            self.descriptor.ref_in(),
        );
        finalize(&self.descriptor, state)
    }

    /// Raw register value before output reflection and XOR.
    pub fn current_state(&self) -> u32 {
        self.state.get()
    }

    /// The descriptor this hasher computes.
    pub fn descriptor(&self) -> &CrcDescriptor {
        &self.descriptor
    }

    /// The transition matrices in use.
    pub fn matrices(&self) -> &Matrices {
        &self.matrices
    }

    /// Consumes the hasher, returning its descriptor with `result` set to the
    /// finalized value.
    pub fn into_descriptor(self) -> CrcDescriptor {
        let result = self.finalize();
        let mut descriptor = self.descriptor;
        descriptor.set_result(result);
        descriptor
    }
}

impl CrcAlgorithm for Crc {
    fn calculate(&self, data: &[u8]) -> u32 {
        self.compute_one_shot(data)
    }

    fn name(&self) -> &str {
        self.descriptor.name()
    }

    fn polynomial(&self) -> u32 {
        self.descriptor.poly()
    }

    fn width(&self) -> u8 {
        self.descriptor.degree().bits() as u8
    }
}

impl io::Write for Crc {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Display for Crc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.descriptor, f)
    }
}
