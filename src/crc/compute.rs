use super::bit_vector::BitVector;
use super::descriptor::CrcDescriptor;
use super::lfsr::Matrices;
use log::trace;

/// Computes the CRC of `data` for `descriptor`, writes it into the
/// descriptor's `result` and returns it.
///
/// The transition matrices are rebuilt on every call. Use
/// [`Crc`](super::digest::Crc) with a [`MatrixCache`](super::cache::MatrixCache)
/// to amortize them across calls.
///
/// An empty `data` yields `reflect_if(ref_out, init) ^ xor_out`.
pub fn compute_crc(descriptor: &mut CrcDescriptor, data: &[u8]) -> u32 {
    let matrices = Matrices::build(descriptor.poly(), descriptor.degree());
    let state = matrices.fold_bytes(
        BitVector::new(descriptor.init()),
        data,
        descriptor.ref_in(),
    );
    let result = finalize(descriptor, state);

    trace!(
        "{}: {} bytes -> 0x{:X}",
        descriptor.name(),
        data.len(),
        result
    );
    descriptor.set_result(result);
    result
}

/// Applies output reflection and the final XOR mask to a register state.
pub fn finalize(descriptor: &CrcDescriptor, state: BitVector) -> u32 {
    let width = descriptor.degree().bits();
    let state = if descriptor.ref_out() {
        state.reflect(width)
    } else {
        state
    };
    state.truncate(width).get() ^ descriptor.xor_out()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::degree::Degree;

    fn descriptor(
        degree: Degree,
        poly: u32,
        init: u32,
        ref_in: bool,
        ref_out: bool,
        xor_out: u32,
    ) -> CrcDescriptor {
        CrcDescriptor::new(degree, "test", poly, init, ref_in, ref_out, xor_out).unwrap()
    }

    #[test]
    fn test_crc8_check() {
        let mut crc = descriptor(Degree::Crc8, 0x07, 0x00, false, false, 0x00);
        assert_eq!(compute_crc(&mut crc, b"123456789"), 0xF4);
        assert_eq!(crc.result(), 0xF4);
    }

    #[test]
    fn test_crc16_ccitt_false_check() {
        let mut crc = descriptor(Degree::Crc16, 0x1021, 0xFFFF, false, false, 0x0000);
        assert_eq!(crc.compute(b"123456789"), 0x29B1);
        assert_eq!(crc.result(), 0x29B1);
    }

    #[test]
    fn test_crc32_iso_hdlc_check() {
        let mut crc = descriptor(
            Degree::Crc32,
            0x04C1_1DB7,
            0xFFFF_FFFF,
            true,
            true,
            0xFFFF_FFFF,
        );
        assert_eq!(crc.compute(b"123456789"), 0xCBF4_3926);
        assert_eq!(
            crc.compute(b"The quick brown fox jumps over the lazy dog"),
            0x414F_A339
        );
    }

    #[test]
    fn test_empty_input() {
        let mut crc = descriptor(Degree::Crc16, 0x1021, 0xFFFF, false, false, 0x0000);
        assert_eq!(crc.compute(&[]), 0xFFFF);

        // init is reflected over the degree width, then masked
        let mut crc = descriptor(Degree::Crc5, 0x05, 0x01, true, true, 0x1F);
        assert_eq!(crc.compute(&[]), 0x10 ^ 0x1F);

        let mut crc = descriptor(Degree::Crc24, 0x864CFB, 0xB704CE, false, false, 0);
        assert_eq!(crc.compute(b""), 0xB704CE);
    }

    #[test]
    fn test_result_is_overwritten_each_call() {
        let mut crc = descriptor(Degree::Crc8, 0x07, 0x00, false, false, 0x00);
        crc.compute(b"123456789");
        assert_eq!(crc.result(), 0xF4);
        crc.compute(&[0x01]);
        assert_eq!(crc.result(), 0x07);
        // the definition itself is untouched
        assert_eq!(crc.init(), 0x00);
    }

    #[test]
    fn test_deterministic() {
        let mut crc = descriptor(Degree::Crc15, 0x4599, 0, false, false, 0);
        let first = crc.compute(b"determinism");
        for _ in 0..4 {
            assert_eq!(crc.compute(b"determinism"), first);
        }
    }

    #[test]
    fn test_finalize() {
        let crc = descriptor(Degree::Crc8, 0x07, 0x00, true, true, 0xFF);
        assert_eq!(finalize(&crc, BitVector::new(0x01)), 0x80 ^ 0xFF);
        let crc = descriptor(Degree::Crc8, 0x07, 0x00, false, false, 0x0F);
        assert_eq!(finalize(&crc, BitVector::new(0x01)), 0x0E);
    }
}
