use crate::crc::catalog::{self, CrcParams};
use crate::crc::{compute_crc, Crc, CrcAlgorithm, CrcDescriptor, MatrixCache};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::thread;

const CHECK: &[u8] = b"123456789";

/// Bit-at-a-time CRC, MSB first, used as an independent oracle.
fn bitwise(params: &CrcParams, data: &[u8]) -> u32 {
    let width = params.degree.bits();
    let top = 1u32 << (width - 1);
    let mask = params.degree.mask();

    let mut crc = params.init;
    for &byte in data {
        let byte = if params.ref_in { byte.reverse_bits() } else { byte };
        for k in (0..8).rev() {
            let feedback = (crc & top != 0) ^ ((byte >> k) & 1 == 1);
            crc = (crc << 1) & mask;
            if feedback {
                crc ^= params.poly;
            }
        }
    }

    if params.ref_out {
        crc = crc.reverse_bits() >> (32 - width);
    }
    crc ^ params.xor_out
}

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

#[test]
fn test_catalog_check_values() {
    for params in catalog::ALL {
        let mut descriptor = params.descriptor().unwrap();
        let result = compute_crc(&mut descriptor, CHECK);
        assert_eq!(
            result, params.check,
            "{}: got 0x{:X}, expected 0x{:X}",
            params.name, result, params.check
        );
        assert_eq!(descriptor.result(), params.check);
    }
}

#[test]
fn test_catalog_check_values_streaming() {
    let cache = MatrixCache::new();
    for params in catalog::ALL {
        let crc = Crc::with_cache(params.descriptor().unwrap(), &cache);
        assert!(crc.verify(CHECK, params.check), "{}", params.name);
    }
    // variants sharing a polynomial and degree share matrices
    assert!(cache.len() < catalog::ALL.len());
}

#[test]
fn test_empty_input_identity() {
    for params in catalog::ALL {
        let mut descriptor = params.descriptor().unwrap();
        let width = params.degree.bits();
        let init = if params.ref_out {
            params.init.reverse_bits() >> (32 - width)
        } else {
            params.init
        };
        assert_eq!(
            descriptor.compute(&[]),
            init ^ params.xor_out,
            "{}",
            params.name
        );
    }
}

#[test]
fn test_matches_bitwise_oracle() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for params in catalog::ALL {
        for len in [1usize, 2, 3, 17, 64, 255] {
            let data = random_bytes(&mut rng, len);
            let mut descriptor = params.descriptor().unwrap();
            assert_eq!(
                descriptor.compute(&data),
                bitwise(params, &data),
                "{} over {} random bytes",
                params.name,
                len
            );
        }
    }
}

#[test]
fn test_custom_parameters_match_oracle() {
    let mut rng = StdRng::seed_from_u64(42);
    for degree in crate::crc::Degree::ALL {
        for _ in 0..8 {
            // odd polynomials only: the constant term is always present in practice
            let poly = (rng.gen::<u32>() & degree.mask()) | 1;
            let params = CrcParams {
                name: "random",
                degree,
                poly,
                init: rng.gen::<u32>() & degree.mask(),
                ref_in: rng.gen(),
                ref_out: rng.gen(),
                xor_out: rng.gen::<u32>() & degree.mask(),
                check: 0,
            };
            let data = random_bytes(&mut rng, 33);
            let mut descriptor = params.descriptor().unwrap();
            assert_eq!(descriptor.compute(&data), bitwise(&params, &data), "{:?}", params);
        }
    }
}

#[test]
fn test_single_byte_composability() {
    let mut rng = StdRng::seed_from_u64(7);
    let data = random_bytes(&mut rng, 100);

    for params in catalog::ALL {
        let mut whole = params.descriptor().unwrap();
        let expected = whole.compute(&data);

        // thread the raw register through one call per byte
        let mut state = params.init;
        for &byte in &data {
            let mut step = CrcDescriptor::new(
                params.degree,
                params.name,
                params.poly,
                state,
                params.ref_in,
                false,
                0,
            )
            .unwrap();
            state = compute_crc(&mut step, &[byte]);
        }
        let mut last = CrcDescriptor::new(
            params.degree,
            params.name,
            params.poly,
            state,
            params.ref_in,
            params.ref_out,
            params.xor_out,
        )
        .unwrap();
        assert_eq!(last.compute(&[]), expected, "{}", params.name);

        let mut streaming = Crc::new(params.descriptor().unwrap());
        for &byte in &data {
            streaming.update(&[byte]);
        }
        assert_eq!(streaming.finalize(), expected, "{}", params.name);
    }
}

#[test]
fn test_random_split_points() {
    let mut rng = StdRng::seed_from_u64(99);
    let data = random_bytes(&mut rng, 512);
    let crc = Crc::new(catalog::CRC32_ISCSI.descriptor().unwrap());
    let expected = crc.calculate(&data);

    for _ in 0..16 {
        let mut hasher = crc.clone();
        hasher.reset();
        let mut rest = &data[..];
        while !rest.is_empty() {
            let take = rng.gen_range(0..=rest.len().min(40));
            let (head, tail) = rest.split_at(take);
            hasher.update(head);
            rest = tail;
        }
        assert_eq!(hasher.finalize(), expected);
    }
}

#[test]
fn test_distinct_descriptors_in_parallel() {
    let cache = Arc::new(MatrixCache::new());
    let handles: Vec<_> = catalog::ALL
        .iter()
        .map(|params| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let mut descriptor = params.descriptor().unwrap();
                let direct = descriptor.compute(CHECK);
                let cached = Crc::with_cache(params.descriptor().unwrap(), &cache).calculate(CHECK);
                (params.check, direct, cached)
            })
        })
        .collect();

    for handle in handles {
        let (check, direct, cached) = handle.join().unwrap();
        assert_eq!(direct, check);
        assert_eq!(cached, check);
    }
}
