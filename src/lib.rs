pub mod crc;
pub mod error;

pub use crc::{
    compute_crc, CrcAlgorithm, CrcBuilder, CrcDescriptor, CrcParams, Crc, Degree, MatrixCache,
};
pub use error::{Error, Result};
