//! CRC descriptor: the immutable definition of a CRC variant plus the result
//! of the last computation.

use super::compute::compute_crc;
use super::degree::Degree;
use crate::error::{Error, Result};
use log::debug;
use std::fmt::{Display, Formatter};

/// A CRC definition in the Rocksoft parameter model, together with the most
/// recent result computed from it.
///
/// `poly`, `init` and `xor_out` are validated against `degree` on
/// construction. A zero polynomial passes validation but produces a
/// meaningless check value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrcDescriptor {
    degree: Degree,
    name: String,
    poly: u32,
    init: u32,
    ref_in: bool,
    ref_out: bool,
    xor_out: u32,
    result: u32,
}

impl CrcDescriptor {
    /// Creates a validated descriptor. `result` starts out equal to `init`.
    pub fn new(
        degree: Degree,
        name: &str,
        poly: u32,
        init: u32,
        ref_in: bool,
        ref_out: bool,
        xor_out: u32,
    ) -> Result<Self> {
        check_width(name, degree, "poly", poly)?;
        check_width(name, degree, "init", init)?;
        check_width(name, degree, "xor_out", xor_out)?;

        Ok(Self {
            degree,
            name: name.to_string(),
            poly,
            init,
            ref_in,
            ref_out,
            xor_out,
            result: init,
        })
    }

    /// Starts a builder for a descriptor of the given degree.
    pub fn builder(degree: Degree) -> CrcBuilder {
        CrcBuilder::new(degree)
    }

    /// Computes the CRC of `data`, stores it in `result` and returns it.
    pub fn compute(&mut self, data: &[u8]) -> u32 {
        compute_crc(self, data)
    }

    /// Register width of this variant.
    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// Label of this variant.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generator polynomial, implicit leading term omitted.
    pub fn poly(&self) -> u32 {
        self.poly
    }

    /// Initial register value.
    pub fn init(&self) -> u32 {
        self.init
    }

    /// Whether input bytes are bit-reversed before folding.
    pub fn ref_in(&self) -> bool {
        self.ref_in
    }

    /// Whether the final register is bit-reversed before `xor_out`.
    pub fn ref_out(&self) -> bool {
        self.ref_out
    }

    /// Mask XORed into the final register.
    pub fn xor_out(&self) -> u32 {
        self.xor_out
    }

    /// Result of the last computation, or `init` if nothing was computed yet.
    pub fn result(&self) -> u32 {
        self.result
    }

    pub(crate) fn set_result(&mut self, result: u32) {
        self.result = result;
    }
}

fn check_width(name: &str, degree: Degree, field: &str, value: u32) -> Result<()> {
    if value & !degree.mask() != 0 {
        debug!("rejected {}: {} 0x{:X} wider than {}", name, field, value, degree);
        return Err(Error::invalid_configuration(format!(
            "{}: {} 0x{:X} has bits above degree {}",
            name,
            field,
            value,
            degree.bits()
        )));
    }
    Ok(())
}

impl Display for CrcDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, polynomial: 0x{:0width$X})",
            self.name,
            self.degree,
            self.poly,
            width = self.degree.hex_digits()
        )
    }
}

/// A builder for [`CrcDescriptor`]. Unset parameters default to zero/`false`
/// and the name defaults to the degree's label.
#[derive(Debug, Clone)]
pub struct CrcBuilder {
    degree: Degree,
    name: Option<String>,
    poly: u32,
    init: u32,
    ref_in: bool,
    ref_out: bool,
    xor_out: u32,
}

impl CrcBuilder {
    /// Starts a builder with every parameter zeroed.
    pub fn new(degree: Degree) -> Self {
        Self {
            degree,
            name: None,
            poly: 0,
            init: 0,
            ref_in: false,
            ref_out: false,
            xor_out: 0,
        }
    }

    /// Sets the variant's label.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Sets the generator polynomial in normal (MSB-first) form, without the
    /// implicit leading term.
    pub fn poly(mut self, poly: u32) -> Self {
        self.poly = poly;
        self
    }

    /// Sets the initial register value.
    pub fn init(mut self, init: u32) -> Self {
        self.init = init;
        self
    }

    /// Reverse the bit order of each input byte before folding it in.
    pub fn ref_in(mut self, on: bool) -> Self {
        self.ref_in = on;
        self
    }

    /// Reverse the final register before applying `xor_out`.
    pub fn ref_out(mut self, on: bool) -> Self {
        self.ref_out = on;
        self
    }

    /// Sets the mask XORed into the final register.
    pub fn xor_out(mut self, xor_out: u32) -> Self {
        self.xor_out = xor_out;
        self
    }

    /// Validates the parameters and builds the descriptor.
    pub fn build(self) -> Result<CrcDescriptor> {
        let name = self.name.unwrap_or_else(|| self.degree.to_string());
        CrcDescriptor::new(
            self.degree,
            &name,
            self.poly,
            self.init,
            self.ref_in,
            self.ref_out,
            self.xor_out,
        )
    }
}
