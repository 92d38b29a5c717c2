use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};

/// Supported CRC register widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Degree {
    Crc4,
    Crc5,
    Crc7,
    Crc8,
    Crc15,
    Crc16,
    Crc24,
    Crc32,
}

impl Degree {
    /// Every supported degree, narrowest first.
    pub const ALL: [Degree; 8] = [
        Degree::Crc4,
        Degree::Crc5,
        Degree::Crc7,
        Degree::Crc8,
        Degree::Crc15,
        Degree::Crc16,
        Degree::Crc24,
        Degree::Crc32,
    ];

    /// Register width in bits.
    pub const fn bits(self) -> usize {
        match self {
            Degree::Crc4 => 4,
            Degree::Crc5 => 5,
            Degree::Crc7 => 7,
            Degree::Crc8 => 8,
            Degree::Crc15 => 15,
            Degree::Crc16 => 16,
            Degree::Crc24 => 24,
            Degree::Crc32 => 32,
        }
    }

    /// Mask covering the low `bits()` bits.
    pub const fn mask(self) -> u32 {
        u32::MAX >> (32 - self.bits())
    }

    /// Number of hex digits needed to print a value of this width.
    pub const fn hex_digits(self) -> usize {
        self.bits().div_ceil(4)
    }

    /// Maps a width in bits to its degree, rejecting unsupported widths.
    pub fn from_bits(bits: u32) -> Result<Self> {
        Degree::ALL
            .iter()
            .copied()
            .find(|d| d.bits() as u32 == bits)
            .ok_or_else(|| {
                Error::invalid_configuration(format!(
                    "unsupported CRC degree {}, expected one of 4, 5, 7, 8, 15, 16, 24, 32",
                    bits
                ))
            })
    }
}

impl TryFrom<u32> for Degree {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        Degree::from_bits(bits)
    }
}

impl Display for Degree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CRC-{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_and_mask() {
        assert_eq!(Degree::Crc4.bits(), 4);
        assert_eq!(Degree::Crc4.mask(), 0xF);
        assert_eq!(Degree::Crc7.mask(), 0x7F);
        assert_eq!(Degree::Crc15.mask(), 0x7FFF);
        assert_eq!(Degree::Crc24.mask(), 0x00FF_FFFF);
        assert_eq!(Degree::Crc32.mask(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_from_bits() {
        for degree in Degree::ALL {
            assert_eq!(Degree::from_bits(degree.bits() as u32).unwrap(), degree);
        }
        assert!(matches!(
            Degree::try_from(12),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(Degree::from_bits(0).is_err());
        assert!(Degree::from_bits(64).is_err());
    }

    #[test]
    fn test_display_and_hex_digits() {
        assert_eq!(Degree::Crc16.to_string(), "CRC-16");
        assert_eq!(Degree::Crc5.hex_digits(), 2);
        assert_eq!(Degree::Crc24.hex_digits(), 6);
    }
}
