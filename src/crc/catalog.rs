//! Catalog of well-known CRC variants for every supported degree.
//!
//! Parameters follow the CRC RevEng catalogue. `check` is the CRC of the ASCII
//! string `"123456789"`.

use super::degree::Degree;
use super::descriptor::CrcDescriptor;
use crate::error::{Error, Result};

/// The defining parameters of a named CRC variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcParams {
    pub name: &'static str,
    pub degree: Degree,
    pub poly: u32,
    pub init: u32,
    pub ref_in: bool,
    pub ref_out: bool,
    pub xor_out: u32,
    pub check: u32,
}

impl CrcParams {
    /// Builds a fresh descriptor for this variant.
    pub fn descriptor(&self) -> Result<CrcDescriptor> {
        CrcDescriptor::new(
            self.degree,
            self.name,
            self.poly,
            self.init,
            self.ref_in,
            self.ref_out,
            self.xor_out,
        )
    }
}

const fn params(
    name: &'static str,
    degree: Degree,
    poly: u32,
    init: u32,
    reflected: bool,
    xor_out: u32,
    check: u32,
) -> CrcParams {
    CrcParams {
        name,
        degree,
        poly,
        init,
        ref_in: reflected,
        ref_out: reflected,
        xor_out,
        check,
    }
}

pub const CRC4_G704: CrcParams = params("CRC-4/G-704", Degree::Crc4, 0x3, 0x0, true, 0x0, 0x7);
pub const CRC4_INTERLAKEN: CrcParams =
    params("CRC-4/INTERLAKEN", Degree::Crc4, 0x3, 0xF, false, 0xF, 0xB);

pub const CRC5_EPC_C1G2: CrcParams =
    params("CRC-5/EPC-C1G2", Degree::Crc5, 0x09, 0x09, false, 0x00, 0x00);
pub const CRC5_G704: CrcParams = params("CRC-5/G-704", Degree::Crc5, 0x15, 0x00, true, 0x00, 0x07);
pub const CRC5_USB: CrcParams = params("CRC-5/USB", Degree::Crc5, 0x05, 0x1F, true, 0x1F, 0x19);

pub const CRC7_MMC: CrcParams = params("CRC-7/MMC", Degree::Crc7, 0x09, 0x00, false, 0x00, 0x75);
pub const CRC7_UMTS: CrcParams = params("CRC-7/UMTS", Degree::Crc7, 0x45, 0x00, false, 0x00, 0x61);

pub const CRC8_SMBUS: CrcParams = params("CRC-8/SMBUS", Degree::Crc8, 0x07, 0x00, false, 0x00, 0xF4);
pub const CRC8_MAXIM_DOW: CrcParams =
    params("CRC-8/MAXIM-DOW", Degree::Crc8, 0x31, 0x00, true, 0x00, 0xA1);
pub const CRC8_SAE_J1850: CrcParams =
    params("CRC-8/SAE-J1850", Degree::Crc8, 0x1D, 0xFF, false, 0xFF, 0x4B);
pub const CRC8_AUTOSAR: CrcParams =
    params("CRC-8/AUTOSAR", Degree::Crc8, 0x2F, 0xFF, false, 0xFF, 0xDF);

pub const CRC15_CAN: CrcParams =
    params("CRC-15/CAN", Degree::Crc15, 0x4599, 0x0000, false, 0x0000, 0x059E);
pub const CRC15_MPT1327: CrcParams =
    params("CRC-15/MPT1327", Degree::Crc15, 0x6815, 0x0000, false, 0x0001, 0x2566);

pub const CRC16_IBM_3740: CrcParams =
    params("CRC-16/IBM-3740", Degree::Crc16, 0x1021, 0xFFFF, false, 0x0000, 0x29B1);
pub const CRC16_XMODEM: CrcParams =
    params("CRC-16/XMODEM", Degree::Crc16, 0x1021, 0x0000, false, 0x0000, 0x31C3);
pub const CRC16_KERMIT: CrcParams =
    params("CRC-16/KERMIT", Degree::Crc16, 0x1021, 0x0000, true, 0x0000, 0x2189);
pub const CRC16_IBM_SDLC: CrcParams =
    params("CRC-16/IBM-SDLC", Degree::Crc16, 0x1021, 0xFFFF, true, 0xFFFF, 0x906E);
pub const CRC16_ARC: CrcParams =
    params("CRC-16/ARC", Degree::Crc16, 0x8005, 0x0000, true, 0x0000, 0xBB3D);
pub const CRC16_MODBUS: CrcParams =
    params("CRC-16/MODBUS", Degree::Crc16, 0x8005, 0xFFFF, true, 0x0000, 0x4B37);
pub const CRC16_DNP: CrcParams =
    params("CRC-16/DNP", Degree::Crc16, 0x3D65, 0x0000, true, 0xFFFF, 0xEA82);

pub const CRC24_OPENPGP: CrcParams =
    params("CRC-24/OPENPGP", Degree::Crc24, 0x864CFB, 0xB704CE, false, 0x000000, 0x21CF02);
pub const CRC24_BLE: CrcParams =
    params("CRC-24/BLE", Degree::Crc24, 0x00065B, 0x555555, true, 0x000000, 0xC25A56);
pub const CRC24_FLEXRAY_A: CrcParams =
    params("CRC-24/FLEXRAY-A", Degree::Crc24, 0x5D6DCB, 0xFEDCBA, false, 0x000000, 0x7979BD);

pub const CRC32_ISO_HDLC: CrcParams = params(
    "CRC-32/ISO-HDLC",
    Degree::Crc32,
    0x04C1_1DB7,
    0xFFFF_FFFF,
    true,
    0xFFFF_FFFF,
    0xCBF4_3926,
);
pub const CRC32_ISCSI: CrcParams = params(
    "CRC-32/ISCSI",
    Degree::Crc32,
    0x1EDC_6F41,
    0xFFFF_FFFF,
    true,
    0xFFFF_FFFF,
    0xE306_9283,
);
pub const CRC32_BZIP2: CrcParams = params(
    "CRC-32/BZIP2",
    Degree::Crc32,
    0x04C1_1DB7,
    0xFFFF_FFFF,
    false,
    0xFFFF_FFFF,
    0xFC89_1918,
);
pub const CRC32_MPEG2: CrcParams = params(
    "CRC-32/MPEG-2",
    Degree::Crc32,
    0x04C1_1DB7,
    0xFFFF_FFFF,
    false,
    0x0000_0000,
    0x0376_E6E7,
);
pub const CRC32_JAMCRC: CrcParams = params(
    "CRC-32/JAMCRC",
    Degree::Crc32,
    0x04C1_1DB7,
    0xFFFF_FFFF,
    true,
    0x0000_0000,
    0x340B_C6D9,
);
pub const CRC32_CKSUM: CrcParams = params(
    "CRC-32/CKSUM",
    Degree::Crc32,
    0x04C1_1DB7,
    0x0000_0000,
    false,
    0xFFFF_FFFF,
    0x765E_7680,
);

/// Every cataloged variant, grouped by degree.
pub const ALL: &[CrcParams] = &[
    CRC4_G704,
    CRC4_INTERLAKEN,
    CRC5_EPC_C1G2,
    CRC5_G704,
    CRC5_USB,
    CRC7_MMC,
    CRC7_UMTS,
    CRC8_SMBUS,
    CRC8_MAXIM_DOW,
    CRC8_SAE_J1850,
    CRC8_AUTOSAR,
    CRC15_CAN,
    CRC15_MPT1327,
    CRC16_IBM_3740,
    CRC16_XMODEM,
    CRC16_KERMIT,
    CRC16_IBM_SDLC,
    CRC16_ARC,
    CRC16_MODBUS,
    CRC16_DNP,
    CRC24_OPENPGP,
    CRC24_BLE,
    CRC24_FLEXRAY_A,
    CRC32_ISO_HDLC,
    CRC32_ISCSI,
    CRC32_BZIP2,
    CRC32_MPEG2,
    CRC32_JAMCRC,
    CRC32_CKSUM,
];

/// Common alternative names mapped to their catalog entries.
const ALIASES: &[(&str, &CrcParams)] = &[
    ("CRC-4/ITU", &CRC4_G704),
    ("CRC-5/ITU", &CRC5_G704),
    ("CRC-5/EPC", &CRC5_EPC_C1G2),
    ("CRC-7", &CRC7_MMC),
    ("CRC-8", &CRC8_SMBUS),
    ("CRC-8/MAXIM", &CRC8_MAXIM_DOW),
    ("CRC-8/DALLAS", &CRC8_MAXIM_DOW),
    ("CRC-15", &CRC15_CAN),
    ("CRC-16/CCITT-FALSE", &CRC16_IBM_3740),
    ("CRC-16/AUTOSAR", &CRC16_IBM_3740),
    ("CRC-16/ACORN", &CRC16_XMODEM),
    ("CRC-16/CCITT", &CRC16_KERMIT),
    ("CRC-16/X-25", &CRC16_IBM_SDLC),
    ("CRC-16", &CRC16_ARC),
    ("CRC-24", &CRC24_OPENPGP),
    ("CRC-32", &CRC32_ISO_HDLC),
    ("CRC-32/ADCCP", &CRC32_ISO_HDLC),
    ("CRC-32C", &CRC32_ISCSI),
    ("CRC-32/CASTAGNOLI", &CRC32_ISCSI),
    ("CRC-32/AAL5", &CRC32_BZIP2),
    ("CRC-32/POSIX", &CRC32_CKSUM),
];

/// Looks up a variant by name or alias, ignoring ASCII case.
pub fn find(name: &str) -> Result<&'static CrcParams> {
    ALL.iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                .map(|(_, params)| *params)
        })
        .ok_or_else(|| Error::UnknownVariant(name.to_string()))
}

/// Iterates over the cataloged variants of one degree.
pub fn by_degree(degree: Degree) -> impl Iterator<Item = &'static CrcParams> {
    ALL.iter().filter(move |p| p.degree == degree)
}
