// pn532-mifare/src/types.rs

use crate::constants::{
    BLOCKS_PER_SECTOR, BLOCK_COUNT, BLOCK_SIZE, DEFAULT_KEY, MIFARE_CMD_AUTH_A, MIFARE_CMD_AUTH_B,
    SECTOR_COUNT,
};
use crate::Error;
use std::convert::TryFrom;

/// UID - Newtype Pattern (4..=10 bytes, as reported by the card)
///
/// All-0x00 and all-0xFF readings are sentinel garbage from the field and
/// are rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < 4 || bytes.len() > 10 {
            return Err(Error::InvalidUid(format!(
                "length {} outside 4..=10",
                bytes.len()
            )));
        }
        if bytes.iter().all(|&b| b == 0x00) {
            return Err(Error::InvalidUid("all bytes 0x00".to_string()));
        }
        if bytes.iter().all(|&b| b == 0xFF) {
            return Err(Error::InvalidUid("all bytes 0xFF".to_string()));
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// Sector index (0..=15 on a MIFARE Classic 1K)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "{}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sector(u8);

impl Sector {
    pub fn new(index: u8) -> crate::Result<Self> {
        if index >= SECTOR_COUNT {
            return Err(Error::SectorOutOfRange(index));
        }
        Ok(Self(index))
    }

    pub const fn index(&self) -> u8 {
        self.0
    }

    /// First absolute block of this sector.
    pub const fn first_block(&self) -> BlockAddress {
        BlockAddress(self.0 * BLOCKS_PER_SECTOR)
    }

    /// The sector's trailer (control) block.
    pub const fn trailer_block(&self) -> BlockAddress {
        BlockAddress(self.0 * BLOCKS_PER_SECTOR + 3)
    }

    /// Absolute block at `position` (0..=3) within this sector.
    pub fn block(&self, position: u8) -> crate::Result<BlockAddress> {
        if position >= BLOCKS_PER_SECTOR {
            return Err(Error::BlockOutOfRange(position));
        }
        Ok(BlockAddress(self.0 * BLOCKS_PER_SECTOR + position))
    }

    /// All sectors of a 1K card, in ascending order.
    pub fn all() -> impl Iterator<Item = Sector> {
        (0..SECTOR_COUNT).map(Sector)
    }
}

impl TryFrom<u8> for Sector {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Sector::new(index)
    }
}

/// Absolute block address (0..=63 on a MIFARE Classic 1K)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "{}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockAddress(u8);

impl BlockAddress {
    pub fn new(addr: u8) -> crate::Result<Self> {
        if addr >= BLOCK_COUNT {
            return Err(Error::BlockOutOfRange(addr));
        }
        Ok(Self(addr))
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    pub const fn sector(&self) -> Sector {
        Sector(self.0 / BLOCKS_PER_SECTOR)
    }

    pub const fn position(&self) -> u8 {
        self.0 % BLOCKS_PER_SECTOR
    }

    /// Trailer blocks hold keys and access bits and are guarded on write.
    pub const fn is_trailer(&self) -> bool {
        self.position() == 3
    }

    /// Block 0 is the factory-programmed manufacturer block.
    pub const fn is_manufacturer(&self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for BlockAddress {
    type Error = Error;

    fn try_from(addr: u8) -> Result<Self, Self::Error> {
        BlockAddress::new(addr)
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; BLOCK_SIZE]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn zeroed() -> Self {
        Self([0u8; BLOCK_SIZE])
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != BLOCK_SIZE {
            return Err(Error::InvalidLength {
                expected: BLOCK_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BLOCK_SIZE];
        arr.copy_from_slice(&bytes[..BLOCK_SIZE]);
        Ok(Self(arr))
    }
}

/// MIFARE Classic key (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Factory default key, FF FF FF FF FF FF.
    pub const DEFAULT: Self = Self(DEFAULT_KEY);

    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Parses operator-entered hex, spaced ("11 22 33 44 66 55") or not.
    pub fn from_hex(s: &str) -> crate::Result<Self> {
        let bytes = crate::utils::parse_hex(s)?;
        Self::try_from(&bytes[..])
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for MifareKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 6 {
            return Err(Error::InvalidLength {
                expected: 6,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 6];
        arr.copy_from_slice(&bytes[..6]);
        Ok(Self(arr))
    }
}

/// Key slot selector for MIFARE Classic authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    #[display(fmt = "A")]
    A,
    #[display(fmt = "B")]
    B,
}

impl KeyType {
    /// InDataExchange sub-operation code for this key slot.
    pub const fn code(&self) -> u8 {
        match self {
            KeyType::A => MIFARE_CMD_AUTH_A,
            KeyType::B => MIFARE_CMD_AUTH_B,
        }
    }
}

/// Chip identification returned by GetFirmwareVersion
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display(fmt = "ic={:#04x} v{}.{}", ic, version, revision)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

impl FirmwareVersion {
    pub fn is_pn532(&self) -> bool {
        self.ic == 0x32
    }
}

/// One target reported by InListPassiveTarget
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveTarget {
    pub target: u8,
    pub sens_res: u16,
    pub sel_res: u8,
    pub uid: Uid,
}
