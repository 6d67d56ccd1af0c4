// pn532-mifare/src/card/value.rs

//! Signed counter encoding for balance-style data blocks.

use crate::error::{Error, Result};
use crate::types::BlockData;

/// A signed 32-bit counter stored with its bitwise complement.
///
/// Layout within the 16-byte block: little-endian value, complement of
/// those four bytes, address word 0x0000 with its complement 0xFFFF, then
/// four zero bytes. Decoding verifies both complements so a block of
/// arbitrary data is not misread as a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueBlock(i32);

impl ValueBlock {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Lay the counter out as a writable block.
    pub fn encode(&self) -> BlockData {
        let mut bytes = [0u8; 16];
        let value = self.0.to_le_bytes();
        bytes[0..4].copy_from_slice(&value);
        for (index, byte) in value.iter().enumerate() {
            bytes[4 + index] = !byte;
        }
        bytes[8] = 0x00;
        bytes[9] = 0x00;
        bytes[10] = 0xFF;
        bytes[11] = 0xFF;
        BlockData::from_bytes(bytes)
    }

    /// Parse a block read back from a card, checking the complements.
    pub fn from_block(block: &BlockData) -> Result<Self> {
        let bytes = block.as_bytes();
        for index in 0..4 {
            if bytes[4 + index] != !bytes[index] {
                return Err(Error::NotAValueBlock(format!(
                    "complement mismatch at byte {}",
                    4 + index
                )));
            }
        }
        if bytes[10] != !bytes[8] || bytes[11] != !bytes[9] {
            return Err(Error::NotAValueBlock(
                "address complement mismatch".to_string(),
            ));
        }
        let mut value = [0u8; 4];
        value.copy_from_slice(&bytes[0..4]);
        Ok(Self(i32::from_le_bytes(value)))
    }
}

impl From<i32> for ValueBlock {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}
