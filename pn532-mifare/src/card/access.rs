// pn532-mifare/src/card/access.rs

//! Trailer-block layout and access-bit arithmetic.

use crate::types::{BlockData, MifareKey};

/// Compute the 4-byte access field from per-block condition nibbles.
///
/// `b0..b2` carry the three C1/C2/C3 condition bits for data blocks 0-2,
/// `b3` the trailer's own conditions. The fourth byte is the reserved
/// general-purpose byte and is always emitted as 0x00; callers that need to
/// preserve a card's existing value assemble the field themselves.
pub fn calculate_access_bits(b0: u8, b1: u8, b2: u8, _b3: u8) -> [u8; 4] {
    [
        (!b2 & 0x0F) | ((!b1 & 0x0F) << 4),
        (!b1 & 0xF0) | ((!b0 & 0x0F) << 4) | (b2 & 0x0F),
        (b0 & 0xF0) | (b1 & 0x0F),
        0x00,
    ]
}

/// Decoded sector trailer: Key A, the four access bytes, Key B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailerBlock {
    pub key_a: MifareKey,
    pub access_bits: [u8; 4],
    pub key_b: MifareKey,
}

impl TrailerBlock {
    pub fn new(key_a: MifareKey, access_bits: [u8; 4], key_b: MifareKey) -> Self {
        Self {
            key_a,
            access_bits,
            key_b,
        }
    }

    /// Reassemble the 16-byte wire layout: Key A, access bytes, Key B.
    pub fn to_block(&self) -> BlockData {
        let mut bytes = [0u8; 16];
        bytes[0..6].copy_from_slice(self.key_a.as_bytes());
        bytes[6..10].copy_from_slice(&self.access_bits);
        bytes[10..16].copy_from_slice(self.key_b.as_bytes());
        BlockData::from_bytes(bytes)
    }

    /// Split a raw trailer read into its fields.
    ///
    /// A real card reports the Key A bytes as zeros unless the access
    /// conditions grant key-read permission; the split itself cannot fail.
    pub fn parse(block: &BlockData) -> Self {
        let bytes = block.as_bytes();
        let mut key_a = [0u8; 6];
        key_a.copy_from_slice(&bytes[0..6]);
        let mut access_bits = [0u8; 4];
        access_bits.copy_from_slice(&bytes[6..10]);
        let mut key_b = [0u8; 6];
        key_b.copy_from_slice(&bytes[10..16]);
        Self {
            key_a: MifareKey::from_bytes(key_a),
            access_bits,
            key_b: MifareKey::from_bytes(key_b),
        }
    }
}
