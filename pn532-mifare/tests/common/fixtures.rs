// Shared sample card data for integration tests.

#![allow(dead_code)]

use pn532_mifare::types::{BlockData, MifareKey, Uid};

pub fn sample_uid_bytes() -> [u8; 4] {
    [0x1A, 0x2B, 0x3C, 0x4D]
}

pub fn sample_uid() -> Uid {
    Uid::try_from(&sample_uid_bytes()[..]).unwrap()
}

/// Non-default key programmed into sectors 1 and 2 of the vendor's cards.
pub fn special_key() -> MifareKey {
    MifareKey::from_bytes([0x11, 0x22, 0x33, 0x44, 0x66, 0x55])
}

/// Factory-fresh trailer: default keys, transport-configuration access bits.
pub fn factory_trailer() -> BlockData {
    let mut bytes = [0xFF; 16];
    bytes[6..10].copy_from_slice(&[0xFF, 0x07, 0x80, 0x69]);
    BlockData::from_bytes(bytes)
}

/// A data block holding `text` padded out with zeros.
pub fn text_block(text: &str) -> BlockData {
    let mut bytes = [0u8; 16];
    let len = text.len().min(16);
    bytes[..len].copy_from_slice(&text.as_bytes()[..len]);
    BlockData::from_bytes(bytes)
}
