// pn532-mifare/src/card/operations/write.rs

use std::thread;

use crate::card::access::TrailerBlock;
use crate::card::value::ValueBlock;
use crate::constants::BLOCKS_PER_SECTOR;
use crate::device::{Device, Initialized};
use crate::protocol::MifareRequest;
use crate::types::{BlockAddress, BlockData, MifareKey, Sector};
use crate::utils::ms;
use crate::{Error, Result};

/// Pause between successive block writes within one sector.
const BLOCK_WRITE_DELAY_MS: u64 = 100;

/// Write one 16-byte block into an authenticated sector.
///
/// Trailer blocks are refused before anything reaches the wire unless
/// `allow_control_block` is set; a bad trailer write can lock the sector
/// for good, so the opt-in (and any human confirmation behind it) is the
/// caller's responsibility.
pub fn write_block(
    device: &mut Device<Initialized>,
    block: BlockAddress,
    data: &BlockData,
    allow_control_block: bool,
) -> Result<()> {
    if block.is_trailer() && !allow_control_block {
        return Err(Error::ControlBlockGuarded {
            block: block.value(),
        });
    }
    device.data_exchange(MifareRequest::Write {
        block,
        data: *data,
    })?;
    log::debug!("block {block}: 16 bytes written");
    Ok(())
}

/// Encode `value` as a complement-checked counter and write it.
pub fn write_value_block(
    device: &mut Device<Initialized>,
    block: BlockAddress,
    value: i32,
) -> Result<()> {
    log::debug!("block {block}: writing value {value}");
    write_block(device, block, &ValueBlock::new(value).encode(), false)
}

/// Write a sector's four blocks in ascending order, pacing between block
/// writes.
///
/// The manufacturer block (absolute block 0) is read-only and skipped;
/// the trailer goes through the same `allow_control_block` gate as
/// `write_block`, so without the opt-in the sector write fails when it
/// reaches position 3.
pub fn write_sector(
    device: &mut Device<Initialized>,
    sector: Sector,
    blocks: &[BlockData; BLOCKS_PER_SECTOR as usize],
    allow_control_block: bool,
) -> Result<()> {
    for position in 0..BLOCKS_PER_SECTOR {
        let block = sector.block(position)?;
        if block.is_manufacturer() {
            log::debug!("skipping read-only manufacturer block");
            continue;
        }
        write_block(
            device,
            block,
            &blocks[position as usize],
            allow_control_block,
        )?;
        if position + 1 < BLOCKS_PER_SECTOR {
            thread::sleep(ms(BLOCK_WRITE_DELAY_MS));
        }
    }
    Ok(())
}

/// Rewrite a sector's trailer with new keys and access bits.
///
/// Irreversible if the access bits are wrong; callers should gate this on
/// explicit confirmation.
pub fn change_sector_keys(
    device: &mut Device<Initialized>,
    sector: Sector,
    key_a: MifareKey,
    key_b: MifareKey,
    access_bits: [u8; 4],
) -> Result<()> {
    let trailer = TrailerBlock::new(key_a, access_bits, key_b);
    log::warn!(
        "rewriting trailer of sector {sector}: {}",
        trailer.to_block().to_hex()
    );
    write_block(device, sector.trailer_block(), &trailer.to_block(), true)
}
