// pn532-mifare/src/card/operations/read.rs

use std::thread;

use crate::constants::{BLOCKS_PER_SECTOR, BLOCK_SIZE};
use crate::device::{Device, Initialized};
use crate::protocol::MifareRequest;
use crate::types::{BlockAddress, BlockData, Sector};
use crate::utils::ms;
use crate::{Error, Result};

/// Pause between successive block reads within one sector.
const BLOCK_READ_DELAY_MS: u64 = 50;

/// Read one 16-byte block. The sector holding it must already be
/// authenticated.
pub fn read_block(device: &mut Device<Initialized>, block: BlockAddress) -> Result<BlockData> {
    let data = device.data_exchange(MifareRequest::Read { block })?;
    if data.len() < BLOCK_SIZE {
        return Err(Error::InvalidLength {
            expected: BLOCK_SIZE,
            actual: data.len(),
        });
    }
    let block_data = BlockData::try_from(&data[..BLOCK_SIZE])?;
    log::trace!("block {block}: {}", block_data.to_hex());
    Ok(block_data)
}

/// Read all four blocks of a sector in ascending order, pacing between
/// block reads so the chip keeps up. Fails on the first unreadable block.
pub fn read_sector(
    device: &mut Device<Initialized>,
    sector: Sector,
) -> Result<[BlockData; BLOCKS_PER_SECTOR as usize]> {
    let mut blocks = [BlockData::zeroed(); BLOCKS_PER_SECTOR as usize];
    for position in 0..BLOCKS_PER_SECTOR {
        blocks[position as usize] = read_block(device, sector.block(position)?)?;
        if position + 1 < BLOCKS_PER_SECTOR {
            thread::sleep(ms(BLOCK_READ_DELAY_MS));
        }
    }
    Ok(blocks)
}
