// pn532-mifare/src/card/mod.rs

use crate::constants::BLOCKS_PER_SECTOR;
use crate::device::{Device, Initialized};
use crate::types::{BlockAddress, BlockData, MifareKey, PassiveTarget, Sector, Uid};
use crate::Result;

pub mod access;
pub mod auth;
pub mod keys;
pub mod operations;
pub mod presence;
pub mod value;

pub use access::{calculate_access_bits, TrailerBlock};
pub use auth::{authenticate, Authentication};
pub use keys::{KeyCandidate, KeyStore, KeyTrialPolicy};
pub use operations::{read_card, CardDump, SectorDump};
pub use presence::{PresenceEvent, PresenceMonitor};
pub use value::ValueBlock;

/// A detected card, identified by its UID.
///
/// The methods delegate into `operations` with this card's UID filled in;
/// they assume the card is still in the field. Sector state (which sector
/// is authenticated) lives in the chip, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    uid: Uid,
}

impl Card {
    pub fn new(uid: Uid) -> Self {
        Self { uid }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Open `sector` with the store's candidates for it.
    pub fn authenticate(
        &self,
        device: &mut Device<Initialized>,
        store: &mut KeyStore,
        sector: Sector,
    ) -> Result<Authentication> {
        auth::authenticate(device, store, &self.uid, sector)
    }

    pub fn read_block(
        &self,
        device: &mut Device<Initialized>,
        block: BlockAddress,
    ) -> Result<BlockData> {
        operations::read_block(device, block)
    }

    pub fn read_sector(
        &self,
        device: &mut Device<Initialized>,
        sector: Sector,
    ) -> Result<[BlockData; BLOCKS_PER_SECTOR as usize]> {
        operations::read_sector(device, sector)
    }

    pub fn write_block(
        &self,
        device: &mut Device<Initialized>,
        block: BlockAddress,
        data: &BlockData,
        allow_control_block: bool,
    ) -> Result<()> {
        operations::write_block(device, block, data, allow_control_block)
    }

    pub fn write_value_block(
        &self,
        device: &mut Device<Initialized>,
        block: BlockAddress,
        value: i32,
    ) -> Result<()> {
        operations::write_value_block(device, block, value)
    }

    pub fn write_sector(
        &self,
        device: &mut Device<Initialized>,
        sector: Sector,
        blocks: &[BlockData; BLOCKS_PER_SECTOR as usize],
        allow_control_block: bool,
    ) -> Result<()> {
        operations::write_sector(device, sector, blocks, allow_control_block)
    }

    /// Rewrite a sector trailer. Irreversible if the access bits are wrong.
    pub fn change_sector_keys(
        &self,
        device: &mut Device<Initialized>,
        sector: Sector,
        key_a: MifareKey,
        key_b: MifareKey,
        access_bits: [u8; 4],
    ) -> Result<()> {
        operations::change_sector_keys(device, sector, key_a, key_b, access_bits)
    }

    /// Dump every sector the policy's keys can open.
    pub fn dump(
        &self,
        device: &mut Device<Initialized>,
        store: &KeyStore,
        policy: &KeyTrialPolicy,
    ) -> CardDump {
        operations::read_card(device, store, &self.uid, policy)
    }
}

impl From<PassiveTarget> for Card {
    fn from(target: PassiveTarget) -> Self {
        Self::new(target.uid)
    }
}
