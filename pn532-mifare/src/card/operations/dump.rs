// pn532-mifare/src/card/operations/dump.rs

//! Whole-card dump driven by a key-trial policy.

use std::thread;

use crate::card::auth::{authenticate, Authentication};
use crate::card::keys::{KeyStore, KeyTrialPolicy};
use crate::card::operations::read::read_sector;
use crate::constants::{BLOCKS_PER_SECTOR, SECTOR_COUNT};
use crate::device::{Device, Initialized};
use crate::types::{BlockData, Sector, Uid};
use crate::utils::ms;
use crate::Result;

/// Pause between sectors during a dump.
const SECTOR_DELAY_MS: u64 = 100;

/// Outcome for one sector: the candidate that opened it plus its four
/// blocks, or the error that stopped it.
#[derive(Debug)]
pub struct SectorDump {
    pub sector: Sector,
    pub outcome: Result<(Authentication, [BlockData; BLOCKS_PER_SECTOR as usize])>,
}

/// One full pass over all sixteen sectors of a 1K card.
#[derive(Debug)]
pub struct CardDump {
    pub uid: Uid,
    pub sectors: Vec<SectorDump>,
}

impl CardDump {
    /// Sectors that authenticated and read cleanly.
    pub fn readable_sectors(&self) -> usize {
        self.sectors.iter().filter(|s| s.outcome.is_ok()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.readable_sectors() == self.sectors.len()
    }
}

/// Read every sector the policy's keys can open.
///
/// The policy is materialized into a working key store first; the session
/// store is never mutated. Each sector authenticates through the key-trial
/// loop and then reads its four blocks. A failed sector is recorded and
/// the dump moves on, so the pass itself never fails. Sectors are paced
/// 100ms apart to give the chip time between authentications.
pub fn read_card(
    device: &mut Device<Initialized>,
    store: &KeyStore,
    uid: &Uid,
    policy: &KeyTrialPolicy,
) -> CardDump {
    let mut working = policy.materialize(store);
    let mut sectors = Vec::with_capacity(SECTOR_COUNT as usize);

    for sector in Sector::all() {
        let outcome = match authenticate(device, &mut working, uid, sector) {
            Ok(auth) => read_sector(device, sector).map(|blocks| (auth, blocks)),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            log::warn!("sector {sector} unreadable: {e}");
        }
        sectors.push(SectorDump { sector, outcome });
        if sector.index() + 1 < SECTOR_COUNT {
            thread::sleep(ms(SECTOR_DELAY_MS));
        }
    }

    let dump = CardDump {
        uid: uid.clone(),
        sectors,
    };
    log::info!(
        "card {}: {}/{} sectors readable",
        dump.uid.to_hex(),
        dump.readable_sectors(),
        dump.sectors.len()
    );
    dump
}
