// pn532-mifare/src/card/auth.rs

//! Key-trial authentication for one sector.

use crate::card::keys::KeyStore;
use crate::device::{Device, Initialized};
use crate::protocol::MifareRequest;
use crate::types::{KeyType, MifareKey, Sector, Uid};
use crate::{Error, Result};

/// The candidate that opened a sector.
///
/// Valid only until the next authentication against a different sector; the
/// chip holds a single authenticated sector at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authentication {
    pub sector: Sector,
    pub key_type: KeyType,
    pub key: MifareKey,
}

/// Try `sector`'s candidates strictly in insertion order until the chip
/// accepts one.
///
/// An empty trial list is first populated with the factory default pair.
/// Any failure of a single trial, whether a non-zero status, a timeout, or
/// decode noise, moves on to the next candidate; only exhaustion reports
/// `AuthenticationFailed`, carrying how many keys were tried.
pub fn authenticate(
    device: &mut Device<Initialized>,
    store: &mut KeyStore,
    uid: &Uid,
    sector: Sector,
) -> Result<Authentication> {
    if store.sector_keys(sector).is_empty() {
        log::debug!("sector {sector}: no keys configured, falling back to default pair");
        store.add_default_keys(sector);
    }

    let candidates = store.sector_keys(sector).to_vec();
    let tried = candidates.len();

    for (index, candidate) in candidates.into_iter().enumerate() {
        let request = MifareRequest::Authenticate {
            key_type: candidate.key_type,
            block: sector.first_block(),
            key: candidate.key,
            uid: uid.clone(),
        };
        match device.data_exchange(request) {
            Ok(_) => {
                log::debug!(
                    "sector {sector}: key {} (candidate {}/{tried}) accepted",
                    candidate.key_type,
                    index + 1
                );
                return Ok(Authentication {
                    sector,
                    key_type: candidate.key_type,
                    key: candidate.key,
                });
            }
            Err(e) => {
                log::debug!(
                    "sector {sector}: key {} (candidate {}/{tried}) rejected: {e}",
                    candidate.key_type,
                    index + 1
                );
            }
        }
    }

    Err(Error::AuthenticationFailed {
        sector: sector.index(),
        tried,
    })
}
