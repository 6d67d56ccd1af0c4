// pn532-mifare/src/card/keys.rs

//! Per-sector candidate keys for sector authentication.

use crate::constants::SECTOR_COUNT;
use crate::types::{KeyType, MifareKey, Sector};

/// One (type, key) pair. Position in a sector's list is trial order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyCandidate {
    pub key_type: KeyType,
    pub key: MifareKey,
}

/// Ordered candidate keys for each of the sixteen sectors.
///
/// A store starts empty and is mutated only through `add_key`, `clear`, and
/// `clear_sector`; sector and key validity are enforced by the `Sector` and
/// `MifareKey` types at construction. Each session owns its store.
#[derive(Debug, Clone, Default)]
pub struct KeyStore {
    sectors: [Vec<KeyCandidate>; SECTOR_COUNT as usize],
}

impl KeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate to `sector`'s trial list.
    pub fn add_key(&mut self, sector: Sector, key_type: KeyType, key: MifareKey) {
        self.sectors[sector.index() as usize].push(KeyCandidate { key_type, key });
    }

    /// Append the factory default key to `sector`, type A then type B.
    pub fn add_default_keys(&mut self, sector: Sector) {
        self.add_key(sector, KeyType::A, MifareKey::DEFAULT);
        self.add_key(sector, KeyType::B, MifareKey::DEFAULT);
    }

    /// Drop every candidate from every sector.
    pub fn clear(&mut self) {
        for list in &mut self.sectors {
            list.clear();
        }
    }

    /// Drop the candidates of one sector.
    pub fn clear_sector(&mut self, sector: Sector) {
        self.sectors[sector.index() as usize].clear();
    }

    /// Candidates for `sector`, in trial order.
    pub fn sector_keys(&self, sector: Sector) -> &[KeyCandidate] {
        &self.sectors[sector.index() as usize]
    }

    /// True when no sector has any candidate.
    pub fn is_empty(&self) -> bool {
        self.sectors.iter().all(Vec::is_empty)
    }
}

/// How a bulk read builds the trial lists it authenticates with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyTrialPolicy {
    /// Factory default key only: every sector starts empty and falls back
    /// to the default pair on first use.
    DefaultOnly,
    /// Use the session's store as configured.
    FromStore,
    /// Default pair everywhere except the named sectors, which trial the
    /// override key exclusively (both types).
    OverrideSectors {
        key: MifareKey,
        sectors: Vec<Sector>,
    },
}

impl KeyTrialPolicy {
    /// Build the working store this policy describes. The session store is
    /// only consulted for `FromStore` and is never mutated.
    pub fn materialize(&self, session: &KeyStore) -> KeyStore {
        match self {
            Self::DefaultOnly => KeyStore::new(),
            Self::FromStore => session.clone(),
            Self::OverrideSectors { key, sectors } => {
                let mut store = KeyStore::new();
                for sector in Sector::all() {
                    store.add_default_keys(sector);
                }
                for &sector in sectors {
                    store.clear_sector(sector);
                    store.add_key(sector, KeyType::A, *key);
                    store.add_key(sector, KeyType::B, *key);
                }
                store
            }
        }
    }
}
