// pn532-mifare/src/prelude.rs

pub use crate::card::{Card, CardDump, KeyStore, KeyTrialPolicy, PresenceEvent, PresenceMonitor};
pub use crate::device::Device;
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::{Command, MifareRequest, Response};
pub use crate::{
    BlockAddress, BlockData, Error, FirmwareVersion, KeyType, MifareKey, PassiveTarget, Result,
    Sector, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
