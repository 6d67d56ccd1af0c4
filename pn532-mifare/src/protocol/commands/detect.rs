// pn532-mifare/src/protocol/commands/detect.rs

use crate::constants::{CMD_INLIST_PASSIVE_TARGET, TFI_HOST};

/// Encode an InListPassiveTarget command payload (opcode 0x4A).
///
/// `baud_rate` 0x00 selects 106 kbps ISO14443 Type A, the modulation MIFARE
/// Classic cards answer on.
pub fn encode_in_list_passive_target(max_targets: u8, baud_rate: u8) -> Vec<u8> {
    vec![TFI_HOST, CMD_INLIST_PASSIVE_TARGET, max_targets, baud_rate]
}
