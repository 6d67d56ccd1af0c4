// pn532-mifare/src/protocol/commands/sam.rs

use crate::constants::{CMD_SAM_CONFIGURATION, TFI_HOST};

/// Encode a SAMConfiguration command payload (opcode 0x14).
///
/// `timeout` is in 50ms units (0x14 = 1 second); it only applies to virtual
/// card mode but the chip expects the byte regardless.
pub fn encode_sam_configuration(mode: u8, timeout: u8, use_irq: u8) -> Vec<u8> {
    vec![TFI_HOST, CMD_SAM_CONFIGURATION, mode, timeout, use_irq]
}
