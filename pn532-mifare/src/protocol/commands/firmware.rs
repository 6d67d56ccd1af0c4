// pn532-mifare/src/protocol/commands/firmware.rs

use crate::constants::{CMD_GET_FIRMWARE_VERSION, TFI_HOST};

/// Encode a GetFirmwareVersion command payload (opcode 0x02, no parameters).
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![TFI_HOST, CMD_GET_FIRMWARE_VERSION]
}
