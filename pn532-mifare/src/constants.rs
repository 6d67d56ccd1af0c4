// pn532-mifare/src/constants.rs
//! Common protocol constants used across the crate

/// Wire frame preamble + start code: 0x00 0x00 0xFF
pub const FRAME_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Wire frame postamble: 0x00
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// Minimal wire frame length in bytes (preamble through postamble, empty payload)
pub const MIN_FRAME_LEN: usize = 7;

/// Maximum payload length for a normal (non-extended) frame
pub const MAX_PAYLOAD_LEN: usize = 255;

/// TFI: host->device prefix (D4) and device->host prefix (D5)
pub const TFI_HOST: u8 = 0xD4;
pub const TFI_DEVICE: u8 = 0xD5;

/// GetFirmwareVersion command code
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;

/// SAMConfiguration command code and its normal-mode parameters
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const SAM_MODE_NORMAL: u8 = 0x01;
pub const SAM_TIMEOUT_DEFAULT: u8 = 0x14;
pub const SAM_USE_IRQ: u8 = 0x01;

/// InListPassiveTarget command code and its parameters
pub const CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;
pub const INLIST_MAX_TARGETS: u8 = 0x01;
pub const BAUD_106K_TYPE_A: u8 = 0x00;

/// InDataExchange command code and the logical target number assigned by a
/// single-target InListPassiveTarget
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const TARGET_NUMBER: u8 = 0x01;

/// MIFARE Classic sub-operation codes carried inside InDataExchange
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const MIFARE_CMD_WRITE: u8 = 0xA0;

/// Factory default MIFARE Classic key
pub const DEFAULT_KEY: [u8; 6] = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

/// MIFARE Classic 1K geometry
pub const BLOCK_SIZE: usize = 16;
pub const BLOCKS_PER_SECTOR: u8 = 4;
pub const SECTOR_COUNT: u8 = 16;
pub const BLOCK_COUNT: u8 = 64;
