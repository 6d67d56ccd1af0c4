// pn532-mifare/src/protocol/commands/mod.rs

pub mod detect;
pub mod firmware;
pub mod mifare;
pub mod sam;

pub use detect::encode_in_list_passive_target;
pub use firmware::encode_get_firmware_version;
pub use mifare::{encode_data_exchange, MifareRequest};
pub use sam::encode_sam_configuration;

use crate::constants::{
    BAUD_106K_TYPE_A, CMD_GET_FIRMWARE_VERSION, CMD_INLIST_PASSIVE_TARGET, CMD_IN_DATA_EXCHANGE,
    CMD_SAM_CONFIGURATION, INLIST_MAX_TARGETS, SAM_MODE_NORMAL, SAM_TIMEOUT_DEFAULT, SAM_USE_IRQ,
};

/// High-level Command enum. New commands get their per-command encoder in
/// `protocol::commands::<name>.rs` and a variant here.
#[derive(Debug, Clone)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration {
        mode: u8,
        timeout: u8,
        use_irq: u8,
    },
    InListPassiveTarget {
        max_targets: u8,
        baud_rate: u8,
    },
    InDataExchange {
        target: u8,
        request: MifareRequest,
    },
}

impl Command {
    /// SAMConfiguration with the normal-mode parameter set.
    pub fn sam_normal_mode() -> Self {
        Self::SamConfiguration {
            mode: SAM_MODE_NORMAL,
            timeout: SAM_TIMEOUT_DEFAULT,
            use_irq: SAM_USE_IRQ,
        }
    }

    /// Single-target 106 kbps Type A detection.
    pub fn detect_type_a() -> Self {
        Self::InListPassiveTarget {
            max_targets: INLIST_MAX_TARGETS,
            baud_rate: BAUD_106K_TYPE_A,
        }
    }

    /// Return the command opcode.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => CMD_INLIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Encode the command into the raw payload (TFI + opcode + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => encode_in_list_passive_target(*max_targets, *baud_rate),
            Self::InDataExchange { target, request } => encode_data_exchange(*target, request),
        }
    }
}
