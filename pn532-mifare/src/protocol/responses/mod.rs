// pn532-mifare/src/protocol/responses/mod.rs

pub mod detect;
pub mod firmware;
pub mod mifare;
pub mod sam;

pub use detect::decode_target_list;
pub use firmware::decode_firmware_version;
pub use mifare::decode_data_exchange;
pub use sam::decode_sam_configuration;

use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_INLIST_PASSIVE_TARGET, CMD_IN_DATA_EXCHANGE,
    CMD_SAM_CONFIGURATION,
};
use crate::protocol::parser;
use crate::types::{FirmwareVersion, PassiveTarget};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone)]
pub enum Response {
    FirmwareVersion(FirmwareVersion),
    SamConfigured,
    /// `None` when the chip reports zero targets in the field.
    TargetList(Option<PassiveTarget>),
    /// Status-checked operation data (empty for write acks).
    DataExchange(Vec<u8>),
}

impl Response {
    /// Decode a response payload (TFI + opcode echo + body) for the given
    /// expected command opcode.
    ///
    /// The direction byte and the opcode echo are enforced centrally so the
    /// per-command decoders only deal with their own body layout.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        parser::expect_device_direction(data)?;
        parser::expect_opcode_echo(data, expected_cmd)?;

        match expected_cmd {
            CMD_GET_FIRMWARE_VERSION => Ok(Self::FirmwareVersion(
                firmware::decode_firmware_version(data)?,
            )),
            CMD_SAM_CONFIGURATION => {
                sam::decode_sam_configuration(data)?;
                Ok(Self::SamConfigured)
            }
            CMD_INLIST_PASSIVE_TARGET => Ok(Self::TargetList(detect::decode_target_list(data)?)),
            CMD_IN_DATA_EXCHANGE => Ok(Self::DataExchange(mifare::decode_data_exchange(data)?)),
            _ => {
                let actual = data.first().copied().unwrap_or(0);
                Err(crate::Error::UnexpectedResponse {
                    expected: expected_cmd.wrapping_add(1),
                    actual,
                })
            }
        }
    }

    /// Opcode this response carries on the wire (command opcode + 1).
    pub fn opcode(&self) -> u8 {
        match self {
            Self::FirmwareVersion(_) => CMD_GET_FIRMWARE_VERSION + 1,
            Self::SamConfigured => CMD_SAM_CONFIGURATION + 1,
            Self::TargetList(_) => CMD_INLIST_PASSIVE_TARGET + 1,
            Self::DataExchange(_) => CMD_IN_DATA_EXCHANGE + 1,
        }
    }
}
