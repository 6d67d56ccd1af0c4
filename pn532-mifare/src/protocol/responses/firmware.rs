// pn532-mifare/src/protocol/responses/firmware.rs

use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode a GetFirmwareVersion response body.
/// Layout: tfi(1) + echo(1) + ic(1) + ver(1) + rev(1) + support(1)
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    parser::ensure_len(data, 6)?;
    Ok(FirmwareVersion {
        ic: data[2],
        version: data[3],
        revision: data[4],
        support: data[5],
    })
}
