// pn532-mifare/src/protocol/parser.rs

use crate::constants::TFI_DEVICE;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a big-endian u16 at given index, with bounds checking.
/// SENS_RES arrives most significant byte first.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_be_bytes([data[idx], data[idx + 1]]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Ensure the payload starts with the device-to-host TFI (0xD5).
pub fn expect_device_direction(data: &[u8]) -> Result<()> {
    let actual = byte_at(data, 0)?;
    if actual != TFI_DEVICE {
        return Err(Error::UnexpectedDirection { actual });
    }
    Ok(())
}

/// Ensure the opcode echo at payload index 1 equals `command + 1`.
pub fn expect_opcode_echo(data: &[u8], command: u8) -> Result<()> {
    let expected = command.wrapping_add(1);
    let actual = byte_at(data, 1)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}
