// pn532-mifare/src/protocol/responses/mifare.rs

use crate::protocol::parser;
use crate::{Error, Result};

/// Decode an InDataExchange response body.
/// Layout: tfi(1) + echo(1) + status(1) + data(n)
///
/// A non-zero status is the chip's NACK for the wrapped MIFARE operation
/// (failed authentication, unreadable block, refused write).
pub fn decode_data_exchange(data: &[u8]) -> Result<Vec<u8>> {
    let status = parser::byte_at(data, 2)?;
    if status != 0x00 {
        return Err(Error::Status { code: status });
    }
    Ok(data[3..].to_vec())
}
