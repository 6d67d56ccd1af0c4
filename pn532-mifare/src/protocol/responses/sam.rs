// pn532-mifare/src/protocol/responses/sam.rs

use crate::protocol::parser;
use crate::Result;

/// Decode a SAMConfiguration response body.
/// Layout: tfi(1) + echo(1); the ack carries no further data.
pub fn decode_sam_configuration(data: &[u8]) -> Result<()> {
    parser::ensure_len(data, 2)?;
    Ok(())
}
