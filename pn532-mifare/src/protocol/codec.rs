// pn532-mifare/src/protocol/codec.rs

use crate::Result;

use super::commands::Command;
use super::responses::Response;
use super::Frame;

/// Encode a Command into a full wire frame (with preamble/LCS/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    let payload = cmd.encode();
    Frame::encode(&payload)
}

/// Extract the first valid payload from a raw response buffer and parse the
/// contained response for the expected command opcode.
pub fn decode_response_buffer(expected_cmd: u8, buffer: &[u8]) -> Result<Response> {
    let payload = Frame::extract(buffer)?;
    Response::decode(expected_cmd, &payload)
}
