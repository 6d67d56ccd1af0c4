// pn532-mifare/src/protocol/frame.rs

use crate::constants::{FRAME_POSTAMBLE, FRAME_PREAMBLE, MAX_PAYLOAD_LEN, TFI_DEVICE, TFI_HOST};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// Wire frame helper. Provides encode/extract of the chip's envelope.
/// Format: [Preamble(3)] [Len(1)] [LCS(1)] [TFI+Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00 0x00 0xFF
/// Postamble: 0x00
pub struct Frame;

impl Frame {
    /// Encode a payload (TFI + opcode + parameters) into a full wire frame.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(3 + 1 + 1 + payload.len() + 1 + 1);
        out.extend_from_slice(&FRAME_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Scan a raw response buffer and return the first valid payload.
    ///
    /// Serial reads arrive with leading noise, and the chip prepends an ACK
    /// frame to most responses. Candidates are anchored on a `00 FF` byte
    /// pair; one is accepted when its length checksum holds, the buffer still
    /// holds `len` payload bytes plus the data checksum, the first payload
    /// byte is a TFI (0xD4/0xD5), and the data checksum verifies. A failed
    /// candidate is skipped, not fatal, so the scan walks past garbage and
    /// ACKs to the real frame.
    pub fn extract(buffer: &[u8]) -> Result<Vec<u8>> {
        for i in 0..buffer.len().saturating_sub(4) {
            if buffer[i] != 0x00 || buffer[i + 1] != 0xFF {
                continue;
            }
            let len = buffer[i + 2];
            if len.wrapping_add(buffer[i + 3]) != 0 {
                continue;
            }
            let payload_start = i + 4;
            let payload_end = payload_start + len as usize;
            // need the DCS byte right after the payload
            if payload_end >= buffer.len() {
                continue;
            }
            // zero-length candidates (ACKs) fail here: i+4 is their DCS
            if buffer[payload_start] != TFI_HOST && buffer[payload_start] != TFI_DEVICE {
                continue;
            }
            let payload = &buffer[payload_start..payload_end];
            if buffer[payload_end] != dcs(payload) {
                continue;
            }
            return Ok(payload.to_vec());
        }
        Err(Error::FrameNotFound {
            scanned: buffer.len(),
        })
    }
}
