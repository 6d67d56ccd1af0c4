// pn532-mifare/src/protocol/responses/detect.rs

use crate::protocol::parser;
use crate::types::{PassiveTarget, Uid};
use crate::Result;
use std::convert::TryFrom;

/// Decode an InListPassiveTarget response body.
/// Layout: tfi(1) + echo(1) + count(1) + target(1) + sens_res(2) + sel_res(1)
///         + uid_len(1) + uid(uid_len)
///
/// A zero target count is a normal "field empty" answer, not an error. A
/// sentinel UID (all 0x00 / all 0xFF) fails `Uid` construction; callers
/// treat that the same as no card.
pub fn decode_target_list(data: &[u8]) -> Result<Option<PassiveTarget>> {
    let count = parser::byte_at(data, 2)?;
    if count == 0 {
        return Ok(None);
    }

    let target = parser::byte_at(data, 3)?;
    let sens_res = parser::be_u16_at(data, 4)?;
    let sel_res = parser::byte_at(data, 6)?;
    let uid_len = parser::byte_at(data, 7)? as usize;
    let uid = Uid::try_from(parser::slice_at(data, 8, uid_len)?)?;

    Ok(Some(PassiveTarget {
        target,
        sens_res,
        sel_res,
        uid,
    }))
}
