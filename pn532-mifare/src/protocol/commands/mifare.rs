// pn532-mifare/src/protocol/commands/mifare.rs

use crate::constants::{CMD_IN_DATA_EXCHANGE, MIFARE_CMD_READ, MIFARE_CMD_WRITE, TFI_HOST};
use crate::types::{BlockAddress, BlockData, KeyType, MifareKey, Uid};

/// MIFARE Classic sub-operation carried inside an InDataExchange command.
#[derive(Debug, Clone)]
pub enum MifareRequest {
    /// Authenticate one sector via its block address; the chip needs the
    /// key and the card's UID to run the crypto1 handshake.
    Authenticate {
        key_type: KeyType,
        block: BlockAddress,
        key: MifareKey,
        uid: Uid,
    },
    Read {
        block: BlockAddress,
    },
    Write {
        block: BlockAddress,
        data: BlockData,
    },
}

impl MifareRequest {
    /// The sub-operation code placed after the target number.
    pub fn sub_op(&self) -> u8 {
        match self {
            Self::Authenticate { key_type, .. } => key_type.code(),
            Self::Read { .. } => MIFARE_CMD_READ,
            Self::Write { .. } => MIFARE_CMD_WRITE,
        }
    }
}

/// Encode an InDataExchange command payload (opcode 0x40) wrapping a MIFARE
/// sub-operation for the given logical target.
pub fn encode_data_exchange(target: u8, request: &MifareRequest) -> Vec<u8> {
    let mut buf = vec![TFI_HOST, CMD_IN_DATA_EXCHANGE, target, request.sub_op()];
    match request {
        MifareRequest::Authenticate {
            block, key, uid, ..
        } => {
            buf.push(block.value());
            buf.extend_from_slice(key.as_bytes());
            buf.extend_from_slice(uid.as_bytes());
        }
        MifareRequest::Read { block } => {
            buf.push(block.value());
        }
        MifareRequest::Write { block, data } => {
            buf.push(block.value());
            buf.extend_from_slice(data.as_bytes());
        }
    }
    buf
}
