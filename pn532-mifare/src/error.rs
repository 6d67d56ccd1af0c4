// pn532-mifare/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Byte-level transport failure (open, incomplete write, broken read).
    #[error("transport error: {0}")]
    Transport(String),

    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[cfg(feature = "serial")]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing arrived within the read window.
    #[error("operation timed out")]
    Timeout,

    /// The response buffer held no frame that passed both checksums.
    #[error("no valid frame in {scanned} response bytes")]
    FrameNotFound { scanned: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Decoded payload did not start with the device-to-host marker.
    #[error("unexpected direction byte: {actual:#04x}")]
    UnexpectedDirection { actual: u8 },

    /// Opcode echo mismatch (response code must be command code + 1).
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    /// Non-zero application status byte reported by the chip.
    #[error("device reported status {code:#04x}")]
    Status { code: u8 },

    /// Every candidate key for the sector was rejected.
    #[error("authentication failed for sector {sector}: {tried} candidate keys exhausted")]
    AuthenticationFailed { sector: u8, tried: usize },

    #[error("sector index out of range: {0}")]
    SectorOutOfRange(u8),

    #[error("block address out of range: {0}")]
    BlockOutOfRange(u8),

    #[error("invalid uid: {0}")]
    InvalidUid(String),

    #[error("invalid hex input: {0}")]
    InvalidHex(String),

    /// Trailer writes are refused unless the caller opts in.
    #[error("control block {block} write requires allow_control_block")]
    ControlBlockGuarded { block: u8 },

    #[error("not a value block: {0}")]
    NotAValueBlock(String),
}

pub type Result<T> = std::result::Result<T, Error>;
