// pn532-mifare/src/device/config.rs

//! Channel timing profile.
//!
//! The PN532 gives no readiness signal over a plain UART link, so the host
//! sleeps a fixed, command-dependent interval between write and read. Every
//! suspension point in the crate goes through a constant defined here or
//! through the pacing constants next to the bulk card operations.

use std::time::Duration;

use crate::protocol::{Command, MifareRequest};
use crate::utils::ms;

/// Bytes drained from the link after every command.
pub const RESPONSE_BUFFER_LEN: usize = 256;

/// Settle time after opening the link, before the first command.
pub const POWER_UP_DELAY_MS: u64 = 500;

/// Wait before reading the GetFirmwareVersion response.
pub const FIRMWARE_WAIT_MS: u64 = 200;

/// Wait before reading the SAMConfiguration response.
pub const SAM_WAIT_MS: u64 = 100;

/// Detection schedule: attempt count and the base/step of the per-attempt
/// wait (100ms, 150ms, 200ms).
pub const DETECT_ATTEMPTS: usize = 3;
pub const DETECT_BASE_WAIT_MS: u64 = 100;
pub const DETECT_STEP_MS: u64 = 50;

/// Waits for the MIFARE sub-operations carried by InDataExchange.
pub const AUTH_WAIT_MS: u64 = 100;
pub const READ_WAIT_MS: u64 = 100;
pub const WRITE_WAIT_MS: u64 = 200;

/// Fixed wait between sending `command` and draining its response.
pub fn command_wait(command: &Command) -> Duration {
    let millis = match command {
        Command::GetFirmwareVersion => FIRMWARE_WAIT_MS,
        Command::SamConfiguration { .. } => SAM_WAIT_MS,
        Command::InListPassiveTarget { .. } => DETECT_BASE_WAIT_MS,
        Command::InDataExchange { request, .. } => match request {
            MifareRequest::Authenticate { .. } => AUTH_WAIT_MS,
            MifareRequest::Read { .. } => READ_WAIT_MS,
            MifareRequest::Write { .. } => WRITE_WAIT_MS,
        },
    };
    ms(millis)
}

/// Wait for detection attempt `attempt`, zero-based.
pub fn detect_wait(attempt: usize) -> Duration {
    ms(DETECT_BASE_WAIT_MS + DETECT_STEP_MS * attempt as u64)
}
