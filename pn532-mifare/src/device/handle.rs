// pn532-mifare/src/device/handle.rs

use std::marker::PhantomData;
use std::thread;

use crate::device::config;
use crate::protocol::codec;
use crate::protocol::{Command, MifareRequest, Response};
use crate::transport::Transport;
use crate::types::{FirmwareVersion, PassiveTarget};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Reader handle that enforces the SAM handshake at compile time: commands
/// are only reachable on `Device<Initialized>`, which `initialize` produces
/// after the chip acknowledges normal mode.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Wrap an existing Transport instance. This is the entry point for
    /// tests, which hand in a MockTransport.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            _state: PhantomData,
        }
    }

    /// Open a serial port and wait out the module's power-up settle time.
    #[cfg(feature = "serial")]
    pub fn open_serial(path: &str) -> Result<Self> {
        let transport = crate::transport::SerialTransport::open(path)?;
        let device = Self::new_with_transport(Box::new(transport));
        thread::sleep(crate::utils::ms(config::POWER_UP_DELAY_MS));
        Ok(device)
    }

    /// Put the SAM into normal mode. Returns an initialized Device once the
    /// chip acknowledges.
    pub fn initialize(mut self) -> Result<Device<Initialized>> {
        let command = Command::sam_normal_mode();
        match exchange(self.transport.as_mut(), &command)? {
            Response::SamConfigured => {}
            other => return Err(unexpected(&command, &other)),
        }
        log::debug!("SAM configured on {}", self.transport.name());
        Ok(Device {
            transport: self.transport,
            _state: PhantomData,
        })
    }
}

impl Device<Initialized> {
    /// Execute one command: frame, send, fixed wait, drain, decode.
    pub fn execute(&mut self, command: &Command) -> Result<Response> {
        exchange(self.transport.as_mut(), command)
    }

    /// Query the chip's firmware identity.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        let command = Command::GetFirmwareVersion;
        match self.execute(&command)? {
            Response::FirmwareVersion(version) => Ok(version),
            other => Err(unexpected(&command, &other)),
        }
    }

    /// One full detection pass over the retry schedule.
    ///
    /// A well-formed "zero targets" reply is a definitive absence and ends
    /// the pass early. Timeouts, decode noise, and sentinel UIDs burn one
    /// attempt each and report absence once the schedule is exhausted. Write
    /// failures are hard errors and propagate immediately.
    pub fn detect_target(&mut self) -> Result<Option<PassiveTarget>> {
        let command = Command::detect_type_a();
        let frame = codec::encode_command_frame(&command)?;

        for attempt in 0..config::DETECT_ATTEMPTS {
            log::trace!("> {}", bytes_to_hex_spaced(&frame));
            self.transport.send(&frame)?;
            thread::sleep(config::detect_wait(attempt));

            let outcome = self
                .transport
                .receive(config::RESPONSE_BUFFER_LEN)
                .and_then(|buffer| {
                    log::trace!("< {}", bytes_to_hex_spaced(&buffer));
                    codec::decode_response_buffer(command.opcode(), &buffer)
                });

            match outcome {
                Ok(Response::TargetList(target)) => return Ok(target),
                Ok(other) => return Err(unexpected(&command, &other)),
                Err(e) if is_soft_detect_error(&e) => {
                    log::debug!("detect attempt {} failed: {e}", attempt + 1);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(None)
    }

    /// Run one MIFARE sub-operation against the first logical target and
    /// return the status-checked data bytes.
    pub fn data_exchange(&mut self, request: MifareRequest) -> Result<Vec<u8>> {
        let command = Command::InDataExchange {
            target: crate::constants::TARGET_NUMBER,
            request,
        };
        match self.execute(&command)? {
            Response::DataExchange(data) => Ok(data),
            other => Err(unexpected(&command, &other)),
        }
    }

    /// Link name of the underlying transport, for log lines.
    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }
}

fn exchange(transport: &mut dyn Transport, command: &Command) -> Result<Response> {
    let frame = codec::encode_command_frame(command)?;
    log::trace!("> {}", bytes_to_hex_spaced(&frame));
    transport.send(&frame)?;
    thread::sleep(config::command_wait(command));
    let buffer = transport.receive(config::RESPONSE_BUFFER_LEN)?;
    log::trace!("< {}", bytes_to_hex_spaced(&buffer));
    codec::decode_response_buffer(command.opcode(), &buffer)
}

fn unexpected(command: &Command, response: &Response) -> Error {
    Error::UnexpectedResponse {
        expected: command.opcode().wrapping_add(1),
        actual: response.opcode(),
    }
}

/// Failures that consume a detection attempt instead of aborting the pass:
/// nothing on the wire, garbage on the wire, a mangled reply, or a sentinel
/// UID that marks a misread rather than a card.
fn is_soft_detect_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Timeout
            | Error::FrameNotFound { .. }
            | Error::InvalidLength { .. }
            | Error::UnexpectedDirection { .. }
            | Error::UnexpectedResponse { .. }
            | Error::InvalidUid(_)
    )
}
