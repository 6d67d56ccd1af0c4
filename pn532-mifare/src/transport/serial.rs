// pn532-mifare/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{Read, Write};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, StopBits};

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Serial link to a PN532 board behind a USB-UART bridge. Feature-gated
/// behind `--features serial` and requires the `serialport` crate.
pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
    name: String,
}

impl SerialTransport {
    /// Default line rate for PN532 HSU mode.
    pub const DEFAULT_BAUD: u32 = 115_200;

    /// Open a port ("/dev/ttyUSB0", "COM3", ...) at the default baud rate.
    pub fn open(path: &str) -> Result<Self> {
        Self::open_with_baud(path, Self::DEFAULT_BAUD)
    }

    /// Open a port at an explicit baud rate, 8N1, no flow control. DTR is
    /// asserted after open since common CH340/CP2102 breakouts hold the
    /// PN532 in reset until the line goes high.
    pub fn open_with_baud(path: &str, baud_rate: u32) -> Result<Self> {
        let mut port = serialport::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(read_timeout(1))
            .open()?;
        port.write_data_terminal_ready(true)?;
        log::debug!("opened serial port {path} at {baud_rate} baud");
        Ok(Self {
            port,
            name: path.to_string(),
        })
    }

}

/// Per-read deadline: a fixed floor plus a per-byte allowance, matching the
/// line time of a full buffer at 115200 baud with margin.
fn read_timeout(max_len: usize) -> Duration {
    Duration::from_millis(50 + 10 * max_len as u64)
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>> {
        self.port.set_timeout(read_timeout(max_len))?;
        let mut buffer = vec![0u8; max_len];
        match self.port.read(&mut buffer) {
            Ok(0) => Err(Error::Timeout),
            Ok(n) => {
                buffer.truncate(n);
                Ok(buffer)
            }
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Err(Error::Timeout),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
