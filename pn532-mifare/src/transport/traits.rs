// pn532-mifare/src/transport/traits.rs

use crate::Result;

/// Transport abstracts byte-level I/O away from the protocol and device
/// layers. Implementations deliver whatever the link hands back: a receive
/// buffer may hold an ACK frame, line noise, and the response frame all at
/// once, and the frame scanner upstream sorts that out.
pub trait Transport {
    /// Send raw bytes to the reader.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive up to `max_len` raw bytes. Returns `Error::Timeout` when the
    /// reader produced nothing before the link deadline.
    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>>;

    /// Human-readable link name for log lines ("mock", "/dev/ttyUSB0", ...).
    fn name(&self) -> &str;
}
