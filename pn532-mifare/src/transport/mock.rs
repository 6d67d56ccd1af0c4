// pn532-mifare/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent bytes and returns queued
/// response buffers in FIFO order, timing out once the queue runs dry.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of upcoming `send` calls that fail hard.
    pub send_failures: usize,
    /// Testing hook: number of upcoming `receive` calls that time out even
    /// when responses are queued.
    pub receive_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock preloaded with response buffers, oldest first.
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            responses: responses.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push_response(&mut self, response: Vec<u8>) {
        self.responses.push(response);
    }

    /// Set how many subsequent `send` calls should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// Set how many subsequent `receive` calls should time out (for tests).
    pub fn set_receive_failures(&mut self, n: usize) {
        self.receive_failures = n;
    }

    pub fn sent_count(&self) -> usize {
        self.sent.len()
    }

    pub fn last_sent(&self) -> Option<&[u8]> {
        self.sent.last().map(Vec::as_slice)
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Transport("injected send failure".into()));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>> {
        if self.receive_failures > 0 {
            self.receive_failures -= 1;
            return Err(Error::Timeout);
        }
        if self.responses.is_empty() {
            return Err(Error::Timeout);
        }
        let mut buffer = self.responses.remove(0);
        buffer.truncate(max_len);
        Ok(buffer)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
