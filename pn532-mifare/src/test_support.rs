// pn532-mifare/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport setup and response-frame
//! construction so tests across the crate and the tests/ directory share
//! the same fixtures.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{
    CMD_INLIST_PASSIVE_TARGET, CMD_IN_DATA_EXCHANGE, CMD_SAM_CONFIGURATION, FRAME_POSTAMBLE,
    FRAME_PREAMBLE, MIN_FRAME_LEN, TARGET_NUMBER, TFI_DEVICE,
};
use crate::device::{Device, Initialized};
use crate::protocol::{dcs, lcs};
use crate::transport::{MockTransport, Transport};
use crate::Result;

/// Envelope a device payload the way the chip puts it on the wire.
#[doc(hidden)]
pub fn frame_payload(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + MIN_FRAME_LEN);
    out.extend_from_slice(&FRAME_PREAMBLE);
    out.push(payload.len() as u8);
    out.push(lcs(payload.len() as u8));
    out.extend_from_slice(payload);
    out.push(dcs(payload));
    out.push(FRAME_POSTAMBLE);
    out
}

/// Framed SAMConfiguration acknowledgement.
#[doc(hidden)]
pub fn sam_ok_frame() -> Vec<u8> {
    frame_payload(&[TFI_DEVICE, CMD_SAM_CONFIGURATION + 1])
}

/// Framed InListPassiveTarget reply carrying one Type A target with the
/// given UID (ATQA 0x0004, SAK 0x08: MIFARE Classic 1K).
#[doc(hidden)]
pub fn target_frame(uid: &[u8]) -> Vec<u8> {
    let mut payload = vec![
        TFI_DEVICE,
        CMD_INLIST_PASSIVE_TARGET + 1,
        0x01,
        TARGET_NUMBER,
        0x00,
        0x04,
        0x08,
        uid.len() as u8,
    ];
    payload.extend_from_slice(uid);
    frame_payload(&payload)
}

/// Framed InListPassiveTarget reply reporting zero targets in the field.
#[doc(hidden)]
pub fn no_target_frame() -> Vec<u8> {
    frame_payload(&[TFI_DEVICE, CMD_INLIST_PASSIVE_TARGET + 1, 0x00])
}

/// Framed InDataExchange reply with status 0x00 and the given data bytes.
#[doc(hidden)]
pub fn exchange_ok_frame(data: &[u8]) -> Vec<u8> {
    let mut payload = vec![TFI_DEVICE, CMD_IN_DATA_EXCHANGE + 1, 0x00];
    payload.extend_from_slice(data);
    frame_payload(&payload)
}

/// Framed InDataExchange reply carrying a non-zero status byte.
#[doc(hidden)]
pub fn exchange_status_frame(code: u8) -> Vec<u8> {
    frame_payload(&[TFI_DEVICE, CMD_IN_DATA_EXCHANGE + 1, code])
}

/// Build a MockTransport pre-seeded with the given response buffers and
/// return it boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    for response in responses {
        mock.push_response(response);
    }
    Box::new(mock)
}

/// Convenience: create and initialize a `Device<Initialized>` backed by a
/// MockTransport. The SAM handshake reply is seeded automatically; the
/// given responses queue up behind it.
#[doc(hidden)]
pub fn initialized_mock_device(responses: Vec<Vec<u8>>) -> Result<Device<Initialized>> {
    let mut mock = MockTransport::new();
    mock.push_response(sam_ok_frame());
    for response in responses {
        mock.push_response(response);
    }
    Device::new_with_transport(Box::new(mock)).initialize()
}

/// Transport wrapper delegating into an `Rc<RefCell<MockTransport>>` so a
/// test can keep seeding responses and inspecting sent frames after a
/// Device has taken ownership.
#[doc(hidden)]
pub struct SharedMockTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl Transport for SharedMockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().send(data)
    }

    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().receive(max_len)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Build a shared mock: the boxed transport goes to the Device under test,
/// the handle stays with the test.
#[doc(hidden)]
pub fn shared_mock() -> (Box<dyn Transport>, Rc<RefCell<MockTransport>>) {
    let handle = Rc::new(RefCell::new(MockTransport::new()));
    let boxed: Box<dyn Transport> = Box::new(SharedMockTransport {
        inner: Rc::clone(&handle),
    });
    (boxed, handle)
}
