// Failure paths through the public handle: a reader that answers with the
// wrong frame, stops answering, or loses the link mid-session.

use pn532_mifare::test_support::{frame_payload, initialized_mock_device, sam_ok_frame, shared_mock};
use pn532_mifare::{Device, Error};

#[test]
fn initialize_rejects_a_mismatched_reply() {
    // firmware answer arriving where the SAM acknowledgement belongs
    let (transport, handle) = shared_mock();
    handle
        .borrow_mut()
        .push_response(frame_payload(&[0xD5, 0x03, 0x32, 0x01, 0x06, 0x07]));

    match Device::new_with_transport(transport).initialize() {
        Err(Error::UnexpectedResponse { expected, actual }) => {
            assert_eq!(expected, 0x15);
            assert_eq!(actual, 0x03);
        }
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("initialize accepted a mismatched reply"),
    }
}

#[test]
fn silent_reader_times_out() {
    let mut dev = initialized_mock_device(vec![]).unwrap();
    assert!(matches!(dev.firmware_version(), Err(Error::Timeout)));
}

#[test]
fn lost_link_surfaces_as_transport_error() {
    let (transport, handle) = shared_mock();
    handle.borrow_mut().push_response(sam_ok_frame());

    let mut dev = Device::new_with_transport(transport).initialize().unwrap();
    handle.borrow_mut().set_send_failures(1);

    assert!(matches!(dev.firmware_version(), Err(Error::Transport(_))));
    // the failed send never reached the wire
    assert_eq!(handle.borrow().sent.len(), 1);
}

#[test]
fn session_continues_after_a_timeout() {
    let (transport, handle) = shared_mock();
    handle.borrow_mut().push_response(sam_ok_frame());

    let mut dev = Device::new_with_transport(transport).initialize().unwrap();
    assert!(matches!(dev.firmware_version(), Err(Error::Timeout)));

    // the next query on the same handle succeeds once the reader answers
    handle
        .borrow_mut()
        .push_response(frame_payload(&[0xD5, 0x03, 0x32, 0x01, 0x06, 0x07]));
    assert!(dev.firmware_version().unwrap().is_pn532());
}
