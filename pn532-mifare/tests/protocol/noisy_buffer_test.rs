// Response extraction from buffers shaped like what the serial layer
// actually hands back: ACK prefixes, idle-line zeros, stale leftovers.

use pn532_mifare::protocol::codec::{decode_response_buffer, encode_command_frame};
use pn532_mifare::protocol::{Command, Response};
use pn532_mifare::test_support;
use pn532_mifare::Error;

const ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

#[test]
fn ack_and_response_in_one_read() {
    let mut buffer = ACK.to_vec();
    buffer.extend_from_slice(&test_support::sam_ok_frame());

    match decode_response_buffer(0x14, &buffer).unwrap() {
        Response::SamConfigured => {}
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn stale_bytes_before_the_frame_are_skipped() {
    // leftovers from an aborted read, then the ACK, then the answer
    let mut buffer = vec![0x13, 0x37, 0x00, 0xFF, 0x02];
    buffer.extend_from_slice(&ACK);
    buffer.extend_from_slice(&test_support::frame_payload(&[
        0xD5, 0x03, 0x32, 0x01, 0x06, 0x07,
    ]));

    match decode_response_buffer(0x02, &buffer).unwrap() {
        Response::FirmwareVersion(v) => assert!(v.is_pn532()),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn idle_line_zeros_after_the_frame_are_ignored() {
    let mut buffer = test_support::no_target_frame();
    buffer.extend_from_slice(&[0x00; 32]);

    match decode_response_buffer(0x4A, &buffer).unwrap() {
        Response::TargetList(None) => {}
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn pure_noise_reports_scanned_length() {
    let buffer = [0x55, 0xAA, 0x55, 0xAA, 0x13, 0x37];
    match decode_response_buffer(0x02, &buffer) {
        Err(Error::FrameNotFound { scanned }) => assert_eq!(scanned, buffer.len()),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn truncated_frame_is_not_found() {
    let frame = test_support::sam_ok_frame();
    let cut = &frame[..frame.len() - 2];
    assert!(matches!(
        decode_response_buffer(0x14, cut),
        Err(Error::FrameNotFound { .. })
    ));
}

#[test]
fn host_echo_is_rejected() {
    // a command frame bounced back carries TFI 0xD4, not 0xD5
    let echo = encode_command_frame(&Command::GetFirmwareVersion).unwrap();
    assert!(matches!(
        decode_response_buffer(0x02, &echo),
        Err(Error::UnexpectedDirection { actual: 0xD4 })
    ));
}

#[test]
fn answer_for_a_different_command_is_flagged() {
    // detect answer arriving while a firmware query is pending
    let buffer = test_support::no_target_frame();
    match decode_response_buffer(0x02, &buffer) {
        Err(Error::UnexpectedResponse { expected, actual }) => {
            assert_eq!(expected, 0x03);
            assert_eq!(actual, 0x4B);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
