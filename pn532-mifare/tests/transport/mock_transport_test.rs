// The transport contract exercised the way the device consumes it: through
// a boxed trait object, with the mock's send log and response queue
// observed from outside.

use pn532_mifare::test_support::{boxed_mock_with_responses, shared_mock};
use pn532_mifare::Error;

#[test]
fn responses_replay_in_fifo_order_then_time_out() {
    let mut transport = boxed_mock_with_responses(vec![vec![0x01, 0x02], vec![0x03]]);

    assert_eq!(transport.receive(256).unwrap(), vec![0x01, 0x02]);
    assert_eq!(transport.receive(256).unwrap(), vec![0x03]);
    assert!(matches!(transport.receive(256), Err(Error::Timeout)));
}

#[test]
fn receive_honors_the_caller_buffer_limit() {
    let long = (0..=255u8).cycle().take(300).collect::<Vec<u8>>();
    let mut transport = boxed_mock_with_responses(vec![long.clone()]);

    let got = transport.receive(256).unwrap();
    assert_eq!(got.len(), 256);
    assert_eq!(got, long[..256]);
}

#[test]
fn sent_frames_are_logged_in_order() {
    let (mut transport, handle) = shared_mock();

    transport.send(&[0xAA, 0xBB]).unwrap();
    transport.send(&[0xCC]).unwrap();

    let sent = handle.borrow().sent.clone();
    assert_eq!(sent, vec![vec![0xAA, 0xBB], vec![0xCC]]);
    assert_eq!(handle.borrow().last_sent(), Some(&[0xCC][..]));
}

#[test]
fn injected_failures_expire_after_the_configured_count() {
    let (mut transport, handle) = shared_mock();
    handle.borrow_mut().set_send_failures(2);

    assert!(matches!(transport.send(&[0x01]), Err(Error::Transport(_))));
    assert!(matches!(transport.send(&[0x02]), Err(Error::Transport(_))));
    transport.send(&[0x03]).unwrap();

    // only the surviving send reached the log
    assert_eq!(handle.borrow().sent_count(), 1);
    assert_eq!(handle.borrow().last_sent(), Some(&[0x03][..]));
}
