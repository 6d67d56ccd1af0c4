// Presence watching against a scripted reader: the debouncer and the
// detect retry schedule working together over one tap cycle.

#[path = "../common/fixtures.rs"]
mod fixtures;

use pn532_mifare::test_support::{no_target_frame, sam_ok_frame, shared_mock, target_frame};
use pn532_mifare::{Device, Error, PresenceEvent, PresenceMonitor};

#[test]
fn tap_cycle_emits_one_placed_and_one_removed() {
    let (transport, handle) = shared_mock();
    handle.borrow_mut().push_response(sam_ok_frame());
    for _ in 0..2 {
        handle
            .borrow_mut()
            .push_response(target_frame(&fixtures::sample_uid_bytes()));
    }
    for _ in 0..2 {
        handle.borrow_mut().push_response(no_target_frame());
    }

    let mut dev = Device::new_with_transport(transport).initialize().unwrap();
    let mut monitor = PresenceMonitor::new();

    assert_eq!(monitor.poll(&mut dev).unwrap(), None);
    assert_eq!(
        monitor.poll(&mut dev).unwrap(),
        Some(PresenceEvent::Placed {
            uid: fixtures::sample_uid()
        })
    );
    assert_eq!(monitor.poll(&mut dev).unwrap(), None);
    assert_eq!(
        monitor.poll(&mut dev).unwrap(),
        Some(PresenceEvent::Removed {
            uid: Some(fixtures::sample_uid())
        })
    );

    // every answered poll costs exactly one detect frame
    assert_eq!(handle.borrow().sent.len(), 5);
}

#[test]
fn a_silent_stretch_does_not_unseat_the_card() {
    let (transport, handle) = shared_mock();
    handle.borrow_mut().push_response(sam_ok_frame());
    for _ in 0..2 {
        handle
            .borrow_mut()
            .push_response(target_frame(&fixtures::sample_uid_bytes()));
    }

    let mut dev = Device::new_with_transport(transport).initialize().unwrap();
    let mut monitor = PresenceMonitor::new();

    monitor.poll(&mut dev).unwrap();
    monitor.poll(&mut dev).unwrap();
    assert!(monitor.is_present());

    // nothing queued: the schedule runs dry and reports one absent poll,
    // which the debouncer absorbs
    assert_eq!(monitor.poll(&mut dev).unwrap(), None);
    assert!(monitor.is_present());

    // the card answers again before the threshold is reached
    handle
        .borrow_mut()
        .push_response(target_frame(&fixtures::sample_uid_bytes()));
    assert_eq!(monitor.poll(&mut dev).unwrap(), None);
    assert!(monitor.is_present());
}

#[test]
fn a_dead_link_propagates_instead_of_reporting_absence() {
    let (transport, handle) = shared_mock();
    handle.borrow_mut().push_response(sam_ok_frame());
    for _ in 0..2 {
        handle
            .borrow_mut()
            .push_response(target_frame(&fixtures::sample_uid_bytes()));
    }

    let mut dev = Device::new_with_transport(transport).initialize().unwrap();
    let mut monitor = PresenceMonitor::new();
    monitor.poll(&mut dev).unwrap();
    monitor.poll(&mut dev).unwrap();

    handle.borrow_mut().set_send_failures(1);
    assert!(matches!(monitor.poll(&mut dev), Err(Error::Transport(_))));
    // the stable state is untouched by the failed poll
    assert!(monitor.is_present());
}
