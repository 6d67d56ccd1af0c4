// Key-trial policies checked at the wire: the authenticate frame carries
// the key at index 10..16 and the UID behind it, so the bytes leaving the
// port show exactly which candidate a policy put first.

#[path = "../common/fixtures.rs"]
mod fixtures;

use pn532_mifare::card::{authenticate, KeyStore, KeyTrialPolicy};
use pn532_mifare::test_support::{
    exchange_ok_frame, exchange_status_frame, sam_ok_frame, shared_mock,
};
use pn532_mifare::{Device, Error, Sector};

fn policy() -> KeyTrialPolicy {
    KeyTrialPolicy::OverrideSectors {
        key: fixtures::special_key(),
        sectors: vec![Sector::new(1).unwrap(), Sector::new(2).unwrap()],
    }
}

#[test]
fn override_key_leads_on_named_sectors() {
    let (transport, handle) = shared_mock();
    handle.borrow_mut().push_response(sam_ok_frame());
    handle.borrow_mut().push_response(exchange_ok_frame(&[]));

    let mut dev = Device::new_with_transport(transport).initialize().unwrap();
    let mut working = policy().materialize(&KeyStore::new());
    let uid = fixtures::sample_uid();

    authenticate(&mut dev, &mut working, &uid, Sector::new(1).unwrap()).unwrap();

    let sent = handle.borrow().sent.clone();
    let frame = sent.last().unwrap();
    assert_eq!(frame[8], 0x60);
    assert_eq!(frame[9], 4);
    assert_eq!(&frame[10..16], fixtures::special_key().as_bytes());
    assert_eq!(&frame[16..20], &fixtures::sample_uid_bytes());
}

#[test]
fn other_sectors_keep_the_default_pair() {
    let (transport, handle) = shared_mock();
    handle.borrow_mut().push_response(sam_ok_frame());
    handle.borrow_mut().push_response(exchange_ok_frame(&[]));

    let mut dev = Device::new_with_transport(transport).initialize().unwrap();
    let mut working = policy().materialize(&KeyStore::new());
    let uid = fixtures::sample_uid();

    authenticate(&mut dev, &mut working, &uid, Sector::new(0).unwrap()).unwrap();

    let frame = handle.borrow().last_sent().unwrap().to_vec();
    assert_eq!(&frame[10..16], &[0xFF; 6]);
}

#[test]
fn exhausting_the_override_pair_reports_both_trials() {
    let (transport, handle) = shared_mock();
    handle.borrow_mut().push_response(sam_ok_frame());
    handle.borrow_mut().push_response(exchange_status_frame(0x14));
    handle.borrow_mut().push_response(exchange_status_frame(0x14));

    let mut dev = Device::new_with_transport(transport).initialize().unwrap();
    let mut working = policy().materialize(&KeyStore::new());
    let uid = fixtures::sample_uid();

    let err = authenticate(&mut dev, &mut working, &uid, Sector::new(2).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        Error::AuthenticationFailed { sector: 2, tried: 2 }
    ));

    // Key A then Key B, both carrying the override key
    let sent = handle.borrow().sent.clone();
    assert_eq!(sent[1][8], 0x60);
    assert_eq!(sent[2][8], 0x61);
    assert_eq!(&sent[1][10..16], fixtures::special_key().as_bytes());
    assert_eq!(&sent[2][10..16], fixtures::special_key().as_bytes());
}
