// The trailer guard through the public card API: refused writes must die
// before the frame is built, and the opt-in path must carry the exact
// bytes the caller supplied.

#[path = "../common/fixtures.rs"]
mod fixtures;

use pn532_mifare::card::calculate_access_bits;
use pn532_mifare::test_support::{exchange_ok_frame, sam_ok_frame, shared_mock};
use pn532_mifare::{BlockAddress, Card, Device, Error, Sector};

#[test]
fn trailer_write_is_refused_before_reaching_the_wire() {
    let (transport, handle) = shared_mock();
    handle.borrow_mut().push_response(sam_ok_frame());

    let mut dev = Device::new_with_transport(transport).initialize().unwrap();
    let card = Card::new(fixtures::sample_uid());

    let trailer = BlockAddress::new(7).unwrap();
    let err = card
        .write_block(&mut dev, trailer, &fixtures::factory_trailer(), false)
        .unwrap_err();
    assert!(matches!(err, Error::ControlBlockGuarded { block: 7 }));

    // only the SAM handshake ever left the port
    assert_eq!(handle.borrow().sent.len(), 1);
}

#[test]
fn opt_in_trailer_write_carries_the_given_bytes() {
    let (transport, handle) = shared_mock();
    handle.borrow_mut().push_response(sam_ok_frame());
    handle.borrow_mut().push_response(exchange_ok_frame(&[]));

    let mut dev = Device::new_with_transport(transport).initialize().unwrap();
    let card = Card::new(fixtures::sample_uid());

    let trailer = BlockAddress::new(7).unwrap();
    card.write_block(&mut dev, trailer, &fixtures::factory_trailer(), true)
        .unwrap();

    let frame = handle.borrow().last_sent().unwrap().to_vec();
    assert_eq!(frame[8], 0xA0);
    assert_eq!(frame[9], 7);
    assert_eq!(&frame[10..26], fixtures::factory_trailer().as_bytes());
}

#[test]
fn rekeying_lays_the_trailer_out_in_field_order() {
    let (transport, handle) = shared_mock();
    handle.borrow_mut().push_response(sam_ok_frame());
    handle.borrow_mut().push_response(exchange_ok_frame(&[]));

    let mut dev = Device::new_with_transport(transport).initialize().unwrap();
    let card = Card::new(fixtures::sample_uid());

    let access = calculate_access_bits(1, 1, 1, 1);
    card.change_sector_keys(
        &mut dev,
        Sector::new(2).unwrap(),
        fixtures::special_key(),
        fixtures::special_key(),
        access,
    )
    .unwrap();

    let frame = handle.borrow().last_sent().unwrap().to_vec();
    assert_eq!(frame[9], 11); // trailer of sector 2
    assert_eq!(&frame[10..16], fixtures::special_key().as_bytes());
    assert_eq!(&frame[16..20], &access);
    assert_eq!(&frame[20..26], fixtures::special_key().as_bytes());
}
