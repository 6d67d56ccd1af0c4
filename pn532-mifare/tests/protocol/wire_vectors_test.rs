// Known-good frames for the opcodes this crate speaks, checked byte for
// byte against the encoder and fed back through the decoder.

use pn532_mifare::protocol::{codec, Command, MifareRequest, Response};
use pn532_mifare::types::{BlockAddress, KeyType, MifareKey, Uid};

#[test]
fn get_firmware_version_frame() {
    let frame = codec::encode_command_frame(&Command::GetFirmwareVersion).unwrap();
    assert_eq!(frame, hex::decode("0000ff02fed4022a00").unwrap());
}

#[test]
fn sam_configuration_normal_mode_frame() {
    let frame = codec::encode_command_frame(&Command::sam_normal_mode()).unwrap();
    assert_eq!(frame, hex::decode("0000ff05fbd4140114010200").unwrap());
}

#[test]
fn detect_type_a_frame() {
    let frame = codec::encode_command_frame(&Command::detect_type_a()).unwrap();
    assert_eq!(frame, hex::decode("0000ff04fcd44a0100e100").unwrap());
}

#[test]
fn authenticate_key_a_frame() {
    let cmd = Command::InDataExchange {
        target: 0x01,
        request: MifareRequest::Authenticate {
            key_type: KeyType::A,
            block: BlockAddress::new(8).unwrap(),
            key: MifareKey::DEFAULT,
            uid: Uid::try_from(&[0x1A, 0x2B, 0x3C, 0x4D][..]).unwrap(),
        },
    };
    let frame = codec::encode_command_frame(&cmd).unwrap();
    assert_eq!(
        frame,
        hex::decode("0000ff0ff1d440016008ffffffffffff1a2b3c4dbb00").unwrap()
    );
}

#[test]
fn firmware_version_response_decodes() {
    // PN532 answering ic=0x32, version 1.6, support 0x07
    let buffer = hex::decode("0000ff06fad50332010607e800").unwrap();
    match codec::decode_response_buffer(0x02, &buffer).unwrap() {
        Response::FirmwareVersion(v) => {
            assert!(v.is_pn532());
            assert_eq!((v.version, v.revision), (1, 6));
            assert_eq!(v.support, 0x07);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn single_target_response_decodes() {
    // one Type A target: ATQA 0x0004, SAK 0x08, 4-byte UID
    let buffer = hex::decode("0000ff0cf4d54b0101000408041a2b3c4d0000").unwrap();
    match codec::decode_response_buffer(0x4A, &buffer).unwrap() {
        Response::TargetList(Some(target)) => {
            assert_eq!(target.target, 0x01);
            assert_eq!(target.sens_res, 0x0004);
            assert_eq!(target.sel_res, 0x08);
            assert_eq!(target.uid.as_bytes(), &[0x1A, 0x2B, 0x3C, 0x4D]);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}
