// Smoke tests against a live PN532 on a serial port. Run them with:
//
//   PN532_PORT=/dev/ttyUSB0 cargo test --features serial
//
// Without PN532_PORT set each test skips itself and passes, so the suite
// stays green on machines without hardware. Every test opens the same
// port, so they are serialized. Tests that need a card in the field pass
// trivially when none is present; they exist to exercise the link, not to
// gate CI on a card being on the antenna.

use std::env;

use anyhow::{ensure, Result};
use serial_test::serial;

use pn532_mifare::{Card, Device, Initialized, KeyStore, Sector};

/// Open and initialize the reader named by `PN532_PORT`, or `None` when
/// the variable is unset so the suite passes on machines without hardware.
fn open_from_env() -> Result<Option<Device<Initialized>>> {
    let Some(port) = env::var_os("PN532_PORT") else {
        return Ok(None);
    };
    let port = port.to_string_lossy().into_owned();
    let dev = Device::open_serial(&port)?.initialize()?;
    Ok(Some(dev))
}

#[test]
#[serial]
fn reader_reports_pn532_firmware() -> Result<()> {
    let Some(mut dev) = open_from_env()? else {
        return Ok(());
    };
    let version = dev.firmware_version()?;
    ensure!(version.is_pn532(), "unexpected chip answered: {version:?}");
    Ok(())
}

#[test]
#[serial]
fn detection_pass_completes() -> Result<()> {
    let Some(mut dev) = open_from_env()? else {
        return Ok(());
    };
    // absence is a valid outcome; the schedule just has to run clean
    let _ = dev.detect_target()?;
    Ok(())
}

#[test]
#[serial]
fn default_key_opens_sector_zero() -> Result<()> {
    let Some(mut dev) = open_from_env()? else {
        return Ok(());
    };
    let Some(target) = dev.detect_target()? else {
        return Ok(());
    };

    let card = Card::from(target);
    let mut store = KeyStore::new();
    let sector = Sector::new(0)?;
    card.authenticate(&mut dev, &mut store, sector)?;

    let block = card.read_block(&mut dev, sector.first_block())?;
    let uid = card.uid().as_bytes();
    ensure!(
        block.as_bytes()[..uid.len().min(4)] == uid[..uid.len().min(4)],
        "manufacturer block does not start with the UID"
    );
    Ok(())
}
