// Debounced card watcher for a PN532 on a serial port.
//
// Polls the reader in a loop and prints one line per placement or removal.
// Run with: cargo run --example watch_cards --features serial -- /dev/ttyUSB0

use std::thread;

use anyhow::Result;
use pn532_mifare::prelude::{Device, PresenceEvent, PresenceMonitor};

fn main() -> Result<()> {
    env_logger::init();

    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    println!("Opening PN532 on {port}...");
    let device = Device::open_serial(&port)?;
    let mut dev = device.initialize()?;

    let version = dev.firmware_version()?;
    println!("Firmware: {version}");
    println!("Watching for cards, Ctrl-C to quit.");

    let mut monitor = PresenceMonitor::new();
    loop {
        match monitor.poll(&mut dev)? {
            Some(PresenceEvent::Placed { uid }) => println!("+ card {}", uid.to_hex()),
            Some(PresenceEvent::Removed { uid: Some(uid) }) => println!("- card {}", uid.to_hex()),
            Some(PresenceEvent::Removed { uid: None }) => println!("- card"),
            None => {}
        }
        thread::sleep(monitor.poll_interval());
    }
}
