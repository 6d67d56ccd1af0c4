// Read every sector of a MIFARE Classic 1K card with factory default keys.
//
// Waits for a card, dumps all sixteen sectors, and prints each block in hex
// with trailers split into keys and access bits.
// Run with: cargo run --example dump_card --features serial -- /dev/ttyUSB0

use std::thread;

use anyhow::Result;
use pn532_mifare::card::{Card, TrailerBlock};
use pn532_mifare::prelude::{Device, KeyStore, KeyTrialPolicy};
use pn532_mifare::utils::{bytes_to_hex, ms};

fn main() -> Result<()> {
    env_logger::init();

    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    println!("Opening PN532 on {port}...");
    let device = Device::open_serial(&port)?;
    let mut dev = device.initialize()?;
    println!("Firmware: {}", dev.firmware_version()?);

    println!("Waiting for a card...");
    let target = loop {
        if let Some(target) = dev.detect_target()? {
            break target;
        }
        thread::sleep(ms(150));
    };
    println!("Card UID: {}", target.uid.to_hex());

    let card = Card::from(target);
    let dump = card.dump(&mut dev, &KeyStore::new(), &KeyTrialPolicy::DefaultOnly);

    for sector_dump in &dump.sectors {
        let sector = sector_dump.sector;
        match &sector_dump.outcome {
            Ok((auth, blocks)) => {
                println!("\nsector {sector} (key {} {})", auth.key_type, auth.key.to_hex());
                for (position, block) in blocks.iter().enumerate() {
                    let address = sector.block(position as u8)?;
                    if address.is_trailer() {
                        let trailer = TrailerBlock::parse(block);
                        println!(
                            "  block {:2}: {}  [trailer, access {}]",
                            address.value(),
                            block.to_hex(),
                            bytes_to_hex(&trailer.access_bits)
                        );
                    } else {
                        println!(
                            "  block {:2}: {}  |{}|",
                            address.value(),
                            block.to_hex(),
                            block.to_ascii_safe()
                        );
                    }
                }
            }
            Err(e) => println!("\nsector {sector}: unreadable ({e})"),
        }
    }

    println!(
        "\n{}/{} sectors readable",
        dump.readable_sectors(),
        dump.sectors.len()
    );
    Ok(())
}
