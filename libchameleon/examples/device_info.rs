// Device identification and slot overview over the USB serial port

// Usage: cargo run --example device_info -- /dev/ttyACM0

use libchameleon::prelude::*;

fn main() -> Result<()> {
    env_logger::init();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyACM0".to_string());

    println!("Opening {}...", path);
    let transport = open_serial(&path)?;
    let dev = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .connect()?;

    let info = operations::device_info(&dev)?;
    println!("Firmware: v{}", info.version);
    if let Some(model) = info.model {
        println!("Model:    {}", model);
    }
    if let Some(mode) = info.mode {
        println!("Mode:     {}", mode);
    }
    if let Some(chip) = info.chip_id {
        println!("Chip:     {:016X}", chip);
    }

    let active = operations::active_slot(&dev)?;
    println!("\n=== Slots ===");
    for (i, slot) in operations::slots_info(&dev)?.iter().enumerate() {
        let marker = if i as u8 == active { '*' } else { ' ' };
        let nick = operations::slot_nickname(&dev, i as u8, SenseType::Hf).unwrap_or_default();
        println!(
            "{} {}: HF {:<18} LF {:<10} {}",
            marker,
            i + 1,
            slot.hf.name(),
            slot.lf.name(),
            nick
        );
    }

    if info.mode == Some(DeviceMode::Reader) {
        println!("\n=== Scanning for ISO14443-A tags ===");
        match operations::hf14a_scan(&dev) {
            Ok(tags) => {
                for tag in tags {
                    println!(
                        "  UID {} ATQA {:02X}{:02X} SAK {:02X}",
                        tag.uid.to_hex(),
                        tag.atqa[0],
                        tag.atqa[1],
                        tag.sak
                    );
                }
            }
            Err(e) => println!("HF scan: {}", e),
        }
    }

    dev.disconnect()?;
    Ok(())
}
