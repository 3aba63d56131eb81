use std::io::{self, Write};

use camfleet_core::device::Device;

use crate::data::Promise;

pub fn render(devices: &Promise<Vec<Device>, u64>, out: &mut impl Write) -> io::Result<()> {
    match devices {
        Promise::Empty => Ok(()),
        Promise::Deferred(_) => writeln!(out, "  Loading devices..."),
        Promise::Resolved(devices) if devices.is_empty() => writeln!(out, "  No devices."),
        Promise::Resolved(devices) => {
            for device in devices {
                let status = if device.active { "active" } else { "inactive" };
                writeln!(
                    out,
                    "  {:>3}  {:<28} {:<16} {}",
                    device.index, device.description, device.ip, status
                )?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(devices: &Promise<Vec<Device>, u64>) -> String {
        let mut out = Vec::new();
        render(devices, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn one_line_per_device() {
        let devices = Promise::Resolved(vec![
            Device::new(1, "Front Door Camera", true, "192.168.1.10"),
            Device::new(3, "Testing VCT Camera", true, "vct2-sector6"),
        ]);
        let text = text(&devices);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Front Door Camera"));
        assert!(lines[0].ends_with("active"));
        assert!(lines[1].contains("vct2-sector6"));
    }

    #[test]
    fn loading_and_empty_states() {
        assert_eq!(text(&Promise::Deferred(1)), "  Loading devices...\n");
        assert_eq!(text(&Promise::Resolved(Vec::new())), "  No devices.\n");
        assert_eq!(text(&Promise::Empty), "");
    }
}
