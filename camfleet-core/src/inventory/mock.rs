use crate::device::Device;

use super::DeviceInventory;

/// Fixed device list, used in place of the fleet backend.
#[derive(Clone, Debug)]
pub struct StaticInventory {
    devices: Vec<Device>,
}

impl StaticInventory {
    pub fn new(devices: Vec<Device>) -> Self {
        debug_assert!(Device::validate_snapshot(&devices).is_ok());
        Self { devices }
    }

    pub fn sample() -> Self {
        Self::new(vec![
            Device::new(1, "Front Door Camera", true, "192.168.1.10"),
            Device::new(2, "Backyard Camera", false, "192.168.1.11"),
            Device::new(3, "Testing VCT Camera", true, "vct2-sector6"),
        ])
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl DeviceInventory for StaticInventory {
    fn fetch_devices(&self) -> Vec<Device> {
        self.devices.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_fleet_is_a_valid_snapshot() {
        let devices = StaticInventory::sample().fetch_devices();
        assert_eq!(devices.len(), 3);
        assert_eq!(Device::validate_snapshot(&devices), Ok(()));
        assert_eq!(devices[2].ip, "vct2-sector6");
    }

    #[test]
    fn repeated_queries_return_fresh_copies() {
        let inventory = StaticInventory::sample();
        let mut first = inventory.fetch_devices();
        first.clear();
        assert_eq!(inventory.fetch_devices().len(), 3);
        assert!(StaticInventory::empty().fetch_devices().is_empty());
    }
}
