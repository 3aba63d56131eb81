//! Where device records come from.
//!
//! Every source implements [`DeviceInventory`], so the static demo fleet and
//! the live backend are interchangeable at assembly time.  Queries are total:
//! a source that cannot produce a snapshot reports the failure to its
//! diagnostics sink and answers with no devices.

mod mock;
mod remote;

use std::sync::Arc;

use crate::device::Device;

pub use mock::StaticInventory;
pub use remote::{InventoryFeed, RemoteConfig, RemoteInventory};

pub trait DeviceInventory: Send + Sync {
    fn fetch_devices(&self) -> Vec<Device>;
}

pub type InventoryHandle = Arc<dyn DeviceInventory>;

impl<T: DeviceInventory + ?Sized> DeviceInventory for Arc<T> {
    fn fetch_devices(&self) -> Vec<Device> {
        (**self).fetch_devices()
    }
}
