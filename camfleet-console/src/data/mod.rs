mod config;
mod nav;
mod promise;

use camfleet_core::device::Device;

pub use crate::data::{
    config::{Config, InventorySource},
    nav::{RouteTable, View},
    promise::{Promise, PromiseState},
};

pub struct AppState {
    pub config: Config,
    pub view: View,
    pub devices: Promise<Vec<Device>, u64>,
    next_request: u64,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            view: View::Home,
            devices: Promise::Empty,
            next_request: 0,
        }
    }

    pub fn navigate(&mut self, view: View) {
        if self.view != view {
            log::info!("navigating to {}", view.title());
            self.view = view;
            self.devices.clear();
        }
    }

    /// Mark the device list as loading and return the id its answer must carry.
    pub fn request_devices(&mut self) -> u64 {
        self.next_request += 1;
        self.devices.defer(self.next_request);
        self.next_request
    }

    pub fn devices_loaded(&mut self, request: u64, devices: Vec<Device>) {
        if !self.devices.update((request, devices)) {
            log::debug!("dropping stale device list for request {request}");
        }
    }
}
