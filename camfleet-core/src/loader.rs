//! Runs inventory queries off the caller's thread.
//!
//! A view asks for devices and gets back a [`PendingDevices`] it has to wait
//! on, or hands over a callback to be invoked once the snapshot is in.  Each
//! call is independent: nothing is cached or coalesced, and an issued query
//! always runs to completion.

use std::{sync::Arc, time::Duration};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, TryRecvError};
use threadpool::ThreadPool;

use crate::{
    device::Device,
    diagnostics::{DiagnosticsHandle, LogDiagnostics},
    error::Error,
    inventory::{DeviceInventory, InventoryHandle},
};

const SOURCE: &str = "inventory worker";

#[derive(Clone)]
pub struct InventoryService {
    inventory: InventoryHandle,
    pool: ThreadPool,
    diagnostics: DiagnosticsHandle,
}

impl InventoryService {
    pub fn new(inventory: InventoryHandle, workers: usize) -> Self {
        Self::with_diagnostics(inventory, workers, Arc::new(LogDiagnostics))
    }

    /// `diagnostics` hears about queries whose worker died before answering.
    pub fn with_diagnostics(
        inventory: InventoryHandle,
        workers: usize,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        Self {
            inventory,
            pool: ThreadPool::with_name("inventory".into(), workers.max(1)),
            diagnostics,
        }
    }

    pub fn fetch_devices(&self) -> PendingDevices {
        let (sender, receiver) = bounded(1);
        self.fetch_devices_with(move |devices| {
            // The caller may have dropped its handle already.
            let _ = sender.send(devices);
        });
        PendingDevices {
            receiver,
            taken: false,
            diagnostics: self.diagnostics.clone(),
        }
    }

    pub fn fetch_devices_with<F>(&self, on_done: F)
    where
        F: FnOnce(Vec<Device>) + Send + 'static,
    {
        let inventory = self.inventory.clone();
        self.pool.execute(move || {
            on_done(inventory.fetch_devices());
        });
    }

    /// Number of queries currently running or queued.
    pub fn in_flight(&self) -> usize {
        self.pool.active_count() + self.pool.queued_count()
    }

    pub fn join(&self) {
        self.pool.join();
    }
}

/// Result of one inventory query that may not have arrived yet.
pub struct PendingDevices {
    receiver: Receiver<Vec<Device>>,
    taken: bool,
    diagnostics: DiagnosticsHandle,
}

impl PendingDevices {
    pub fn wait(self) -> Vec<Device> {
        if self.taken {
            return Vec::new();
        }
        match self.receiver.recv() {
            Ok(devices) => devices,
            Err(_) => self.lost(),
        }
    }

    pub fn wait_timeout(&mut self, timeout: Duration) -> Option<Vec<Device>> {
        if self.taken {
            return None;
        }
        let result = match self.receiver.recv_timeout(timeout) {
            Ok(devices) => Some(devices),
            Err(RecvTimeoutError::Timeout) => return None,
            Err(RecvTimeoutError::Disconnected) => Some(self.lost()),
        };
        self.taken = true;
        result
    }

    /// Poll without blocking.  Yields the snapshot exactly once.
    pub fn try_take(&mut self) -> Option<Vec<Device>> {
        if self.taken {
            return None;
        }
        let result = match self.receiver.try_recv() {
            Ok(devices) => Some(devices),
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Some(self.lost()),
        };
        self.taken = true;
        result
    }

    /// A worker that panicked drops its sender; the query still resolves.
    fn lost(&self) -> Vec<Device> {
        self.diagnostics.report(
            SOURCE,
            &Error::UnknownError("query ended without an answer".into()),
        );
        Vec::new()
    }
}
