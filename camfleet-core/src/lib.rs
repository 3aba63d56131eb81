#![allow(clippy::new_without_default)]

pub mod device;
pub mod diagnostics;
pub mod error;
pub mod inventory;
pub mod loader;
pub mod nav;
pub mod util;
