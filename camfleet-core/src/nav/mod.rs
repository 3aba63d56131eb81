//! Navigation table shared by the router and the menu.

mod menu;
mod registry;
mod router;

pub use menu::{menu_items, menu_items_where, MenuItem};
pub use registry::{RegistryBuilder, RegistryError, Route, RouteRegistry, HOME_PATH};
pub use router::Router;
