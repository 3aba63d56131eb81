use std::io::{self, Write};

use crate::data::{Config, InventorySource};

pub fn render(config: &Config, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "  Inventory source: {:?}", config.inventory_source)?;
    if config.inventory_source == InventorySource::Remote {
        writeln!(out, "  Endpoint:         {}", config.inventory_url)?;
        writeln!(out, "  Feed:             {:?}", config.inventory_feed)?;
        writeln!(out, "  Timeout:          {}s", config.request_timeout().as_secs())?;
    }
    writeln!(out, "  Route table:      {:?}", config.route_table)
}
