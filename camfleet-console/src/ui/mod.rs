use std::io::{self, Write};

use camfleet_core::nav::Router;

use crate::data::{AppState, View};

mod devices;
mod menu;
mod settings;

pub fn render(state: &AppState, router: &Router<View>, out: &mut impl Write) -> io::Result<()> {
    menu::render(router.registry(), state.view, out)?;
    writeln!(out)?;
    writeln!(out, "{}", state.view.title())?;
    if state.view.shows_devices() {
        devices::render(&state.devices, out)
    } else if state.view == View::Settings {
        settings::render(&state.config, out)
    } else {
        writeln!(out, "  No recordings selected.")
    }
}
