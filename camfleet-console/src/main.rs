mod data;
mod error;
mod ui;

use std::{
    env,
    io::{self, Write},
    process,
};

use camfleet_core::{
    loader::InventoryService,
    nav::{Router, HOME_PATH},
};
use crossbeam_channel::unbounded;
use env_logger::{Builder, Env};

use crate::data::{AppState, Config, PromiseState, View};

const ENV_LOG: &str = "CAMFLEET_LOG";
const ENV_LOG_STYLE: &str = "CAMFLEET_LOG_STYLE";
const INIT_CONFIG_FLAG: &str = "--init-config";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    let path = env::args().nth(1).unwrap_or_else(|| HOME_PATH.to_string());
    if path == INIT_CONFIG_FLAG {
        match Config::init() {
            Ok(written) => log::info!("wrote configuration to {:?}", written),
            Err(err) => {
                log::error!("failed to write configuration: {err}");
                process::exit(1);
            }
        }
        return;
    }

    // Load configuration
    let config = Config::load().unwrap_or_default();

    let router = match config.route_table.registry() {
        Ok(registry) => Router::new(registry),
        Err(err) => {
            log::error!("route table {:?} is invalid: {}", config.route_table, err);
            process::exit(1);
        }
    };
    let service = InventoryService::new(config.inventory(), config.worker_threads);

    let mut state = AppState::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&mut state, &router, &service, &path, &mut out) {
        log::error!("failed to render {path}: {err}");
        process::exit(1);
    }
}

fn run(
    state: &mut AppState,
    router: &Router<View>,
    service: &InventoryService,
    path: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    state.navigate(router.dispatch_or_home(path).view);
    if !state.view.shows_devices() {
        return ui::render(state, router, out);
    }

    let (sender, receiver) = unbounded();
    let request = state.request_devices();
    service.fetch_devices_with(move |devices| {
        let _ = sender.send((request, devices));
    });

    while state.devices.state() == PromiseState::Deferred {
        match receiver.recv() {
            Ok((request, devices)) => state.devices_loaded(request, devices),
            Err(_) => {
                log::error!("inventory worker went away without answering");
                state.devices_loaded(request, Vec::new());
            }
        }
    }
    log::debug!(
        "showing {} devices",
        state.devices.resolved().map_or(0, Vec::len)
    );
    ui::render(state, router, out)?;
    out.flush()
}
