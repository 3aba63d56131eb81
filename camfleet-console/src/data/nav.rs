use camfleet_core::nav::{RegistryError, RouteRegistry};
use serde::{Deserialize, Serialize};

/// Screens the console can show.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    PanelStreams,
    Streams,
    Playback,
    Download,
    FleetManagement,
    Settings,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::PanelStreams => "Streams Panel",
            View::Streams => "Streams",
            View::Playback => "Playback",
            View::Download => "Download",
            View::FleetManagement => "Fleet Management",
            View::Settings => "Settings",
        }
    }

    pub fn shows_devices(&self) -> bool {
        matches!(
            self,
            View::Home | View::PanelStreams | View::Streams | View::FleetManagement
        )
    }
}

/// Released navigation layouts.  Each one is a fresh table, older ones stay
/// selectable from the config.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum RouteTable {
    V1,
    V2,
    V3,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::V3
    }
}

impl RouteTable {
    pub fn registry(self) -> Result<RouteRegistry<View>, RegistryError> {
        match self {
            RouteTable::V1 => RouteRegistry::builder()
                .home("Home", View::Home)
                .route(
                    "Streams Panel",
                    "/panelstreams",
                    View::PanelStreams,
                    "mdi-solar-panel-large",
                )
                .route("Settings", "/settings", View::Settings, "mdi-cog")
                .build(),
            RouteTable::V2 => RouteRegistry::builder()
                .home("Home", View::Home)
                .route("Streams", "/streams", View::Streams, "mdi-video")
                .route("Settings", "/settings", View::Settings, "mdi-cog")
                .route(
                    "Fleet Management",
                    "/fleetmanagement",
                    View::FleetManagement,
                    "mdi-truck",
                )
                .build(),
            RouteTable::V3 => RouteRegistry::builder()
                .home("Home", View::Home)
                .route("Streams", "/streams", View::Streams, "mdi-video")
                .route("Playback", "/playback", View::Playback, "mdi-play-circle")
                .route("Download", "/download", View::Download, "mdi-download")
                .route(
                    "Fleet Management",
                    "/fleetmanagement",
                    View::FleetManagement,
                    "mdi-truck",
                )
                .route("Settings", "/settings", View::Settings, "mdi-cog")
                .build(),
        }
    }
}
