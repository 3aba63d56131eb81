use std::{sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ureq::Agent;
use url::Url;

use crate::{
    device::{Device, DeviceStatus},
    diagnostics::{DiagnosticsHandle, LogDiagnostics},
    error::Error,
    util::default_ureq_agent_builder,
};

use super::DeviceInventory;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/cameras";

/// Payload shape served by the inventory endpoint.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum InventoryFeed {
    /// Array of device records, one per camera.
    Cameras,
    /// Array of scanner status records, as served by `/api/devices/statuses/`.
    DeviceStatuses,
}

impl Default for InventoryFeed {
    fn default() -> Self {
        Self::Cameras
    }
}

impl InventoryFeed {
    pub fn decode(self, body: &str) -> Result<Vec<Device>, Error> {
        let payload: Value = serde_json::from_str(body)
            .map_err(|err| Error::MalformedResponse(format!("body is not JSON: {err}")))?;
        let items = match payload {
            Value::Array(items) => items,
            other => {
                return Err(Error::MalformedResponse(format!(
                    "expected an array, got {}",
                    json_type(&other)
                )));
            }
        };

        let devices = match self {
            Self::Cameras => items
                .into_iter()
                .map(serde_json::from_value::<Device>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| Error::MalformedResponse(format!("invalid device: {err}")))?,
            Self::DeviceStatuses => items
                .into_iter()
                .enumerate()
                .map(|(position, item)| {
                    let status: DeviceStatus = serde_json::from_value(item).map_err(|err| {
                        Error::MalformedResponse(format!("invalid device status: {err}"))
                    })?;
                    let index = u32::try_from(position + 1)
                        .map_err(|_| Error::MalformedResponse("too many devices".into()))?;
                    Ok(status.to_device(index))
                })
                .collect::<Result<Vec<_>, Error>>()?,
        };

        Device::validate_snapshot(&devices)
            .map_err(|violation| Error::MalformedResponse(violation.to_string()))?;
        Ok(devices)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Clone, Debug)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub feed: InventoryFeed,
    pub proxy_url: Option<String>,
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            feed: InventoryFeed::default(),
            proxy_url: None,
            timeout: Duration::from_secs(5),
        }
    }
}

/// Inventory backed by the fleet service, one `GET` per query.
pub struct RemoteInventory {
    config: RemoteConfig,
    agent: Agent,
    diagnostics: DiagnosticsHandle,
}

impl RemoteInventory {
    pub fn new(config: RemoteConfig) -> Self {
        Self::with_diagnostics(config, Arc::new(LogDiagnostics))
    }

    pub fn with_diagnostics(config: RemoteConfig, diagnostics: DiagnosticsHandle) -> Self {
        let agent = default_ureq_agent_builder(config.proxy_url.as_deref(), config.timeout)
            .build()
            .into();
        Self {
            config,
            agent,
            diagnostics,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Issue the request and classify whatever comes back.  `fetch_devices`
    /// is this with every failure absorbed.
    pub fn query(&self) -> Result<Vec<Device>, Error> {
        let url = Url::parse(&self.config.endpoint).map_err(|err| {
            Error::UnknownError(format!("invalid endpoint {:?}: {err}", self.config.endpoint))
        })?;

        log::debug!("fetching devices from {url}");
        let mut response = self.agent.get(url.as_str()).call().map_err(classify)?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(classify_body)?;

        if status >= 400 {
            return Err(Error::ServerError { status, body });
        }
        self.config.feed.decode(&body)
    }
}

impl DeviceInventory for RemoteInventory {
    fn fetch_devices(&self) -> Vec<Device> {
        match self.query() {
            Ok(devices) => {
                log::info!("fetched {} devices from {}", devices.len(), self.endpoint());
                devices
            }
            Err(err) => {
                self.diagnostics.report(self.endpoint(), &err);
                Vec::new()
            }
        }
    }
}

/// The status line already arrived, so anything but an oversized or
/// undecodable body means the response never completed.
fn classify_body(err: ureq::Error) -> Error {
    match err {
        ureq::Error::BodyExceedsLimit(limit) => {
            Error::MalformedResponse(format!("body exceeds {limit} bytes"))
        }
        err => Error::NetworkError(err.to_string()),
    }
}

fn classify(err: ureq::Error) -> Error {
    match err {
        ureq::Error::StatusCode(status) => Error::ServerError {
            status,
            body: String::new(),
        },
        ureq::Error::Io(_)
        | ureq::Error::Timeout(_)
        | ureq::Error::HostNotFound
        | ureq::Error::ConnectionFailed => Error::NetworkError(err.to_string()),
        err => Error::UnknownError(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn camera_feed_decodes_in_order() {
        let body = r#"[
            {"index": 1, "description": "Front Door Camera", "active": true, "ip": "192.168.1.10"},
            {"index": 2, "description": "Backyard Camera", "active": false, "ip": "192.168.1.11"}
        ]"#;
        let devices = InventoryFeed::Cameras.decode(body).unwrap();
        assert_eq!(
            devices,
            vec![
                Device::new(1, "Front Door Camera", true, "192.168.1.10"),
                Device::new(2, "Backyard Camera", false, "192.168.1.11"),
            ]
        );
    }

    #[test]
    fn object_payload_is_malformed() {
        let err = InventoryFeed::Cameras
            .decode(r#"{"devices": []}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn non_json_and_bad_elements_are_malformed() {
        for body in [
            "",
            "<html>gateway</html>",
            r#"[{"index": "one", "description": "x", "active": true, "ip": "h"}]"#,
            r#"[{"index": 0, "description": "x", "active": true, "ip": "h"}]"#,
            r#"[{"index": 1, "description": "a", "active": true, "ip": "h"},
                {"index": 1, "description": "b", "active": true, "ip": "h"}]"#,
        ] {
            let err = InventoryFeed::Cameras.decode(body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedResponse, "body: {body}");
        }
    }

    #[test]
    fn empty_array_is_a_valid_snapshot() {
        assert!(InventoryFeed::Cameras.decode("[]").unwrap().is_empty());
    }

    #[test]
    fn status_feed_is_indexed_by_position() {
        let body = r#"[
            {"mac_address": "aa:bb:cc:00:00:01", "ip_address": "10.1.0.5", "location": "Depot gate",
             "version": "1.4", "is_up": true, "last_seen": "2024-05-01T10:00:00Z",
             "initial_uptime": "2024-05-01T09:00:00Z", "stream_id": 7},
            {"mac_address": "aa:bb:cc:00:00:02", "ip_address": "10.1.0.6", "location": "",
             "version": "", "is_up": false, "last_seen": "2024-05-01T08:00:00Z",
             "initial_uptime": null, "stream_id": null}
        ]"#;
        let devices = InventoryFeed::DeviceStatuses.decode(body).unwrap();
        assert_eq!(
            devices,
            vec![
                Device::new(1, "Depot gate", true, "10.1.0.5"),
                Device::new(2, "aa:bb:cc:00:00:02", false, "10.1.0.6"),
            ]
        );
    }

    #[test]
    fn invalid_endpoint_is_unknown_error() {
        let inventory = RemoteInventory::new(RemoteConfig {
            endpoint: "not a url".into(),
            ..RemoteConfig::default()
        });
        let err = inventory.query().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownError);
        assert!(inventory.fetch_devices().is_empty());
    }
}
