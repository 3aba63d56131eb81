use std::time::Duration;

pub const NET_CONNECT_TIMEOUT: Duration = Duration::from_millis(4 * 1000);

pub const NET_IO_TIMEOUT: Duration = Duration::from_millis(8 * 1000);

/// Agent configuration shared by every HTTP collaborator.  Error statuses are
/// handed back as regular responses so callers can keep the body.
pub fn default_ureq_agent_builder(
    proxy_url: Option<&str>,
    timeout: Duration,
) -> ureq::config::ConfigBuilder<ureq::typestate::AgentScope> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .timeout_connect(Some(NET_CONNECT_TIMEOUT.min(timeout)))
        .timeout_recv_response(Some(NET_IO_TIMEOUT))
        .timeout_send_request(Some(NET_IO_TIMEOUT));

    // Proxying is opt-in, ureq would otherwise pick one up from the environment.
    let proxy = proxy_url.and_then(|proxy_url| match ureq::Proxy::new(proxy_url) {
        Ok(proxy) => Some(proxy),
        Err(err) => {
            log::warn!("ignoring invalid proxy {proxy_url:?}: {err}");
            None
        }
    });
    agent.proxy(proxy)
}
