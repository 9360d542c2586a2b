use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

pub struct PingbackConfig;

impl PingbackConfig {
    pub const PINGBACK_URL: &'static str = "http://ci-pingback.localdomain:5010/pingback";

    // Unroutable target; connecting a UDP socket only resolves the route.
    pub const PROBE_ADDRESS: SocketAddr =
        SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(10, 255, 255, 255), 1));
    pub const PROBE_BIND_ADDRESS: &'static str = "0.0.0.0:0";
    pub const FALLBACK_IP: Ipv4Addr = Ipv4Addr::LOCALHOST;
}

/// Settings for a single report run.
///
/// Both timeouts default to `None`: the probe and the pingback request may block
/// for as long as the OS lets them.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub probe_address: SocketAddr,
    pub probe_timeout: Option<Duration>,
    pub pingback_url: String,
    pub request_timeout: Option<Duration>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            probe_address: PingbackConfig::PROBE_ADDRESS,
            probe_timeout: None,
            pingback_url: PingbackConfig::PINGBACK_URL.to_string(),
            request_timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_probe_address() {
        let settings = ReportSettings::default();
        assert_eq!(settings.probe_address.to_string(), "10.255.255.255:1");
    }

    #[test]
    fn test_default_has_no_timeouts() {
        let settings = ReportSettings::default();
        assert!(settings.probe_timeout.is_none());
        assert!(settings.request_timeout.is_none());
    }

    #[test]
    fn test_default_pingback_url() {
        assert_eq!(
            ReportSettings::default().pingback_url,
            "http://ci-pingback.localdomain:5010/pingback"
        );
    }
}
