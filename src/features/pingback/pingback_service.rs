use crate::domain::config::ReportSettings;
use crate::domain::errors::ReportError;
use crate::domain::models::Identity;
use crate::features::discovery::ip_probe::discover_local_ip;
use crate::features::discovery::mac_lookup::{warn_on_interface_mismatch, MacSource};
use crate::features::pingback::pingback_client::PingbackClient;

/// Discovers this host's identity and reports it once
pub struct IdentityReporter<M: MacSource, C: PingbackClient> {
    settings: ReportSettings,
    mac_source: M,
    client: C,
}

impl<M: MacSource, C: PingbackClient> IdentityReporter<M, C> {
    pub fn new(settings: ReportSettings, mac_source: M, client: C) -> Self {
        Self {
            settings,
            mac_source,
            client,
        }
    }

    /// Runs one pingback and returns what was sent.
    ///
    /// MAC lookup and transport failures end the run; there is no retry.
    pub async fn report_identity(&self) -> Result<Identity, ReportError> {
        let raw_mac = self.mac_source.mac_address()?;
        let ip = discover_local_ip(self.settings.probe_address, self.settings.probe_timeout).await;
        let identity = Identity::new(ip, &raw_mac);

        warn_on_interface_mismatch(identity.ipaddress, &identity.macaddress);

        log::info!(
            "Reporting ip {} mac {} to {}",
            identity.ipaddress,
            identity.macaddress,
            self.settings.pingback_url
        );
        self.client.send(&identity).await?;

        Ok(identity)
    }
}
