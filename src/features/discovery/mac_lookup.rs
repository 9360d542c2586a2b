use std::net::Ipv4Addr;

use mac_address::{get_mac_address, mac_address_by_name};
use crate::domain::errors::ReportError;
use crate::domain::models::strip_mac_separators;
use crate::utils::interface_name_for;

/// Source of the hardware address to report
pub trait MacSource: Send + Sync {
    /// Colon-delimited MAC address, e.g. `AA:BB:CC:DD:EE:FF`.
    fn mac_address(&self) -> Result<String, ReportError>;
}

/// Uses whichever interface the OS lookup considers the default.
pub struct DefaultInterfaceMac;

impl MacSource for DefaultInterfaceMac {
    fn mac_address(&self) -> Result<String, ReportError> {
        get_mac_address()?
            .map(|mac| mac.to_string())
            .ok_or(ReportError::MacUnavailable)
    }
}

/// Logs a warning when the interface holding `ip` has a different MAC than `mac`.
///
/// The default-interface MAC lookup and the route probe choose interfaces
/// independently, so on multi-homed hosts they can disagree. Only reported,
/// the pingback still carries both values unchanged.
pub fn warn_on_interface_mismatch(ip: Ipv4Addr, mac: &str) {
    if ip.is_loopback() {
        return;
    }

    let Some(name) = interface_name_for(ip) else {
        log::debug!("No interface holds {}, skipping MAC consistency check", ip);
        return;
    };

    match mac_address_by_name(&name) {
        Ok(Some(iface_mac)) if mac_mismatch(mac, &iface_mac.to_string()) => {
            log::warn!(
                "Reported MAC {} does not belong to {} ({} has MAC {})",
                mac,
                ip,
                name,
                iface_mac
            );
        }
        Ok(Some(_)) => {}
        Ok(None) => log::debug!("Interface {} has no MAC address", name),
        Err(e) => log::debug!("MAC lookup for {} failed: {}", name, e),
    }
}

/// True when two MACs differ, ignoring case and colon separators.
fn mac_mismatch(reported: &str, iface_mac: &str) -> bool {
    !strip_mac_separators(reported).eq_ignore_ascii_case(&strip_mac_separators(iface_mac))
}
