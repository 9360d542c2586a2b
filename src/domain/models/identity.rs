use std::net::Ipv4Addr;

use serde::Serialize;

/// Network identity reported by a pingback. Field names double as query parameters.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub ipaddress: Ipv4Addr,
    pub macaddress: String,
}

impl Identity {
    pub fn new(ipaddress: Ipv4Addr, raw_mac: &str) -> Self {
        Self {
            ipaddress,
            macaddress: strip_mac_separators(raw_mac),
        }
    }
}

pub fn strip_mac_separators(raw: &str) -> String {
    raw.replace(':', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_uppercase_mac() {
        assert_eq!(strip_mac_separators("AA:BB:CC:DD:EE:FF"), "AABBCCDDEEFF");
    }

    #[test]
    fn test_strip_keeps_case() {
        assert_eq!(strip_mac_separators("00:1a:2B:3c:4D:5e"), "001a2B3c4D5e");
    }

    #[test]
    fn test_strip_without_separators_is_identity() {
        assert_eq!(strip_mac_separators("001122334455"), "001122334455");
    }

    #[test]
    fn test_identity_new_strips_mac() {
        let identity = Identity::new(Ipv4Addr::new(10, 0, 0, 7), "00:11:22:33:44:55");
        assert_eq!(identity.ipaddress, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(identity.macaddress, "001122334455");
    }
}
