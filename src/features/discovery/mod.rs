pub mod ip_probe;
pub mod mac_lookup;
