use std::net::{IpAddr, Ipv4Addr};
use if_addrs::get_if_addrs;

/// Name of the interface that currently holds `ip`, if any.
pub fn interface_name_for(ip: Ipv4Addr) -> Option<String> {
    get_if_addrs()
        .ok()?
        .into_iter()
        .find(|iface| iface.ip() == IpAddr::V4(ip))
        .map(|iface| iface.name)
}
