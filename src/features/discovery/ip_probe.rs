use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use tokio::net::UdpSocket;
use crate::domain::config::PingbackConfig;

/// Best-guess outbound IPv4 address of this host.
///
/// Connecting a UDP socket makes the OS pick a route and bind a local address
/// without sending anything. Any failure yields `127.0.0.1`.
pub async fn discover_local_ip(probe_address: SocketAddr, probe_timeout: Option<Duration>) -> Ipv4Addr {
    let result = match probe_timeout {
        Some(limit) => match tokio::time::timeout(limit, probe(probe_address)).await {
            Ok(result) => result,
            Err(_) => Err(io::Error::new(io::ErrorKind::TimedOut, "route probe timed out")),
        },
        None => probe(probe_address).await,
    };

    match result {
        Ok(ip) => ip,
        Err(e) => {
            log::debug!("Route probe to {} failed ({}), using {}", probe_address, e, PingbackConfig::FALLBACK_IP);
            PingbackConfig::FALLBACK_IP
        }
    }
}

// The socket is dropped on return, whichever branch is taken.
async fn probe(probe_address: SocketAddr) -> io::Result<Ipv4Addr> {
    let socket = UdpSocket::bind(PingbackConfig::PROBE_BIND_ADDRESS).await?;
    socket.connect(probe_address).await?;

    match socket.local_addr()?.ip() {
        IpAddr::V4(ip) => Ok(ip),
        IpAddr::V6(ip) => Err(io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            format!("probe bound non-IPv4 address {}", ip),
        )),
    }
}
