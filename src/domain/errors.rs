use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no MAC address could be determined for the default interface")]
    MacUnavailable,

    #[error("MAC address lookup failed")]
    MacLookup(#[from] mac_address::MacAddressError),

    #[error("pingback request failed")]
    Transport(#[from] reqwest::Error),
}
