mod domain;
mod features;
mod utils;

use anyhow::Result;

use crate::domain::config::ReportSettings;
use crate::domain::errors::ReportError;
use crate::features::discovery::mac_lookup::DefaultInterfaceMac;
use crate::features::pingback::pingback_client::HttpPingbackClient;
use crate::features::pingback::pingback_service::IdentityReporter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let settings = ReportSettings::default();
    let client = HttpPingbackClient::new(&settings)?;
    let reporter = IdentityReporter::new(settings, DefaultInterfaceMac, client);

    match reporter.report_identity().await {
        Ok(identity) => {
            log::info!("Pingback sent for {}", identity.ipaddress);
            Ok(())
        }
        Err(e) => {
            log::error!("{}", failure_message(e));
            std::process::exit(1);
        }
    }
}

/// One-line failure report including the full cause chain.
fn failure_message(err: ReportError) -> String {
    format!("Pingback failed: {:#}", anyhow::Error::from(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_failure_message_is_single_line() {
        let message = failure_message(ReportError::MacUnavailable);
        assert_eq!(
            message,
            "Pingback failed: no MAC address could be determined for the default interface"
        );
    }

    #[test]
    #[serial]
    fn test_failure_message_carries_transport_cause() {
        let cause = reqwest::Client::new().get("not a url").build().unwrap_err();
        let cause_text = cause.to_string();

        let message = failure_message(ReportError::from(cause));

        assert!(message.starts_with("Pingback failed: pingback request failed: "));
        assert!(message.contains(&cause_text));
        assert!(!message.contains('\n'));
    }
}
