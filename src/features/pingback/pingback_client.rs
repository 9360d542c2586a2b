use reqwest::{Client, Request};
use crate::domain::config::ReportSettings;
use crate::domain::errors::ReportError;
use crate::domain::models::Identity;

/// Delivers an identity to the pingback endpoint
#[async_trait::async_trait]
pub trait PingbackClient: Send + Sync {
    /// Sends exactly one request. Failures are returned, never retried.
    async fn send(&self, identity: &Identity) -> Result<(), ReportError>;
}

pub struct HttpPingbackClient {
    client: Client,
    endpoint: String,
}

impl HttpPingbackClient {
    pub fn new(settings: &ReportSettings) -> Result<Self, ReportError> {
        let mut builder = Client::builder().no_proxy();
        if let Some(limit) = settings.request_timeout {
            builder = builder.timeout(limit);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: settings.pingback_url.clone(),
        })
    }

    /// GET `<endpoint>?ipaddress=<ip>&macaddress=<mac>`
    pub fn build_request(&self, identity: &Identity) -> Result<Request, ReportError> {
        Ok(self.client.get(&self.endpoint).query(identity).build()?)
    }
}

#[async_trait::async_trait]
impl PingbackClient for HttpPingbackClient {
    async fn send(&self, identity: &Identity) -> Result<(), ReportError> {
        let request = self.build_request(identity)?;
        log::debug!("GET {}", request.url());

        let response = self.client.execute(request).await?;
        log::debug!("Pingback answered with {}", response.status());
        Ok(())
    }
}
