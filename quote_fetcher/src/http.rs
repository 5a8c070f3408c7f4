//! HTTP transport backed by `reqwest`.
//!
//! Issues a plain `GET` per endpoint and reports the status line and body text unchanged.
//! Non-success statuses are not treated as errors here; interpreting them is the fetcher's job.
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use quote_common::{RawResponse, Transport, TransportError};
use reqwest::Client;

/// [`Transport`] that talks to real HTTP servers.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with reqwest's default client settings (no request timeout).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport whose requests fail after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::from_source)?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &str) -> Result<Option<RawResponse>, TransportError> {
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(TransportError::from_source)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::from_source)?;
        debug!("{} -> {} ({} bytes)", endpoint, status, body.len());

        Ok(Some(RawResponse::new(status, body)))
    }
}
