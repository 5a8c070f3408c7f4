//! In-process stand-in for the quotes HTTP interface.
//!
//! `CannedTransport` answers the four well-known Arnie endpoints with fixed responses after a
//! simulated network delay. Unknown endpoints get a `404`. Used by the CLI's `--canned` mode
//! and by tests that need realistic latency without a network.
use std::collections::HashMap;
use std::ops::Range;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use quote_common::{RawResponse, Transport, TransportError};
use rand::Rng;

/// Upper bound (exclusive) of the default simulated latency, in milliseconds.
pub const MAX_LATENCY_MS: u64 = 200;

/// The well-known endpoints served by [`CannedTransport::arnie`], in their canonical order.
pub const ARNIE_ENDPOINTS: [&str; 4] = [
    "http://www.smokeballdev.com/arnie0",
    "http://www.smokeballdev.com/arnie1",
    "http://www.smokeballdev.com/arnie2",
    "http://www.smokeballdev.com/arnie3",
];

const ARNIE_RESPONSES: [(u16, &str); 4] = [
    (200, r#"{"message":"Get to the chopper"}"#),
    (200, r#"{"message":"MY NAME IS NOT QUAID"}"#),
    (200, r#"{"message":"What's wrong with Wolfie?"}"#),
    (500, r#"{"message":"Your request has been terminated"}"#),
];

const NOT_FOUND_BODY: &str = r#"{"message":"Not found"}"#;

/// Simulated network delay applied before each canned reply.
#[derive(Debug, Clone)]
pub enum Latency {
    /// Always wait exactly this long.
    Fixed(Duration),
    /// Wait a uniformly random number of milliseconds from the range.
    Random(Range<u64>),
}

impl Latency {
    fn sample(&self) -> Duration {
        match self {
            Latency::Fixed(delay) => *delay,
            Latency::Random(range) if range.is_empty() => Duration::from_millis(range.start),
            Latency::Random(range) => {
                Duration::from_millis(rand::rng().random_range(range.clone()))
            }
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::Random(0..MAX_LATENCY_MS)
    }
}

/// [`Transport`] serving fixed responses from memory.
#[derive(Debug, Clone, Default)]
pub struct CannedTransport {
    routes: HashMap<String, RawResponse>,
    latency: Latency,
}

impl CannedTransport {
    /// Creates a transport with no routes and the default random latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport serving the four well-known Arnie quotes.
    pub fn arnie() -> Self {
        ARNIE_ENDPOINTS
            .iter()
            .zip(ARNIE_RESPONSES)
            .fold(Self::new(), |transport, (endpoint, (status, body))| {
                transport.with_route(*endpoint, RawResponse::new(status, body))
            })
    }

    /// Adds (or replaces) the response served for `endpoint`.
    pub fn with_route(mut self, endpoint: impl Into<String>, response: RawResponse) -> Self {
        self.routes.insert(endpoint.into(), response);
        self
    }

    /// Replaces the simulated latency.
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    fn lookup(&self, endpoint: &str) -> RawResponse {
        self.routes
            .get(endpoint)
            .cloned()
            .unwrap_or_else(|| RawResponse::new(404, NOT_FOUND_BODY))
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn get(&self, endpoint: &str) -> Result<Option<RawResponse>, TransportError> {
        let delay = self.latency.sample();
        tokio::time::sleep(delay).await;
        let response = self.lookup(endpoint);
        debug!("canned {} -> {:?} after {:?}", endpoint, response.status, delay);
        Ok(Some(response))
    }
}
