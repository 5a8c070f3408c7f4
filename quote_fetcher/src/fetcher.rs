//! Batch fetching of quotes.
//!
//! `QuoteFetcher` turns a list of endpoints into a list of `QuoteRecord`s. Each endpoint goes
//! through the same straight-line pipeline: request, validate, decode, map by status. All
//! requests are started together and awaited jointly; the first error fails the batch.
//!
//! There is no upper bound on the number of in-flight requests: one request per endpoint is
//! issued at once.
use futures::future::try_join_all;
use log::debug;
use quote_common::{Payload, QuoteError, QuoteRecord, RawResponse, Result, Transport};

/// Fetches quotes through a [`Transport`].
#[derive(Debug, Clone)]
pub struct QuoteFetcher<T> {
    transport: T,
}

impl<T: Transport> QuoteFetcher<T> {
    /// Creates a fetcher issuing requests through `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches every endpoint concurrently and returns the records in input order.
    ///
    /// Fails with the first error observed; results of the other requests are discarded.
    pub async fn fetch_all<S: AsRef<str>>(&self, endpoints: &[S]) -> Result<Vec<QuoteRecord>> {
        debug!("Fetching {} endpoint(s)", endpoints.len());
        try_join_all(endpoints.iter().map(|endpoint| self.fetch_one(endpoint.as_ref()))).await
    }

    /// Fetches a single endpoint and maps its response to a record.
    pub async fn fetch_one(&self, endpoint: &str) -> Result<QuoteRecord> {
        debug!("GET {}", endpoint);
        let response = self.transport.get(endpoint).await?;
        let (status, body) = RawResponse::validate(response)?;
        debug!("{} answered with status {}", endpoint, status);

        let document = Payload::parse(&body)?;
        let Some(make_record) = QuoteRecord::for_status(status) else {
            return Err(QuoteError::UnsupportedStatus { status, body });
        };
        let payload = Payload::from_document(document)?;
        Ok(make_record(payload.message))
    }
}
