//! The network boundary used by the fetcher.
use async_trait::async_trait;

use crate::error::TransportError;
use crate::model::RawResponse;

/// Performs one request per endpoint.
///
/// Implementations return `Ok(None)` when the request completed without producing a
/// response, and `Err` when the request itself failed. Timeouts, if any, are the
/// implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches `endpoint` and reports its raw status and body.
    async fn get(&self, endpoint: &str) -> Result<Option<RawResponse>, TransportError>;
}

#[async_trait]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    async fn get(&self, endpoint: &str) -> Result<Option<RawResponse>, TransportError> {
        (**self).get(endpoint).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn get(&self, endpoint: &str) -> Result<Option<RawResponse>, TransportError> {
        (**self).get(endpoint).await
    }
}
