//! Result records produced for each fetched endpoint.
use serde::{Deserialize, Serialize};

/// Outcome of a single endpoint: either a quote or a reported failure.
///
/// Encoded as `{"quote": "..."}` or `{"failure": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteRecord {
    /// Status `200`: the payload message is a quote.
    Quote(String),
    /// Status `500`: the payload message describes a failure.
    Failure(String),
}

impl QuoteRecord {
    /// Returns the constructor for a supported status, or `None` for any other status.
    pub fn for_status(status: u16) -> Option<fn(String) -> QuoteRecord> {
        match status {
            200 => Some(QuoteRecord::Quote),
            500 => Some(QuoteRecord::Failure),
            _ => None,
        }
    }

    /// The carried message, whichever variant this is.
    pub fn message(&self) -> &str {
        match self {
            QuoteRecord::Quote(message) | QuoteRecord::Failure(message) => message,
        }
    }
}
