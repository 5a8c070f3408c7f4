//! Error types shared between the fetcher library and the CLI.
//!
//! `QuoteError` is the single error surfaced by a batch fetch. Every variant is fatal to the
//! whole batch; nothing here is retried or recovered internally.
use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// Unified error type for fetching and mapping quotes.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Failure raised by the transport itself. Displayed as-is so callers see the
    /// transport's own message.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response was absent, had no (or an empty) body, or had no (or a zero) status.
    #[error("Invalid response")]
    InvalidResponse,

    /// The body could not be decoded as `{ "message": string }`.
    #[error("Error when making request {0}")]
    Decode(#[source] serde_json::Error),

    /// The status is neither `200` nor `500`.
    #[error("Unknown error with status {status} and body {body}")]
    UnsupportedStatus {
        /// Status code as reported by the transport.
        status: u16,
        /// Raw, undecoded body.
        body: String,
    },

    /// I/O error while reading an endpoint list.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding results as JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[source] serde_json::Error),
}

/// Error reported by a [`Transport`](crate::transport::Transport) implementation.
///
/// Carries the transport's message verbatim plus, when available, the underlying cause.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an underlying error, reusing its display text as the message.
    pub fn from_source<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// The transport's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_response_message_is_exact() {
        assert_eq!(QuoteError::InvalidResponse.to_string(), "Invalid response");
    }

    #[test]
    fn unsupported_status_carries_status_and_body() {
        let err = QuoteError::UnsupportedStatus {
            status: 404,
            body: r#"{"message":"Arnie is the best"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Unknown error with status 404 and body {"message":"Arnie is the best"}"#
        );
    }

    #[test]
    fn decode_error_is_prefixed() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = QuoteError::Decode(parse_err);
        assert!(err.to_string().starts_with("Error when making request "));
    }

    #[test]
    fn transport_error_is_transparent() {
        let err: QuoteError = TransportError::new("Something went wrong").into();
        assert_eq!(err.to_string(), "Something went wrong");
        assert!(
            matches!(err, QuoteError::Transport(ref t) if t.message() == "Something went wrong")
        );
    }

    #[test]
    fn transport_error_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let err = TransportError::from_source(io_err);
        assert_eq!(err.to_string(), "connection refused");
        assert!(StdError::source(&err).is_some());
    }
}
