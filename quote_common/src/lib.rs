//!
//! Common types and utilities for fetching quotes.
//!
//! This crate aggregates:
//! - `error` — `QuoteError` raised by a batch fetch and `TransportError` raised by transports.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `model` — raw responses, decoded payloads and the per-endpoint `QuoteRecord`.
//! - `transport` — the `Transport` trait the fetcher issues requests through.
//! - `endpoints` — parsing endpoint lists from text files.
#![warn(missing_docs)]
pub mod endpoints;
pub mod error;
pub mod model;
pub mod result;
pub mod transport;

pub use error::{QuoteError, TransportError};
pub use model::{Payload, QuoteRecord, RawResponse};
pub use result::Result;
pub use transport::Transport;
