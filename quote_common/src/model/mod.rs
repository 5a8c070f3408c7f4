//! Data model types for fetched quotes.
//!
//! - `response` — raw transport responses and the decoded `Payload`.
//! - `record` — the `QuoteRecord` produced per endpoint.
pub mod record;
pub mod response;

pub use record::QuoteRecord;
pub use response::{Payload, RawResponse};
