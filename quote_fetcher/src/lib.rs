//! Quote Fetcher — fetches a batch of quote endpoints concurrently and maps every response to
//! a `QuoteRecord`, keeping the input order.
//!
//! - `fetcher` — `QuoteFetcher`, the request/validate/decode/map pipeline.
//! - `http` — `HttpTransport`, a `reqwest`-backed transport.
//! - `canned` — `CannedTransport`, in-memory responses with simulated latency.
//!
//! ```no_run
//! use quote_fetcher::{HttpTransport, QuoteFetcher};
//!
//! # async fn run() -> quote_common::Result<()> {
//! let fetcher = QuoteFetcher::new(HttpTransport::new());
//! let records = fetcher.fetch_all(&["http://www.smokeballdev.com/arnie0"]).await?;
//! println!("{records:?}");
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]
pub mod canned;
pub mod fetcher;
pub mod http;

pub use canned::{CannedTransport, Latency};
pub use fetcher::QuoteFetcher;
pub use http::HttpTransport;
