//! Quote Fetcher CLI — fetches a list of quote endpoints concurrently and prints the mapped
//! results as a JSON array on stdout, in the order the endpoints were given.
//!
//! Usage example (CLI):
//! ```bash
//! quote_fetcher http://www.smokeballdev.com/arnie0 --path ./endpoints.txt --timeout-secs 5
//! quote_fetcher --canned
//! ```
//!
//! The endpoint file holds one endpoint per line. See `quote_common::endpoints` for details.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::{error, info};
use quote_common::endpoints::{EndpointParser, Endpoints};
use quote_common::{QuoteError, QuoteRecord, Result, Transport};
use quote_fetcher::canned::ARNIE_ENDPOINTS;
use quote_fetcher::{CannedTransport, HttpTransport, QuoteFetcher};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("Fetching quotes failed: {}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(args: Args) -> Result<(), QuoteError> {
    let mut endpoints = args.endpoints;

    if let Some(raw_path) = args.path.as_deref() {
        let file_path = normalize_path(raw_path);
        if !is_file_exist(&file_path) {
            return Err(QuoteError::Format(format!(
                "Endpoint file not found: {}",
                file_path.display()
            )));
        }
        let file = File::open(&file_path)?;
        endpoints.extend(Endpoints::parse_from_file(BufReader::new(file))?);
    }

    let transport: Box<dyn Transport> = if args.canned {
        if endpoints.is_empty() {
            endpoints = ARNIE_ENDPOINTS.iter().map(|e| e.to_string()).collect();
        }
        info!("Using canned responses");
        Box::new(CannedTransport::arnie())
    } else {
        match args.timeout_secs {
            Some(secs) => Box::new(HttpTransport::with_timeout(Duration::from_secs(secs))?),
            None => Box::new(HttpTransport::new()),
        }
    };

    info!("Fetching {} endpoint(s)", endpoints.len());
    let fetcher = QuoteFetcher::new(transport);
    let records = fetcher.fetch_all(&endpoints).await?;
    info!("Fetched {} record(s)", records.len());

    print_records(&records)
}

fn print_records(records: &[QuoteRecord]) -> Result<(), QuoteError> {
    let json = serde_json::to_string_pretty(records).map_err(QuoteError::Json)?;
    println!("{}", json);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &Path) -> bool {
    path.exists() && path.is_file()
}
