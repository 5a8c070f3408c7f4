//! Command-line arguments for the Quote Fetcher.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Endpoints to fetch, in the order results should be reported.
    pub endpoints: Vec<String>,

    /// Path to a text file with one endpoint per line.
    /// Empty lines and lines starting with `#` are ignored.
    #[clap(long)]
    pub path: Option<String>,

    /// Answer from the built-in canned responses instead of the network.
    /// Without endpoints, fetches the four well-known Arnie quotes.
    #[clap(long)]
    pub canned: bool,

    /// Per-request timeout in seconds for HTTP requests.
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}
