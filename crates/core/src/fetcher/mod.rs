//! Retrieval of the JSON payload from the remote endpoint.
//!
//! The `DataFetcher` trait is the seam between the pipeline and the network:
//! production code uses [`HttpFetcher`], tests use
//! [`MockFetcher`](crate::testing::MockFetcher).

mod http;

pub use http::HttpFetcher;

use std::error::Error as _;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while fetching the payload.
///
/// Every message carries the `Failed to fetch data:` prefix so that the
/// stage is obvious when only the message reaches the user.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to fetch data: could not build HTTP client: {}", error_chain(.0))]
    Client(#[source] reqwest::Error),

    /// No complete response arrived within the configured timeout.
    #[error("Failed to fetch data: request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Connection, DNS, TLS or body transfer failure.
    #[error("Failed to fetch data: {}", error_chain(.0))]
    Transport(#[source] reqwest::Error),

    /// The server answered with a status outside 200-299.
    #[error("Failed to fetch data: Network response was not ok. Status: {0}")]
    Status(u16),

    /// The body was received but is not valid JSON.
    #[error("Failed to fetch data: invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether this failure was caused by the client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }
}

/// Trait for anything that can retrieve a JSON document from a URL.
///
/// Implementations perform exactly one attempt per call and never retry.
/// The URL is expected to have been validated already.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    /// Fetch `url` and decode the body as JSON, without any schema check.
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

/// Join an error and its sources into one line.
///
/// reqwest keeps the useful part ("connection refused", "dns error") in the
/// source chain, not in the top-level message.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}
