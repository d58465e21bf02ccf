//! Mock fetcher for testing.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::fetcher::{DataFetcher, FetchError};

/// Mock implementation of the DataFetcher trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable payload
/// - Track requested URLs for assertions
/// - Simulate a failure on the next call
#[derive(Debug)]
pub struct MockFetcher {
    /// Payload returned by every successful fetch.
    payload: Arc<RwLock<Value>>,
    /// URLs passed to `fetch`, in call order.
    requests: Arc<RwLock<Vec<String>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<FetchError>>>,
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFetcher {
    /// Create a mock fetcher that returns an empty array.
    pub fn new() -> Self {
        Self::with_payload(Value::Array(Vec::new()))
    }

    /// Create a mock fetcher that returns `payload`.
    pub fn with_payload(payload: Value) -> Self {
        Self {
            payload: Arc::new(RwLock::new(payload)),
            requests: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the payload returned by later fetches.
    pub async fn set_payload(&self, payload: Value) {
        *self.payload.write().await = payload;
    }

    /// Make the next fetch fail with `error`.
    pub async fn set_next_error(&self, error: FetchError) {
        *self.next_error.write().await = Some(error);
    }

    /// URLs requested so far.
    pub async fn requested_urls(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl DataFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        self.requests.write().await.push(url.to_string());

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(self.payload.read().await.clone())
    }
}
