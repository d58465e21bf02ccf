//! Validate, fetch, present.
//!
//! [`Pipeline`] is the single catch boundary of the application: a failure in
//! validation or retrieval becomes one `Error: <message>` line on the error
//! stream and nothing is printed on the output stream.

use std::io::{self, Write};
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::fetcher::{DataFetcher, FetchError};
use crate::presenter::present_to;
use crate::validator::{validate_url, InvalidUrlError};

/// Any failure that stops the pipeline before presentation.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrlError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// How a run ended.
///
/// The pipeline itself never aborts the process; the caller decides whether
/// `Failed` maps to a non-zero exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Failed,
}

impl RunOutcome {
    pub fn is_failure(self) -> bool {
        self == RunOutcome::Failed
    }
}

/// One-shot fetch-and-print pipeline for a single target URL.
pub struct Pipeline {
    target_url: String,
    fetcher: Arc<dyn DataFetcher>,
}

impl Pipeline {
    pub fn new(target_url: impl Into<String>, fetcher: Arc<dyn DataFetcher>) -> Self {
        Self {
            target_url: target_url.into(),
            fetcher,
        }
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// Validate the target URL and fetch the payload.
    ///
    /// The fetcher is not called when validation fails.
    pub async fn retrieve(&self) -> Result<Value, PipelineError> {
        let url = validate_url(&self.target_url)?;
        debug!("Validated target URL: {}", url);

        let data = self.fetcher.fetch(&url).await?;
        Ok(data)
    }

    /// Run the whole pipeline, writing results to `out` and failures to `err`.
    pub async fn run_with<O, E>(&self, out: &mut O, err: &mut E) -> RunOutcome
    where
        O: Write,
        E: Write,
    {
        match self.retrieve().await {
            Ok(data) => {
                if let Err(e) = present_to(&data, out) {
                    warn!("Failed to write output: {}", e);
                }
                RunOutcome::Completed
            }
            Err(e) => {
                debug!("Pipeline failed: {:?}", e);
                if let Err(write_err) = writeln!(err, "Error: {}", e) {
                    warn!("Failed to write error: {}", write_err);
                }
                RunOutcome::Failed
            }
        }
    }

    /// Run the whole pipeline against stdout and stderr.
    pub async fn run(&self) -> RunOutcome {
        let mut out = io::stdout();
        let mut err = io::stderr();
        self.run_with(&mut out, &mut err).await
    }
}
