//! Target URL validation.
//!
//! Only absolute `http` and `https` URLs are accepted. The validated form is
//! the URL as re-serialized by the parser, so schemes and hosts come back
//! lower-cased and an empty path becomes `/`.

use thiserror::Error;
use url::Url;

/// Schemes the fetcher is allowed to talk to.
const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Reasons a target URL is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidUrlError {
    /// The input is not an absolute URL.
    #[error("Invalid URL: {0}")]
    Unparseable(#[from] url::ParseError),

    /// The URL parsed but uses a scheme other than http/https.
    #[error("Invalid URL: protocol \"{0}:\" is not allowed. Only HTTP/HTTPS are allowed.")]
    DisallowedProtocol(String),
}

/// Validate `input` and return its canonical string form.
pub fn validate_url(input: &str) -> Result<String, InvalidUrlError> {
    let parsed = Url::parse(input)?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(InvalidUrlError::DisallowedProtocol(
            parsed.scheme().to_string(),
        ));
    }

    Ok(parsed.into())
}
