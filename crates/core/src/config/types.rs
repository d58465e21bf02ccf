use serde::{Deserialize, Serialize};

/// Endpoint queried when nothing else is configured.
pub const DEFAULT_ENDPOINT_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Client-side timeout for the whole request, body included.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Exit with a non-zero status when the pipeline fails.
    /// Off by default: a caught failure is reported and the process still exits 0.
    #[serde(default)]
    pub fail_on_error: bool,
}

/// Remote endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Target URL. Validated at run time, not at load time.
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout in milliseconds (default: 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// User-Agent header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment
    #[serde(default = "default_use_env_proxy")]
    pub use_env_proxy: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            use_env_proxy: default_use_env_proxy(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_user_agent() -> String {
    format!("apifetch/{}", env!("CARGO_PKG_VERSION"))
}

fn default_use_env_proxy() -> bool {
    true
}
